//! Console collaborators: stdin prompting and stdout rendering.
//!
//! All re-prompting on invalid input lives here. The session core only ever
//! sees values that already satisfy the prompt's constraint.

use std::io::{self, BufRead, Write};

use tracing::warn;

use crate::dice::DiceType;
use crate::game::{PlayerInput, TurnReporter, TurnResult};
use crate::rules::Mode;
use crate::stats::Stats;

/// Line-based prompt over any buffered reader; stdin in production.
///
/// Invalid responses are re-prompted indefinitely. A closed stream falls
/// back to a declining/default answer so the session still winds down
/// cleanly instead of spinning.
pub struct ConsolePrompt<R> {
    reader: R,
}

impl ConsolePrompt<io::BufReader<io::Stdin>> {
    /// Prompt against stdin.
    #[must_use]
    pub fn stdin() -> Self {
        Self {
            reader: io::BufReader::new(io::stdin()),
        }
    }
}

impl<R: BufRead> ConsolePrompt<R> {
    /// Prompt against an arbitrary reader. Used by tests.
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    /// One trimmed line, or `None` once the stream is closed.
    fn read_line(&mut self, prompt: &str) -> Option<String> {
        print!("{prompt}");
        let _ = io::stdout().flush();

        let mut buf = String::new();
        match self.reader.read_line(&mut buf) {
            Ok(0) | Err(_) => {
                warn!("input stream closed, falling back to default answer");
                None
            }
            Ok(_) => Some(buf.trim().to_string()),
        }
    }
}

impl<R: BufRead> PlayerInput for ConsolePrompt<R> {
    fn ask_yes_no(&mut self, prompt: &str) -> bool {
        loop {
            let Some(answer) = self.read_line(prompt) else {
                return false;
            };
            match answer.to_ascii_lowercase().as_str() {
                "y" => return true,
                "n" => return false,
                _ => println!("\nInvalid input. Please enter 'y' or 'n'.\n"),
            }
        }
    }

    fn ask_dice_count(&mut self, prompt: &str, min: usize) -> usize {
        loop {
            let Some(answer) = self.read_line(prompt) else {
                return min;
            };
            match answer.parse::<usize>() {
                Ok(value) if value >= min => return value,
                Ok(_) => {
                    println!("\nDice count must be at least {min}. Please try again.\n");
                }
                Err(_) => println!("\nInvalid input. Please enter a valid number.\n"),
            }
        }
    }

    fn choose_mode(&mut self) -> Mode {
        loop {
            let Some(answer) = self.read_line("Choose a mode (Classic/Lucky/Risk): ") else {
                return Mode::Classic;
            };
            match answer.parse::<Mode>() {
                Ok(mode) => return mode,
                Err(_) => println!("\nInvalid mode. Please select a valid mode.\n"),
            }
        }
    }

    fn choose_dice_type(&mut self) -> DiceType {
        loop {
            let Some(answer) =
                self.read_line("Choose a dice type (D4, D6, D8, D10, D12, D20): ")
            else {
                return DiceType::D6;
            };
            match answer.parse::<DiceType>() {
                Ok(dice_type) => return dice_type,
                Err(_) => println!("\nInvalid dice type. Please select a valid dice type.\n"),
            }
        }
    }
}

/// Renders turn results and statistics to any writer; stdout in production.
pub struct ConsoleReporter<W> {
    writer: W,
}

impl ConsoleReporter<io::Stdout> {
    /// Render to stdout.
    #[must_use]
    pub fn stdout() -> Self {
        Self {
            writer: io::stdout(),
        }
    }
}

impl<W: Write> ConsoleReporter<W> {
    /// Render to an arbitrary writer. Used by tests.
    pub fn new(writer: W) -> Self {
        Self { writer }
    }

    /// The writer, for inspecting captured output in tests.
    pub fn into_inner(self) -> W {
        self.writer
    }
}

/// Comma-separated face list, e.g. `"4, 4"`.
#[must_use]
pub fn format_rolls(values: &[u16]) -> String {
    values
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}

impl<W: Write> TurnReporter for ConsoleReporter<W> {
    fn report_welcome(&mut self) {
        let _ = writeln!(self.writer, "--- Welcome to the Dice Rolling Game! ---");
    }

    fn report_turn(&mut self, result: &TurnResult) {
        let w = &mut self.writer;

        let _ = writeln!(w, "\nYou rolled: {}", format_rolls(result.rolls.values()));
        let _ = writeln!(
            w,
            "Dice: {} x {} (Total: {})",
            result.context.dice_count, result.context.dice_type, result.total
        );

        if result.has_match {
            let label = if result.context.dice_count == 2 {
                "DOUBLES"
            } else {
                "ALL MATCH"
            };
            let _ = writeln!(w, "Match: {label}");
        } else {
            let _ = writeln!(w, "Match: no");
        }

        if result.bonus_turn {
            let _ = writeln!(w, "Jackpot! You get an extra turn!");
        }

        let _ = writeln!(w, "Outcome: {}", result.outcome.to_string().to_uppercase());

        match result.points_delta {
            delta if delta > 0 => {
                let _ = writeln!(w, "Points: +{delta}");
            }
            delta if delta < 0 => {
                let _ = writeln!(w, "Points: {delta}");
            }
            _ => {
                let _ = writeln!(w, "Points: 0");
            }
        }

        let _ = writeln!(w, "Total points: {}\n", result.points_total);
    }

    fn report_stats(&mut self, stats: &Stats, points: i64, hide_roll_count: bool) {
        let w = &mut self.writer;

        if stats.roll_count == 0 {
            let _ = writeln!(w, "No rolls yet.\n");
            return;
        }

        if !hide_roll_count {
            let _ = writeln!(w, "You have rolled the dice {} times.\n", stats.roll_count);
        }

        let _ = writeln!(w, "---- Stats ----");
        for line in stats.summary_lines(points) {
            let _ = writeln!(w, "{line}");
        }
        let _ = writeln!(w, "----------------\n");
    }

    fn report_goodbye(&mut self, stats: &Stats, points: i64) {
        let _ = writeln!(self.writer, "\nThank you for playing! Goodbye!\n");
        self.report_stats(stats, points, false);
    }
}
