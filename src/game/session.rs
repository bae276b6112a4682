//! The game session: sequencing turns, owning points and statistics.
//!
//! The session is strictly sequential. One turn resolves completely
//! (roll, classify, score, record) before the next begins; the only blocking
//! points are the collaborator prompts. All mutable state lives here — no
//! globals, no locks.

use tracing::{debug, info};

use crate::core::{DiceRng, GameConfig, GameError};
use crate::dice::{roll_dice, DiceType};
use crate::rules::{score_turn, Mode};
use crate::stats::Stats;

use super::turn::{TurnContext, TurnResult};

/// Supplies the player's choices.
///
/// Implementations own all input validation and re-prompting; by the time a
/// value reaches the session it satisfies the prompt's constraint. The
/// session never retries.
pub trait PlayerInput {
    /// Ask a yes/no question; true means yes.
    fn ask_yes_no(&mut self, prompt: &str) -> bool;

    /// Ask for a dice count of at least `min`.
    fn ask_dice_count(&mut self, prompt: &str, min: usize) -> usize;

    /// Pick a scoring mode.
    fn choose_mode(&mut self) -> Mode;

    /// Pick a die.
    fn choose_dice_type(&mut self) -> DiceType;
}

/// Receives structured results for rendering.
///
/// The session hands over `TurnResult` and `Stats` values; everything
/// user-facing beyond [`Stats::summary_lines`] is the reporter's business.
pub trait TurnReporter {
    /// Called once when the session starts.
    fn report_welcome(&mut self) {}

    /// A turn finished resolving.
    fn report_turn(&mut self, result: &TurnResult);

    /// Running statistics after a turn.
    ///
    /// `hide_roll_count` is set for lucky bonus turns, where the triggering
    /// roll was not counted.
    fn report_stats(&mut self, stats: &Stats, points: i64, hide_roll_count: bool);

    /// The player declined to roll again; the session is over.
    fn report_goodbye(&mut self, stats: &Stats, points: i64);
}

/// A single-player dice game session.
pub struct GameSession {
    config: GameConfig,
    rng: DiceRng,
    stats: Stats,
    points: i64,
}

impl GameSession {
    /// Create a session with the given configuration and RNG.
    #[must_use]
    pub fn new(config: GameConfig, rng: DiceRng) -> Self {
        Self {
            config,
            rng,
            stats: Stats::new(),
            points: 0,
        }
    }

    /// Running statistics so far.
    #[must_use]
    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// Current player points.
    #[must_use]
    pub fn points(&self) -> i64 {
        self.points
    }

    /// The active configuration.
    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Resolve one turn: roll, score, apply the delta, record statistics.
    ///
    /// Points and statistics mutate together, only after the roll succeeds;
    /// an invalid context leaves the session untouched. A Lucky-mode match
    /// is excluded from the counted aggregate (the match counter still
    /// moves) since its turn is replayed immediately.
    pub fn play_turn(&mut self, context: &TurnContext) -> Result<TurnResult, GameError> {
        let sides = context.dice_type.sides();
        let rolls = roll_dice(&mut self.rng, context.dice_count, sides)?;

        let total = rolls.total();
        let has_match = rolls.all_match();
        let score = score_turn(
            context.mode,
            total,
            context.dice_count,
            sides,
            has_match,
            &self.config,
        );

        self.points += score.delta;
        self.stats.update(total, has_match, !score.bonus_turn);

        debug!(
            mode = %context.mode,
            dice = %format!("{}x{}", context.dice_count, context.dice_type),
            total,
            has_match,
            outcome = %score.outcome,
            delta = score.delta,
            points = self.points,
            "turn resolved"
        );

        Ok(TurnResult {
            context: *context,
            rolls,
            total,
            has_match,
            outcome: score.outcome,
            points_delta: score.delta,
            points_total: self.points,
            bonus_turn: score.bonus_turn,
        })
    }

    /// Run the interactive loop until the player declines to roll.
    ///
    /// A turn that earns a bonus goes straight back to turn configuration
    /// without a fresh "roll again?" prompt.
    pub fn run(
        &mut self,
        input: &mut impl PlayerInput,
        reporter: &mut impl TurnReporter,
    ) -> Result<(), GameError> {
        reporter.report_welcome();

        loop {
            if !input.ask_yes_no("Roll the dice? (y/n): ") {
                info!(points = self.points, rolls = self.stats.roll_count, "session over");
                reporter.report_goodbye(&self.stats, self.points);
                return Ok(());
            }

            loop {
                let context = self.next_context(input);
                let result = self.play_turn(&context)?;
                let bonus = result.bonus_turn;

                reporter.report_turn(&result);
                reporter.report_stats(&self.stats, self.points, bonus);

                if !bonus {
                    break;
                }
            }
        }
    }

    fn next_context(&mut self, input: &mut impl PlayerInput) -> TurnContext {
        let dice_count = input.ask_dice_count(
            "How many dice would you like to roll? ",
            crate::core::MIN_DICE,
        );
        let mode = input.choose_mode();
        let dice_type = input.choose_dice_type();

        TurnContext::new(mode, dice_type, dice_count)
    }
}
