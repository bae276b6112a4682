//! Interactive console entry point.

use diceplay::{ConsolePrompt, ConsoleReporter, DiceRng, GameConfig, GameSession};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

fn main() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "diceplay=warn".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let rng = DiceRng::from_entropy();
    info!(seed = rng.seed(), "starting session");

    let mut session = GameSession::new(GameConfig::default(), rng);
    let mut input = ConsolePrompt::stdin();
    let mut reporter = ConsoleReporter::stdout();

    if let Err(err) = session.run(&mut input, &mut reporter) {
        eprintln!("game error: {err}");
        std::process::exit(1);
    }
}
