//! `entropy` -- play Entropy at the terminal.
//!
//! One person (or two sharing a keyboard) plays both roles. Logs go to
//! stderr; set `RUST_LOG=entropy_engine=debug` to see every move.

use std::io;
use std::process::ExitCode;

use clap::Parser;
use tracing::error;
use tracing_subscriber::EnvFilter;

use entropy_engine::console::{ConsolePlayer, ConsolePresenter};
use entropy_engine::core::{GameConfig, GameRng};
use entropy_engine::rules::RulesEngine;

/// Entropy: Chaos places, Order rearranges, symmetry scores.
#[derive(Parser, Debug)]
#[command(name = "entropy")]
#[command(version, about, long_about = None)]
struct Cli {
    /// Seed for the piece bag (random if omitted)
    #[arg(long)]
    seed: Option<u64>,

    /// Reject zero-length Order moves instead of treating them as a pass
    #[arg(long)]
    no_pass: bool,

    /// Render pieces as letters instead of terminal colors
    #[arg(long)]
    plain: bool,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let seed = cli.seed.unwrap_or_else(|| GameRng::from_entropy().seed());
    let mut config = GameConfig::new(seed);
    if cli.no_pass {
        config = config.without_pass();
    }

    let mut engine = match RulesEngine::new(config) {
        Ok(engine) => engine,
        Err(e) => {
            error!(error = %e, "could not start game");
            return ExitCode::FAILURE;
        }
    };

    let stdin = io::stdin();
    let mut player = ConsolePlayer::new(stdin.lock(), io::stdout());
    let mut presenter = ConsolePresenter::new(io::stdout(), !cli.plain);

    match engine.play_game(&mut player, &mut presenter) {
        Ok(outcome) => {
            println!("Seed: {}", outcome.seed);
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "game aborted");
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
