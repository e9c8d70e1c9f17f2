//! mine-crossing - console entry point.
//!
//! Plays the selected games in sequence, each on a fresh board, and prints
//! the final score after a scorable game. A seed drawn from entropy is
//! printed at the end so the layout can be replayed.

mod cli;

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;
use cli::Cli;
use mine_crossing::{multiplayer, scorable, single_player, Board, ConsoleRunner, GameConfig, GameRng};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.validated_config()?;

    let mut rng = config.seed.map_or_else(GameRng::from_entropy, GameRng::new);
    info!(seed = rng.seed(), ?config, "starting");

    let stdin = io::stdin();
    let stdout = io::stdout();
    let mut runner = ConsoleRunner::new(stdin.lock(), stdout.lock()).with_clear_screen(config.clear_screen);

    play_all(&mut runner, &config, &mut rng, cli.mode)?;

    // Last, so no later render clears it.
    if let Some(notice) = cli.seed_notice(rng.seed()) {
        runner.message(&notice)?;
    }
    Ok(())
}

fn play_all<R: BufRead, W: Write>(
    runner: &mut ConsoleRunner<R, W>,
    config: &GameConfig,
    rng: &mut GameRng,
    mode: cli::Mode,
) -> Result<()> {
    if mode.runs_single() {
        let mut game = single_player(Board::new(config.board_size), config.lives);
        runner.play(&mut game, rng)?;
    }

    if mode.runs_multiplayer() {
        let mut game = multiplayer(Board::new(config.board_size), config.lives, config.players);
        runner.play(&mut game, rng)?;
    }

    if mode.runs_scorable() {
        let mut game = scorable(Board::new(config.board_size), config.lives);
        runner.play(&mut game, rng)?;
        runner.message(&format!("Final Score: {}", game.score()))?;
    }

    Ok(())
}
