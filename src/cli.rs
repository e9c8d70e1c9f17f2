//! Command-line interface for mine-crossing.

use clap::{Parser, ValueEnum};
use mine_crossing::core::{ConfigError, GameConfig, DEFAULT_BOARD_SIZE, DEFAULT_LIVES, DEFAULT_PLAYERS};

/// Cross the board without running out of lives on hidden mines.
#[derive(Parser, Debug)]
#[command(name = "mine-crossing")]
#[command(about = "Turn-based mine-crossing board game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Which games to play
    #[arg(short, long, value_enum, default_value_t = Mode::All)]
    pub mode: Mode,

    /// Board edge length (one mine per row)
    #[arg(short, long, default_value_t = DEFAULT_BOARD_SIZE)]
    pub size: usize,

    /// Lives at the start of each game
    #[arg(short, long, default_value_t = DEFAULT_LIVES)]
    pub lives: u32,

    /// Players taking turns in multiplayer mode
    #[arg(short, long, default_value_t = DEFAULT_PLAYERS)]
    pub players: u8,

    /// Seed for the mine layout (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Do not clear the terminal between turns
    #[arg(long)]
    pub no_clear: bool,
}

/// Game selection.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// Single-player, then multiplayer, then scorable
    All,
    /// One player
    Single,
    /// Players alternate moves on a shared board
    Multiplayer,
    /// One player, scored on winning
    Scorable,
}

impl Mode {
    pub fn runs_single(self) -> bool {
        matches!(self, Mode::All | Mode::Single)
    }

    pub fn runs_multiplayer(self) -> bool {
        matches!(self, Mode::All | Mode::Multiplayer)
    }

    pub fn runs_scorable(self) -> bool {
        matches!(self, Mode::All | Mode::Scorable)
    }
}

impl Cli {
    /// Game configuration described by the flags.
    pub fn config(&self) -> GameConfig {
        let config = GameConfig::new()
            .with_board_size(self.size)
            .with_lives(self.lives)
            .with_players(self.players)
            .with_clear_screen(!self.no_clear);

        match self.seed {
            Some(seed) => config.with_seed(seed),
            None => config,
        }
    }

    /// The configuration, checked against the games `mode` will run.
    ///
    /// The player count only matters when the multiplayer game runs.
    pub fn validated_config(&self) -> Result<GameConfig, ConfigError> {
        let config = self.config();
        if self.mode.runs_multiplayer() {
            config.validate_multiplayer()?;
        } else {
            config.validate()?;
        }
        Ok(config)
    }

    /// Line telling the user how to replay a layout whose seed they did not choose.
    pub fn seed_notice(&self, seed: u64) -> Option<String> {
        match self.seed {
            Some(_) => None,
            None => Some(format!("Seed: {seed} (replay with --seed {seed})")),
        }
    }
}
