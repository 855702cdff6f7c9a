//! Command-line interface for termtac.

use crate::game::Player;
use crate::tui::{GameOptions, Markers};
use clap::{Parser, ValueEnum};

/// Termtac - two-player tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "termtac")]
#[command(about = "Two-player tic-tac-toe played in the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Player taking the first turn. Drawn at random when omitted.
    #[arg(long, value_enum)]
    pub first: Option<FirstPlayer>,

    /// Seed for the first-player draw (useful for scripted runs).
    #[arg(long)]
    pub seed: Option<u64>,

    /// Marker drawn for player 1.
    #[arg(long, default_value_t = 'x')]
    pub player_one: char,

    /// Marker drawn for player 2.
    #[arg(long, default_value_t = 'o')]
    pub player_two: char,
}

/// First-turn selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FirstPlayer {
    /// Player 1 starts.
    One,
    /// Player 2 starts.
    Two,
}

impl From<FirstPlayer> for Player {
    fn from(first: FirstPlayer) -> Self {
        match first {
            FirstPlayer::One => Player::One,
            FirstPlayer::Two => Player::Two,
        }
    }
}

impl Cli {
    /// Collects the parsed flags into game options.
    pub fn options(&self) -> GameOptions {
        GameOptions {
            first_player: self.first.map(Player::from),
            seed: self.seed,
            markers: Markers::new(self.player_one, self.player_two),
        }
    }
}
