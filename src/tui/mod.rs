//! Terminal front end: in-place rendering and the blocking game loop.

mod screen;
mod view;

pub use screen::{Screen, TermScreen};
pub use view::{BoardView, EMPTY_MARKER, INVALID_MOVE, Markers};

use crate::game::{Game, GameStatus, Player};
use anyhow::{Result, bail};
use rand::{SeedableRng, rngs::StdRng};
use std::io::{self, BufRead};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

/// Log file written beside the game so tracing output never disturbs
/// the in-place board redraw.
const LOG_FILE: &str = "termtac.log";

/// Options assembled by the CLI.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameOptions {
    /// Player taking the first turn; drawn at random when `None`.
    pub first_player: Option<Player>,
    /// Seed for the first-player draw; OS entropy when `None`.
    pub seed: Option<u64>,
    /// Marker characters for the two players.
    pub markers: Markers,
}

/// Runs one game to completion on the real terminal.
pub fn run(options: GameOptions) -> Result<()> {
    let log_file = std::fs::File::create(LOG_FILE)?;
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .try_init();

    info!("Starting termtac");

    let markers = options.markers;
    let one = markers.for_player(Player::One);
    let two = markers.for_player(Player::Two);
    if one == two || one == EMPTY_MARKER || two == EMPTY_MARKER {
        bail!("player markers must differ from each other and from '{EMPTY_MARKER}'");
    }

    let mut rng = match options.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let game = match options.first_player {
        Some(player) => Game::new(player),
        None => Game::with_random_first(&mut rng),
    };

    let view = BoardView::new(io::stdin().lock(), TermScreen::stdout(), markers);
    play(game, view)
}

/// Drives one game over the given view until a terminal state.
///
/// Each iteration renders the board, prompts the current player, and
/// applies the move. A rejected move clears the prompt block and
/// re-prompts the same player without advancing the turn. Once the
/// status leaves [`GameStatus::InProgress`] the final board and result
/// are printed.
pub fn play<R: BufRead, S: Screen>(mut game: Game, mut view: BoardView<R, S>) -> Result<()> {
    info!(first = %game.current_player(), "Game started");

    while game.status() == GameStatus::InProgress {
        view.render(&game.snapshot())?;
        let player = game.current_player();
        let index = view.prompt_move(player)?;
        match game.play_at(index) {
            Ok(()) => debug!(%player, index, "Move accepted"),
            Err(error) => {
                debug!(%player, index, %error, "Move rejected");
                view.clear_prompt()?;
            }
        }
    }

    view.render(&game.snapshot())?;
    view.report_result(game.status())?;
    info!(outcome = ?game.status(), "Game over");
    Ok(())
}
