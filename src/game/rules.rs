//! Move validation and terminal-state detection.

use super::position::Position;
use super::types::{Board, GameStatus, Player, Square};
use rand::Rng;
use tracing::instrument;

/// The 8 winning lines: 3 rows, 3 columns, 2 diagonals.
const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Tic-tac-toe game engine: one board and the player to move.
#[derive(Debug, Clone)]
pub struct Game {
    board: Board,
    to_move: Player,
}

impl Game {
    /// Creates a new game with the given player to move first.
    pub fn new(first: Player) -> Self {
        Self {
            board: Board::new(),
            to_move: first,
        }
    }

    /// Creates a new game with the first player drawn from `rng`.
    #[instrument(skip(rng))]
    pub fn with_random_first<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let first = if rng.random::<bool>() {
            Player::One
        } else {
            Player::Two
        };
        Self::new(first)
    }

    /// Returns the player whose turn it is.
    pub fn current_player(&self) -> Player {
        self.to_move
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns a copy of the nine squares for rendering.
    pub fn snapshot(&self) -> [Square; 9] {
        *self.board.squares()
    }

    /// Attempts to place the current player's mark at `index` (0-8).
    ///
    /// On success the turn passes to the other player. Out-of-range
    /// indices and occupied squares are rejected without touching the
    /// board or the turn. The engine does not check whether the game
    /// has already ended; the caller stops once [`Game::status`] is no
    /// longer [`GameStatus::InProgress`].
    #[instrument(skip(self), fields(player = ?self.to_move))]
    pub fn play_at(&mut self, index: i32) -> Result<(), MoveError> {
        let position = usize::try_from(index)
            .ok()
            .and_then(Position::from_index)
            .ok_or(MoveError::OutOfBounds(index))?;

        if !self.board.is_empty(position) {
            return Err(MoveError::Occupied(position));
        }

        self.board.set(position, Square::Occupied(self.to_move));
        self.to_move = self.to_move.opponent();
        Ok(())
    }

    /// Computes the game status from the board.
    ///
    /// Sums square values along each of the 8 lines: +3 means player
    /// one completed the line, -3 player two. Under alternating play at
    /// most one line is ever complete, so the first hit is returned. A
    /// full board with no complete line is a draw. The status is
    /// derived on every call, never cached.
    pub fn status(&self) -> GameStatus {
        for line in LINES {
            let sum: i8 = line.iter().map(|&pos| self.board.get(pos).value()).sum();
            match sum {
                3 => return GameStatus::Won(Player::One),
                -3 => return GameStatus::Won(Player::Two),
                _ => {}
            }
        }

        if self.board.is_full() {
            GameStatus::Draw
        } else {
            GameStatus::InProgress
        }
    }
}

// ─────────────────────────────────────────────────────────────
//  Move rejection
// ─────────────────────────────────────────────────────────────

/// Error that can occur when applying a move.
///
/// A rejected move is a normal outcome of the game loop, not a fault:
/// the caller re-prompts the same player.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not name a board position.
    #[display("position {} is out of bounds", _0)]
    OutOfBounds(i32),

    /// The square at the position is already occupied.
    #[display("{} is already occupied", _0)]
    Occupied(Position),
}

impl std::error::Error for MoveError {}
