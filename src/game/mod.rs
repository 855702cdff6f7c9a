mod position;
mod rules;
mod types;

pub use position::Position;
pub use rules::{Game, MoveError};
pub use types::{Board, GameStatus, Player, Square};
