//! Commonly used types for ease of import.

pub use crate::{
    AiOpponent, Board, BoardError, Coord, Difficulty, Fleet, GameConfig, GameController,
    GameError, GameStatus, Orientation, Outcome, Phase, Session, ShipType, ShotResult, Winner,
};

#[cfg(feature = "std")]
pub use crate::{init_logging, parse_coord, print_player_view};
