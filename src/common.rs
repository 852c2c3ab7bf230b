//! Common types for the engine: coordinates, shot results and errors.

use alloc::vec;
use alloc::vec::Vec;
use core::fmt;

use crate::bitgrid::GridError;

/// A grid coordinate. `x` indexes rows and `y` indexes columns, both 0-based.
///
/// The fields are signed so that off-board input coming from a front-end can
/// be represented and rejected instead of wrapping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct Coord {
    pub x: i32,
    pub y: i32,
}

impl Coord {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The up/down/left/right neighbours, in that order. May be off-board.
    pub fn neighbours(self) -> [Coord; 4] {
        [
            Coord::new(self.x - 1, self.y),
            Coord::new(self.x + 1, self.y),
            Coord::new(self.x, self.y - 1),
            Coord::new(self.x, self.y + 1),
        ]
    }

    /// Converts to a `(row, col)` grid index if inside `width × height`.
    pub fn to_index(self, width: usize, height: usize) -> Option<(usize, usize)> {
        let row = usize::try_from(self.x).ok()?;
        let col = usize::try_from(self.y).ok()?;
        (row < height && col < width).then_some((row, col))
    }

    /// Inverse of [`Coord::to_index`].
    pub fn from_index(row: usize, col: usize) -> Self {
        Coord::new(row as i32, col as i32)
    }
}

impl From<(i32, i32)> for Coord {
    fn from((x, y): (i32, i32)) -> Self {
        Coord::new(x, y)
    }
}

impl fmt::Display for Coord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Kind of outcome produced by a shot.
///
/// Variants are ordered by reporting precedence: a shot that sinks the last
/// ship reports `Victory`, never `Drown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Outcome {
    /// Shot landed in open water.
    Missed,
    /// Shot hit a ship that is still afloat.
    Touched,
    /// Shot sank a ship.
    Drown,
    /// Shot sank the last ship of the fleet.
    Victory,
    /// Shot landed on a bonus cell.
    Bonus,
}

impl Outcome {
    /// Hit streak rule: the shooter fires again after this outcome.
    pub fn grants_extra_shot(self) -> bool {
        matches!(self, Outcome::Touched | Outcome::Drown | Outcome::Bonus)
    }

    /// The session is over after this outcome.
    pub fn ends_game(self) -> bool {
        self == Outcome::Victory
    }

    /// A ship segment was struck.
    pub fn is_hit(self) -> bool {
        matches!(self, Outcome::Touched | Outcome::Drown | Outcome::Victory)
    }
}

/// Outcome of a single shot plus the cells a front-end needs to reveal.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub struct ShotResult {
    pub outcome: Outcome,
    pub shape: Vec<Coord>,
}

impl ShotResult {
    pub fn missed() -> Self {
        Self {
            outcome: Outcome::Missed,
            shape: Vec::new(),
        }
    }

    pub fn bonus(at: Coord) -> Self {
        Self {
            outcome: Outcome::Bonus,
            shape: vec![at],
        }
    }

    pub fn with_shape(outcome: Outcome, shape: Vec<Coord>) -> Self {
        Self { outcome, shape }
    }
}

/// Shot state of a single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CellState {
    Unshot,
    Missed,
    Hit,
    Bonus,
}

/// Errors returned by fleet placement and shot resolution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardError {
    /// Underlying grid error.
    Grid(GridError),
    /// Shot coordinate is outside the board.
    OutOfBounds { x: i32, y: i32 },
    /// The cell has already been resolved.
    AlreadyPlayed { x: i32, y: i32 },
    /// A ship cell would fall outside the board.
    PlacementOutOfBounds,
    /// A ship cell collides with an already placed ship.
    PlacementOverlap,
    /// Random placement ran out of attempts for the named ship.
    RandomPlacementExhausted { ship: &'static str, attempts: usize },
    /// Board or fleet configuration cannot be used.
    InvalidConfig(&'static str),
}

impl From<GridError> for BoardError {
    fn from(err: GridError) -> Self {
        BoardError::Grid(err)
    }
}

impl fmt::Display for BoardError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BoardError::Grid(e) => write!(f, "Grid error: {}", e),
            BoardError::OutOfBounds { x, y } => {
                write!(f, "Coordinate ({}, {}) is outside the board", x, y)
            }
            BoardError::AlreadyPlayed { x, y } => {
                write!(f, "Coordinate ({}, {}) was already played", x, y)
            }
            BoardError::PlacementOutOfBounds => write!(f, "Ship placement is out of bounds"),
            BoardError::PlacementOverlap => {
                write!(f, "Ship placement overlaps with another ship")
            }
            BoardError::RandomPlacementExhausted { ship, attempts } => write!(
                f,
                "Unable to place {} after {} attempts",
                ship, attempts
            ),
            BoardError::InvalidConfig(why) => write!(f, "Invalid configuration: {}", why),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for BoardError {}

/// Errors returned when a session is driven out of turn.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameError {
    Board(BoardError),
    /// A human shot was requested while the AI holds the turn.
    NotPlayerTurn,
    /// An AI shot was requested while the human holds the turn.
    NotAiTurn,
    /// The session already has a winner.
    GameOver,
    /// The AI has fired at every cell.
    AiExhausted,
}

impl From<BoardError> for GameError {
    fn from(err: BoardError) -> Self {
        GameError::Board(err)
    }
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::Board(e) => write!(f, "{}", e),
            GameError::NotPlayerTurn => write!(f, "It is not the player's turn"),
            GameError::NotAiTurn => write!(f, "It is not the AI's turn"),
            GameError::GameOver => write!(f, "The game is already over"),
            GameError::AiExhausted => write!(f, "The AI has no coordinate left to fire at"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for GameError {}
