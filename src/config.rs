use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use crate::common::BoardError;
use crate::ship::ShipType;

pub const BOARD_SIZE: usize = 10;
pub const PLACEMENT_ATTEMPTS: usize = 100;
pub const STANDARD_FLEET: [ShipType; 5] = [
    ShipType::new("Carrier", 5),
    ShipType::new("Battleship", 4),
    ShipType::new("Cruiser", 3),
    ShipType::new("Submarine", 3),
    ShipType::new("Destroyer", 2),
];

/// Board dimensions and fleet composition for one game session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: usize,
    pub height: usize,
    pub fleet: Vec<ShipType>,
    /// Number of bonus cells scattered on each randomly generated board.
    pub bonus_cells: usize,
    /// Random placement tries per ship before giving up.
    pub placement_attempts: usize,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: BOARD_SIZE,
            height: BOARD_SIZE,
            fleet: STANDARD_FLEET.to_vec(),
            bonus_cells: 0,
            placement_attempts: PLACEMENT_ATTEMPTS,
        }
    }
}

impl GameConfig {
    pub fn validate(&self) -> Result<(), BoardError> {
        if self.width == 0 || self.height == 0 {
            return Err(BoardError::InvalidConfig("board has no cells"));
        }
        if i32::try_from(self.width).is_err() || i32::try_from(self.height).is_err() {
            return Err(BoardError::InvalidConfig("board is too large"));
        }
        if self.fleet.is_empty() {
            return Err(BoardError::InvalidConfig("fleet is empty"));
        }
        if self.fleet.iter().any(|s| s.length() == 0) {
            return Err(BoardError::InvalidConfig("ship with zero length"));
        }
        let cells: usize = self.fleet.iter().map(|s| s.length()).sum();
        if cells + self.bonus_cells > self.width * self.height {
            return Err(BoardError::InvalidConfig("fleet does not fit on the board"));
        }
        Ok(())
    }

    /// Total number of ship segments in the fleet.
    pub fn fleet_cells(&self) -> usize {
        self.fleet.iter().map(|s| s.length()).sum()
    }
}

/// AI difficulty, chosen when the session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Difficulty {
    /// Uniform random search over untried cells.
    #[default]
    Standard,
    /// Hunt-and-target around confirmed hits.
    Directed,
    /// The AI is handed the player's true layout. Intentionally unbeatable.
    Impossible,
}

impl Difficulty {
    pub fn perfect_information(self) -> bool {
        self == Difficulty::Impossible
    }
}

impl FromStr for Difficulty {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("standard") {
            Ok(Difficulty::Standard)
        } else if s.eq_ignore_ascii_case("directed") {
            Ok(Difficulty::Directed)
        } else if s.eq_ignore_ascii_case("impossible") {
            Ok(Difficulty::Impossible)
        } else {
            Err(BoardError::InvalidConfig("unknown difficulty"))
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Standard => "standard",
            Difficulty::Directed => "directed",
            Difficulty::Impossible => "impossible",
        };
        f.write_str(name)
    }
}
