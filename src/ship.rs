//! Ship definitions and placement geometry.

use alloc::vec::Vec;
use core::fmt;

use crate::bitgrid::BitGrid;
use crate::common::{BoardError, Coord};

/// Orientation of a ship on the board.
///
/// Horizontal ships extend along `y` (columns), vertical ships along `x` (rows).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Orientation {
    Horizontal,
    Vertical,
}

impl Orientation {
    fn step(self) -> (i32, i32) {
        match self {
            Orientation::Horizontal => (0, 1),
            Orientation::Vertical => (1, 0),
        }
    }
}

/// Type of ship: name and length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShipType {
    name: &'static str,
    length: usize,
}

impl ShipType {
    /// Create a new ship type.
    pub const fn new(name: &'static str, length: usize) -> Self {
        Self { name, length }
    }

    /// Ship's name.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Ship's length.
    pub fn length(&self) -> usize {
        self.length
    }
}

/// A ship placed on a board, with hits tracked in a `BitGrid`.
#[derive(Clone, PartialEq, Eq)]
pub struct Ship {
    ship_type: ShipType,
    orientation: Orientation,
    origin: Coord,
    cells: Vec<Coord>,
    mask: BitGrid,
    hits: BitGrid,
}

impl Ship {
    /// Place a ship at `origin` with `orientation` on a `width × height` board.
    pub fn new(
        ship_type: ShipType,
        origin: Coord,
        orientation: Orientation,
        width: usize,
        height: usize,
    ) -> Result<Self, BoardError> {
        let length = match i32::try_from(ship_type.length()) {
            Ok(n) if n > 0 => n,
            _ => return Err(BoardError::PlacementOutOfBounds),
        };
        let (dx, dy) = orientation.step();
        let mut cells = Vec::with_capacity(ship_type.length());
        let mut mask = BitGrid::new(width, height);
        for i in 0..length {
            let cell = Coord::new(origin.x + dx * i, origin.y + dy * i);
            let (r, c) = cell
                .to_index(width, height)
                .ok_or(BoardError::PlacementOutOfBounds)?;
            mask.set(r, c)?;
            cells.push(cell);
        }

        Ok(Ship {
            ship_type,
            orientation,
            origin,
            cells,
            hits: BitGrid::new(width, height),
            mask,
        })
    }

    /// True when `coord` is one of this ship's cells.
    pub fn occupies(&self, coord: Coord) -> bool {
        coord
            .to_index(self.mask.width(), self.mask.height())
            .is_some_and(|(r, c)| self.mask.get(r, c).unwrap_or(false))
    }

    /// True when `coord` is a cell of this ship that has been struck.
    pub fn is_hit(&self, coord: Coord) -> bool {
        coord
            .to_index(self.hits.width(), self.hits.height())
            .is_some_and(|(r, c)| self.hits.get(r, c).unwrap_or(false))
    }

    /// Register a hit at `coord`. Returns `true` if the cell belongs to the ship.
    pub fn register_hit(&mut self, coord: Coord) -> bool {
        match coord.to_index(self.mask.width(), self.mask.height()) {
            Some((r, c)) if self.mask.get(r, c).unwrap_or(false) => {
                let _ = self.hits.set(r, c);
                true
            }
            _ => false,
        }
    }

    /// Check if the ship is sunk (all segments hit).
    pub fn is_sunk(&self) -> bool {
        self.hits.count_ones() == self.cells.len()
    }

    /// Occupied cells, from the origin outwards.
    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    /// Struck cells, in ship order.
    pub fn hit_cells(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .copied()
            .filter(|c| self.is_hit(*c))
            .collect()
    }

    /// Ship's type.
    pub fn ship_type(&self) -> ShipType {
        self.ship_type
    }

    /// First cell of the ship.
    pub fn origin(&self) -> Coord {
        self.origin
    }

    /// Orientation of the ship.
    pub fn orientation(&self) -> Orientation {
        self.orientation
    }

    /// Occupancy mask of the ship on the board.
    pub fn mask(&self) -> &BitGrid {
        &self.mask
    }
}

impl fmt::Debug for Ship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Ship {{ name: \"{}\", origin: {}, orientation: {:?}, hits: {}/{} }}",
            self.ship_type.name(),
            self.origin,
            self.orientation,
            self.hits.count_ones(),
            self.cells.len(),
        )
    }
}
