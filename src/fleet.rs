//! Fleet placement: a set of non-overlapping ships on one grid.

use alloc::vec::Vec;
use rand::Rng;

use crate::bitgrid::BitGrid;
use crate::common::{BoardError, Coord};
use crate::config::GameConfig;
use crate::ship::{Orientation, Ship, ShipType};

/// Ordered cell lists of every ship in a fleet.
pub type Layout = Vec<Vec<Coord>>;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fleet {
    width: usize,
    height: usize,
    ships: Vec<Ship>,
    ship_map: BitGrid,
}

impl Fleet {
    /// Create an empty fleet for a `width × height` board.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            ships: Vec::new(),
            ship_map: BitGrid::new(width, height),
        }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    /// Place a ship at `origin` and return its index in the fleet.
    pub fn place(
        &mut self,
        ship_type: ShipType,
        origin: Coord,
        orientation: Orientation,
    ) -> Result<usize, BoardError> {
        let ship = Ship::new(ship_type, origin, orientation, self.width, self.height)?;
        if self.ship_map.intersects(ship.mask()) {
            return Err(BoardError::PlacementOverlap);
        }
        self.ship_map |= ship.mask();
        self.ships.push(ship);
        Ok(self.ships.len() - 1)
    }

    /// Build a fleet from `config`, placing the largest ships first.
    pub fn random_placement<R: Rng + ?Sized>(
        config: &GameConfig,
        rng: &mut R,
    ) -> Result<Self, BoardError> {
        config.validate()?;
        let mut order = config.fleet.clone();
        order.sort_by(|a, b| b.length().cmp(&a.length()));

        let mut fleet = Fleet::new(config.width, config.height);
        for def in order {
            fleet.place_randomly(def, config.placement_attempts, rng)?;
        }
        log::debug!("placed {} ships at random", fleet.ships.len());
        Ok(fleet)
    }

    fn place_randomly<R: Rng + ?Sized>(
        &mut self,
        def: ShipType,
        attempts: usize,
        rng: &mut R,
    ) -> Result<usize, BoardError> {
        for _ in 0..attempts {
            let orientation = if rng.random() {
                Orientation::Horizontal
            } else {
                Orientation::Vertical
            };
            let (across, along) = match orientation {
                Orientation::Horizontal => (self.height, self.width.checked_sub(def.length())),
                Orientation::Vertical => (self.width, self.height.checked_sub(def.length())),
            };
            // ship longer than the board in this orientation
            let Some(span) = along else { continue };
            let a = rng.random_range(0..across) as i32;
            let b = rng.random_range(0..=span) as i32;
            let origin = match orientation {
                Orientation::Horizontal => Coord::new(a, b),
                Orientation::Vertical => Coord::new(b, a),
            };
            match self.place(def, origin, orientation) {
                Ok(idx) => return Ok(idx),
                Err(BoardError::PlacementOverlap) => continue,
                Err(e) => return Err(e),
            }
        }
        Err(BoardError::RandomPlacementExhausted {
            ship: def.name(),
            attempts,
        })
    }

    pub fn ships(&self) -> &[Ship] {
        &self.ships
    }

    /// Index of the ship occupying `coord`, if any.
    pub fn ship_at(&self, coord: Coord) -> Option<usize> {
        self.ships.iter().position(|s| s.occupies(coord))
    }

    /// Record a hit on whichever ship occupies `coord` and return that ship.
    pub(crate) fn strike(&mut self, coord: Coord) -> Option<&Ship> {
        let ship = self.ships.iter_mut().find(|s| s.occupies(coord))?;
        ship.register_hit(coord);
        Some(ship)
    }

    /// Occupancy of every ship cell.
    pub fn ship_map(&self) -> &BitGrid {
        &self.ship_map
    }

    /// Returns `true` when every ship is sunk.
    pub fn all_sunk(&self) -> bool {
        self.ships.iter().all(Ship::is_sunk)
    }

    /// Number of ships still afloat.
    pub fn remaining(&self) -> usize {
        self.ships.iter().filter(|s| !s.is_sunk()).count()
    }

    /// True when the placed ships are exactly `types`, in any order.
    pub fn has_types(&self, types: &[ShipType]) -> bool {
        let key = |t: ShipType| (t.length(), t.name());
        let mut placed: Vec<_> = self.ships.iter().map(|s| key(s.ship_type())).collect();
        let mut wanted: Vec<_> = types.iter().copied().map(key).collect();
        placed.sort_unstable();
        wanted.sort_unstable();
        placed == wanted
    }

    pub fn layout(&self) -> Layout {
        self.ships.iter().map(|s| s.cells().to_vec()).collect()
    }
}
