//! Board state: a fleet plus per-cell shot state, and shot resolution.

use alloc::vec::Vec;
use core::fmt;
use rand::Rng;

use crate::bitgrid::BitGrid;
use crate::common::{BoardError, CellState, Coord, Outcome, ShotResult};
use crate::config::GameConfig;
use crate::fleet::{Fleet, Layout};

/// One player's grid: ship placements, hits, misses and bonus cells.
#[derive(Clone, PartialEq, Eq)]
pub struct Board {
    fleet: Fleet,
    hits: BitGrid,
    misses: BitGrid,
    bonuses: BitGrid,
    claimed: BitGrid,
}

impl Board {
    /// Wrap an already placed fleet in a fresh, unshot board.
    pub fn new(fleet: Fleet) -> Self {
        let empty = BitGrid::new(fleet.width(), fleet.height());
        Board {
            hits: empty.clone(),
            misses: empty.clone(),
            bonuses: empty.clone(),
            claimed: empty,
            fleet,
        }
    }

    /// Random fleet plus `config.bonus_cells` bonus cells on free water.
    pub fn random<R: Rng + ?Sized>(config: &GameConfig, rng: &mut R) -> Result<Self, BoardError> {
        let fleet = Fleet::random_placement(config, rng)?;
        let mut board = Board::new(fleet);
        for _ in 0..config.bonus_cells {
            let taken = board.fleet.ship_map() | &board.bonuses;
            let free: Vec<(usize, usize)> = (!&taken).iter_set_bits().collect();
            if free.is_empty() {
                return Err(BoardError::InvalidConfig("no free cell left for a bonus"));
            }
            let (r, c) = free[rng.random_range(0..free.len())];
            board.bonuses.set(r, c)?;
        }
        Ok(board)
    }

    pub fn width(&self) -> usize {
        self.fleet.width()
    }

    pub fn height(&self) -> usize {
        self.fleet.height()
    }

    pub fn fleet(&self) -> &Fleet {
        &self.fleet
    }

    /// Returns `true` when all ships are sunk.
    pub fn all_sunk(&self) -> bool {
        self.fleet.all_sunk()
    }

    pub fn layout(&self) -> Layout {
        self.fleet.layout()
    }

    /// Hide a bonus on open water.
    pub fn place_bonus(&mut self, coord: Coord) -> Result<(), BoardError> {
        let (r, c) = self.index(coord)?;
        if self.fleet.ship_map().get(r, c)? || self.bonuses.get(r, c)? {
            return Err(BoardError::PlacementOverlap);
        }
        self.bonuses.set(r, c)?;
        Ok(())
    }

    /// Shot state of `coord`.
    pub fn cell_state(&self, coord: Coord) -> Result<CellState, BoardError> {
        let (r, c) = self.index(coord)?;
        let state = if self.hits.get(r, c)? {
            CellState::Hit
        } else if self.misses.get(r, c)? {
            CellState::Missed
        } else if self.claimed.get(r, c)? {
            CellState::Bonus
        } else {
            CellState::Unshot
        };
        Ok(state)
    }

    /// True when `coord` is on the board and has already been resolved.
    pub fn is_played(&self, coord: Coord) -> bool {
        matches!(self.cell_state(coord), Ok(s) if s != CellState::Unshot)
    }

    /// Number of resolved cells.
    pub fn shots_fired(&self) -> usize {
        self.hits.count_ones() + self.misses.count_ones() + self.claimed.count_ones()
    }

    pub fn hits(&self) -> &BitGrid {
        &self.hits
    }

    pub fn misses(&self) -> &BitGrid {
        &self.misses
    }

    pub fn bonuses(&self) -> &BitGrid {
        &self.bonuses
    }

    /// Resolve a shot at (`x`, `y`).
    ///
    /// Rejected shots (off-board or already played) leave the board untouched.
    /// When the shot sinks the last ship the result is `Victory`, carrying that
    /// ship's full shape.
    pub fn shoot(&mut self, x: i32, y: i32) -> Result<ShotResult, BoardError> {
        let coord = Coord::new(x, y);
        let (r, c) = self.index(coord)?;
        if self.cell_state(coord)? != CellState::Unshot {
            return Err(BoardError::AlreadyPlayed { x, y });
        }

        if self.bonuses.get(r, c)? {
            self.claimed.set(r, c)?;
            log::debug!("shot {} found a bonus", coord);
            return Ok(ShotResult::bonus(coord));
        }

        let Some(ship) = self.fleet.strike(coord) else {
            self.misses.set(r, c)?;
            log::debug!("shot {} missed", coord);
            return Ok(ShotResult::missed());
        };
        let (sunk, name, cells, hit_cells) = (
            ship.is_sunk(),
            ship.ship_type().name(),
            ship.cells().to_vec(),
            ship.hit_cells(),
        );
        self.hits.set(r, c)?;

        let result = if self.fleet.all_sunk() {
            ShotResult::with_shape(Outcome::Victory, cells)
        } else if sunk {
            ShotResult::with_shape(Outcome::Drown, cells)
        } else {
            ShotResult::with_shape(Outcome::Touched, hit_cells)
        };
        log::debug!("shot {} on {}: {:?}", coord, name, result.outcome);
        Ok(result)
    }

    fn index(&self, coord: Coord) -> Result<(usize, usize), BoardError> {
        coord
            .to_index(self.width(), self.height())
            .ok_or(BoardError::OutOfBounds {
                x: coord.x,
                y: coord.y,
            })
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "Board {{\n  ship_map: {:?},\n  hits: {:?},\n  misses: {:?},\n  ships: {:?}\n}}",
            self.fleet.ship_map(),
            self.hits,
            self.misses,
            self.fleet.ships()
        )
    }
}
