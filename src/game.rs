use crate::{
    bitgrid::BitGrid,
    board::Board,
    common::{BoardError, Coord, Outcome, ShotResult},
    fleet::Layout,
};

/// Current status of a game, from the human's point of view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum GameStatus {
    InProgress,
    Won,
    Lost,
}

/// Holds the human's board and the human's record of shots fired at the AI.
pub struct GameController {
    board: Board,
    play_hits: BitGrid,
    play_misses: BitGrid,
    play_bonuses: BitGrid,
    won: bool,
}

impl GameController {
    /// `target_width × target_height` is the size of the AI board the human
    /// fires at.
    pub fn new(board: Board, target_width: usize, target_height: usize) -> Self {
        let empty = BitGrid::new(target_width, target_height);
        Self {
            board,
            play_hits: empty.clone(),
            play_misses: empty.clone(),
            play_bonuses: empty,
            won: false,
        }
    }

    /// Immutable reference to the human's board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Handle an AI shot on the human's board.
    pub fn shot(&mut self, x: i32, y: i32) -> Result<ShotResult, BoardError> {
        self.board.shoot(x, y)
    }

    /// True when the human already fired at (`x`, `y`) on the AI's board.
    pub fn already_played(&self, x: i32, y: i32) -> bool {
        match Coord::new(x, y).to_index(self.play_hits.width(), self.play_hits.height()) {
            Some((r, c)) => {
                self.play_hits.get(r, c).unwrap_or(false)
                    || self.play_misses.get(r, c).unwrap_or(false)
                    || self.play_bonuses.get(r, c).unwrap_or(false)
            }
            None => false,
        }
    }

    /// Record the result of a human shot against the AI.
    pub fn set_play_result(
        &mut self,
        x: i32,
        y: i32,
        result: &ShotResult,
    ) -> Result<(), BoardError> {
        let (r, c) = Coord::new(x, y)
            .to_index(self.play_hits.width(), self.play_hits.height())
            .ok_or(BoardError::OutOfBounds { x, y })?;
        if self.already_played(x, y) {
            return Err(BoardError::AlreadyPlayed { x, y });
        }
        match result.outcome {
            Outcome::Bonus => self.play_bonuses.set(r, c)?,
            o if o.is_hit() => self.play_hits.set(r, c)?,
            _ => self.play_misses.set(r, c)?,
        }
        if result.outcome == Outcome::Victory {
            self.won = true;
        }
        Ok(())
    }

    /// Bitgrid of the human's successful shots on the AI board.
    pub fn play_hits(&self) -> &BitGrid {
        &self.play_hits
    }

    /// Bitgrid of the human's missed shots on the AI board.
    pub fn play_misses(&self) -> &BitGrid {
        &self.play_misses
    }

    /// Bonus cells the human has claimed on the AI board.
    pub fn play_bonuses(&self) -> &BitGrid {
        &self.play_bonuses
    }

    /// Ship cells of the human's fleet.
    pub fn layout(&self) -> Layout {
        self.board.layout()
    }

    /// Number of human ships still afloat.
    pub fn remaining_ships(&self) -> usize {
        self.board.fleet().remaining()
    }

    /// Evaluate the current game status.
    pub fn status(&self) -> GameStatus {
        if self.board.all_sunk() {
            GameStatus::Lost
        } else if self.won {
            GameStatus::Won
        } else {
            GameStatus::InProgress
        }
    }
}
