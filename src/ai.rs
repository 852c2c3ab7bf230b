//! The AI opponent: owns its own board and a targeting strategy aimed at the
//! human's board.

use alloc::boxed::Box;
use rand::rngs::SmallRng;

use crate::bitgrid::BitGrid;
use crate::board::Board;
use crate::common::{BoardError, Coord, ShotResult};
use crate::config::Difficulty;
use crate::fleet::Layout;
use crate::strategy::{HuntTarget, PerfectInformation, RandomSearch, Targeting};

pub struct AiOpponent {
    difficulty: Difficulty,
    board: Board,
    strategy: Box<dyn Targeting>,
    fired: BitGrid,
    last_shot: Option<Coord>,
    rng: SmallRng,
}

impl AiOpponent {
    /// Create an opponent that defends `board` and attacks a board of
    /// `target_width × target_height`.
    ///
    /// `player_layout` is only read for [`Difficulty::Impossible`]; without it
    /// that level plays hunt-and-target instead.
    pub fn new(
        difficulty: Difficulty,
        board: Board,
        target_width: usize,
        target_height: usize,
        player_layout: Option<Layout>,
        rng: SmallRng,
    ) -> Self {
        let strategy: Box<dyn Targeting> = match (difficulty, player_layout) {
            (Difficulty::Standard, _) => Box::new(RandomSearch),
            (Difficulty::Directed, _) => Box::new(HuntTarget::new()),
            (Difficulty::Impossible, Some(layout)) => Box::new(PerfectInformation::new(layout)),
            (Difficulty::Impossible, None) => {
                log::warn!("impossible difficulty without the player layout, hunting instead");
                Box::new(HuntTarget::new())
            }
        };
        Self {
            difficulty,
            board,
            strategy,
            fired: BitGrid::new(target_width, target_height),
            last_shot: None,
            rng,
        }
    }

    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The AI's own board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Every coordinate the AI has fired at.
    pub fn fired(&self) -> &BitGrid {
        &self.fired
    }

    /// Pick the next coordinate to fire at and remember it as fired.
    /// Returns `None` once every cell of the target board has been used.
    pub fn play(&mut self) -> Option<Coord> {
        let coord = self.strategy.next_target(&mut self.rng, &self.fired)?;
        let (r, c) = coord.to_index(self.fired.width(), self.fired.height())?;
        if self.fired.get(r, c).unwrap_or(true) {
            log::error!("strategy proposed {} twice", coord);
            return None;
        }
        self.fired.set(r, c).ok()?;
        self.last_shot = Some(coord);
        log::debug!("AI ({}) plays {}", self.difficulty, coord);
        Some(coord)
    }

    /// Feed back the result of the last coordinate returned by [`play`].
    ///
    /// [`play`]: AiOpponent::play
    pub fn set_result(&mut self, result: &ShotResult) {
        match self.last_shot.take() {
            Some(coord) => self.strategy.observe(coord, result, &self.fired),
            None => log::warn!("result {:?} without a pending shot", result.outcome),
        }
    }

    /// Resolve a human shot against the AI's board.
    pub fn shot(&mut self, x: i32, y: i32) -> Result<ShotResult, BoardError> {
        self.board.shoot(x, y)
    }
}
