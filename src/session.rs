//! Turn sequencing between the human and the AI.
//!
//! A session is a small state machine: the shooter keeps the turn while it
//! hits (hit streak), a miss hands the turn over and a `Victory` ends the game
//! whoever fired it. Nothing here blocks or sleeps; pacing is left to the
//! front-end.

use alloc::vec::Vec;
use rand::rngs::SmallRng;
use rand::SeedableRng;

use crate::ai::AiOpponent;
use crate::board::Board;
use crate::common::{BoardError, Coord, GameError, Outcome, ShotResult};
use crate::config::{Difficulty, GameConfig};
use crate::game::{GameController, GameStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "std", derive(serde::Serialize, serde::Deserialize))]
pub enum Winner {
    Player,
    Ai,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    PlayerTurn,
    AiTurn,
    GameOver(Winner),
}

/// One resolved AI shot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiShot {
    pub coord: Coord,
    pub result: ShotResult,
}

pub struct Session {
    controller: GameController,
    ai: AiOpponent,
    phase: Phase,
    turns: usize,
}

impl Session {
    /// Start a game: the AI's fleet is placed at random from `config`, and the
    /// human moves first.
    pub fn new(
        config: &GameConfig,
        player_board: Board,
        difficulty: Difficulty,
        mut rng: SmallRng,
    ) -> Result<Self, BoardError> {
        config.validate()?;
        if player_board.width() != config.width || player_board.height() != config.height {
            return Err(BoardError::InvalidConfig(
                "player board does not match the configured size",
            ));
        }
        if !player_board.fleet().has_types(&config.fleet) {
            return Err(BoardError::InvalidConfig(
                "player fleet does not match the configured fleet",
            ));
        }
        let ai_board = Board::random(config, &mut rng)?;
        let layout = difficulty
            .perfect_information()
            .then(|| player_board.layout());
        let ai = AiOpponent::new(
            difficulty,
            ai_board,
            player_board.width(),
            player_board.height(),
            layout,
            SmallRng::from_rng(&mut rng),
        );
        log::info!(
            "new {}x{} session, difficulty {}",
            config.width,
            config.height,
            difficulty
        );
        Ok(Self {
            controller: GameController::new(player_board, config.width, config.height),
            ai,
            phase: Phase::PlayerTurn,
            turns: 0,
        })
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn status(&self) -> GameStatus {
        match self.phase {
            Phase::GameOver(Winner::Player) => GameStatus::Won,
            Phase::GameOver(Winner::Ai) => GameStatus::Lost,
            _ => GameStatus::InProgress,
        }
    }

    pub fn controller(&self) -> &GameController {
        &self.controller
    }

    pub fn ai(&self) -> &AiOpponent {
        &self.ai
    }

    /// Number of turns that have ended so far.
    pub fn turns(&self) -> usize {
        self.turns
    }

    /// Human fires at (`x`, `y`) on the AI board. Rejected shots keep the
    /// turn with the human so the front-end can re-prompt.
    pub fn player_shoot(&mut self, x: i32, y: i32) -> Result<ShotResult, GameError> {
        match self.phase {
            Phase::PlayerTurn => {}
            Phase::AiTurn => return Err(GameError::NotPlayerTurn),
            Phase::GameOver(_) => return Err(GameError::GameOver),
        }
        if self.controller.already_played(x, y) {
            return Err(BoardError::AlreadyPlayed { x, y }.into());
        }
        let result = self.ai.shot(x, y)?;
        self.controller.set_play_result(x, y, &result)?;
        self.advance(Winner::Player, result.outcome);
        Ok(result)
    }

    /// One AI shot against the human board.
    pub fn ai_shoot(&mut self) -> Result<AiShot, GameError> {
        match self.phase {
            Phase::AiTurn => {}
            Phase::PlayerTurn => return Err(GameError::NotAiTurn),
            Phase::GameOver(_) => return Err(GameError::GameOver),
        }
        let coord = self.ai.play().ok_or(GameError::AiExhausted)?;
        let result = self.controller.shot(coord.x, coord.y)?;
        self.ai.set_result(&result);
        self.advance(Winner::Ai, result.outcome);
        Ok(AiShot { coord, result })
    }

    /// Let the AI shoot until it misses or wins.
    pub fn ai_turn(&mut self) -> Result<Vec<AiShot>, GameError> {
        let mut shots = Vec::new();
        loop {
            shots.push(self.ai_shoot()?);
            if self.phase != Phase::AiTurn {
                return Ok(shots);
            }
        }
    }

    fn advance(&mut self, shooter: Winner, outcome: Outcome) {
        let next = if outcome.ends_game() {
            Phase::GameOver(shooter)
        } else if outcome.grants_extra_shot() {
            self.phase
        } else {
            match shooter {
                Winner::Player => Phase::AiTurn,
                Winner::Ai => Phase::PlayerTurn,
            }
        };
        if next != self.phase {
            self.turns += 1;
            log::debug!("{:?} -> {:?}", self.phase, next);
        }
        self.phase = next;
    }
}
