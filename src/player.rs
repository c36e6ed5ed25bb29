//! Players: humans typing cell identifiers and the Monte Carlo AI.
//!
//! Both kinds answer the same request ("which cell next?") for the
//! authoritative board. A human's text comes from an injected
//! [`MoveSource`] and is retried until it names an empty cell; the AI takes
//! a snapshot of the board and hands it to the evaluator.

use std::collections::VecDeque;
use std::sync::Arc;

use log::{info, warn};

use crate::board::{AuthoritativeBoard, Board};
use crate::coord::str_coord;
use crate::error::EngineError;
use crate::evaluator::MonteCarloEvaluator;
use crate::grid::{Color, Coord};

/// Where a human player's moves come from.
pub trait MoveSource {
    /// Next raw cell identifier, or `None` when input is exhausted.
    fn next_move(&mut self, board: &AuthoritativeBoard, color: Color) -> Option<String>;

    /// Called when `input` was not a playable cell, before asking again.
    fn rejected(&mut self, input: &str, reason: &str) {
        warn!("rejected move {input:?}: {reason}");
    }
}

/// Feeds a fixed list of identifiers, e.g. for tests or replays of a script.
#[derive(Clone, Debug, Default)]
pub struct ScriptedMoves {
    moves: VecDeque<String>,
}

impl ScriptedMoves {
    pub fn new<I, S>(moves: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            moves: moves.into_iter().map(Into::into).collect(),
        }
    }
}

impl MoveSource for ScriptedMoves {
    fn next_move(&mut self, _board: &AuthoritativeBoard, _color: Color) -> Option<String> {
        self.moves.pop_front()
    }
}

pub enum Player {
    Human {
        color: Color,
        source: Box<dyn MoveSource>,
    },
    Ai {
        color: Color,
        evaluator: Arc<MonteCarloEvaluator>,
        rng: fastrand::Rng,
    },
}

impl Player {
    pub fn human(color: Color, source: impl MoveSource + 'static) -> Self {
        Player::Human {
            color,
            source: Box::new(source),
        }
    }

    pub fn ai(color: Color, evaluator: Arc<MonteCarloEvaluator>, rng: fastrand::Rng) -> Self {
        Player::Ai {
            color,
            evaluator,
            rng,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            Player::Human { color, .. } | Player::Ai { color, .. } => *color,
        }
    }

    pub fn is_ai(&self) -> bool {
        matches!(self, Player::Ai { .. })
    }

    /// Decide on the next cell without touching the board.
    ///
    /// # Errors
    /// A human whose input runs out yields [`EngineError::InputClosed`]; the
    /// AI fails with [`EngineError::NoCandidates`] on a full board.
    pub fn request_move(&mut self, board: &AuthoritativeBoard) -> Result<Coord, EngineError> {
        match self {
            Player::Human { color, source } => loop {
                let input = source
                    .next_move(board, *color)
                    .ok_or(EngineError::InputClosed)?;
                match board.cell_by_id(&input) {
                    Ok(coord) if !board.is_occupied(coord) => return Ok(coord),
                    Ok(_) => source.rejected(&input, "cell is already taken"),
                    Err(err) => source.rejected(&input, &err.to_string()),
                }
            },
            Player::Ai {
                color,
                evaluator,
                rng,
            } => {
                let sim = board.snapshot();
                evaluator.choose_move(&sim, *color, rng)
            }
        }
    }

    /// Request a move and apply it to the board. Returns the cell played.
    pub fn make_move(&mut self, board: &mut AuthoritativeBoard) -> Result<Coord, EngineError> {
        let coord = self.request_move(board)?;
        board.apply(coord, self.color())?;
        if self.is_ai() {
            info!("{} AI plays {}", self.color(), str_coord(coord));
        }
        Ok(coord)
    }
}
