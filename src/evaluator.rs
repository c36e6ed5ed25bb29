//! Monte Carlo move evaluation with parallel playouts.
//!
//! Every empty cell is a candidate. For each candidate the evaluator fixes
//! it as the AI's stone on a private copy of the simulation board and runs a
//! fixed number of random completions; the candidate's score is
//! `wins - losses`. Candidates are spread over a bounded rayon pool, each
//! task owning its own board copy and random source, and the scores are
//! collected in candidate order before the best one is picked.
//!
//! Per-candidate seeds are derived from one draw of the caller's random
//! source, so the outcome depends only on that source and the position,
//! not on the number of threads or how tasks were scheduled.

use std::time::Instant;

use log::{debug, trace};
use rayon::prelude::*;
use rayon::{ThreadPool, ThreadPoolBuilder};

use crate::board::{Board, SimulationBoard};
use crate::config::EngineConfig;
use crate::constants::SEED_STRIDE;
use crate::coord::str_coord;
use crate::error::{EngineError, MoveError};
use crate::grid::{Color, Coord};
use crate::playout::Playout;

/// Playout statistics for one candidate move.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CandidateScore {
    pub coord: Coord,
    pub wins: usize,
    pub losses: usize,
}

impl CandidateScore {
    #[inline]
    pub fn score(&self) -> i64 {
        self.wins as i64 - self.losses as i64
    }

    pub fn winrate(&self) -> f64 {
        let total = self.wins + self.losses;
        if total > 0 {
            self.wins as f64 / total as f64
        } else {
            0.0
        }
    }
}

/// Chooses AI moves by scoring every empty cell with random playouts.
pub struct MonteCarloEvaluator {
    playouts: usize,
    pool: ThreadPool,
}

impl MonteCarloEvaluator {
    /// Build an evaluator and its thread pool.
    ///
    /// # Errors
    /// Fails if the configuration asks for zero playouts or the pool cannot
    /// be created.
    pub fn new(config: &EngineConfig) -> Result<Self, EngineError> {
        config.validate()?;
        let builder = ThreadPoolBuilder::new();
        let builder = if config.workers > 0 {
            builder.num_threads(config.workers)
        } else {
            builder
        };
        Ok(Self {
            playouts: config.playouts,
            pool: builder.build()?,
        })
    }

    pub fn playouts(&self) -> usize {
        self.playouts
    }

    /// Number of threads candidates are spread over.
    pub fn workers(&self) -> usize {
        self.pool.current_num_threads()
    }

    /// Score every empty cell of `board` as the next move for `color`.
    ///
    /// Scores come back in row-major candidate order. `board` itself is
    /// never modified; each candidate works on its own clone.
    pub fn evaluate(
        &self,
        board: &SimulationBoard,
        color: Color,
        rng: &mut fastrand::Rng,
    ) -> Result<Vec<CandidateScore>, EngineError> {
        let candidates = board.empty_cells();
        if candidates.is_empty() {
            return Err(EngineError::NoCandidates);
        }

        let base_seed = rng.u64(..);
        let start = Instant::now();
        let scores = self.pool.install(|| {
            candidates
                .par_iter()
                .enumerate()
                .map(|(i, &coord)| {
                    let seed = base_seed ^ (i as u64 + 1).wrapping_mul(SEED_STRIDE);
                    let mut rng = fastrand::Rng::with_seed(seed);
                    self.score_candidate(board, coord, color, &mut rng)
                })
                .collect::<Result<Vec<_>, MoveError>>()
        })?;

        debug!(
            "{color}: scored {} candidates x {} playouts on {} threads in {:.2?}",
            scores.len(),
            self.playouts,
            self.workers(),
            start.elapsed()
        );
        Ok(scores)
    }

    /// Pick the best move for `color`.
    ///
    /// The highest `wins - losses` score wins; ties go to the first
    /// candidate in row-major order.
    pub fn choose_move(
        &self,
        board: &SimulationBoard,
        color: Color,
        rng: &mut fastrand::Rng,
    ) -> Result<Coord, EngineError> {
        let scores = self.evaluate(board, color, rng)?;
        for s in &scores {
            trace!(
                "move {} wins={} losses={} wr={:.3}",
                str_coord(s.coord),
                s.wins,
                s.losses,
                s.winrate()
            );
        }
        let best = best_candidate(&scores).ok_or(EngineError::NoCandidates)?;
        debug!(
            "{color} chooses {} (score {}, wr {:.3})",
            str_coord(best.coord),
            best.score(),
            best.winrate()
        );
        Ok(best.coord)
    }

    /// Playout statistics for one candidate, on a private board copy.
    fn score_candidate(
        &self,
        board: &SimulationBoard,
        coord: Coord,
        color: Color,
        rng: &mut fastrand::Rng,
    ) -> Result<CandidateScore, MoveError> {
        let mut sim = board.clone();
        if sim.apply(coord, color)? {
            // An immediate win wins every playout.
            return Ok(CandidateScore {
                coord,
                wins: self.playouts,
                losses: 0,
            });
        }

        let mut playout = Playout::new(sim.grid(), sim.targets());
        let opponent = color.opponent();
        let wins = (0..self.playouts)
            .filter(|_| playout.run(opponent, rng) == color)
            .count();
        Ok(CandidateScore {
            coord,
            wins,
            losses: self.playouts - wins,
        })
    }
}

/// First candidate with the maximum score.
pub fn best_candidate(scores: &[CandidateScore]) -> Option<&CandidateScore> {
    let mut best: Option<&CandidateScore> = None;
    for s in scores {
        if best.is_none_or(|b| s.score() > b.score()) {
            best = Some(s);
        }
    }
    best
}
