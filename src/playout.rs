//! Monte Carlo playouts (random game completion).
//!
//! A playout gives every empty cell of a position to alternating colors in
//! random order until the board is full, then reads off the winner. Since a
//! full Hex board always has exactly one winner, one connectivity query per
//! playout is enough.

use crate::connectivity::PathSearch;
use crate::grid::{Color, Coord, Grid};
use crate::targets::TargetSets;

/// Runs repeated random completions of one fixed position.
///
/// The scratch grid, the empty-cell list and the search buffers are reused
/// between runs.
pub struct Playout<'a> {
    base: &'a Grid,
    targets: &'a TargetSets,
    scratch: Grid,
    empties: Vec<Coord>,
    search: PathSearch,
}

impl<'a> Playout<'a> {
    pub fn new(base: &'a Grid, targets: &'a TargetSets) -> Self {
        Self {
            base,
            targets,
            scratch: base.clone(),
            empties: base.empty_cells(),
            search: PathSearch::new(base.size()),
        }
    }

    /// Number of cells each playout fills.
    pub fn len(&self) -> usize {
        self.empties.len()
    }

    pub fn is_empty(&self) -> bool {
        self.empties.is_empty()
    }

    /// Play one random completion with `to_move` placing the first stone.
    ///
    /// Returns the winner of the filled board.
    pub fn run(&mut self, to_move: Color, rng: &mut fastrand::Rng) -> Color {
        self.scratch.copy_from(self.base);
        rng.shuffle(&mut self.empties);

        let mut color = to_move;
        for &pt in &self.empties {
            self.scratch.set(pt, color);
            color = color.opponent();
        }

        debug_assert!(self.scratch.is_full());
        if self.search.spans(&self.scratch, Color::Blue, self.targets) {
            Color::Blue
        } else {
            Color::Red
        }
    }

    /// The board as left by the last [`run`](Self::run).
    pub fn last_board(&self) -> &Grid {
        &self.scratch
    }
}
