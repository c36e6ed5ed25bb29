//! Connectivity checks between a color's two target borders.
//!
//! The search is a depth-first walk over same-color cells that keeps its own
//! traversal stack instead of recursing: the stack holds the current path,
//! the walk advances to the first unseen same-color neighbor in [`DELTA`]
//! order and backtracks by popping when a cell has none left. A row-major
//! `seen` bitmap makes every cell enter the path at most once, so a check is
//! O(size²).
//!
//! [`DELTA`]: crate::constants::DELTA

use crate::grid::{Color, Coord, Grid};
use crate::targets::{Side, TargetSet, TargetSets};

/// Reusable buffers for path searches on one board size.
///
/// Playouts run thousands of checks per candidate, so the `seen` bitmap and
/// the stack are kept between calls.
#[derive(Clone, Debug, Default)]
pub struct PathSearch {
    seen: Vec<bool>,
    stack: Vec<Coord>,
}

impl PathSearch {
    pub fn new(size: usize) -> Self {
        Self {
            seen: vec![false; size * size],
            stack: Vec::with_capacity(size * size),
        }
    }

    fn reset(&mut self, size: usize) {
        self.seen.clear();
        self.seen.resize(size * size, false);
        self.stack.clear();
    }

    /// Cells on the current traversal path, from the start cell to the tip.
    pub fn path(&self) -> &[Coord] {
        &self.stack
    }

    /// Whether `target` can be reached from `start` through cells of `color`.
    ///
    /// Returns false if `start` itself is not owned by `color`. On success
    /// [`path`](Self::path) holds the route found, minus the final cell.
    pub fn reaches(&mut self, grid: &Grid, start: Coord, color: Color, target: &TargetSet) -> bool {
        self.reset(grid.size());
        if grid.get(start) != Some(color) {
            return false;
        }
        self.walk(grid, start, color, target)
    }

    /// Whether `color` has a chain joining its two borders anywhere on the grid.
    ///
    /// Walks are started from every owned cell of the first border and share
    /// one `seen` bitmap, so the whole query stays O(size²).
    pub fn spans(&mut self, grid: &Grid, color: Color, targets: &TargetSets) -> bool {
        self.reset(grid.size());
        let [from, to] = targets.pair(color);
        for &start in from.cells() {
            if grid.get(start) != Some(color) || self.seen[grid.idx(start)] {
                continue;
            }
            if self.walk(grid, start, color, to) {
                return true;
            }
        }
        false
    }

    /// Whether the stone just placed at `last` joins both borders of `color`.
    ///
    /// Cheap precondition first: `color` must already own a cell on each
    /// border. Only then is the path search run, once per border.
    pub fn is_winning_move(
        &mut self,
        grid: &Grid,
        last: Coord,
        color: Color,
        targets: &TargetSets,
    ) -> bool {
        let touches = |set: &TargetSet| set.cells().iter().any(|&c| grid.get(c) == Some(color));
        if !Side::BOTH.iter().all(|&side| touches(targets.get(color, side))) {
            return false;
        }
        Side::BOTH
            .iter()
            .all(|&side| self.reaches(grid, last, color, targets.get(color, side)))
    }

    /// Depth-first walk from `start`; `seen` is not cleared.
    fn walk(&mut self, grid: &Grid, start: Coord, color: Color, target: &TargetSet) -> bool {
        self.seen[grid.idx(start)] = true;
        if target.contains(start) {
            return true;
        }
        self.stack.push(start);

        while let Some(&top) = self.stack.last() {
            let next = grid
                .neighbors(top)
                .find(|&n| !self.seen[grid.idx(n)] && grid.get(n) == Some(color));
            match next {
                Some(n) => {
                    self.seen[grid.idx(n)] = true;
                    if target.contains(n) {
                        return true;
                    }
                    self.stack.push(n);
                }
                None => {
                    self.stack.pop();
                }
            }
        }
        false
    }
}

/// Winner of a completely filled grid.
///
/// Hex cannot end in a draw, so on a full grid this is always `Some`; on a
/// partial grid it reports whichever color already spans, if any.
pub fn winner_of_grid(grid: &Grid, targets: &TargetSets) -> Option<Color> {
    let mut search = PathSearch::new(grid.size());
    [Color::Blue, Color::Red]
        .into_iter()
        .find(|&color| search.spans(grid, color, targets))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid_with(size: usize, blue: &[Coord], red: &[Coord]) -> Grid {
        let mut grid = Grid::new(size);
        for &c in blue {
            grid.set(c, Color::Blue);
        }
        for &c in red {
            grid.set(c, Color::Red);
        }
        grid
    }

    #[test]
    fn test_reaches_along_row() {
        let grid = grid_with(5, &[(2, 0), (2, 1), (2, 2), (2, 3), (2, 4)], &[]);
        let targets = TargetSets::new(5);
        let mut search = PathSearch::new(5);
        assert!(search.reaches(&grid, (2, 2), Color::Blue, targets.get(Color::Blue, Side::First)));
        assert!(search.reaches(&grid, (2, 2), Color::Blue, targets.get(Color::Blue, Side::Second)));
    }

    #[test]
    fn test_reaches_rejects_foreign_start() {
        let grid = grid_with(3, &[(0, 0)], &[(1, 1)]);
        let targets = TargetSets::new(3);
        let mut search = PathSearch::new(3);
        assert!(!search.reaches(&grid, (1, 1), Color::Blue, targets.get(Color::Blue, Side::First)));
        assert!(!search.reaches(&grid, (2, 2), Color::Blue, targets.get(Color::Blue, Side::First)));
    }

    #[test]
    fn test_down_right_diagonal_is_not_adjacent() {
        // (0,0) and (1,1) only touch through the missing hex direction.
        let grid = grid_with(2, &[(0, 0), (1, 1)], &[]);
        let targets = TargetSets::new(2);
        let mut search = PathSearch::new(2);
        assert!(!search.spans(&grid, Color::Blue, &targets));

        // (1,0) and (0,1) are neighbors.
        let grid = grid_with(2, &[(1, 0), (0, 1)], &[]);
        assert!(search.spans(&grid, Color::Blue, &targets));
    }

    #[test]
    fn test_backtracking_out_of_dead_end() {
        // The first branch explored from (2,2) is the dead end going up;
        // the walk must back out of it and continue down to row 4.
        let size = 5;
        let red = [(2, 2), (1, 2), (0, 3), (3, 2), (4, 2)];
        let grid = grid_with(size, &[], &red);
        let targets = TargetSets::new(size);
        let mut search = PathSearch::new(size);
        assert!(search.reaches(&grid, (2, 2), Color::Red, targets.get(Color::Red, Side::Second)));
        assert!(search.reaches(&grid, (2, 2), Color::Red, targets.get(Color::Red, Side::First)));
        assert!(search.is_winning_move(&grid, (2, 2), Color::Red, &targets));
    }

    #[test]
    fn test_path_is_connected_chain() {
        let size = 5;
        let red = [(0, 2), (1, 2), (2, 1), (3, 1)];
        let grid = grid_with(size, &[], &red);
        let targets = TargetSets::new(size);
        let mut search = PathSearch::new(size);
        assert!(!search.reaches(&grid, (0, 2), Color::Red, targets.get(Color::Red, Side::Second)));
        assert!(search.path().is_empty());

        let grid = grid_with(size, &[], &[(0, 2), (1, 2), (2, 1), (3, 1), (4, 0)]);
        assert!(search.reaches(&grid, (0, 2), Color::Red, targets.get(Color::Red, Side::Second)));
        let path = search.path();
        assert_eq!(path.first(), Some(&(0, 2)));
        for pair in path.windows(2) {
            assert!(grid.neighbors(pair[0]).any(|n| n == pair[1]));
        }
    }

    #[test]
    fn test_short_circuit_without_both_borders() {
        let size = 5;
        let grid = grid_with(size, &[(1, 0), (1, 1), (1, 2), (1, 3)], &[]);
        let targets = TargetSets::new(size);
        let mut search = PathSearch::new(size);
        assert!(!search.is_winning_move(&grid, (1, 3), Color::Blue, &targets));
    }

    #[test]
    fn test_border_cells_not_connected() {
        let size = 5;
        // Blue owns both borders but the chain is cut at column 2.
        let grid = grid_with(size, &[(0, 0), (0, 1), (0, 3), (0, 4)], &[(0, 2)]);
        let targets = TargetSets::new(size);
        let mut search = PathSearch::new(size);
        assert!(!search.is_winning_move(&grid, (0, 1), Color::Blue, &targets));
        assert!(!search.is_winning_move(&grid, (0, 3), Color::Blue, &targets));
        assert!(!search.spans(&grid, Color::Blue, &targets));
    }

    #[test]
    fn test_no_draw_on_random_full_grids() {
        let mut rng = fastrand::Rng::with_seed(7);
        for size in 1..=11 {
            let targets = TargetSets::new(size);
            let mut search = PathSearch::new(size);
            for _ in 0..50 {
                let mut grid = Grid::new(size);
                for r in 0..size {
                    for c in 0..size {
                        let color = if rng.bool() { Color::Blue } else { Color::Red };
                        grid.set((r, c), color);
                    }
                }
                let blue = search.spans(&grid, Color::Blue, &targets);
                let red = search.spans(&grid, Color::Red, &targets);
                assert!(blue != red, "size {size}: exactly one color must span\n{grid}");
                let expected = if blue { Color::Blue } else { Color::Red };
                assert_eq!(winner_of_grid(&grid, &targets), Some(expected));
            }
        }
    }

    #[test]
    fn test_winner_of_partial_grid() {
        let grid = grid_with(3, &[(0, 0)], &[(1, 1)]);
        assert_eq!(winner_of_grid(&grid, &TargetSets::new(3)), None);
    }
}
