//! Square grid of cell occupancy on the rhombic Hex board.
//!
//! The grid is pure data: it knows which cells are taken and by whom, and
//! which cells neighbor each other. Game rules live in [`crate::board`].

use std::fmt;

use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::constants::DELTA;

/// The two sides of a Hex game.
///
/// Blue moves first and connects west to east; Red connects north to south.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, Serialize)]
pub enum Color {
    Blue,
    Red,
}

impl Color {
    #[inline]
    pub fn opponent(self) -> Color {
        match self {
            Color::Blue => Color::Red,
            Color::Red => Color::Blue,
        }
    }

    /// Symbol used in the plain-text board dump.
    pub fn symbol(self) -> char {
        match self {
            Color::Blue => 'X',
            Color::Red => 'O',
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Blue => "blue",
            Color::Red => "red",
        }
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A cell position as `(row, col)`, both 0-indexed.
pub type Coord = (usize, usize);

/// A `size x size` matrix of `Option<Color>`, stored row-major.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    size: usize,
    cells: Vec<Option<Color>>,
}

impl Grid {
    /// Create an empty grid. Panics if `size` is zero.
    pub fn new(size: usize) -> Self {
        assert!(size >= 1, "grid size must be at least 1");
        Self {
            size,
            cells: vec![None; size * size],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    /// Row-major offset of a cell. The cell must be on the grid.
    #[inline]
    pub fn idx(&self, (row, col): Coord) -> usize {
        row * self.size + col
    }

    #[inline]
    pub fn contains(&self, (row, col): Coord) -> bool {
        row < self.size && col < self.size
    }

    /// Occupant of a cell; `None` for empty or off-grid cells.
    #[inline]
    pub fn get(&self, coord: Coord) -> Option<Color> {
        if !self.contains(coord) {
            return None;
        }
        self.cells[self.idx(coord)]
    }

    #[inline]
    pub fn is_occupied(&self, coord: Coord) -> bool {
        self.get(coord).is_some()
    }

    /// Place a stone. Bounds and emptiness are checked by the board.
    #[inline]
    pub(crate) fn set(&mut self, coord: Coord, color: Color) {
        let i = self.idx(coord);
        debug_assert!(self.cells[i].is_none(), "cell {coord:?} set twice");
        self.cells[i] = Some(color);
    }

    /// Overwrite this grid with the cells of another grid of the same size.
    pub(crate) fn copy_from(&mut self, other: &Grid) {
        debug_assert_eq!(self.size, other.size);
        self.cells.copy_from_slice(&other.cells);
    }

    /// All empty cells in row-major order.
    pub fn empty_cells(&self) -> Vec<Coord> {
        self.cells
            .iter()
            .enumerate()
            .filter(|(_, c)| c.is_none())
            .map(|(i, _)| (i / self.size, i % self.size))
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().all(Option::is_some)
    }

    pub fn cells(&self) -> &[Option<Color>] {
        &self.cells
    }

    pub fn rows(&self) -> impl Iterator<Item = &[Option<Color>]> + '_ {
        self.cells.chunks(self.size)
    }

    /// On-grid neighbors of a cell, in [`DELTA`] order.
    pub fn neighbors(&self, (row, col): Coord) -> impl Iterator<Item = Coord> + '_ {
        DELTA.into_iter().filter_map(move |(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            self.contains((r, c)).then_some((r, c))
        })
    }
}

impl Serialize for Grid {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let rows: Vec<&[Option<Color>]> = self.rows().collect();
        let mut state = serializer.serialize_struct("Grid", 2)?;
        state.serialize_field("size", &self.size)?;
        state.serialize_field("cells", &rows)?;
        state.end()
    }
}

/// Plain rhombus dump: each row shifted one column right of the one above.
impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.rows().enumerate() {
            write!(f, "{:indent$}", "", indent = r)?;
            for (c, cell) in row.iter().enumerate() {
                let ch = cell.map_or('.', Color::symbol);
                if c + 1 < self.size {
                    write!(f, "{ch} - ")?;
                } else {
                    write!(f, "{ch}")?;
                }
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_empty() {
        let grid = Grid::new(5);
        assert_eq!(grid.size(), 5);
        assert_eq!(grid.empty_cells().len(), 25);
        assert!(!grid.is_full());
        assert_eq!(grid.get((4, 4)), None);
    }

    #[test]
    fn test_empty_cells_row_major() {
        let mut grid = Grid::new(3);
        grid.set((0, 1), Color::Blue);
        grid.set((2, 0), Color::Red);
        assert_eq!(
            grid.empty_cells(),
            vec![(0, 0), (0, 2), (1, 0), (1, 1), (1, 2), (2, 1), (2, 2)]
        );
    }

    #[test]
    fn test_get_off_grid() {
        let grid = Grid::new(4);
        assert!(!grid.contains((4, 0)));
        assert_eq!(grid.get((0, 9)), None);
        assert!(!grid.is_occupied((9, 9)));
    }

    #[test]
    fn test_neighbors_interior_and_corners() {
        let grid = Grid::new(5);
        let inner: Vec<Coord> = grid.neighbors((2, 2)).collect();
        assert_eq!(inner, vec![(1, 2), (1, 3), (2, 3), (3, 2), (3, 1), (2, 1)]);

        // Acute corners have two neighbors, obtuse corners three.
        assert_eq!(grid.neighbors((0, 0)).count(), 2);
        assert_eq!(grid.neighbors((4, 4)).count(), 2);
        assert_eq!(grid.neighbors((0, 4)).count(), 3);
        assert_eq!(grid.neighbors((4, 0)).count(), 3);
    }

    #[test]
    fn test_neighbors_single_cell() {
        let grid = Grid::new(1);
        assert_eq!(grid.neighbors((0, 0)).count(), 0);
    }

    #[test]
    fn test_display() {
        let mut grid = Grid::new(3);
        grid.set((0, 0), Color::Blue);
        grid.set((1, 2), Color::Red);
        assert_eq!(grid.to_string(), "X - . - .\n . - . - O\n  . - . - .\n");
    }

    #[test]
    fn test_serialize_rows() {
        let mut grid = Grid::new(2);
        grid.set((1, 0), Color::Red);
        let json = serde_json::to_string(&grid).unwrap();
        assert_eq!(json, r#"{"size":2,"cells":[[null,null],["Red",null]]}"#);
    }
}
