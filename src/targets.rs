//! Border regions each color must connect.
//!
//! Blue bridges the leftmost and rightmost columns, Red the top and bottom
//! rows. The sets depend only on the board size, so they are built once and
//! shared behind an `Arc` by every board of that size.

use crate::grid::{Color, Coord};

/// Which of a color's two borders.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Side {
    First,
    Second,
}

impl Side {
    pub const BOTH: [Side; 2] = [Side::First, Side::Second];
}

/// One border: its cells plus a row-major membership bitmap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetSet {
    cells: Vec<Coord>,
    member: Vec<bool>,
    size: usize,
}

impl TargetSet {
    fn from_cells(size: usize, cells: Vec<Coord>) -> Self {
        let mut member = vec![false; size * size];
        for &(r, c) in &cells {
            member[r * size + c] = true;
        }
        Self { cells, member, size }
    }

    pub fn cells(&self) -> &[Coord] {
        &self.cells
    }

    #[inline]
    pub fn contains(&self, (row, col): Coord) -> bool {
        row < self.size && col < self.size && self.member[row * self.size + col]
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }
}

/// The target regions of both colors for one board size.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TargetSets {
    size: usize,
    blue: [TargetSet; 2],
    red: [TargetSet; 2],
}

impl TargetSets {
    pub fn new(size: usize) -> Self {
        let last = size.saturating_sub(1);
        let column = |c: usize| TargetSet::from_cells(size, (0..size).map(|r| (r, c)).collect());
        let row = |r: usize| TargetSet::from_cells(size, (0..size).map(|c| (r, c)).collect());
        Self {
            size,
            blue: [column(0), column(last)],
            red: [row(0), row(last)],
        }
    }

    #[inline]
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn pair(&self, color: Color) -> &[TargetSet; 2] {
        match color {
            Color::Blue => &self.blue,
            Color::Red => &self.red,
        }
    }

    #[inline]
    pub fn get(&self, color: Color, side: Side) -> &TargetSet {
        let pair = self.pair(color);
        match side {
            Side::First => &pair[0],
            Side::Second => &pair[1],
        }
    }
}
