//! Hex boards: the authoritative game board and disposable simulation copies.
//!
//! Both variants share one rule set ([`Board`]): a move may only go to an
//! empty cell on a board that is not yet won, and every move is followed by a
//! win check for the mover. The authoritative board additionally tracks who
//! moved last, parses cell identifiers and can be serialized for rendering.
//! A [`SimulationBoard`] is a deep copy taken at the start of an AI turn; it
//! never shares its grid with the board it came from.

use std::sync::Arc;

use log::debug;
use serde::ser::SerializeStruct;
use serde::{Serialize, Serializer};

use crate::connectivity::PathSearch;
use crate::coord::{parse_coord, str_coord};
use crate::error::{CoordError, MoveError};
use crate::grid::{Color, Coord, Grid};
use crate::targets::TargetSets;

/// Operations common to every board variant.
pub trait Board {
    fn size(&self) -> usize;

    fn is_occupied(&self, coord: Coord) -> bool;

    /// True once a move has connected its color's borders. Never reset.
    fn has_won(&self) -> bool;

    /// Empty cells in row-major order.
    fn empty_cells(&self) -> Vec<Coord>;

    /// Place a stone of `color` at `coord` and return the new win state.
    ///
    /// # Errors
    /// Fails without changing the board if the cell is off the board or
    /// occupied, or if the game is already won.
    fn apply(&mut self, coord: Coord, color: Color) -> Result<bool, MoveError>;
}

/// Grid, shared targets, win flag and search buffers.
#[derive(Clone, Debug)]
struct BoardState {
    grid: Grid,
    targets: Arc<TargetSets>,
    won: bool,
    search: PathSearch,
}

impl BoardState {
    fn new(targets: Arc<TargetSets>) -> Self {
        let size = targets.size();
        Self {
            grid: Grid::new(size),
            targets,
            won: false,
            search: PathSearch::new(size),
        }
    }

    fn apply(&mut self, coord: Coord, color: Color) -> Result<bool, MoveError> {
        if self.won {
            return Err(MoveError::GameOver);
        }
        let (row, col) = coord;
        if !self.grid.contains(coord) {
            return Err(MoveError::OutOfBounds {
                row,
                col,
                size: self.grid.size(),
            });
        }
        if self.grid.is_occupied(coord) {
            return Err(MoveError::Occupied { row, col });
        }

        self.grid.set(coord, color);
        self.won = self
            .search
            .is_winning_move(&self.grid, coord, color, &self.targets);
        Ok(self.won)
    }
}

/// The single source of truth for a running game.
#[derive(Debug)]
pub struct AuthoritativeBoard {
    state: BoardState,
    last_mover: Option<Color>,
}

impl AuthoritativeBoard {
    /// Create an empty board. Panics if `size` is zero.
    pub fn new(size: usize) -> Self {
        Self::with_targets(Arc::new(TargetSets::new(size)))
    }

    /// Create an empty board sharing already-built target sets.
    pub fn with_targets(targets: Arc<TargetSets>) -> Self {
        Self {
            state: BoardState::new(targets),
            last_mover: None,
        }
    }

    /// Read-only view of the cells, for renderers.
    pub fn grid(&self) -> &Grid {
        &self.state.grid
    }

    pub fn targets(&self) -> &Arc<TargetSets> {
        &self.state.targets
    }

    /// Color of the most recently applied move.
    pub fn last_mover(&self) -> Option<Color> {
        self.last_mover
    }

    /// The winner, once the game is over.
    ///
    /// The win check runs after every move and play stops at the first
    /// winning one, so the winner is always the last mover.
    pub fn winner(&self) -> Option<Color> {
        if self.state.won { self.last_mover } else { None }
    }

    /// Deep copy of the current position for AI search.
    pub fn snapshot(&self) -> SimulationBoard {
        SimulationBoard {
            state: self.state.clone(),
        }
    }

    /// Resolve a cell identifier such as `"C4"` on this board.
    pub fn cell_by_id(&self, id: &str) -> Result<Coord, CoordError> {
        parse_coord(id, self.size())
    }

    /// Whether `id` names an existing, empty cell.
    pub fn is_valid_move(&self, id: &str) -> bool {
        self.cell_by_id(id)
            .is_ok_and(|coord| !self.is_occupied(coord))
    }
}

impl Board for AuthoritativeBoard {
    fn size(&self) -> usize {
        self.state.grid.size()
    }

    fn is_occupied(&self, coord: Coord) -> bool {
        self.state.grid.is_occupied(coord)
    }

    fn has_won(&self) -> bool {
        self.state.won
    }

    fn empty_cells(&self) -> Vec<Coord> {
        self.state.grid.empty_cells()
    }

    fn apply(&mut self, coord: Coord, color: Color) -> Result<bool, MoveError> {
        let won = self.state.apply(coord, color)?;
        self.last_mover = Some(color);
        debug!("{color} plays {}{}", str_coord(coord), if won { " and wins" } else { "" });
        Ok(won)
    }
}

impl Serialize for AuthoritativeBoard {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut state = serializer.serialize_struct("AuthoritativeBoard", 3)?;
        state.serialize_field("grid", &self.state.grid)?;
        state.serialize_field("won", &self.state.won)?;
        state.serialize_field("last_mover", &self.last_mover)?;
        state.end()
    }
}

/// Disposable copy of a board used during move search.
///
/// `Clone` produces an independent grid, so each search worker can own one.
#[derive(Clone, Debug)]
pub struct SimulationBoard {
    state: BoardState,
}

impl SimulationBoard {
    pub(crate) fn grid(&self) -> &Grid {
        &self.state.grid
    }

    pub(crate) fn targets(&self) -> &TargetSets {
        &self.state.targets
    }
}

impl From<&AuthoritativeBoard> for SimulationBoard {
    fn from(board: &AuthoritativeBoard) -> Self {
        board.snapshot()
    }
}

impl Board for SimulationBoard {
    fn size(&self) -> usize {
        self.state.grid.size()
    }

    fn is_occupied(&self, coord: Coord) -> bool {
        self.state.grid.is_occupied(coord)
    }

    fn has_won(&self) -> bool {
        self.state.won
    }

    fn empty_cells(&self) -> Vec<Coord> {
        self.state.grid.empty_cells()
    }

    fn apply(&mut self, coord: Coord, color: Color) -> Result<bool, MoveError> {
        self.state.apply(coord, color)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play_all<B: Board>(board: &mut B, moves: &[Coord], color: Color) -> Vec<bool> {
        moves
            .iter()
            .map(|&mv| board.apply(mv, color).unwrap())
            .collect()
    }

    #[test]
    fn test_row_bridge_wins_on_last_move() {
        let mut board = AuthoritativeBoard::new(5);
        let moves = [(0, 0), (0, 1), (0, 2), (0, 3), (0, 4)];
        let results = play_all(&mut board, &moves, Color::Blue);
        assert_eq!(results, vec![false, false, false, false, true]);
        assert!(board.has_won());
        assert_eq!(board.winner(), Some(Color::Blue));
    }

    #[test]
    fn test_bridge_completed_in_the_middle() {
        let mut board = AuthoritativeBoard::new(5);
        let moves = [(4, 0), (3, 1), (1, 3), (0, 4), (2, 2)];
        let results = play_all(&mut board, &moves, Color::Blue);
        assert_eq!(results, vec![false, false, false, false, true]);
    }

    #[test]
    fn test_red_column_bridge() {
        let mut board = AuthoritativeBoard::new(5);
        let moves = [(0, 2), (1, 2), (2, 2), (3, 2), (4, 2)];
        let results = play_all(&mut board, &moves, Color::Red);
        assert_eq!(results, vec![false, false, false, false, true]);
        assert_eq!(board.winner(), Some(Color::Red));
    }

    #[test]
    fn test_column_is_not_a_blue_win() {
        let mut board = AuthoritativeBoard::new(5);
        let moves = [(0, 0), (1, 0), (2, 0), (3, 0), (4, 0)];
        let results = play_all(&mut board, &moves, Color::Blue);
        assert!(results.iter().all(|&won| !won));
        assert_eq!(board.winner(), None);
    }

    #[test]
    fn test_apply_occupied_fails() {
        let mut board = AuthoritativeBoard::new(5);
        board.apply((1, 1), Color::Blue).unwrap();
        assert_eq!(
            board.apply((1, 1), Color::Red),
            Err(MoveError::Occupied { row: 1, col: 1 })
        );
        assert_eq!(board.grid().get((1, 1)), Some(Color::Blue));
        assert_eq!(board.last_mover(), Some(Color::Blue));
    }

    #[test]
    fn test_apply_out_of_bounds_fails() {
        let mut board = AuthoritativeBoard::new(5);
        assert_eq!(
            board.apply((5, 0), Color::Blue),
            Err(MoveError::OutOfBounds { row: 5, col: 0, size: 5 })
        );
        assert_eq!(board.last_mover(), None);
    }

    #[test]
    fn test_no_moves_after_win() {
        let mut board = AuthoritativeBoard::new(1);
        assert_eq!(board.apply((0, 0), Color::Red), Ok(true));
        let mut board = AuthoritativeBoard::new(3);
        play_all(&mut board, &[(1, 0), (1, 1), (1, 2)], Color::Blue);
        assert!(board.has_won());
        assert_eq!(board.apply((0, 0), Color::Red), Err(MoveError::GameOver));
        assert!(board.has_won());
        assert_eq!(board.winner(), Some(Color::Blue));
    }

    #[test]
    fn test_snapshot_is_independent() {
        let mut board = AuthoritativeBoard::new(5);
        board.apply((2, 2), Color::Blue).unwrap();

        let mut sim = board.snapshot();
        let mut sim2 = sim.clone();
        sim.apply((0, 0), Color::Red).unwrap();
        sim2.apply((0, 0), Color::Blue).unwrap();

        assert!(!board.is_occupied((0, 0)));
        assert_eq!(sim.grid().get((0, 0)), Some(Color::Red));
        assert_eq!(sim2.grid().get((0, 0)), Some(Color::Blue));
        assert_eq!(board.empty_cells().len(), 24);
        assert_eq!(sim.empty_cells().len(), 23);
        assert!(Arc::ptr_eq(board.targets(), &sim.state.targets));
    }

    #[test]
    fn test_cell_ids() {
        let mut board = AuthoritativeBoard::new(7);
        assert_eq!(board.cell_by_id("g7"), Ok((6, 6)));
        assert!(board.is_valid_move("A1"));
        board.apply((0, 0), Color::Red).unwrap();
        assert!(!board.is_valid_move("a1"));
        assert!(!board.is_valid_move("H1"));
        assert!(!board.is_valid_move("nonsense"));
    }

    #[test]
    fn test_serialize_board() {
        let mut board = AuthoritativeBoard::new(2);
        board.apply((0, 1), Color::Blue).unwrap();
        let json = serde_json::to_string(&board).unwrap();
        assert_eq!(
            json,
            r#"{"grid":{"size":2,"cells":[[null,"Blue"],[null,null]]},"won":false,"last_mover":"Blue"}"#
        );
    }
}
