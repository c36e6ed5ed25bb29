//! The turn loop.
//!
//! Blue moves first, then the players alternate on the authoritative board
//! until a move wins. The win check runs after every move and the loop stops
//! at the first winning one, so the last mover is the winner.

use log::info;

use crate::board::{AuthoritativeBoard, Board};
use crate::error::{EngineError, MoveError};
use crate::grid::{Color, Coord};
use crate::player::Player;

pub struct Game {
    board: AuthoritativeBoard,
    blue: Player,
    red: Player,
    to_move: Color,
}

impl Game {
    /// Start a game on `board`. Panics if the players' colors are swapped.
    pub fn new(board: AuthoritativeBoard, blue: Player, red: Player) -> Self {
        assert_eq!(blue.color(), Color::Blue, "first player must be blue");
        assert_eq!(red.color(), Color::Red, "second player must be red");
        Self {
            board,
            blue,
            red,
            to_move: Color::Blue,
        }
    }

    pub fn board(&self) -> &AuthoritativeBoard {
        &self.board
    }

    pub fn to_move(&self) -> Color {
        self.to_move
    }

    pub fn is_over(&self) -> bool {
        self.board.has_won()
    }

    pub fn winner(&self) -> Option<Color> {
        self.board.winner()
    }

    /// Let the player to move pick and play one cell.
    pub fn play_turn(&mut self) -> Result<Coord, EngineError> {
        if self.is_over() {
            return Err(MoveError::GameOver.into());
        }
        let player = match self.to_move {
            Color::Blue => &mut self.blue,
            Color::Red => &mut self.red,
        };
        let coord = player.make_move(&mut self.board)?;
        self.to_move = self.to_move.opponent();
        Ok(coord)
    }

    /// Play until someone wins and return the winner.
    pub fn run(&mut self) -> Result<Color, EngineError> {
        self.run_with(|_, _, _| {})
    }

    /// Like [`run`](Self::run), calling `on_move` after every move with the
    /// board, the mover and the cell played.
    pub fn run_with<F>(&mut self, mut on_move: F) -> Result<Color, EngineError>
    where
        F: FnMut(&AuthoritativeBoard, Color, Coord),
    {
        loop {
            let mover = self.to_move;
            let coord = self.play_turn()?;
            on_move(&self.board, mover, coord);
            if self.board.has_won() {
                info!(
                    "{mover} wins after {} moves",
                    self.board.size() * self.board.size() - self.board.empty_cells().len()
                );
                return Ok(mover);
            }
        }
    }
}
