//! Hex-Rust: a Hex game engine with a Monte Carlo AI.
//!
//! Two players take turns claiming cells of a rhombic board. Blue wins by
//! linking the left and right columns, Red by linking the top and bottom
//! rows; the game cannot end in a draw. The AI scores every empty cell with
//! random playouts, spread over a bounded thread pool.
//!
//! ## Modules
//!
//! - [`constants`] - Board bounds, hex adjacency and search parameters
//! - [`grid`] - Cell occupancy matrix
//! - [`coord`] - Cell identifiers like `"B3"`
//! - [`targets`] - Border regions each color must connect
//! - [`connectivity`] - Explicit-stack path search between borders
//! - [`board`] - Authoritative and simulation boards
//! - [`playout`] - Random game completion
//! - [`evaluator`] - Parallel Monte Carlo move choice
//! - [`player`] - Human and AI players
//! - [`game`] - The turn loop
//! - [`config`] - Runtime configuration
//! - [`error`] - Error types
//!
//! ## Example
//!
//! ```
//! use hex_rust::board::{AuthoritativeBoard, Board};
//! use hex_rust::config::EngineConfig;
//! use hex_rust::evaluator::MonteCarloEvaluator;
//! use hex_rust::grid::Color;
//!
//! let mut board = AuthoritativeBoard::new(5);
//! board.apply((2, 2), Color::Blue).unwrap();
//!
//! let config = EngineConfig { playouts: 50, ..EngineConfig::default() };
//! let evaluator = MonteCarloEvaluator::new(&config).unwrap();
//! let mut rng = fastrand::Rng::with_seed(1);
//! let reply = evaluator.choose_move(&board.snapshot(), Color::Red, &mut rng).unwrap();
//! assert!(!board.is_occupied(reply));
//! ```

pub mod board;
pub mod config;
pub mod connectivity;
pub mod constants;
pub mod coord;
pub mod error;
pub mod evaluator;
pub mod game;
pub mod grid;
pub mod player;
pub mod playout;
pub mod targets;
