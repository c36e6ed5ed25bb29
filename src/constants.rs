//! Constants for board geometry, cell identifiers, and search parameters.
//!
//! Board size is a runtime value (any `size >= 1` works in the engine), so
//! only the bounds the command line enforces live here.

// =============================================================================
// Board Geometry
// =============================================================================

/// Smallest board size accepted from the command line.
pub const MIN_BOARD_SIZE: usize = 5;

/// Largest board size accepted from the command line.
pub const MAX_BOARD_SIZE: usize = 11;

/// Board size used when none is given.
pub const DEFAULT_BOARD_SIZE: usize = 7;

/// Offsets `(d_row, d_col)` to the six neighbors of a cell on the rhombic grid.
///
/// Order: up-left, up-right, right, down-right, down-left, left. The path
/// search scans them in exactly this order.
pub const DELTA: [(isize, isize); 6] = [
    (-1, 0),  // up-left
    (-1, 1),  // up-right
    (0, 1),   // right
    (1, 0),   // down-right
    (1, -1),  // down-left
    (0, -1),  // left
];

// =============================================================================
// Cell Identifiers
// =============================================================================

/// Number of letters used for bijective base-26 column names.
pub const ALPHABET_SIZE: usize = 26;

// =============================================================================
// Monte Carlo Parameters
// =============================================================================

/// Default number of random playouts per candidate move.
pub const N_PLAYOUTS: usize = 2000;

/// Mixing constant for deriving per-candidate seeds from a base seed.
pub const SEED_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;
