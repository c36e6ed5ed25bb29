//! Cell identifiers such as `"A1"` or `"AB12"`.
//!
//! Columns use bijective base-26 letters (`A` = 0, `Z` = 25, `AA` = 26, ...),
//! followed by a 1-based row number. Parsing is case-insensitive.

use crate::constants::ALPHABET_SIZE;
use crate::error::CoordError;
use crate::grid::Coord;

/// Letters naming a column index.
pub fn column_name(col: usize) -> String {
    let mut letters = Vec::new();
    let mut n = col + 1;
    while n > 0 {
        n -= 1;
        letters.push(b'A' + (n % ALPHABET_SIZE) as u8);
        n /= ALPHABET_SIZE;
    }
    letters.reverse();
    letters.into_iter().map(char::from).collect()
}

/// Convert a cell to its identifier, e.g. `(0, 0)` to `"A1"`.
pub fn str_coord((row, col): Coord) -> String {
    format!("{}{}", column_name(col), row + 1)
}

/// Parse a cell identifier for a board of the given size.
///
/// # Errors
/// Returns a [`CoordError`] if the text is malformed or names a cell
/// outside the board.
pub fn parse_coord(s: &str, size: usize) -> Result<Coord, CoordError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(CoordError::Empty);
    }

    let split = s
        .find(|c: char| !c.is_ascii_alphabetic())
        .unwrap_or(s.len());
    let (letters, digits) = s.split_at(split);
    if letters.is_empty() {
        return Err(CoordError::MissingColumn(s.to_string()));
    }
    if digits.is_empty() {
        return Err(CoordError::MissingRow(s.to_string()));
    }
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(CoordError::InvalidRow(s.to_string()));
    }

    let out_of_range = || CoordError::OutOfRange {
        id: s.to_string(),
        size,
    };

    let mut n: usize = 0;
    for b in letters.bytes() {
        let digit = (b.to_ascii_uppercase() - b'A') as usize + 1;
        n = n
            .checked_mul(ALPHABET_SIZE)
            .and_then(|n| n.checked_add(digit))
            .ok_or_else(out_of_range)?;
    }
    let col = n - 1;

    let row: usize = digits.parse().map_err(|_| out_of_range())?;
    if row == 0 {
        return Err(CoordError::InvalidRow(s.to_string()));
    }
    let row = row - 1;

    if row >= size || col >= size {
        return Err(out_of_range());
    }
    Ok((row, col))
}
