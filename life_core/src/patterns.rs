// patterns.rs - Named seed patterns that can replace a random board

use crate::error::{LifeError, Result};
use crate::grid::{Cell, CellState, GridStore};

pub struct Pattern {
    pub name: &'static str,
    /// `(row, col)` offsets from the stamp origin.
    pub cells: &'static [(usize, usize)],
}

pub const PATTERNS: &[Pattern] = &[
    Pattern {
        name: "Blinker",
        cells: &[(0, 0), (0, 1), (0, 2)],
    },
    Pattern {
        name: "Glider",
        cells: &[(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)],
    },
    Pattern {
        name: "Toad",
        cells: &[(0, 1), (0, 2), (0, 3), (1, 0), (1, 1), (1, 2)],
    },
    Pattern {
        name: "Beacon",
        cells: &[(0, 0), (0, 1), (1, 0), (1, 1), (2, 2), (2, 3), (3, 2), (3, 3)],
    },
];

/// Case-insensitive lookup by name.
pub fn find(name: &str) -> Result<&'static Pattern> {
    PATTERNS
        .iter()
        .find(|pattern| pattern.name.eq_ignore_ascii_case(name))
        .ok_or_else(|| LifeError::UnknownPattern(name.to_string()))
}

/// Clears buffer `index` and stamps `pattern` with its top-left at `origin`.
///
/// Every cell is stamped with `frame`; pattern cells falling off the board
/// are dropped.
pub fn apply<const ROWS: usize, const COLS: usize>(
    store: &mut GridStore<ROWS, COLS>,
    index: usize,
    pattern: &Pattern,
    origin: (usize, usize),
    frame: u32,
) {
    store.clear(index, frame);

    for &(dr, dc) in pattern.cells {
        let (row, col) = (origin.0 + dr, origin.1 + dc);
        if row < ROWS && col < COLS {
            store.write(index, row, col, Cell::new(CellState::Alive, frame));
        }
    }
}

/// Origin that puts the pattern's bounding box in the middle of the board.
pub fn centered_origin<const ROWS: usize, const COLS: usize>(pattern: &Pattern) -> (usize, usize) {
    let height = pattern.cells.iter().map(|&(r, _)| r + 1).max().unwrap_or(0);
    let width = pattern.cells.iter().map(|&(_, c)| c + 1).max().unwrap_or(0);
    (ROWS.saturating_sub(height) / 2, COLS.saturating_sub(width) / 2)
}
