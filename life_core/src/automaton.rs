// automaton.rs - Conway rule over a clamped (non-wrapping) board

use crate::grid::{CellState, Grid, GridStore, other};

/// Outcome of one tick.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickSummary {
    pub next: usize,
    pub births: usize,
    pub deaths: usize,
}

/// Live cells in the 3x3 block around `(row, col)`, excluding the centre.
///
/// The block is clamped to the board, so corners see at most 3 cells
/// and edges at most 5.
pub fn alive_neighbours<const ROWS: usize, const COLS: usize>(
    grid: &Grid<ROWS, COLS>,
    row: usize,
    col: usize,
) -> u8 {
    let start_y = row.saturating_sub(1);
    let end_y = (row + 1).min(ROWS - 1);
    let start_x = col.saturating_sub(1);
    let end_x = (col + 1).min(COLS - 1);

    let mut count = 0;
    for y in start_y..=end_y {
        for x in start_x..=end_x {
            if (y, x) != (row, col) && grid[y][x].state.is_alive() {
                count += 1;
            }
        }
    }
    count
}

pub fn next_state(state: CellState, neighbours: u8) -> CellState {
    match (state, neighbours) {
        (CellState::Alive, 2) | (CellState::Alive, 3) => CellState::Alive,   // Survival
        (CellState::Dead, 3)                          => CellState::Alive,   // Birth
        _                                             => CellState::Dead,    // Death or stays dead
    }
}

/// Advances the board one generation and returns the new active index.
pub fn tick<const ROWS: usize, const COLS: usize>(
    store: &mut GridStore<ROWS, COLS>,
    current: usize,
    frame: u32,
) -> usize {
    tick_with_summary(store, current, frame).next
}

/// Same as [`tick`], also counting the cells that flipped.
///
/// The next buffer starts as a copy of the current one and only flipped
/// cells are rewritten, so `last_changed` survives on every cell that
/// kept its state.
pub fn tick_with_summary<const ROWS: usize, const COLS: usize>(
    store: &mut GridStore<ROWS, COLS>,
    current: usize,
    frame: u32,
) -> TickSummary {
    let next = other(current);
    store.copy(current, next);

    let mut summary = TickSummary { next, ..TickSummary::default() };
    for y in 0..ROWS {
        for x in 0..COLS {
            let neighbours = alive_neighbours(store.grid(current), y, x);
            let state = next_state(store.read(current, y, x).state, neighbours);

            let mut cell = store.read(next, y, x);
            if state != cell.state {
                match state {
                    CellState::Alive => summary.births += 1,
                    CellState::Dead => summary.deaths += 1,
                }
                cell.state = state;
                cell.last_changed = frame;
                store.write(next, y, x, cell);
            }
        }
    }
    summary
}
