// grid.rs - Double-buffered cell storage for the board

use rand::Rng;

// Compile-time board size
pub const CELLS_X: usize = 50;                        // Columns
pub const CELLS_Y: usize = 40;                        // Rows

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum CellState {
    #[default]
    Dead,
    Alive,
}

impl CellState {
    pub fn is_alive(self) -> bool {
        self == CellState::Alive
    }
}

/// One board cell: its state plus the frame on which that state last flipped.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub state: CellState,
    pub last_changed: u32,
}

impl Cell {
    pub const fn new(state: CellState, last_changed: u32) -> Self {
        Self { state, last_changed }
    }
}

pub type Grid<const ROWS: usize, const COLS: usize> = [[Cell; COLS]; ROWS];

/// The production board.
pub type BoardStore = GridStore<CELLS_Y, CELLS_X>;

/// Index of the buffer that is not `index`.
pub fn other(index: usize) -> usize {
    debug_assert!(index < 2, "buffer index {index} out of range");
    index ^ 1
}

/// Owns the two grids used for double buffering.
///
/// Indices and coordinates are trusted: anything outside `0..2` and
/// `0..ROWS` x `0..COLS` panics.
#[derive(Clone, Debug)]
pub struct GridStore<const ROWS: usize, const COLS: usize> {
    grids: [Grid<ROWS, COLS>; 2],
}

impl<const ROWS: usize, const COLS: usize> Default for GridStore<ROWS, COLS> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const ROWS: usize, const COLS: usize> GridStore<ROWS, COLS> {
    /// Both buffers start all dead, stamped at frame 0.
    pub fn new() -> Self {
        Self { grids: [[[Cell::default(); COLS]; ROWS]; 2] }
    }

    pub fn grid(&self, index: usize) -> &Grid<ROWS, COLS> {
        &self.grids[index]
    }

    /// Overwrites buffer `to` with the contents of buffer `from`.
    pub fn copy(&mut self, from: usize, to: usize) {
        if from != to {
            self.grids[to] = self.grids[from];
        }
    }

    pub fn read(&self, index: usize, row: usize, col: usize) -> Cell {
        self.grids[index][row][col]
    }

    pub fn write(&mut self, index: usize, row: usize, col: usize, cell: Cell) {
        self.grids[index][row][col] = cell;
    }

    /// Randomizes every cell of buffer `index` and stamps it with `frame`.
    ///
    /// Each cell is drawn independently and comes up alive with probability
    /// `alive_ratio`, clamped to `0.0..=1.0`. NaN counts as `0.0`.
    pub fn reinitialize<R: Rng + ?Sized>(
        &mut self,
        index: usize,
        frame: u32,
        alive_ratio: f64,
        rng: &mut R,
    ) {
        let ratio = if alive_ratio.is_nan() { 0.0 } else { alive_ratio.clamp(0.0, 1.0) };
        for row in self.grids[index].iter_mut() {
            for cell in row.iter_mut() {
                let state =
                    if rng.gen_bool(ratio) { CellState::Alive } else { CellState::Dead };
                *cell = Cell::new(state, frame);
            }
        }
    }

    /// Kills every cell of buffer `index` and stamps it with `frame`.
    pub fn clear(&mut self, index: usize, frame: u32) {
        self.grids[index] = [[Cell::new(CellState::Dead, frame); COLS]; ROWS];
    }

    pub fn alive_count(&self, index: usize) -> usize {
        self.alive_cells(index).count()
    }

    /// `(row, col, cell)` for every live cell of buffer `index`, row-major.
    pub fn alive_cells(&self, index: usize) -> impl Iterator<Item = (usize, usize, Cell)> + '_ {
        self.grids[index].iter().enumerate().flat_map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .filter(|(_, cell)| cell.state.is_alive())
                .map(move |(col, cell)| (row, col, *cell))
        })
    }
}
