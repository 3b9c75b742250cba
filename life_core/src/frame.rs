// frame.rs - Per-frame cadence, input handling and draw-list submission

use log::{debug, error, info, trace};
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::automaton;
use crate::color::{self, ColorMode, Rgb};
use crate::config::LifeConfig;
use crate::error::{LifeError, Result};
use crate::grid::{CELLS_X, CELLS_Y, GridStore};
use crate::patterns::{self, Pattern};

/// Edge-triggered input, true only on the frame the action starts.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct InputEdges {
    pub reset: bool,
    pub toggle_color: bool,
}

/// One unit square at board-relative coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Quad {
    pub x: i32,
    pub y: i32,
    pub rgb: Rgb,
}

/// Draw commands for one frame, with a fixed quad capacity.
#[derive(Clone, Debug, PartialEq)]
pub struct DrawList {
    pub clear: Rgb,
    quads: Vec<Quad>,
    capacity: usize,
}

impl DrawList {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { clear: Rgb::WHITE, quads: Vec::with_capacity(capacity), capacity }
    }

    pub fn reset(&mut self, clear: Rgb) {
        self.clear = clear;
        self.quads.clear();
    }

    pub fn push(&mut self, quad: Quad) -> Result<()> {
        if self.quads.len() >= self.capacity {
            return Err(LifeError::DrawCapacityExceeded { capacity: self.capacity });
        }
        self.quads.push(quad);
        Ok(())
    }

    pub fn quads(&self) -> &[Quad] {
        &self.quads
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}

/// The runtime that drives frames, presents draw lists and reports input.
pub trait FrameHost {
    /// Frames already queued for presentation.
    fn pending_frames(&self) -> usize;
    fn poll_input(&mut self) -> InputEdges;
    fn submit_frame(&mut self, frame: &DrawList);
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SimulationState {
    pub active: usize,
    pub frame: u32,
    pub ticks: u32,
    pub color_mode: ColorMode,
}

/// What happened during one call to [`FrameController::run_frame`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FrameReport {
    pub presented: bool,
    pub ticked: bool,
    pub reset: bool,
    pub toggled: bool,
}

pub struct FrameController<const ROWS: usize = CELLS_Y, const COLS: usize = CELLS_X> {
    store: GridStore<ROWS, COLS>,
    state: SimulationState,
    config: LifeConfig,
    rng: StdRng,
    draw_list: DrawList,
}

impl<const ROWS: usize, const COLS: usize> FrameController<ROWS, COLS> {
    /// Validates `config` and starts from a randomized board.
    pub fn new(config: LifeConfig) -> Result<Self> {
        config.validate()?;
        let rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let mut controller = Self {
            store: GridStore::new(),
            state: SimulationState::default(),
            draw_list: DrawList::with_capacity(config.draw_capacity),
            config,
            rng,
        };
        controller.reinitialize();
        Ok(controller)
    }

    /// Starts from `pattern` centred on the board instead of random cells.
    pub fn with_pattern(config: LifeConfig, pattern: &Pattern) -> Result<Self> {
        let mut controller = Self::new(config)?;
        let origin = patterns::centered_origin::<ROWS, COLS>(pattern);
        let SimulationState { active, frame, .. } = controller.state;
        patterns::apply(&mut controller.store, active, pattern, origin, frame);
        Ok(controller)
    }

    pub fn state(&self) -> &SimulationState {
        &self.state
    }

    pub fn store(&self) -> &GridStore<ROWS, COLS> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut GridStore<ROWS, COLS> {
        &mut self.store
    }

    pub fn set_color_mode(&mut self, mode: ColorMode) {
        self.state.color_mode = mode;
    }

    pub fn config(&self) -> &LifeConfig {
        &self.config
    }

    /// One frame callback: present (unless backlogged), tick on cadence,
    /// apply input edges, advance the frame counter.
    pub fn run_frame<H: FrameHost + ?Sized>(&mut self, host: &mut H) -> Result<FrameReport> {
        let mut report = FrameReport::default();

        let pending = host.pending_frames();
        if pending < self.config.max_pending_frames {
            self.build_draw_list()?;
            host.submit_frame(&self.draw_list);
            report.presented = true;
        } else {
            trace!("frame {}: {} frames pending, skipping draw", self.state.frame, pending);
        }

        if self.state.frame % self.config.tick_skip_frame == 0 {
            let summary =
                automaton::tick_with_summary(&mut self.store, self.state.active, self.state.frame);
            self.state.active = summary.next;
            self.state.ticks = self.state.ticks.wrapping_add(1);
            report.ticked = true;
            debug!(
                "tick {} at frame {}: {} births, {} deaths",
                self.state.ticks, self.state.frame, summary.births, summary.deaths
            );
        }

        let input = host.poll_input();
        if input.reset {
            self.reinitialize();
            report.reset = true;
            info!("board reset at frame {}", self.state.frame);
        }
        if input.toggle_color {
            self.state.color_mode = self.state.color_mode.toggled();
            report.toggled = true;
            info!("color mode now {:?}", self.state.color_mode);
        }

        self.state.frame = self.state.frame.wrapping_add(1);
        Ok(report)
    }

    /// Fills the controller's draw list from the active grid.
    pub fn build_draw_list(&mut self) -> Result<&DrawList> {
        let SimulationState { active, frame, color_mode, .. } = self.state;
        let width = self.config.cell_width;

        self.draw_list.reset(color::background(color_mode));
        for (row, col, cell) in self.store.alive_cells(active) {
            let quad = Quad {
                x: (col as i32 - (COLS / 2) as i32) * width,
                y: (row as i32 - (ROWS / 2) as i32) * width,
                rgb: color::color_for::<ROWS, COLS>(cell, row, col, frame, color_mode),
            };
            if let Err(err) = self.draw_list.push(quad) {
                error!("frame {frame}: {err}");
                return Err(err);
            }
        }
        Ok(&self.draw_list)
    }

    fn reinitialize(&mut self) {
        let SimulationState { active, frame, .. } = self.state;
        self.store.reinitialize(active, frame, self.config.alive_ratio, &mut self.rng);
    }
}
