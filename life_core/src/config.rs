// config.rs - Tunables for the frame controller

use crate::error::{LifeError, Result};
use crate::grid::{CELLS_X, CELLS_Y};

pub const TICK_SKIP_FRAME: u32 = 8;                   // Frames per automaton tick
pub const CELL_WIDTH: i32 = 5;                        // Board units per cell
pub const ALIVE_RATIO: f64 = 0.4;                     // Chance a reset cell is alive
pub const MAX_PENDING_FRAMES: usize = 2;              // Skip drawing at this backlog

#[derive(Clone, Debug, PartialEq)]
pub struct LifeConfig {
    pub tick_skip_frame: u32,
    pub cell_width: i32,
    pub alive_ratio: f64,
    pub max_pending_frames: usize,
    pub draw_capacity: usize,
    /// RNG seed for resets; entropy when `None`.
    pub seed: Option<u64>,
}

impl Default for LifeConfig {
    fn default() -> Self {
        Self {
            tick_skip_frame: TICK_SKIP_FRAME,
            cell_width: CELL_WIDTH,
            alive_ratio: ALIVE_RATIO,
            max_pending_frames: MAX_PENDING_FRAMES,
            draw_capacity: CELLS_X * CELLS_Y,
            seed: None,
        }
    }
}

impl LifeConfig {
    pub fn validate(&self) -> Result<()> {
        if self.tick_skip_frame == 0 {
            return Err(LifeError::InvalidConfig("tick_skip_frame must be at least 1".into()));
        }
        if self.cell_width <= 0 {
            return Err(LifeError::InvalidConfig(format!(
                "cell_width must be positive, got {}",
                self.cell_width
            )));
        }
        if !(0.0..=1.0).contains(&self.alive_ratio) {
            return Err(LifeError::InvalidConfig(format!(
                "alive_ratio must be within 0..=1, got {}",
                self.alive_ratio
            )));
        }
        if self.max_pending_frames == 0 {
            return Err(LifeError::InvalidConfig("max_pending_frames must be at least 1".into()));
        }
        Ok(())
    }
}
