// lib.rs - Fading Game of Life simulation core

pub mod automaton;    // Neighbour counting and the tick
pub mod color;        // Freshness fade and HSV colouring
pub mod config;       // Controller tunables
pub mod error;
pub mod frame;        // Frame controller and host contract
pub mod grid;         // Double-buffered grid store
pub mod patterns;     // Named seed patterns

pub use automaton::{TickSummary, tick};
pub use color::{ColorMode, Rgb};
pub use config::LifeConfig;
pub use error::LifeError;
pub use frame::{
    DrawList, FrameController, FrameHost, FrameReport, InputEdges, Quad, SimulationState,
};
pub use grid::{BoardStore, CELLS_X, CELLS_Y, Cell, CellState, GridStore};
