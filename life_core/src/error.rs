// error.rs - Error types for the simulation core

use thiserror::Error;

/// Failures the core can report to its host.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LifeError {
    /// More quads were pushed into a frame than its draw list can hold.
    #[error("draw list capacity of {capacity} quads exceeded")]
    DrawCapacityExceeded {
        /// Fixed number of quads the list was sized for.
        capacity: usize,
    },

    /// No seed pattern carries the requested name.
    #[error("unknown pattern: {0}")]
    UnknownPattern(String),

    /// A configuration value is out of range.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

pub type Result<T, E = LifeError> = std::result::Result<T, E>;
