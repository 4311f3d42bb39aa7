//! Build errors for timed machines and their cycles.

use thiserror::Error;

/// Errors that can occur when building a timed machine.
#[derive(Debug, Error)]
pub enum BuildError {
    #[error("Light name is empty. Pass a non-blank name to the builder")]
    EmptyName,

    #[error("Cycle durations not specified. Call .cycle(config) before .build()")]
    MissingCycle,

    #[error("No duration configured for state {state}")]
    MissingDuration { state: String },

    #[error("Duration for state {state} must be greater than zero")]
    ZeroDuration { state: String },

    #[error("Duration for state {state} is too large to represent")]
    DurationOverflow { state: String },
}
