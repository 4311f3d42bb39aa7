//! Lifecycle errors for timed machines.

use thiserror::Error;

/// Unrecoverable failures while driving a timed machine.
///
/// Misuse of the start/stop contract is not an error; it is reported through
/// [`crate::machine::StartOutcome`] and [`crate::machine::StopOutcome`].
#[derive(Debug, Error)]
pub enum MachineError {
    /// The operating system refused to create the timing thread
    #[error("Failed to spawn timing loop for light '{light}'")]
    Spawn {
        light: String,
        #[source]
        source: std::io::Error,
    },
}
