//! Timed state machine lifecycle.
//!
//! This module is the imperative shell around the pure core: it owns the
//! background timing loop and the start/stop contract.
//!
//! # Key Concepts
//!
//! - **Timing loop**: One thread per running machine, observing each state on
//!   entry, dwelling for the configured duration, then advancing
//! - **Stop signal**: An atomic running flag checked at state boundaries
//! - **Join on stop**: `stop()` returns only after the loop has exited
//!
//! # Threads
//!
//! At most one loop exists per machine. A restarted machine spawns a fresh
//! loop with a fresh run id; it never shares state with the previous one.

mod error;
mod policy;
mod signal;
mod timed;

pub use error::MachineError;
pub use policy::{RestartPolicy, ShutdownPolicy};
pub use timed::{StartOutcome, StopOutcome, TimedStateMachine};
