//! Core timed state machine types.
//!
//! This module contains the pure pieces of a timed light:
//! - Cyclic states via the `CyclicState` trait
//! - Per-state dwell times via `CycleConfig`
//! - `Observation` records emitted on every state entry
//!
//! Nothing in this module spawns threads or sleeps; the lifecycle lives in
//! [`crate::machine`].

mod cycle;
mod observation;
mod state;

pub use cycle::CycleConfig;
pub use observation::Observation;
pub use state::CyclicState;
