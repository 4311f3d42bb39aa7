//! Stoplight: a timed traffic light state machine
//!
//! A light cycles RED → GREEN → YELLOW → RED on fixed timers in a
//! background thread. The machine exposes a small lifecycle contract:
//! `start()` launches the timing loop and returns at once, `stop()` signals
//! it and blocks until it has exited, and dropping the machine stops it.
//!
//! # Core Concepts
//!
//! - **CyclicState**: States forming one fixed cycle, declared with `cycle_enum!`
//! - **CycleConfig**: The dwell time of every state
//! - **Observation**: One line per state entry, `[<name>] Light is <STATE>`
//! - **LineSink**: Where observation lines go; shared safely between writers
//!
//! # Example
//!
//! ```rust
//! use std::sync::Arc;
//! use std::time::Duration;
//! use stoplight::sink::MemorySink;
//! use stoplight::{LightState, TimedStateMachine};
//!
//! let sink = Arc::new(MemorySink::new());
//! let light = TimedStateMachine::builder("Main Street")
//!     .cycle(LightState::standard_cycle(Duration::from_millis(10)).unwrap())
//!     .sink(sink.clone())
//!     .build()
//!     .unwrap();
//!
//! light.start().unwrap();
//! std::thread::sleep(Duration::from_millis(70));
//! light.stop();
//!
//! let lines = sink.lines();
//! assert_eq!(lines[0], "[Main Street] Light is RED");
//! assert_eq!(lines[1], "[Main Street] Light is GREEN");
//! ```

pub mod builder;
pub mod config;
pub mod control;
pub mod core;
pub mod light;
pub mod machine;
pub mod sink;

// Re-export commonly used types
pub use crate::builder::BuildError;
pub use crate::core::{CycleConfig, CyclicState, Observation};
pub use crate::light::LightState;
pub use crate::machine::{MachineError, StartOutcome, StopOutcome, TimedStateMachine};
