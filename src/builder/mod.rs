//! Builder API for ergonomic timed machine construction.
//!
//! This module provides the fluent machine builder, its errors, and the
//! `cycle_enum!` macro for declaring cyclic states with minimal boilerplate.

pub mod error;
pub mod machine;
pub mod macros;

pub use error::BuildError;
pub use machine::TimedStateMachineBuilder;
