//! Builder for constructing timed machines.

use crate::builder::error::BuildError;
use crate::core::{CycleConfig, CyclicState};
use crate::machine::{RestartPolicy, ShutdownPolicy, TimedStateMachine};
use crate::sink::{LineSink, WriterSink};
use std::sync::Arc;

/// Builder for timed machines with a fluent API.
pub struct TimedStateMachineBuilder<S: CyclicState> {
    name: String,
    cycle: Option<CycleConfig<S>>,
    sink: Option<Arc<dyn LineSink>>,
    restart: RestartPolicy,
    shutdown: ShutdownPolicy,
}

impl<S: CyclicState> TimedStateMachineBuilder<S> {
    /// Create a new builder for the light called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            cycle: None,
            sink: None,
            restart: RestartPolicy::default(),
            shutdown: ShutdownPolicy::default(),
        }
    }

    /// Set the per-state durations (required).
    pub fn cycle(mut self, cycle: CycleConfig<S>) -> Self {
        self.cycle = Some(cycle);
        self
    }

    /// Where observations go. Defaults to stdout.
    pub fn sink(mut self, sink: Arc<dyn LineSink>) -> Self {
        self.sink = Some(sink);
        self
    }

    /// Where a restart re-enters the cycle. Defaults to [`RestartPolicy::Resume`].
    pub fn restart(mut self, policy: RestartPolicy) -> Self {
        self.restart = policy;
        self
    }

    /// When the loop notices a stop. Defaults to [`ShutdownPolicy::AtBoundary`].
    pub fn shutdown(mut self, policy: ShutdownPolicy) -> Self {
        self.shutdown = policy;
        self
    }

    /// Build the machine, stopped and in `S::initial()`.
    /// Returns an error if required fields are missing.
    pub fn build(self) -> Result<TimedStateMachine<S>, BuildError> {
        if self.name.trim().is_empty() {
            return Err(BuildError::EmptyName);
        }

        let cycle = self.cycle.ok_or(BuildError::MissingCycle)?;
        let sink: Arc<dyn LineSink> = match self.sink {
            Some(sink) => sink,
            None => Arc::new(WriterSink::stdout()),
        };

        Ok(TimedStateMachine::from_parts(
            self.name,
            cycle,
            sink,
            self.restart,
            self.shutdown,
        ))
    }
}
