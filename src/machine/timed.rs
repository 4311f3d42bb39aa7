//! Timed state machine with a background timing loop.

use super::error::MachineError;
use super::policy::{RestartPolicy, ShutdownPolicy};
use super::signal::StopSignal;
use crate::builder::{BuildError, TimedStateMachineBuilder};
use crate::core::{CycleConfig, CyclicState, Observation};
use crate::sink::LineSink;
use parking_lot::Mutex;
use std::sync::Arc;
use std::thread::{self, JoinHandle};
use tracing::{debug, error, info, info_span, warn};
use uuid::Uuid;

/// Result of a [`TimedStateMachine::start`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StartOutcome {
    /// A new timing loop was launched
    Started,

    /// A loop was already active; nothing was spawned
    AlreadyRunning,
}

/// Result of a [`TimedStateMachine::stop`] call.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StopOutcome {
    /// The timing loop was signalled and has exited
    Stopped,

    /// No loop was active
    NotRunning,
}

/// Worker slot, guarded as a unit so start and stop never overlap.
///
/// `parked` is only meaningful while `worker` is `None`; a live loop owns
/// the current state and hands it back through its join handle.
struct Lane<S> {
    parked: S,
    worker: Option<JoinHandle<S>>,
}

/// Everything the timing loop needs, moved onto its thread.
struct TimingLoop<S: CyclicState> {
    name: Arc<str>,
    cycle: Arc<CycleConfig<S>>,
    sink: Arc<dyn LineSink>,
    signal: Arc<StopSignal>,
    shutdown: ShutdownPolicy,
    run_id: Uuid,
}

impl<S: CyclicState> TimingLoop<S> {
    /// The first state entry is committed as soon as the loop is spawned;
    /// after that the stop flag is checked at every state boundary.
    fn run(self, mut state: S) -> S {
        let span = info_span!("light", light = %self.name, run_id = %self.run_id);
        let _entered = span.enter();
        let _disarm = DisarmOnPanic(self.signal.as_ref());

        let mut cycle = 0u64;
        loop {
            let observation = Observation::new(&*self.name, state, self.run_id, cycle);
            debug!(state = state.name(), cycle, "entered state");
            if let Err(err) = self.sink.write_line(&observation.to_string()) {
                warn!(error = %err, "failed to write observation");
            }

            if !self.signal.wait(self.cycle.duration(state), self.shutdown) {
                debug!(state = state.name(), "wait interrupted by stop");
                break;
            }

            state = state.next();
            if state == S::initial() {
                cycle += 1;
            }

            if !self.signal.is_running() {
                break;
            }
        }

        debug!(state = state.name(), "timing loop exited");
        state
    }
}

/// Clears the running flag if the loop unwinds, so `is_running` never
/// reports a dead loop.
struct DisarmOnPanic<'a>(&'a StopSignal);

impl Drop for DisarmOnPanic<'_> {
    fn drop(&mut self) {
        if thread::panicking() {
            self.0.disarm();
        }
    }
}

/// A named light cycling through the states of `S` on fixed timers.
///
/// The machine starts stopped in `S::initial()`. [`start`](Self::start)
/// launches one background timing loop and returns immediately;
/// [`stop`](Self::stop) signals the loop and blocks until it has exited.
/// Dropping the machine stops it.
///
/// Both methods take `&self`, so a machine can be shared behind an `Arc`.
///
/// # Example
///
/// ```rust
/// use std::sync::Arc;
/// use std::time::Duration;
/// use stoplight::machine::{StartOutcome, StopOutcome, TimedStateMachine};
/// use stoplight::sink::MemorySink;
/// use stoplight::LightState;
///
/// let sink = Arc::new(MemorySink::new());
/// let light = TimedStateMachine::builder("Main Street")
///     .cycle(LightState::standard_cycle(Duration::from_millis(5)).unwrap())
///     .sink(sink.clone())
///     .build()
///     .unwrap();
///
/// assert_eq!(light.start().unwrap(), StartOutcome::Started);
/// assert_eq!(light.stop(), StopOutcome::Stopped);
/// assert_eq!(sink.lines()[0], "[Main Street] Light is RED");
/// ```
pub struct TimedStateMachine<S: CyclicState> {
    name: Arc<str>,
    cycle: Arc<CycleConfig<S>>,
    sink: Arc<dyn LineSink>,
    restart: RestartPolicy,
    shutdown: ShutdownPolicy,
    signal: Arc<StopSignal>,
    lane: Mutex<Lane<S>>,
}

impl<S: CyclicState> TimedStateMachine<S> {
    /// Machine writing to stdout with default policies.
    pub fn new(name: impl Into<String>, cycle: CycleConfig<S>) -> Result<Self, BuildError> {
        Self::builder(name).cycle(cycle).build()
    }

    /// Start a builder for the light called `name`.
    pub fn builder(name: impl Into<String>) -> TimedStateMachineBuilder<S> {
        TimedStateMachineBuilder::new(name)
    }

    pub(crate) fn from_parts(
        name: String,
        cycle: CycleConfig<S>,
        sink: Arc<dyn LineSink>,
        restart: RestartPolicy,
        shutdown: ShutdownPolicy,
    ) -> Self {
        Self {
            name: name.into(),
            cycle: Arc::new(cycle),
            sink,
            restart,
            shutdown,
            signal: Arc::new(StopSignal::new()),
            lane: Mutex::new(Lane {
                parked: S::initial(),
                worker: None,
            }),
        }
    }

    /// Light name used in observation lines.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Per-state dwell times.
    pub fn cycle(&self) -> &CycleConfig<S> {
        &self.cycle
    }

    /// Where a restart re-enters the cycle.
    pub fn restart_policy(&self) -> RestartPolicy {
        self.restart
    }

    /// When a running loop notices a stop request.
    pub fn shutdown_policy(&self) -> ShutdownPolicy {
        self.shutdown
    }

    /// Whether a timing loop is active and has not yet seen a stop request.
    pub fn is_running(&self) -> bool {
        self.signal.is_running()
    }

    /// Launch the timing loop.
    ///
    /// Returns [`StartOutcome::AlreadyRunning`] without spawning anything if a
    /// loop is active. Fails only if the thread cannot be created.
    pub fn start(&self) -> Result<StartOutcome, MachineError> {
        let mut lane = self.lane.lock();

        if !self.signal.arm() {
            debug!(light = %self.name, "start ignored, already running");
            return Ok(StartOutcome::AlreadyRunning);
        }

        // A loop that panicked disarmed itself but still needs reaping.
        if let Some(stale) = lane.worker.take() {
            self.reap(&mut lane, stale);
        }

        let entry = match self.restart {
            RestartPolicy::Resume => lane.parked,
            RestartPolicy::Reset => S::initial(),
        };
        let run_id = Uuid::new_v4();
        let timing = TimingLoop {
            name: Arc::clone(&self.name),
            cycle: Arc::clone(&self.cycle),
            sink: Arc::clone(&self.sink),
            signal: Arc::clone(&self.signal),
            shutdown: self.shutdown,
            run_id,
        };

        let spawned = thread::Builder::new()
            .name(format!("light-{}", self.name))
            .spawn(move || timing.run(entry));

        match spawned {
            Ok(handle) => {
                lane.worker = Some(handle);
                info!(light = %self.name, %run_id, state = entry.name(), "light started");
                Ok(StartOutcome::Started)
            }
            Err(source) => {
                self.signal.disarm();
                error!(light = %self.name, error = %source, "failed to spawn timing loop");
                Err(MachineError::Spawn {
                    light: self.name.to_string(),
                    source,
                })
            }
        }
    }

    /// Signal the timing loop and block until it has exited.
    ///
    /// Under [`ShutdownPolicy::AtBoundary`] this can block for up to the
    /// longest dwell in the cycle. Calling it on a stopped machine returns
    /// [`StopOutcome::NotRunning`] at once.
    pub fn stop(&self) -> StopOutcome {
        let mut lane = self.lane.lock();
        self.signal.disarm();

        let Some(handle) = lane.worker.take() else {
            return StopOutcome::NotRunning;
        };

        info!(light = %self.name, "stop requested, waiting for timing loop");
        self.reap(&mut lane, handle);
        info!(light = %self.name, resume = lane.parked.name(), "light stopped");
        StopOutcome::Stopped
    }

    fn reap(&self, lane: &mut Lane<S>, handle: JoinHandle<S>) {
        match handle.join() {
            Ok(last) => lane.parked = last,
            Err(_) => {
                error!(light = %self.name, "timing loop panicked, resetting to initial state");
                lane.parked = S::initial();
            }
        }
    }
}

impl<S: CyclicState> Drop for TimedStateMachine<S> {
    fn drop(&mut self) {
        if self.lane.get_mut().worker.is_some() {
            self.stop();
        }
    }
}
