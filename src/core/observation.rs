//! Observations emitted by the timing loop.
//!
//! An observation records a single state entry: which light, which state,
//! which run and when. Its `Display` form is the line written to the sink.

use super::state::CyclicState;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

/// Record of a light entering a state.
///
/// # Example
///
/// ```rust
/// use stoplight::core::Observation;
/// use stoplight::LightState;
/// use uuid::Uuid;
///
/// let observation = Observation::new("Main Street", LightState::Red, Uuid::new_v4(), 0);
/// assert_eq!(observation.to_string(), "[Main Street] Light is RED");
/// ```
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(bound = "")]
pub struct Observation<S: CyclicState> {
    /// Name of the light that made the observation
    pub light: String,
    /// The state just entered
    pub state: S,
    /// Run this observation belongs to; a fresh id is minted on every start
    pub run_id: Uuid,
    /// Completed wraps back to the initial state within the run
    pub cycle: u64,
    /// When the state was entered
    pub timestamp: DateTime<Utc>,
}

impl<S: CyclicState> Observation<S> {
    /// Stamp an observation with the current time.
    pub fn new(light: impl Into<String>, state: S, run_id: Uuid, cycle: u64) -> Self {
        Self {
            light: light.into(),
            state,
            run_id,
            cycle,
            timestamp: Utc::now(),
        }
    }
}

impl<S: CyclicState> fmt::Display for Observation<S> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] Light is {}", self.light, self.state.name())
    }
}
