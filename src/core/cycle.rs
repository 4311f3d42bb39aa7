//! Per-state dwell times for a timed cycle.

use super::state::CyclicState;
use crate::builder::BuildError;
use std::collections::HashMap;
use std::time::Duration;

/// How long a timed machine dwells in each state of its cycle.
///
/// A `CycleConfig` always holds a non-zero duration for every state of `S`,
/// so [`CycleConfig::duration`] is total.
///
/// # Example
///
/// ```rust
/// use stoplight::core::CycleConfig;
/// use stoplight::LightState;
/// use std::time::Duration;
///
/// let cycle = CycleConfig::from_units(
///     [(LightState::Red, 5), (LightState::Green, 4), (LightState::Yellow, 2)],
///     Duration::from_secs(1),
/// )
/// .unwrap();
///
/// assert_eq!(cycle.duration(LightState::Green), Duration::from_secs(4));
/// assert_eq!(cycle.period(), Duration::from_secs(11));
/// ```
#[derive(Clone, Debug, PartialEq)]
pub struct CycleConfig<S: CyclicState> {
    durations: HashMap<S, Duration>,
}

impl<S: CyclicState> CycleConfig<S> {
    /// Build a cycle from explicit durations.
    ///
    /// Fails if any state of `S` is missing or has a zero duration.
    pub fn from_durations(
        durations: impl IntoIterator<Item = (S, Duration)>,
    ) -> Result<Self, BuildError> {
        let durations: HashMap<S, Duration> = durations.into_iter().collect();

        for state in S::all() {
            match durations.get(state) {
                None => {
                    return Err(BuildError::MissingDuration {
                        state: state.name().to_string(),
                    })
                }
                Some(d) if d.is_zero() => {
                    return Err(BuildError::ZeroDuration {
                        state: state.name().to_string(),
                    })
                }
                Some(_) => {}
            }
        }

        Ok(Self { durations })
    }

    /// Build a cycle from whole multiples of a base time unit.
    ///
    /// Fails with [`BuildError::DurationOverflow`] if a dwell does not fit in
    /// a `Duration`.
    pub fn from_units(
        units: impl IntoIterator<Item = (S, u32)>,
        unit: Duration,
    ) -> Result<Self, BuildError> {
        let durations = units
            .into_iter()
            .map(|(state, n)| {
                unit.checked_mul(n)
                    .map(|d| (state, d))
                    .ok_or_else(|| BuildError::DurationOverflow {
                        state: state.name().to_string(),
                    })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Self::from_durations(durations)
    }

    /// Dwell time for `state`.
    pub fn duration(&self, state: S) -> Duration {
        // Construction guarantees every state has an entry.
        self.durations.get(&state).copied().unwrap_or_default()
    }

    /// Time for one full trip around the cycle, saturating at `Duration::MAX`.
    pub fn period(&self) -> Duration {
        S::all()
            .iter()
            .fold(Duration::ZERO, |total, s| total.saturating_add(self.duration(*s)))
    }

    /// The longest single dwell, which bounds how long a boundary stop can block.
    pub fn longest(&self) -> Duration {
        S::all()
            .iter()
            .map(|s| self.duration(*s))
            .max()
            .unwrap_or_default()
    }
}
