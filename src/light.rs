//! The traffic light cycle: RED, GREEN, YELLOW.

use crate::builder::BuildError;
use crate::core::{CycleConfig, CyclicState};
use crate::cycle_enum;
use std::time::Duration;

cycle_enum! {
    /// Lamp shown by a single traffic light.
    pub enum LightState {
        Red => "RED",
        Green => "GREEN",
        Yellow => "YELLOW",
    }
}

impl LightState {
    /// Dwell time of each state, in time units.
    pub const fn standard_units(self) -> u32 {
        match self {
            Self::Red => 5,
            Self::Green => 4,
            Self::Yellow => 2,
        }
    }

    /// RED 5, GREEN 4, YELLOW 2 units of `unit` each.
    ///
    /// Fails only for a zero `unit`.
    pub fn standard_cycle(unit: Duration) -> Result<CycleConfig<Self>, BuildError> {
        CycleConfig::from_units(
            Self::all().iter().map(|s| (*s, s.standard_units())),
            unit,
        )
    }
}
