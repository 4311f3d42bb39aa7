//! File configuration for a single light.
//!
//! Configuration is JSON. Every field is optional and falls back to the
//! standard `Main Street` light ticking once per second:
//!
//! ```json
//! {
//!   "name": "Main Street",
//!   "time_unit_ms": 1000,
//!   "durations": { "RED": 5, "GREEN": 4, "YELLOW": 2 },
//!   "restart": "resume",
//!   "shutdown": "at_boundary"
//! }
//! ```

use crate::builder::BuildError;
use crate::core::{CycleConfig, CyclicState};
use crate::machine::{RestartPolicy, ShutdownPolicy, TimedStateMachine};
use crate::sink::LineSink;
use crate::LightState;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_NAME: &str = "Main Street";
pub const DEFAULT_TIME_UNIT_MS: u64 = 1000;

/// Errors that can occur while loading a light configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config file {path}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Build(#[from] BuildError),
}

/// Settings for one traffic light.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LightConfig {
    pub name: String,
    pub time_unit_ms: u64,
    /// Dwell per state in time units. A partial map replaces the defaults
    /// wholesale, so every state must be listed.
    pub durations: HashMap<LightState, u32>,
    pub restart: RestartPolicy,
    pub shutdown: ShutdownPolicy,
}

impl Default for LightConfig {
    fn default() -> Self {
        Self {
            name: DEFAULT_NAME.to_string(),
            time_unit_ms: DEFAULT_TIME_UNIT_MS,
            durations: LightState::all()
                .iter()
                .map(|s| (*s, s.standard_units()))
                .collect(),
            restart: RestartPolicy::default(),
            shutdown: ShutdownPolicy::default(),
        }
    }
}

impl LightConfig {
    /// Parse a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Read and parse a JSON config file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Length of one time unit.
    pub fn time_unit(&self) -> Duration {
        Duration::from_millis(self.time_unit_ms)
    }

    /// Validated dwell times.
    pub fn cycle(&self) -> Result<CycleConfig<LightState>, BuildError> {
        CycleConfig::from_units(
            self.durations.iter().map(|(s, n)| (*s, *n)),
            self.time_unit(),
        )
    }

    /// Build a stopped machine writing to `sink`.
    pub fn into_machine(
        self,
        sink: Arc<dyn LineSink>,
    ) -> Result<TimedStateMachine<LightState>, ConfigError> {
        let cycle = self.cycle()?;
        let machine = TimedStateMachine::builder(self.name)
            .cycle(cycle)
            .sink(sink)
            .restart(self.restart)
            .shutdown(self.shutdown)
            .build()?;
        Ok(machine)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::MemorySink;
    use std::io::Write;

    #[test]
    fn empty_object_uses_defaults() {
        let config = LightConfig::from_json("{}").unwrap();

        assert_eq!(config, LightConfig::default());
        assert_eq!(config.name, "Main Street");
        assert_eq!(config.durations[&LightState::Red], 5);
        assert_eq!(config.durations[&LightState::Green], 4);
        assert_eq!(config.durations[&LightState::Yellow], 2);
    }

    #[test]
    fn full_config_parses() {
        let config = LightConfig::from_json(
            r#"{
                "name": "Elm Street",
                "time_unit_ms": 250,
                "durations": { "RED": 3, "GREEN": 3, "YELLOW": 1 },
                "restart": "reset",
                "shutdown": "interruptible"
            }"#,
        )
        .unwrap();

        assert_eq!(config.name, "Elm Street");
        assert_eq!(config.restart, RestartPolicy::Reset);
        assert_eq!(config.shutdown, ShutdownPolicy::Interruptible);

        let cycle = config.cycle().unwrap();
        assert_eq!(cycle.duration(LightState::Red), Duration::from_millis(750));
        assert_eq!(cycle.duration(LightState::Yellow), Duration::from_millis(250));
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = LightConfig::from_json(r#"{ "colour": "blue" }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn unknown_state_is_rejected() {
        let result = LightConfig::from_json(r#"{ "durations": { "BLUE": 1 } }"#);
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }

    #[test]
    fn partial_durations_fail_validation() {
        let config = LightConfig::from_json(r#"{ "durations": { "RED": 1 } }"#).unwrap();

        let result = config.into_machine(Arc::new(MemorySink::new()));
        assert!(matches!(
            result,
            Err(ConfigError::Build(BuildError::MissingDuration { .. }))
        ));
    }

    #[test]
    fn oversized_time_unit_is_a_build_error() {
        let config = LightConfig::from_json(
            r#"{"time_unit_ms":18446744073709551615,"durations":{"RED":2000,"GREEN":1,"YELLOW":1}}"#,
        )
        .unwrap();

        assert!(matches!(
            config.cycle(),
            Err(BuildError::DurationOverflow { .. })
        ));
        assert!(matches!(
            config.into_machine(Arc::new(MemorySink::new())),
            Err(ConfigError::Build(BuildError::DurationOverflow { .. }))
        ));
    }

    #[test]
    fn load_reads_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{ "name": "Oak", "time_unit_ms": 10 }}"#).unwrap();

        let config = LightConfig::load(file.path()).unwrap();
        assert_eq!(config.name, "Oak");
        assert_eq!(config.time_unit(), Duration::from_millis(10));
    }

    #[test]
    fn load_reports_missing_file() {
        let result = LightConfig::load("/definitely/not/here.json");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn into_machine_applies_settings() {
        let config = LightConfig {
            name: "Pine".to_string(),
            shutdown: ShutdownPolicy::Interruptible,
            ..LightConfig::default()
        };

        let machine = config.into_machine(Arc::new(MemorySink::new())).unwrap();
        assert_eq!(machine.name(), "Pine");
        assert_eq!(machine.shutdown_policy(), ShutdownPolicy::Interruptible);
        assert!(!machine.is_running());
    }
}
