//! Lifecycle policies for timed machines.

use serde::{Deserialize, Serialize};

/// Where a restarted machine re-enters its cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RestartPolicy {
    /// Continue from the state the previous run stopped in
    #[default]
    Resume,

    /// Always re-enter at the initial state
    Reset,
}

/// When a running loop notices a stop request.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShutdownPolicy {
    /// Only between states; `stop()` may block for a full dwell
    #[default]
    AtBoundary,

    /// Mid-wait; the interrupted state is kept, not advanced
    Interruptible,
}
