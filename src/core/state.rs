//! Core CyclicState trait for timed state machine states.
//!
//! Every state type driven by a timed machine forms exactly one fixed
//! cycle: each value has a single successor and the last value wraps back
//! to the first. The trait exposes that cycle through pure methods.

use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for states that repeat in a fixed cycle.
///
/// All methods are pure. States are small `Copy` values so they can be
/// handed to the timing loop and back without sharing.
///
/// # Required Traits
///
/// - `Copy`: States move between the controller and the loop thread by value
/// - `Eq` + `Hash`: States key the duration table of a cycle
/// - `Debug`: States must be debuggable for diagnostics
/// - `Serialize` + `Deserialize`: States appear in configuration files
///
/// # Example
///
/// ```rust
/// use stoplight::core::CyclicState;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum Phase {
///     Walk,
///     Flash,
/// }
///
/// impl CyclicState for Phase {
///     fn name(&self) -> &'static str {
///         match self {
///             Self::Walk => "WALK",
///             Self::Flash => "FLASH",
///         }
///     }
///
///     fn next(&self) -> Self {
///         match self {
///             Self::Walk => Self::Flash,
///             Self::Flash => Self::Walk,
///         }
///     }
///
///     fn all() -> &'static [Self] {
///         &[Self::Walk, Self::Flash]
///     }
/// }
///
/// assert_eq!(Phase::initial(), Phase::Walk);
/// assert_eq!(Phase::Flash.next(), Phase::Walk);
/// ```
pub trait CyclicState:
    Copy + Eq + Hash + Debug + Serialize + DeserializeOwned + Send + Sync + 'static
{
    /// Display label used in observation lines.
    fn name(&self) -> &'static str;

    /// The state that follows this one in the cycle.
    fn next(&self) -> Self;

    /// Every state, in cycle order.
    fn all() -> &'static [Self];

    /// The state a fresh machine starts in.
    ///
    /// Default implementation returns the first entry of [`CyclicState::all`].
    fn initial() -> Self {
        Self::all()[0]
    }
}
