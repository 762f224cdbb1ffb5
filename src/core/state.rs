//! State and event traits for closed, enumerated state machines.
//!
//! Controllers are generic over these traits. Both are meant for small
//! fieldless enums whose variants form the complete set of states or events.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;
use std::hash::Hash;

/// Trait for state machine states.
///
/// All methods are pure. A state is a value describing where a controller
/// currently is; it never carries behaviour of its own.
///
/// # Required Traits
///
/// - `Clone` + `Eq` + `Hash`: states are compared and used as table keys
/// - `Debug`: states appear in diagnostics
/// - `Serialize` + `Deserialize`: states are persisted in checkpoints
///
/// # Example
///
/// ```rust
/// use keystone::core::State;
/// use serde::{Deserialize, Serialize};
///
/// #[derive(Clone, PartialEq, Eq, Hash, Debug, Serialize, Deserialize)]
/// enum DoorState {
///     Open,
///     Closed,
///     Locked,
/// }
///
/// impl State for DoorState {
///     fn name(&self) -> &str {
///         match self {
///             Self::Open => "Open",
///             Self::Closed => "Closed",
///             Self::Locked => "Locked",
///         }
///     }
/// }
///
/// assert_eq!(DoorState::Locked.name(), "Locked");
/// assert!(!DoorState::Locked.is_final());
/// ```
pub trait State:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name used for display and logging.
    fn name(&self) -> &str;

    /// Check if this is a terminal state.
    ///
    /// Default implementation returns `false`.
    fn is_final(&self) -> bool {
        false
    }
}

/// Trait for events that request a state change.
///
/// Events carry no payload; the pair (current state, event) alone decides
/// what a controller does.
pub trait Event:
    Clone + Eq + Hash + Debug + Serialize + for<'de> Deserialize<'de> + Send + Sync
{
    /// Name used for display and logging.
    fn name(&self) -> &str;
}
