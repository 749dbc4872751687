//! Event trait for the statechart interpreter.

use std::fmt::Debug;

/// Trait for events fed to an interpreter.
///
/// Transitions are keyed by event kind, so an event only has to say which
/// kind it is. Any payload stays on the value itself and is visible to
/// guards.
///
/// # Example
///
/// ```rust
/// use mark4_controller::core::MachineEvent;
///
/// #[derive(Debug)]
/// enum DoorEvent {
///     Open,
///     Close { slam: bool },
/// }
///
/// impl MachineEvent for DoorEvent {
///     fn kind(&self) -> &str {
///         match self {
///             Self::Open => "OPEN",
///             Self::Close { .. } => "CLOSE",
///         }
///     }
/// }
///
/// assert_eq!(DoorEvent::Close { slam: true }.kind(), "CLOSE");
/// ```
pub trait MachineEvent: Debug {
    /// Kind used to look up candidate transitions.
    fn kind(&self) -> &str;
}
