//! Guard predicates for controlling state transitions.
//!
//! Guards are pure boolean functions over the machine context and the
//! triggering event. They decide whether a candidate transition is eligible
//! without touching the active configuration.

use std::fmt;
use std::sync::Arc;

/// Pure predicate that determines if a candidate transition can be taken.
///
/// Guards are evaluated in declaration order while the interpreter looks for
/// the first eligible candidate. They read only their arguments; a guard that
/// consults anything else would break run-to-completion.
///
/// # Example
///
/// ```rust
/// use mark4_controller::core::{Guard, MachineEvent};
///
/// #[derive(Debug)]
/// struct Knock {
///     loud: bool,
/// }
///
/// impl MachineEvent for Knock {
///     fn kind(&self) -> &str {
///         "KNOCK"
///     }
/// }
///
/// let only_loud = Guard::new(|_ctx: &(), event: &Knock| event.loud);
///
/// assert!(only_loud.check(&(), &Knock { loud: true }));
/// assert!(!only_loud.check(&(), &Knock { loud: false }));
/// ```
pub struct Guard<C, E> {
    predicate: Arc<dyn Fn(&C, &E) -> bool + Send + Sync>,
}

impl<C, E> Guard<C, E> {
    /// Create a guard from a pure predicate function.
    ///
    /// The predicate must be deterministic and side-effect free, and
    /// thread-safe (Send + Sync) so definitions can be shared.
    pub fn new<F>(predicate: F) -> Self
    where
        F: Fn(&C, &E) -> bool + Send + Sync + 'static,
    {
        Guard {
            predicate: Arc::new(predicate),
        }
    }

    /// Evaluate the guard against a context and event.
    pub fn check(&self, context: &C, event: &E) -> bool {
        (self.predicate)(context, event)
    }
}

impl<C, E> Clone for Guard<C, E> {
    fn clone(&self) -> Self {
        Self {
            predicate: Arc::clone(&self.predicate),
        }
    }
}

impl<C, E> fmt::Debug for Guard<C, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Guard(..)")
    }
}
