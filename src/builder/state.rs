//! Builder for a single state.

use crate::builder::region::RegionBuilder;
use crate::core::Guard;

/// A transition as declared, before its target is resolved.
pub(crate) struct DeclaredTransition<C, E> {
    pub(crate) event: String,
    pub(crate) target: String,
    pub(crate) guard: Option<Guard<C, E>>,
}

/// Builder for one state: entry/exit actions, outgoing transitions and an
/// optional nested region that makes it composite.
///
/// Transitions declared for the same event kind are kept in declaration
/// order; the interpreter takes the first one whose guard passes.
pub struct StateBuilder<C, E, A> {
    pub(crate) id: String,
    pub(crate) entry: Vec<A>,
    pub(crate) exit: Vec<A>,
    pub(crate) transitions: Vec<DeclaredTransition<C, E>>,
    pub(crate) region: Option<RegionBuilder<C, E, A>>,
}

impl<C, E, A> StateBuilder<C, E, A> {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            entry: Vec::new(),
            exit: Vec::new(),
            transitions: Vec::new(),
            region: None,
        }
    }

    /// Append entry actions, fired in order every time the state is entered.
    pub fn entry(mut self, actions: impl IntoIterator<Item = A>) -> Self {
        self.entry.extend(actions);
        self
    }

    /// Append exit actions, fired in order every time the state is left.
    pub fn exit(mut self, actions: impl IntoIterator<Item = A>) -> Self {
        self.exit.extend(actions);
        self
    }

    /// Unconditional transition to a sibling state.
    pub fn on(mut self, event: impl Into<String>, target: impl Into<String>) -> Self {
        self.transitions.push(DeclaredTransition {
            event: event.into(),
            target: target.into(),
            guard: None,
        });
        self
    }

    /// Guarded transition to a sibling state.
    pub fn on_guarded(
        mut self,
        event: impl Into<String>,
        target: impl Into<String>,
        guard: Guard<C, E>,
    ) -> Self {
        self.transitions.push(DeclaredTransition {
            event: event.into(),
            target: target.into(),
            guard: Some(guard),
        });
        self
    }

    /// Guarded transition using a closure.
    pub fn on_if<F>(self, event: impl Into<String>, target: impl Into<String>, predicate: F) -> Self
    where
        F: Fn(&C, &E) -> bool + Send + Sync + 'static,
    {
        self.on_guarded(event, target, Guard::new(predicate))
    }

    /// Make this a composite state owning `region`.
    pub fn region(mut self, region: RegionBuilder<C, E, A>) -> Self {
        self.region = Some(region);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn declarations_keep_order() {
        let state: StateBuilder<(), u8, &str> = StateBuilder::new("idle")
            .entry(["off", "open"])
            .entry(["dark"])
            .on_if("GO", "fast", |_, n: &u8| *n > 5)
            .on("GO", "slow")
            .on("STOP", "idle");

        assert_eq!(state.entry, vec!["off", "open", "dark"]);
        let targets: Vec<&str> = state.transitions.iter().map(|t| t.target.as_str()).collect();
        assert_eq!(targets, ["fast", "slow", "idle"]);
        assert!(state.transitions[0].guard.is_some());
        assert!(state.transitions[1].guard.is_none());
        assert!(state.region.is_none());
    }
}
