//! Transition data.

use crate::core::Guard;

/// A candidate transition to a sibling state in the same region.
///
/// Transitions carry no actions of their own; every effect belongs to the
/// exit list of the source and the entry list of the target.
pub struct Transition<C, E> {
    pub(crate) target: usize,
    pub(crate) target_id: String,
    pub(crate) guard: Option<Guard<C, E>>,
}

impl<C, E> Transition<C, E> {
    /// Id of the target state.
    pub fn target(&self) -> &str {
        &self.target_id
    }

    pub fn is_guarded(&self) -> bool {
        self.guard.is_some()
    }

    /// Check if this candidate accepts the event (pure).
    pub fn is_enabled(&self, context: &C, event: &E) -> bool {
        self.guard.as_ref().is_none_or(|g| g.check(context, event))
    }
}

impl<C, E> Clone for Transition<C, E> {
    fn clone(&self) -> Self {
        Self {
            target: self.target,
            target_id: self.target_id.clone(),
            guard: self.guard.clone(),
        }
    }
}

impl<C, E> std::fmt::Debug for Transition<C, E> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transition")
            .field("target", &self.target_id)
            .field("guarded", &self.is_guarded())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unguarded_transition_is_always_enabled() {
        let transition: Transition<(), u8> = Transition {
            target: 1,
            target_id: "run".to_string(),
            guard: None,
        };

        assert!(transition.is_enabled(&(), &0));
        assert!(!transition.is_guarded());
        assert_eq!(transition.target(), "run");
    }

    #[test]
    fn guarded_transition_respects_guard() {
        let transition: Transition<(), u8> = Transition {
            target: 1,
            target_id: "run".to_string(),
            guard: Some(Guard::new(|_: &(), n: &u8| *n > 10)),
        };

        assert!(transition.is_enabled(&(), &11));
        assert!(!transition.is_enabled(&(), &10));
    }
}
