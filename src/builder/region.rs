//! Builder for a region.

use crate::builder::state::StateBuilder;

/// Builder for one region: its states and which of them is initial.
pub struct RegionBuilder<C, E, A> {
    pub(crate) id: String,
    pub(crate) initial: Option<String>,
    pub(crate) states: Vec<StateBuilder<C, E, A>>,
}

impl<C, E, A> RegionBuilder<C, E, A> {
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            initial: None,
            states: Vec::new(),
        }
    }

    /// Set the initial state (required).
    pub fn initial(mut self, state: impl Into<String>) -> Self {
        self.initial = Some(state.into());
        self
    }

    /// Add a state.
    pub fn state(mut self, state: StateBuilder<C, E, A>) -> Self {
        self.states.push(state);
        self
    }

    /// Add multiple states at once.
    pub fn states(mut self, states: impl IntoIterator<Item = StateBuilder<C, E, A>>) -> Self {
        self.states.extend(states);
        self
    }
}
