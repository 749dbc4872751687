//! Declarative machine definitions.
//!
//! A definition is plain data: regions own states, states own their entry
//! and exit action lists and a transition table, and composite states own a
//! nested region. Definitions are produced by the
//! [`MachineBuilder`](crate::builder::MachineBuilder), which validates them,
//! so every index stored here is known to be in range.

mod transition;

pub use transition::Transition;

use std::collections::HashMap;

/// A complete machine: an ordered list of parallel top-level regions.
pub struct MachineDefinition<C, E, A> {
    pub(crate) id: String,
    pub(crate) regions: Vec<RegionDef<C, E, A>>,
}

impl<C, E, A> MachineDefinition<C, E, A> {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Top-level regions in declaration order.
    pub fn regions(&self) -> &[RegionDef<C, E, A>] {
        &self.regions
    }

    pub fn region(&self, id: &str) -> Option<&RegionDef<C, E, A>> {
        self.regions.iter().find(|region| region.id == id)
    }

    /// Look up a state by region id and dotted path, e.g.
    /// `("brewControl", "brewRun.waiting")`.
    pub fn find_state(&self, region: &str, dotted: &str) -> Option<&StateDef<C, E, A>> {
        let mut current = self.region(region)?;
        let mut segments = dotted.split('.').peekable();
        while let Some(segment) = segments.next() {
            let state = current.state(segment)?;
            if segments.peek().is_none() {
                return Some(state);
            }
            current = state.nested()?;
        }
        None
    }
}

/// One orthogonal state track.
pub struct RegionDef<C, E, A> {
    pub(crate) id: String,
    pub(crate) initial: usize,
    pub(crate) states: Vec<StateDef<C, E, A>>,
}

impl<C, E, A> RegionDef<C, E, A> {
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The declared initial state, entered on start and on every entry of
    /// the owning composite.
    pub fn initial(&self) -> &StateDef<C, E, A> {
        &self.states[self.initial]
    }

    pub fn states(&self) -> &[StateDef<C, E, A>] {
        &self.states
    }

    pub fn state(&self, id: &str) -> Option<&StateDef<C, E, A>> {
        self.states.iter().find(|state| state.id == id)
    }
}

/// Atomic or composite.
pub enum StateKind<C, E, A> {
    Atomic,
    Composite(RegionDef<C, E, A>),
}

pub struct StateDef<C, E, A> {
    pub(crate) id: String,
    pub(crate) entry: Vec<A>,
    pub(crate) exit: Vec<A>,
    pub(crate) transitions: HashMap<String, Vec<Transition<C, E>>>,
    pub(crate) kind: StateKind<C, E, A>,
}

impl<C, E, A> StateDef<C, E, A> {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn entry_actions(&self) -> &[A] {
        &self.entry
    }

    pub fn exit_actions(&self) -> &[A] {
        &self.exit
    }

    /// Candidate transitions for an event kind, in declaration order.
    pub fn transitions_for(&self, kind: &str) -> &[Transition<C, E>] {
        self.transitions
            .get(kind)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Event kinds this state declares transitions for.
    pub fn event_kinds(&self) -> impl Iterator<Item = &str> {
        self.transitions.keys().map(String::as_str)
    }

    pub fn kind(&self) -> &StateKind<C, E, A> {
        &self.kind
    }

    pub fn is_composite(&self) -> bool {
        matches!(self.kind, StateKind::Composite(_))
    }

    /// The nested region of a composite state.
    pub fn nested(&self) -> Option<&RegionDef<C, E, A>> {
        match &self.kind {
            StateKind::Atomic => None,
            StateKind::Composite(region) => Some(region),
        }
    }
}
