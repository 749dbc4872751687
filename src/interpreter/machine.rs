//! Interpreter that processes events against a machine definition.

use crate::core::{Action, ActionSink, Configuration, MachineEvent, RegionPath, StepHistory, StepRecord};
use crate::definition::{MachineDefinition, RegionDef, StateKind};
use crate::interpreter::error::InterpreterError;
use chrono::Utc;
use tracing::{debug, info, trace};

/// Explicitly owned interpreter over one machine definition.
///
/// Holds the active configuration, the (stateless) context handed to guards,
/// and the action sink it drives. Every call runs to completion before
/// returning; `&mut self` keeps callers serialized.
///
/// # Example
///
/// ```rust
/// use mark4_controller::builder::{MachineBuilder, RegionBuilder, StateBuilder};
/// use mark4_controller::core::{Action, ActionSink, MachineEvent};
/// use mark4_controller::interpreter::Interpreter;
///
/// #[derive(Debug)]
/// struct Toggle;
///
/// impl MachineEvent for Toggle {
///     fn kind(&self) -> &str {
///         "TOGGLE"
///     }
/// }
///
/// #[derive(Clone, Debug)]
/// struct Led(bool);
///
/// impl Action for Led {
///     fn name(&self) -> &str {
///         if self.0 { "ledOn" } else { "ledOff" }
///     }
/// }
///
/// #[derive(Default)]
/// struct Board {
///     lit: bool,
/// }
///
/// impl ActionSink<Led> for Board {
///     fn perform(&mut self, action: &Led) {
///         self.lit = action.0;
///     }
/// }
///
/// let definition = MachineBuilder::new("blinker")
///     .region(
///         RegionBuilder::new("led")
///             .initial("off")
///             .state(StateBuilder::new("off").entry([Led(false)]).on("TOGGLE", "on"))
///             .state(StateBuilder::new("on").entry([Led(true)]).on("TOGGLE", "off")),
///     )
///     .build()
///     .unwrap();
///
/// let mut interpreter = Interpreter::new(definition, (), Board::default());
/// interpreter.start().unwrap();
/// let config = interpreter.process(&Toggle).unwrap();
///
/// assert!(config.is_in("on"));
/// assert!(interpreter.sink().lit);
/// ```
pub struct Interpreter<C, E, A, S> {
    definition: MachineDefinition<C, E, A>,
    context: C,
    sink: S,
    active: Option<Vec<Vec<usize>>>,
    history: Option<StepHistory>,
}

impl<C, E, A, S> Interpreter<C, E, A, S>
where
    E: MachineEvent,
    A: Action,
    S: ActionSink<A>,
{
    /// Create an interpreter. Nothing is entered and no action fires until
    /// [`start`](Self::start).
    pub fn new(definition: MachineDefinition<C, E, A>, context: C, sink: S) -> Self {
        Self {
            definition,
            context,
            sink,
            active: None,
            history: None,
        }
    }

    /// Keep the last `limit` processed steps.
    pub fn with_history(mut self, limit: usize) -> Self {
        self.history = Some(StepHistory::with_limit(limit));
        self
    }

    pub fn definition(&self) -> &MachineDefinition<C, E, A> {
        &self.definition
    }

    pub fn context(&self) -> &C {
        &self.context
    }

    pub fn sink(&self) -> &S {
        &self.sink
    }

    pub fn sink_mut(&mut self) -> &mut S {
        &mut self.sink
    }

    pub fn into_sink(self) -> S {
        self.sink
    }

    pub fn history(&self) -> Option<&StepHistory> {
        self.history.as_ref()
    }

    pub fn is_started(&self) -> bool {
        self.active.is_some()
    }

    /// Current configuration.
    pub fn configuration(&self) -> Result<Configuration, InterpreterError> {
        self.active
            .as_deref()
            .map(|active| describe(&self.definition, active))
            .ok_or(InterpreterError::NotStarted)
    }

    /// Enter every top-level region's initial state, in declaration order,
    /// firing entry actions top-down.
    pub fn start(&mut self) -> Result<Configuration, InterpreterError> {
        if self.active.is_some() {
            return Err(InterpreterError::AlreadyStarted);
        }

        let mut effects = Effects::new(&mut self.sink);
        let active: Vec<Vec<usize>> = self
            .definition
            .regions
            .iter()
            .map(|region| {
                let mut path = Vec::new();
                effects.enter(region, region.initial, &mut path);
                path
            })
            .collect();

        let configuration = describe(&self.definition, &active);
        info!(
            machine = self.definition.id(),
            configuration = %configuration,
            actions = effects.fired.len(),
            "interpreter started"
        );
        self.active = Some(active);
        Ok(configuration)
    }

    /// Process one event to completion and return the new configuration.
    ///
    /// Regions that have no eligible transition for the event are left as
    /// they are; that is not an error.
    pub fn process(&mut self, event: &E) -> Result<Configuration, InterpreterError> {
        let active = self.active.as_mut().ok_or(InterpreterError::NotStarted)?;
        let before = match self.history {
            Some(_) => Some(describe(&self.definition, active)),
            None => None,
        };

        let mut effects = Effects::new(&mut self.sink);
        let mut moved = 0;
        for (region, path) in self.definition.regions.iter().zip(active.iter_mut()) {
            if dispatch(region, path, 0, &self.context, event, &mut effects) {
                moved += 1;
            }
        }
        let fired = effects.fired;

        let after = describe(&self.definition, active);
        if moved == 0 {
            trace!(event = event.kind(), "event ignored by every region");
        }

        if let (Some(history), Some(from)) = (self.history.as_mut(), before) {
            history.record(StepRecord {
                event: event.kind().to_string(),
                from,
                to: after.clone(),
                actions: fired,
                timestamp: Utc::now(),
            });
        }

        Ok(after)
    }

    /// Whether processing `event` now would move at least one region (pure).
    pub fn accepts(&self, event: &E) -> Result<bool, InterpreterError> {
        let active = self.active.as_deref().ok_or(InterpreterError::NotStarted)?;
        Ok(self
            .definition
            .regions
            .iter()
            .zip(active)
            .any(|(region, path)| reacts(region, path, &self.context, event)))
    }
}

/// Actions fired during one start or step.
struct Effects<'a, S> {
    sink: &'a mut S,
    fired: Vec<String>,
}

impl<'a, S> Effects<'a, S> {
    fn new(sink: &'a mut S) -> Self {
        Self {
            sink,
            fired: Vec::new(),
        }
    }

    fn fire<A>(&mut self, actions: &[A])
    where
        A: Action,
        S: ActionSink<A>,
    {
        for action in actions {
            trace!(action = action.name(), "firing action");
            self.sink.perform(action);
            self.fired.push(action.name().to_string());
        }
    }

    /// Enter `region.states[index]` and descend to the initial leaf,
    /// pushing each entered index onto `path`.
    fn enter<C, E, A>(&mut self, region: &RegionDef<C, E, A>, index: usize, path: &mut Vec<usize>)
    where
        A: Action,
        S: ActionSink<A>,
    {
        let state = &region.states[index];
        path.push(index);
        self.fire(&state.entry);
        if let StateKind::Composite(nested) = &state.kind {
            self.enter(nested, nested.initial, path);
        }
    }

    /// Exit the active state at the head of `path`, innermost first.
    fn exit<C, E, A>(&mut self, region: &RegionDef<C, E, A>, path: &[usize])
    where
        A: Action,
        S: ActionSink<A>,
    {
        let state = &region.states[path[0]];
        if let StateKind::Composite(nested) = &state.kind {
            if path.len() > 1 {
                self.exit(nested, &path[1..]);
            }
        }
        self.fire(&state.exit);
    }
}

/// Offer the event to the region whose active state sits at `path[depth]`.
/// Returns whether a transition was taken here or in a nested region.
fn dispatch<C, E, A, S>(
    region: &RegionDef<C, E, A>,
    path: &mut Vec<usize>,
    depth: usize,
    context: &C,
    event: &E,
    effects: &mut Effects<'_, S>,
) -> bool
where
    E: MachineEvent,
    A: Action,
    S: ActionSink<A>,
{
    let state = &region.states[path[depth]];
    if let StateKind::Composite(nested) = &state.kind {
        if depth + 1 < path.len() && dispatch(nested, path, depth + 1, context, event, effects) {
            return true;
        }
    }

    let candidates = state.transitions_for(event.kind());
    if candidates.is_empty() {
        return false;
    }
    let Some(transition) = candidates.iter().find(|t| t.is_enabled(context, event)) else {
        trace!(
            region = region.id(),
            state = state.id(),
            event = event.kind(),
            "guard rejected every candidate"
        );
        return false;
    };

    debug!(
        region = region.id(),
        from = state.id(),
        to = transition.target(),
        event = event.kind(),
        "transition"
    );
    effects.exit(region, &path[depth..]);
    path.truncate(depth);
    effects.enter(region, transition.target, path);
    true
}

fn reacts<C, E, A>(region: &RegionDef<C, E, A>, path: &[usize], context: &C, event: &E) -> bool
where
    E: MachineEvent,
{
    let state = &region.states[path[0]];
    if let StateKind::Composite(nested) = &state.kind {
        if path.len() > 1 && reacts(nested, &path[1..], context, event) {
            return true;
        }
    }
    state
        .transitions_for(event.kind())
        .iter()
        .any(|t| t.is_enabled(context, event))
}

fn describe<C, E, A>(definition: &MachineDefinition<C, E, A>, active: &[Vec<usize>]) -> Configuration {
    let regions = definition
        .regions
        .iter()
        .zip(active)
        .map(|(region, path)| {
            let mut states = Vec::with_capacity(path.len());
            let mut current = Some(region);
            for &index in path {
                let Some(r) = current else { break };
                let state = &r.states[index];
                states.push(state.id.clone());
                current = state.nested();
            }
            RegionPath {
                region: region.id.clone(),
                states,
            }
        })
        .collect();
    Configuration::new(regions)
}
