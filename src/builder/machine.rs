//! Builder for constructing machine definitions.

use crate::builder::error::{DefinitionError, InvalidDefinition};
use crate::builder::region::RegionBuilder;
use crate::builder::state::StateBuilder;
use crate::builder::validate::validate_machine;
use crate::definition::{MachineDefinition, RegionDef, StateDef, StateKind, Transition};
use std::collections::HashMap;
use stillwater::validation::Validation;

/// Builder for constructing machine definitions with a fluent API.
///
/// # Example
///
/// ```rust
/// use mark4_controller::builder::{MachineBuilder, RegionBuilder, StateBuilder};
///
/// let definition = MachineBuilder::<(), (), &'static str>::new("door")
///     .region(
///         RegionBuilder::new("main")
///             .initial("closed")
///             .state(StateBuilder::new("closed").entry(["lock"]).on("OPEN", "open"))
///             .state(StateBuilder::new("open").entry(["unlock"]).on("CLOSE", "closed")),
///     )
///     .build()
///     .unwrap();
///
/// assert_eq!(definition.regions().len(), 1);
/// assert_eq!(definition.regions()[0].initial().id(), "closed");
/// ```
pub struct MachineBuilder<C, E, A> {
    id: String,
    regions: Vec<RegionBuilder<C, E, A>>,
}

impl<C, E, A> MachineBuilder<C, E, A> {
    /// Create a new builder.
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            regions: Vec::new(),
        }
    }

    /// Add a parallel top-level region. Regions are processed in the order
    /// they are added.
    pub fn region(mut self, region: RegionBuilder<C, E, A>) -> Self {
        self.regions.push(region);
        self
    }

    /// Validate and build the definition.
    /// Returns every violation found if the definition is malformed.
    pub fn build(self) -> Result<MachineDefinition<C, E, A>, InvalidDefinition> {
        if let Validation::Failure(errors) = validate_machine(&self.id, &self.regions) {
            return Err(InvalidDefinition {
                violations: errors.iter().cloned().collect(),
            });
        }

        let regions = self
            .regions
            .into_iter()
            .map(|region| {
                let path = region.id.clone();
                resolve_region(&path, region)
            })
            .collect::<Result<Vec<_>, _>>()
            .map_err(|violation| InvalidDefinition {
                violations: vec![violation],
            })?;

        Ok(MachineDefinition {
            id: self.id,
            regions,
        })
    }
}

fn resolve_region<C, E, A>(
    path: &str,
    region: RegionBuilder<C, E, A>,
) -> Result<RegionDef<C, E, A>, DefinitionError> {
    let index: HashMap<String, usize> = region
        .states
        .iter()
        .enumerate()
        .map(|(i, state)| (state.id.clone(), i))
        .collect();

    let initial_id = region.initial.ok_or_else(|| DefinitionError::MissingInitial {
        region: path.to_string(),
    })?;
    let initial = *index
        .get(&initial_id)
        .ok_or_else(|| DefinitionError::UnknownInitial {
            region: path.to_string(),
            initial: initial_id.clone(),
        })?;

    let states = region
        .states
        .into_iter()
        .map(|state| resolve_state(path, &index, state))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(RegionDef {
        id: region.id,
        initial,
        states,
    })
}

fn resolve_state<C, E, A>(
    path: &str,
    index: &HashMap<String, usize>,
    state: StateBuilder<C, E, A>,
) -> Result<StateDef<C, E, A>, DefinitionError> {
    let mut transitions: HashMap<String, Vec<Transition<C, E>>> = HashMap::new();
    for declared in state.transitions {
        let target = *index
            .get(&declared.target)
            .ok_or_else(|| DefinitionError::UnknownTarget {
                region: path.to_string(),
                state: state.id.clone(),
                event: declared.event.clone(),
                target: declared.target.clone(),
            })?;
        transitions.entry(declared.event).or_default().push(Transition {
            target,
            target_id: declared.target,
            guard: declared.guard,
        });
    }

    let kind = match state.region {
        None => StateKind::Atomic,
        Some(nested) => {
            let nested_path = format!("{path}.{}", state.id);
            StateKind::Composite(resolve_region(&nested_path, nested)?)
        }
    };

    Ok(StateDef {
        id: state.id,
        entry: state.entry,
        exit: state.exit,
        transitions,
        kind,
    })
}
