//! Build errors for machine definitions.

use thiserror::Error;

/// A single problem found while validating a machine definition.
///
/// Region names are dotted paths from the machine root, so a problem in the
/// nested region of `brewRun` reads `brewControl.brewRun`.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum DefinitionError {
    #[error("Machine '{machine}' declares no regions")]
    NoRegions { machine: String },

    #[error("Region '{region}' declares no states")]
    EmptyRegion { region: String },

    #[error("Region '{region}' has no initial state. Call .initial(id) on its builder")]
    MissingInitial { region: String },

    #[error("Region '{region}' names unknown initial state '{initial}'")]
    UnknownInitial { region: String, initial: String },

    #[error("State '{state}' is declared more than once in region '{region}'")]
    DuplicateState { region: String, state: String },

    #[error(
        "Transition on '{event}' from '{state}' targets unknown state '{target}' in region '{region}'"
    )]
    UnknownTarget {
        region: String,
        state: String,
        event: String,
        target: String,
    },
}

/// Every violation found in a definition, reported together.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("Invalid machine definition: {}", join(.violations))]
pub struct InvalidDefinition {
    pub violations: Vec<DefinitionError>,
}

fn join(violations: &[DefinitionError]) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}
