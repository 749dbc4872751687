//! Builder API for declaring machine definitions.
//!
//! Machines are declared bottom-up with fluent builders: states go into
//! regions, regions into the machine (or into a composite state). Nothing is
//! checked while declaring; [`MachineBuilder::build`] validates the whole
//! tree at once and reports every problem it finds, so a malformed machine
//! never reaches an interpreter.

pub mod error;
pub mod machine;
pub mod region;
pub mod state;
mod validate;

pub use error::{DefinitionError, InvalidDefinition};
pub use machine::MachineBuilder;
pub use region::RegionBuilder;
pub use state::StateBuilder;
