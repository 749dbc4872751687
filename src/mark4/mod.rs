//! The Mark IV coffee maker controller.
//!
//! Two independent subsystems share one event stream: the brew cycle
//! (valve, boiler, indicator light) and the hot-plate warmer. The policy
//! encodes both as parallel regions of one machine; the rest of this module
//! is the boundary around it:
//!
//! - [`Mark4Event`] and [`Mark4Action`]: the event and action vocabularies
//! - [`CoffeeMakerHardware`]: the capability set a driver supplies
//! - [`Observation`]: the bit encoding used for monitoring and tests
//! - [`SimulatedHardware`] and [`Mark4Control`]: a driver fake and a rig
//!   that runs the policy against it

mod action;
mod control;
mod event;
mod observation;
pub mod policy;
mod simulator;

pub use action::{CoffeeMakerHardware, Mark4Action};
pub use control::Mark4Control;
pub use event::{kind, Mark4Event};
pub use observation::{Field, FieldDifference, HwValue, Observation, PotStatus};
pub use policy::{pass_brew_check, Mark4Context, Mark4Definition, Mark4Interpreter};
pub use simulator::SimulatedHardware;

use crate::builder::InvalidDefinition;
use crate::interpreter::InterpreterError;
use thiserror::Error;

/// Errors surfaced by the control rig.
#[derive(Debug, Error)]
pub enum Mark4Error {
    #[error(transparent)]
    Definition(#[from] InvalidDefinition),

    #[error(transparent)]
    Interpreter(#[from] InterpreterError),
}
