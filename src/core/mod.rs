//! Core statechart vocabulary.
//!
//! This module contains the building blocks the interpreter is generic over:
//! - Events identified by kind via the `MachineEvent` trait
//! - Named actions and the `ActionSink` that performs them
//! - Guard predicates for transition control
//! - Configuration snapshots and step history
//!
//! Nothing in here performs side effects; effects happen only when the
//! interpreter hands actions to a sink.

mod action;
mod configuration;
mod event;
mod guard;
mod history;

pub use action::{Action, ActionSink};
pub use configuration::{Configuration, RegionPath};
pub use event::MachineEvent;
pub use guard::Guard;
pub use history::{StepHistory, StepRecord};
