//! Statechart interpreter for parallel and hierarchical state machines, and
//! the Mark IV coffee maker controller built on it.
//!
//! Machines are declared as data and validated up front; an explicitly owned
//! interpreter then processes one event at a time with run-to-completion
//! semantics, firing entry and exit actions into a caller-supplied sink.
//!
//! # Core Concepts
//!
//! - **Definition**: regions of states, composite states owning a nested
//!   region, guarded transitions keyed by event kind
//! - **Interpreter**: holds the active configuration and drives the sink
//! - **Guards**: pure predicates over context and event
//! - **Configuration**: one active path per top-level region
//!
//! # Example
//!
//! ```rust
//! use mark4_controller::mark4::{policy, Mark4Event, SimulatedHardware};
//!
//! let mut controller = policy::interpreter(SimulatedHardware::default()).unwrap();
//! controller.start().unwrap();
//!
//! let config = controller
//!     .process(&Mark4Event::BrewClicked { reservoir_empty: false, pot_empty: true })
//!     .unwrap();
//! assert!(config.is_in("brewRun.brewing"));
//!
//! let config = controller.process(&Mark4Event::PotRemoved).unwrap();
//! assert!(config.is_in("brewRun.waiting"));
//! ```

pub mod builder;
pub mod core;
pub mod definition;
pub mod interpreter;
pub mod mark4;

// Re-export commonly used types
pub use builder::{InvalidDefinition, MachineBuilder, RegionBuilder, StateBuilder};
pub use core::{Action, ActionSink, Configuration, Guard, MachineEvent};
pub use definition::MachineDefinition;
pub use interpreter::{Interpreter, InterpreterError};
