//! Run-to-completion interpreter for machine definitions.
//!
//! The interpreter is the imperative shell around the declarative
//! definition: it owns the active configuration and drives the action sink
//! while processing one event at a time.
//!
//! # Step semantics
//!
//! - Top-level regions are evaluated once each, in declaration order.
//! - Within a region the innermost active state is consulted first; a
//!   composite's own transitions are tried only if its nested region did
//!   not move.
//! - Candidates are tried in declaration order and the first one whose
//!   guard passes wins.
//! - Exits fire bottom-up, entries top-down, and entering a composite
//!   always descends to its nested region's declared initial state.

mod error;
mod machine;

pub use error::InterpreterError;
pub use machine::Interpreter;
