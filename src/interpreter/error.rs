//! Interpreter errors.

use thiserror::Error;

/// Caller misuse of an interpreter. These are programming errors: the
/// interpreter is left untouched and retrying cannot help.
#[derive(Debug, Clone, Copy, Error, PartialEq, Eq)]
pub enum InterpreterError {
    #[error("Interpreter not started. Call start() before processing events")]
    NotStarted,

    #[error("Interpreter already started")]
    AlreadyStarted,
}
