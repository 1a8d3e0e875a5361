//! Error types for jotter.
//!
//! Uses thiserror for derive macros. Every variant renders as a one-line,
//! user-facing message; the session shows it after an "Oops!" prefix and
//! keeps running.

use crate::exit_codes;
use thiserror::Error;

/// Main error type for jotter operations.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum JotterError {
    /// Bad command syntax. The message describes the correct usage.
    #[error("{0}")]
    Usage(String),

    /// The verb is not one jotter understands.
    #[error(
        "I don't know what '{0}' means. Try: todo, deadline, event, list, mark, unmark, delete, find, snooze, bye."
    )]
    UnknownCommand(String),

    /// A 1-based task number outside `1..=len`.
    #[error("There is no task {index}; the list has {len} task(s).")]
    IndexOutOfRange { index: usize, len: usize },

    /// The task at `index` is not of the kind the command needs.
    #[error("Task {index} is not {expected}.")]
    WrongKind {
        index: usize,
        expected: &'static str,
    },

    /// An event whose end precedes its start.
    #[error("{0}")]
    InvalidSchedule(String),

    /// The task file could not be read or written.
    #[error("Storage error: {0}")]
    Storage(String),

    /// The config file could not be read, parsed, or validated.
    #[error("Config error: {0}")]
    Config(String),

    /// Terminal input or output failed.
    #[error("I/O error: {0}")]
    Io(String),
}

impl JotterError {
    /// Build a usage error from anything string-like.
    pub fn usage(message: impl Into<String>) -> Self {
        JotterError::Usage(message.into())
    }

    /// Returns true for errors caused by what the user typed.
    ///
    /// These are recovered at the parser/task-list boundary and never
    /// end a session.
    pub fn is_usage(&self) -> bool {
        matches!(
            self,
            JotterError::Usage(_)
                | JotterError::UnknownCommand(_)
                | JotterError::IndexOutOfRange { .. }
                | JotterError::WrongKind { .. }
                | JotterError::InvalidSchedule(_)
        )
    }

    /// Returns the appropriate exit code for this error type.
    pub fn exit_code(&self) -> i32 {
        match self {
            JotterError::Storage(_) => exit_codes::STORAGE_FAILURE,
            JotterError::Config(_) => exit_codes::CONFIG_FAILURE,
            JotterError::Io(_) => exit_codes::IO_FAILURE,
            _ => exit_codes::USER_ERROR,
        }
    }
}

/// Result type alias for jotter operations.
pub type Result<T> = std::result::Result<T, JotterError>;
