//! Error types for the Wander system.
//!
//! Uses `thiserror` for ergonomic error definition. One taxonomy serves
//! every layer: world construction, command dispatch, and the console.

use thiserror::Error;

use crate::direction::Direction;

/// A specialized `Result` type for Wander operations.
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for Wander operations.
#[derive(Debug, Error)]
pub enum Error {
    /// A room with this name has already been added to the world.
    #[error("room already exists: {0}")]
    RoomAlreadyExists(String),

    /// No room with this name has been added to the world.
    #[error("room does not exist: {0}")]
    RoomDoesNotExist(String),

    /// The room has no exit in this direction.
    #[error("exit does not exist: {0}")]
    ExitDoesNotExist(Direction),

    /// The first input token named no registered command.
    #[error("unsupported command: {0}")]
    UnsupportedCommand(String),

    /// A command's preconditions failed before it could run.
    ///
    /// The dispatcher rewraps this as [`Error::FailedToExecuteAction`] so
    /// callers always see the input that caused it.
    #[error("command cannot be executed: {0}")]
    CommandCannotBeExecuted(String),

    /// A recognized command could not be carried out.
    #[error("failed to execute '{input}': {reason}")]
    FailedToExecuteAction {
        /// The raw user input that failed.
        input: String,
        /// Why the action could not run.
        reason: String,
    },

    /// Internal error (terminal or I/O failure).
    #[error("internal error: {0}")]
    Internal(String),
}

impl Error {
    /// Creates a room already exists error.
    #[must_use]
    pub fn room_already_exists(name: impl Into<String>) -> Self {
        Self::RoomAlreadyExists(name.into())
    }

    /// Creates a room does not exist error.
    #[must_use]
    pub fn room_does_not_exist(name: impl Into<String>) -> Self {
        Self::RoomDoesNotExist(name.into())
    }

    /// Creates an exit does not exist error.
    #[must_use]
    pub const fn exit_does_not_exist(direction: Direction) -> Self {
        Self::ExitDoesNotExist(direction)
    }

    /// Creates an unsupported command error.
    #[must_use]
    pub fn unsupported_command(name: impl Into<String>) -> Self {
        Self::UnsupportedCommand(name.into())
    }

    /// Creates a command cannot be executed error.
    #[must_use]
    pub fn command_cannot_be_executed(reason: impl Into<String>) -> Self {
        Self::CommandCannotBeExecuted(reason.into())
    }

    /// Creates a failed to execute action error.
    #[must_use]
    pub fn failed_to_execute_action(input: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::FailedToExecuteAction {
            input: input.into(),
            reason: reason.into(),
        }
    }

    /// Creates an internal error.
    #[must_use]
    pub fn internal(message: impl Into<String>) -> Self {
        Self::Internal(message.into())
    }
}
