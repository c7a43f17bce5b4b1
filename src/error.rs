//! Error types for the contact book.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationError;
use thiserror::Error;

/// Usage text shown when a command is given too few arguments.
pub const USAGE: &str = "\
If you write command 'add' please write 'add' 'name' 'number' ['DD.MM.YYYY']
If you write command 'change' please write 'change' 'name' 'old number' 'new number'
If you write command 'remove' please write 'remove' 'name' 'number'
If you write command 'phone' please write 'phone' 'name'
If you write command 'birthday' please write 'birthday' 'name'
If you write command 'records' please write 'records' and number of records";

/// Errors that can occur while running a single command.
///
/// None of these end the session: the dispatcher turns each one into the
/// fixed reply returned by [`CommandError::user_message`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CommandError {
    /// Fewer arguments than the command needs
    #[error("Missing argument for '{command}': expected {expected}, got {got}")]
    MissingArgument {
        command: &'static str,
        expected: usize,
        got: usize,
    },

    /// No record stored under the given name
    #[error("Contact not found: {0}")]
    ContactNotFound(String),

    /// More arguments than the command accepts
    #[error("Unexpected arguments for '{command}': {extra:?}")]
    UnexpectedArguments {
        command: &'static str,
        extra: Vec<String>,
    },

    /// A field failed validation
    #[error(transparent)]
    InvalidField(#[from] ValidationError),

    /// An argument that is not a field had an unusable value
    #[error("Invalid value for {argument}: {value}")]
    InvalidValue { argument: &'static str, value: String },

    /// The record lacks an attribute the command reads
    #[error("Contact '{name}' has no {attribute}")]
    MissingAttribute {
        name: String,
        attribute: &'static str,
    },

    /// The first word of the line is not a known command
    #[error("Unknown command: {0}")]
    UnknownCommand(String),

    /// Anything else
    #[error("Unexpected failure: {0}")]
    Unexpected(String),
}

impl CommandError {
    /// The fixed reply shown to the user for this kind of failure.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::MissingArgument { .. } => USAGE,
            Self::ContactNotFound(_) => "This contact not found try again",
            Self::UnexpectedArguments { .. } => "Type not supported try again",
            Self::InvalidField(_) | Self::InvalidValue { .. } => "Incorrect value try again",
            Self::MissingAttribute { .. } => "Incorrect attribute try again",
            Self::UnknownCommand(_) => "Unknown command, type 'help' for usage",
            Self::Unexpected(_) => "Something went wrong try again",
        }
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },

    /// Failed to load .env file
    #[error("Failed to load .env file: {0}")]
    DotenvError(String),
}

/// Convenience type alias for Results with CommandError
pub type CommandResult<T> = Result<T, CommandError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
