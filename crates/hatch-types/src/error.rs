//! Error types for hatch.

use std::io;

/// Errors produced by the hatch console.
#[derive(Debug, thiserror::Error)]
pub enum HatchError {
    /// A command name containing the space delimiter was passed to register.
    #[error("invalid command name {name:?}: names may not contain a space")]
    InvalidCommandName { name: String },

    #[error("command error: {0}")]
    Command(String),

    #[error("config error: {0}")]
    Config(String),

    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Convenience alias.
pub type Result<T> = std::result::Result<T, HatchError>;
