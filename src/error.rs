//! Error types for sword-parse operations.
//!
//! The parsers themselves never fail on malformed engine output; they return
//! empty or fallback values instead. These errors cover the few surfaces that
//! can genuinely fail: user-typed references, the engine collaborator, and
//! configuration loading.

use thiserror::Error;

/// Errors that can occur outside the infallible parsing core.
#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid reference: {0}")]
    InvalidReference(String),

    #[error("Engine error in module {module}: {message}")]
    Engine { module: String, message: String },

    #[error("Invalid configuration: {0}")]
    Config(String),
}

impl Error {
    /// Shorthand for an engine failure attributed to a module.
    pub fn engine(module: impl Into<String>, message: impl Into<String>) -> Self {
        Error::Engine {
            module: module.into(),
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, Error>;
