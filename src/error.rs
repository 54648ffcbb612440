//! Error types for tab configuration.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum TabsError {
    /// Two tabs share the same identifier.
    #[error("duplicate tab value '{value}' at positions {first} and {second}")]
    DuplicateValue {
        value: String,
        first: usize,
        second: usize,
    },

    #[error("invalid animation config: {0}")]
    Config(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TabsError>;
