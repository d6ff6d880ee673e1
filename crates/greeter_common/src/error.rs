//! Error types for Greeter.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GreeterError {
    #[error("name must not be empty")]
    EmptyName,

    #[error("name is {len} characters long, at most {max} allowed")]
    NameTooLong { len: usize, max: usize },

    #[error("invalid endpoint URL '{url}': {reason}")]
    InvalidEndpoint { url: String, reason: String },

    #[error("response body is null")]
    NullBody,

    #[error("config error: {0}")]
    Config(String),
}

impl GreeterError {
    /// Whether the error comes from checking a name
    pub fn is_validation(&self) -> bool {
        matches!(self, GreeterError::EmptyName | GreeterError::NameTooLong { .. })
    }
}
