//! Greeting domain logic and wire types.
//!
//! The service builds `GreetingResponse` values from validated requests; the
//! form decodes whatever body comes back with `greeting_from_body`, which
//! never validates anything.

use crate::error::GreeterError;
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Longest name the service accepts, in characters
pub const MAX_NAME_LEN: usize = 100;

/// Salutation used when none is configured
pub const DEFAULT_SALUTATION: &str = "Olá";

/// A name that passed validation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GreetingRequest {
    name: String,
}

impl GreetingRequest {
    /// Validate `name` against the default length limit
    pub fn new(name: impl Into<String>) -> Result<Self, GreeterError> {
        Self::with_max_len(name, MAX_NAME_LEN)
    }

    /// Validate `name` against a custom length limit.
    ///
    /// Length is counted in characters, so "João" is 4 long.
    pub fn with_max_len(name: impl Into<String>, max: usize) -> Result<Self, GreeterError> {
        let name = name.into();
        let len = name.chars().count();

        if len == 0 {
            return Err(GreeterError::EmptyName);
        }
        if len > max {
            return Err(GreeterError::NameTooLong { len, max });
        }

        Ok(Self { name })
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Response body of `GET /?name=`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GreetingResponse {
    pub message: String,
}

/// Build the greeting for a validated request
pub fn greet(request: &GreetingRequest, salutation: &str) -> GreetingResponse {
    GreetingResponse {
        message: format!("{}, {}", salutation, request.name()),
    }
}

/// Pull the greeting out of a decoded response body.
///
/// Only a `null` body is an error. Anything else that lacks a usable
/// `message` yields `None`, and non-string messages are shown as JSON text.
pub fn greeting_from_body(body: &Value) -> Result<Option<String>, GreeterError> {
    if body.is_null() {
        return Err(GreeterError::NullBody);
    }

    let greeting = match body.get("message") {
        None | Some(Value::Null) => None,
        Some(Value::String(message)) => Some(message.clone()),
        // Shown as JSON text, where a browser would drop booleans and throw on objects
        Some(other) => Some(other.to_string()),
    };

    Ok(greeting)
}
