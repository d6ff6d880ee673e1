//! Greetctl library - exposes modules for testing

pub mod client;
pub mod endpoint;
pub mod errors;
pub mod form;
pub mod logging;
pub mod tui;

pub use client::GreetingClient;
pub use form::{dispatch, Completion, GreetingForm, Submission};
