//! Greeter common library - types shared by greetd and greetctl

pub mod error;
pub mod greeting;

pub use error::GreeterError;
pub use greeting::{
    greet, greeting_from_body, GreetingRequest, GreetingResponse, DEFAULT_SALUTATION,
    MAX_NAME_LEN,
};

/// Default address greetd listens on
pub const DEFAULT_BIND_ADDR: &str = "127.0.0.1:7866";
