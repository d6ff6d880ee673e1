//! Exit status for greetctl

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors (terminal setup and the like)
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when the endpoint URL does not parse
pub const EXIT_INVALID_ENDPOINT: i32 = 64;

/// Exit code when the greeting request or its decoding failed
pub const EXIT_REQUEST_FAILED: i32 = 70;
