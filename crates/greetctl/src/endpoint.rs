//! Greeting endpoint URLs
//!
//! The base URL is baked in by build.rs from `GREETER_API_URL`.

use greeter_common::GreeterError;
use reqwest::Url;

/// Base URL embedded at build time
pub const API_URL: &str = env!("GREETER_API_URL");

/// Parse a base URL, accepting only http and https
pub fn parse_base_url(raw: &str) -> Result<Url, GreeterError> {
    let url = Url::parse(raw.trim()).map_err(|e| GreeterError::InvalidEndpoint {
        url: raw.to_string(),
        reason: e.to_string(),
    })?;

    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(GreeterError::InvalidEndpoint {
            url: raw.to_string(),
            reason: format!("unsupported scheme '{}'", other),
        }),
    }
}

/// `<base>?name=<name>` with the name form-urlencoded.
///
/// Pairs already on the base URL are kept.
pub fn greeting_url(base: &Url, name: &str) -> Url {
    let mut url = base.clone();
    url.query_pairs_mut().append_pair("name", name);
    url
}
