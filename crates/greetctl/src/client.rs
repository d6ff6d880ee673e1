//! HTTP client for the greeting endpoint.

use crate::endpoint::greeting_url;
use anyhow::{Context, Result};
use greeter_common::greeting_from_body;
use reqwest::Url;
use tracing::debug;

/// Client for fetching greetings. Cheap to clone.
#[derive(Clone)]
pub struct GreetingClient {
    http: reqwest::Client,
    base: Url,
}

impl GreetingClient {
    pub fn new(base: Url) -> Self {
        Self {
            http: reqwest::Client::new(),
            base,
        }
    }

    pub fn base(&self) -> &Url {
        &self.base
    }

    /// One GET for `name`, decoded into the greeting to display.
    ///
    /// The HTTP status is not inspected: any JSON body is decoded. Fails only
    /// when the request cannot be made, the body is not JSON, or it is `null`.
    pub async fn fetch_greeting(&self, name: &str) -> Result<Option<String>> {
        let url = greeting_url(&self.base, name);
        debug!("GET {}", url);

        let response = self
            .http
            .get(url.clone())
            .send()
            .await
            .with_context(|| format!("Request to {} failed", url))?;

        let status = response.status();
        let body: serde_json::Value = response
            .json()
            .await
            .with_context(|| format!("Response from {} ({}) is not JSON", url, status))?;

        Ok(greeting_from_body(&body)?)
    }
}
