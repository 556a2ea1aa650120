//! Rate-limited HTTP client for the Scryfall REST API.
//!
//! Every request sleeps for the configured delay before going out, carries
//! the fixed client headers, and is decoded as JSON. Failures are logged here
//! and handed back as an [`ExplorerError`]; nothing is retried.

use crate::config::ExplorerConfig;
use crate::error::{ExplorerError, Result};
use reqwest::blocking::Client;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use serde_json::Value;
use std::thread;
use std::time::Duration;

/// Blocking GET client with a cooperative rate limit.
pub struct ApiClient {
    base_url: String,
    request_delay: Duration,
    client: Client,
}

impl ApiClient {
    /// Build the client, installing the user agent and `Accept` header once.
    pub fn new(config: &ExplorerConfig) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .user_agent(config.user_agent.as_str())
            .default_headers(headers)
            .timeout(config.timeout)
            .redirect(reqwest::redirect::Policy::limited(10))
            .build()?;

        tracing::info!(base_url = %config.base_url, "Scryfall client initialized");

        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            request_delay: config.request_delay,
            client,
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET `endpoint` (relative to the base URL) and decode the body as JSON.
    ///
    /// # Arguments
    ///
    /// * `endpoint` - Path beginning with `/`, e.g. `"/sets"`.
    /// * `params` - Optional query string pairs.
    ///
    /// # Returns
    ///
    /// The decoded payload. Transport errors, non-2xx statuses and malformed
    /// bodies are logged and returned as errors.
    pub fn fetch(&self, endpoint: &str, params: Option<&[(&str, &str)]>) -> Result<Value> {
        let url = format!("{}{}", self.base_url, endpoint);

        tracing::info!("Requesting {}", url);
        if let Some(p) = params {
            tracing::info!("Parameters: {:?}", p);
        }

        thread::sleep(self.request_delay);

        let result = self.send(&url, params);
        match &result {
            Ok(_) => {}
            Err(ExplorerError::Json(e)) => {
                tracing::error!("Failed to decode JSON from {}: {}", url, e)
            }
            Err(e) => tracing::error!("Request to {} failed: {}", url, e),
        }
        result
    }

    fn send(&self, url: &str, params: Option<&[(&str, &str)]>) -> Result<Value> {
        let mut req = self.client.get(url);
        if let Some(p) = params {
            req = req.query(p);
        }

        let resp = req.send()?;
        let status = resp.status();
        if !status.is_success() {
            return Err(ExplorerError::Status {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        let body = resp.text()?;
        let payload: Value = serde_json::from_str(&body)?;
        tracing::info!("Request succeeded - status {}", status.as_u16());
        Ok(payload)
    }
}
