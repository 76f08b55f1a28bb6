//! HTTP client with status checking and error mapping.

use anyhow::Result;
use log::debug;
use reqwest::{Client, Response};
use serde::de::DeserializeOwned;

use crate::error::RelkitError;

/// HTTP client for one-shot GET requests.
///
/// Each call is a single attempt. Timeouts are configured on the wrapped
/// reqwest `Client` (see [`crate::config::Config`]).
#[derive(Clone)]
pub struct HttpClient {
    client: Client,
}

impl HttpClient {
    /// Creates a new HTTP client wrapping the given reqwest Client.
    pub fn new(client: Client) -> Self {
        Self { client }
    }

    /// Performs a GET request and returns the body as text.
    #[tracing::instrument(skip(self))]
    pub async fn get_text(&self, url: &str) -> Result<String> {
        debug!("GET text from {}...", url);

        let response = self.send(url).await?;
        let body = response.text().await.map_err(|e| {
            RelkitError::Network(format!("failed to read response body from {}: {}", url, e))
        })?;

        debug!("Received {} bytes from {}", body.len(), url);
        Ok(body)
    }

    /// Performs a GET request and deserializes the JSON response.
    #[tracing::instrument(skip(self))]
    pub async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        debug!("GET JSON from {}...", url);

        let response = self.send(url).await?;
        let body = response.bytes().await.map_err(|e| {
            RelkitError::Network(format!("failed to read response body from {}: {}", url, e))
        })?;

        let parsed = serde_json::from_slice::<T>(&body)
            .map_err(|e| RelkitError::Parse(format!("invalid JSON from {}: {}", url, e)))?;
        Ok(parsed)
    }

    async fn send(&self, url: &str) -> Result<Response> {
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| RelkitError::Network(format!("failed to send request to {}: {}", url, e)))?;

        Ok(check_status(url, response)?)
    }
}

/// Rejects any response whose status is not 2xx.
fn check_status(url: &str, response: Response) -> Result<Response, RelkitError> {
    let status = response.status();
    if status.is_success() {
        Ok(response)
    } else {
        Err(RelkitError::HttpStatus {
            url: url.to_string(),
            status: status.as_u16(),
        })
    }
}
