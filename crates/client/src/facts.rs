//! Typed client for the public facts API.

use critterfacts_core::Fact;
use reqwest::{Client, ClientBuilder};
#[cfg(not(target_arch = "wasm32"))]
use std::time::Duration;

use crate::error::ClientError;

const USER_AGENT: &str = "critterfacts-client/0.1.0";

/// Client for the facts endpoints.
///
/// These endpoints are public: no authentication is attached and every
/// call performs a fresh request.
#[derive(Clone)]
pub struct FactsClient {
    client: Client,
    base_url: String,
}

impl FactsClient {
    /// Create a client against `base_url` with default settings.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::builder().base_url(base_url).build()
    }

    pub fn builder() -> FactsClientBuilder {
        FactsClientBuilder::new()
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Fetch a fact by identifier, or a server-chosen random fact when
    /// `id` is `None`.
    pub async fn get_fact(&self, id: Option<&str>) -> Result<Fact, ClientError> {
        let url = match id {
            Some(id) => format!("{}/fact/{id}", self.base_url),
            None => format!("{}/fact", self.base_url),
        };
        let response = self.client.get(url).send().await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }
}

/// Builder for [`FactsClient`].
pub struct FactsClientBuilder {
    base_url: Option<String>,
    #[cfg(not(target_arch = "wasm32"))]
    timeout: Option<Duration>,
}

impl FactsClientBuilder {
    pub fn new() -> Self {
        Self {
            base_url: None,
            #[cfg(not(target_arch = "wasm32"))]
            timeout: None,
        }
    }

    /// Set the base URL (required). A trailing `/` is trimmed.
    pub fn base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = Some(url.into());
        self
    }

    /// Set the request timeout. Timeouts are not supported on WASM.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn build(self) -> Result<FactsClient, ClientError> {
        let base_url = self
            .base_url
            .ok_or_else(|| ClientError::Configuration("base_url is required".into()))?
            .trim_end_matches('/')
            .to_string();

        #[cfg(not(target_arch = "wasm32"))]
        let client = {
            let mut builder = ClientBuilder::new().user_agent(USER_AGENT);
            if let Some(timeout) = self.timeout {
                builder = builder.timeout(timeout);
            }
            builder.build()?
        };

        #[cfg(target_arch = "wasm32")]
        let client = ClientBuilder::new().user_agent(USER_AGENT).build()?;

        Ok(FactsClient { client, base_url })
    }
}

impl Default for FactsClientBuilder {
    fn default() -> Self {
        Self::new()
    }
}
