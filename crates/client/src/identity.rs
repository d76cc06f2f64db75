//! Client for the external identity provider boundary.
//!
//! The provider's capability set is deliberately narrow: sign in with
//! email and password, sign out. Session-state fan-out to the rest of
//! the app happens in the frontend's auth context, not here.

use critterfacts_core::Session;
use reqwest::{Client, ClientBuilder};
use serde::Serialize;

use crate::error::ClientError;

const USER_AGENT: &str = "critterfacts-client/0.1.0";

#[derive(Debug, Clone, Serialize)]
struct SignInRequest {
    email: String,
    password: String,
}

/// Client for the identity provider's session endpoints.
#[derive(Clone)]
pub struct IdentityClient {
    client: Client,
    base_url: String,
}

impl IdentityClient {
    /// Create a client against `base_url`. A trailing `/` is trimmed.
    pub fn new(base_url: impl Into<String>) -> Result<Self, ClientError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(ClientError::Configuration("base_url is required".into()));
        }
        let client = ClientBuilder::new().user_agent(USER_AGENT).build()?;
        Ok(Self { client, base_url })
    }

    /// Get the base URL
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Exchange credentials for a session. A rejection carries the
    /// provider's message verbatim so the UI can show it unchanged.
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, ClientError> {
        let request = SignInRequest {
            email: email.to_owned(),
            password: password.to_owned(),
        };
        let response = self
            .client
            .post(format!("{}/session", self.base_url))
            .json(&request)
            .send()
            .await?;
        let status = response.status();

        if status.is_success() {
            Ok(response.json().await?)
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }

    /// End the provider-side session.
    pub async fn sign_out(&self) -> Result<(), ClientError> {
        let response = self
            .client
            .delete(format!("{}/session", self.base_url))
            .send()
            .await?;
        let status = response.status();

        if status.is_success() {
            Ok(())
        } else {
            let message = response.text().await.unwrap_or_else(|_| status.to_string());
            Err(ClientError::from_status(status, message))
        }
    }
}
