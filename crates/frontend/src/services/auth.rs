//! Authentication API service

use critterfacts_core::Session;

use crate::client::identity_client;

/// Authentication API service
#[derive(Clone)]
pub struct AuthApiService;

impl AuthApiService {
    /// Create a new auth API service
    pub fn new() -> Self {
        Self
    }

    /// Sign in against the identity provider. The error string is the
    /// provider's own message, shown to the user unchanged.
    pub async fn sign_in(&self, email: String, password: String) -> Result<Session, String> {
        let client = identity_client().map_err(|e| format!("Failed to get client: {e}"))?;
        client
            .sign_in(&email, &password)
            .await
            .map_err(|e| e.to_string())
    }

    /// End the provider-side session
    pub async fn sign_out(&self) -> Result<(), String> {
        let client = identity_client().map_err(|e| format!("Failed to get client: {e}"))?;
        client.sign_out().await.map_err(|e| e.to_string())
    }
}

impl Default for AuthApiService {
    fn default() -> Self {
        Self::new()
    }
}
