//! Fact API service

use critterfacts_core::Fact;

use crate::client::facts_client;

/// Fact API service
#[derive(Clone)]
pub struct FactApiService;

impl FactApiService {
    /// Create a new fact API service
    pub fn new() -> Self {
        Self
    }

    /// Fetch a fact by identifier, or a random fact when `id` is `None`
    pub async fn get_fact(&self, id: Option<String>) -> Result<Fact, String> {
        let client = facts_client().map_err(|e| format!("Failed to get client: {e}"))?;
        client
            .get_fact(id.as_deref())
            .await
            .map_err(|e| e.to_string())
    }
}

impl Default for FactApiService {
    fn default() -> Self {
        Self::new()
    }
}
