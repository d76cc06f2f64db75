//! Shared client instances, created lazily from the resolved base URLs.

use critterfacts_client::{ClientError, FactsClient, IdentityClient};
use once_cell::sync::Lazy;
use std::sync::Mutex;

use crate::config;

static FACTS_CLIENT: Lazy<Mutex<Option<FactsClient>>> = Lazy::new(|| Mutex::new(None));
static IDENTITY_CLIENT: Lazy<Mutex<Option<IdentityClient>>> = Lazy::new(|| Mutex::new(None));

/// Get the facts client instance, creating it on first use.
pub fn facts_client() -> Result<FactsClient, ClientError> {
    let mut lock = FACTS_CLIENT.lock().expect("facts client lock poisoned");
    if let Some(client) = lock.as_ref() {
        return Ok(client.clone());
    }
    let client = FactsClient::builder()
        .base_url(config::api_base_url())
        .build()?;
    *lock = Some(client.clone());
    Ok(client)
}

/// Get the identity provider client instance, creating it on first use.
pub fn identity_client() -> Result<IdentityClient, ClientError> {
    let mut lock = IDENTITY_CLIENT.lock().expect("identity client lock poisoned");
    if let Some(client) = lock.as_ref() {
        return Ok(client.clone());
    }
    let client = IdentityClient::new(config::identity_base_url())?;
    *lock = Some(client.clone());
    Ok(client)
}
