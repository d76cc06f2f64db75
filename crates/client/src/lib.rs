//! Typed HTTP clients for the critterfacts backend and the external
//! identity provider.
//!
//! Both clients are `reqwest`-based and compile for native and `wasm32`
//! targets; nothing here retries, caches, or deduplicates requests.

pub mod error;
pub mod facts;
pub mod identity;

pub use error::ClientError;
pub use facts::{FactsClient, FactsClientBuilder};
pub use identity::IdentityClient;
