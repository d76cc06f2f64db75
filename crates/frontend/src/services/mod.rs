pub mod auth;
pub mod facts;

pub use auth::AuthApiService;
pub use facts::FactApiService;
