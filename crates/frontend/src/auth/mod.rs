//! Session state for the app: the provider component that owns it, the
//! storage mirror, and the read-only hooks the rest of the UI consumes.

pub mod context;

pub use context::{
    use_auth, use_is_logged_in, use_session, AuthAction, AuthContext, AuthContextData,
    AuthProvider,
};
