//! Session context and provider
//!
//! The provider is mounted once at the application root and lives for the
//! whole process, so the session mirror needs no teardown. Every
//! session-state change dispatched here is mirrored into the persistent
//! `user` key: serialized JSON for a live session, the literal `"null"`
//! otherwise. Explicit sign-out removes the key entirely.

use critterfacts_core::session::{self, Session};
use std::rc::Rc;
use yew::prelude::*;

use crate::storage::BrowserStorage;

/// Session context data
#[derive(Clone, Debug, PartialEq)]
pub struct AuthContextData {
    pub session: Option<Session>,
    pub is_loading: bool,
}

/// Session context actions
pub enum AuthAction {
    /// Latest value from the identity provider's session state
    SessionChanged(Option<Session>),
    /// Explicit sign-out
    SignedOut,
    SetLoading(bool),
}

/// Session context handle
pub type AuthContext = UseReducerHandle<AuthContextData>;

impl Default for AuthContextData {
    fn default() -> Self {
        Self {
            session: None,
            is_loading: true, // Start loading until storage is checked
        }
    }
}

impl Reducible for AuthContextData {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let storage = BrowserStorage::new();
        match action {
            AuthAction::SessionChanged(next) => {
                session::mirror_session(&storage, next.as_ref());
                Rc::new(Self {
                    session: next,
                    is_loading: false,
                })
            }
            AuthAction::SignedOut => {
                session::clear_session(&storage);
                Rc::new(Self {
                    session: None,
                    is_loading: false,
                })
            }
            AuthAction::SetLoading(is_loading) => Rc::new(Self {
                is_loading,
                ..(*self).clone()
            }),
        }
    }
}

/// Auth provider props
#[derive(Properties, PartialEq)]
pub struct AuthProviderProps {
    pub children: Children,
}

/// Auth provider component
#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    let auth = use_reducer(AuthContextData::default);

    // Restore the mirrored session on mount. An unparsable value reads as
    // signed out rather than failing the app.
    {
        let auth = auth.clone();
        use_effect_with((), move |_| {
            match session::stored_session(&BrowserStorage::new()) {
                Some(restored) => auth.dispatch(AuthAction::SessionChanged(Some(restored))),
                None => auth.dispatch(AuthAction::SetLoading(false)),
            }
        });
    }

    html! {
        <ContextProvider<AuthContext> context={auth}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}

/// Hook to use the session context
#[hook]
pub fn use_auth() -> AuthContext {
    use_context::<AuthContext>()
        .expect("AuthContext not found. Make sure to wrap your component with AuthProvider")
}

/// Hook to read the current session
#[hook]
pub fn use_session() -> Option<Session> {
    let auth = use_auth();
    auth.session.clone()
}

/// Storage-derived login check, re-evaluated whenever the session context
/// changes. This is what the route guard consults; it trusts the mirrored
/// key and does not revalidate with the identity provider.
#[hook]
pub fn use_is_logged_in() -> bool {
    let _auth = use_auth();
    session::is_logged_in(&BrowserStorage::new())
}
