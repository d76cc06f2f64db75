//! Top navigation bar

use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::auth::{use_auth, use_is_logged_in, AuthAction};
use crate::services::AuthApiService;

#[function_component(MenuBar)]
pub fn menu_bar() -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("MenuBar must be rendered inside a router");
    let logged_in = use_is_logged_in();

    let on_sign_out = {
        let auth = auth.clone();
        Callback::from(move |_| {
            let auth = auth.clone();
            let navigator = navigator.clone();
            spawn_local(async move {
                // Local state is cleared even when the provider call fails.
                if let Err(err) = AuthApiService::new().sign_out().await {
                    tracing::warn!(error = %err, "identity provider sign-out failed");
                }
                auth.dispatch(AuthAction::SignedOut);
                navigator.push(&Route::SignIn);
            });
        })
    };

    html! {
        <nav class="menu-bar">
            <Link<Route> to={Route::Home} classes="menu-link">{"Facts"}</Link<Route>>
            if logged_in {
                <Link<Route> to={Route::AdminArea} classes="menu-link">{"Admin"}</Link<Route>>
                <button class="menu-link menu-sign-out" onclick={on_sign_out}>{"Sign out"}</button>
            } else {
                <Link<Route> to={Route::SignIn} classes="menu-link">{"Sign in"}</Link<Route>>
            }
        </nav>
    }
}
