//! Sign-in page

use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

use crate::app::Route;
use crate::auth::{use_auth, AuthAction};
use crate::services::AuthApiService;

#[function_component(SignInPage)]
pub fn sign_in_page() -> Html {
    let auth = use_auth();
    let navigator = use_navigator().expect("SignInPage must be rendered inside a router");

    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let submitting = use_state(|| false);

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let on_submit = {
        let auth = auth.clone();
        let navigator = navigator.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let submitting = submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            if *submitting {
                return;
            }
            submitting.set(true);
            error.set(None);

            let auth = auth.clone();
            let navigator = navigator.clone();
            let error = error.clone();
            let submitting = submitting.clone();
            let email_value = (*email).clone();
            let password_value = (*password).clone();

            spawn_local(async move {
                match AuthApiService::new().sign_in(email_value, password_value).await {
                    Ok(session) => {
                        // A genuine session materialized: mirror it and
                        // enter the admin area.
                        auth.dispatch(AuthAction::SessionChanged(Some(session)));
                        navigator.push(&Route::AdminArea);
                    }
                    Err(message) => {
                        error.set(Some(message));
                    }
                }
                submitting.set(false);
            });
        })
    };

    html! {
        <form class="sign-in" onsubmit={on_submit}>
            <h1>{"Sign in"}</h1>
            if let Some(message) = &*error {
                <p class="sign-in-error">{message}</p>
            }
            <input
                type="email"
                placeholder="Email"
                value={(*email).clone()}
                oninput={on_email_input}
                disabled={*submitting}
            />
            <input
                type="password"
                placeholder="Password"
                value={(*password).clone()}
                oninput={on_password_input}
                disabled={*submitting}
            />
            <button type="submit" disabled={*submitting || email.is_empty() || password.is_empty()}>
                {if *submitting { "Signing in..." } else { "Sign in" }}
            </button>
        </form>
    }
}
