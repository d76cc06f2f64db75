//! Admin area (protected)

use critterfacts_core::Fact;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::auth::use_session;
use crate::components::FactCard;
use crate::services::FactApiService;

#[function_component(AdminArea)]
pub fn admin_area() -> Html {
    let session = use_session();

    let lookup_id = use_state(String::new);
    let looked_up = use_state(|| Option::<Fact>::None);
    let lookup_error = use_state(|| Option::<String>::None);

    let on_id_input = {
        let lookup_id = lookup_id.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            lookup_id.set(input.value());
        })
    };

    let on_lookup = {
        let lookup_id = lookup_id.clone();
        let looked_up = looked_up.clone();
        let lookup_error = lookup_error.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let id = (*lookup_id).clone();
            if id.is_empty() {
                return;
            }
            let looked_up = looked_up.clone();
            let lookup_error = lookup_error.clone();
            spawn_local(async move {
                match FactApiService::new().get_fact(Some(id)).await {
                    Ok(fact) => {
                        looked_up.set(Some(fact));
                        lookup_error.set(None);
                    }
                    Err(message) => {
                        looked_up.set(None);
                        lookup_error.set(Some(message));
                    }
                }
            });
        })
    };

    let greeting = match &session {
        Some(session) => session
            .display_name
            .clone()
            .unwrap_or_else(|| session.email.clone()),
        None => "administrator".to_string(),
    };

    html! {
        <div class="admin-area">
            <h1>{format!("Welcome, {greeting}")}</h1>

            <form class="fact-lookup" onsubmit={on_lookup}>
                <input
                    type="text"
                    placeholder="Fact id"
                    value={(*lookup_id).clone()}
                    oninput={on_id_input}
                />
                <button type="submit" disabled={lookup_id.is_empty()}>{"Look up"}</button>
            </form>

            if let Some(message) = &*lookup_error {
                <p class="lookup-error">{message}</p>
            }
            if let Some(fact) = &*looked_up {
                <FactCard
                    text={fact.text.clone()}
                    source={fact.source.clone()}
                    category={fact.category.clone()}
                    image={fact.image.clone()}
                />
            }
        </div>
    }
}
