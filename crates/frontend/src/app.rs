//! Application shell: routes, guard, and layout.

use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::{use_auth, use_is_logged_in, AuthProvider};
use crate::components::{LoadingSpinner, MenuBar};
use crate::pages::{AdminArea, FactBoard, SignInPage};

/// Application routes
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/sign-in")]
    SignIn,
    #[at("/admin-area")]
    AdminArea,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
pub fn app() -> Html {
    html! {
        <AuthProvider>
            <BrowserRouter>
                <AppContent />
            </BrowserRouter>
        </AuthProvider>
    }
}

#[function_component(AppContent)]
fn app_content() -> Html {
    let auth = use_auth();

    // Show loading state while the mirrored session is being restored.
    if auth.is_loading {
        return html! { <LoadingSpinner text={Some("Loading...".to_string())} /> };
    }

    html! {
        <>
            <MenuBar />
            <main class="content">
                <Switch<Route> render={switch} />
            </main>
        </>
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Home => html! { <FactBoard /> },
        Route::SignIn => html! { <SignInPage /> },
        Route::AdminArea => html! { <RequireAuth><AdminArea /></RequireAuth> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

/// Route guard props
#[derive(Properties, PartialEq)]
pub struct RequireAuthProps {
    pub children: Children,
}

/// Guard for protected routes: denies activation and redirects to the
/// sign-in page when the storage-derived login check fails.
#[function_component(RequireAuth)]
pub fn require_auth(props: &RequireAuthProps) -> Html {
    if use_is_logged_in() {
        html! { <>{ props.children.clone() }</> }
    } else {
        html! { <Redirect<Route> to={Route::SignIn} /> }
    }
}
