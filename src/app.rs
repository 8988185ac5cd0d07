//! Root application component with routing and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};

use crate::config::ApiConfig;
use crate::pages::home::HomePage;
use crate::state::query::QueryState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the shared query state and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let query = RwSignal::new(QueryState::default());
    provide_context(query);

    view! {
        <Stylesheet id="leptos" href="/pkg/nycfood.css"/>
        <Title text="NYC Restaurant Week"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=ConfigGate/>
            </Routes>
        </Router>
    }
}

/// Validates backend configuration before mounting the query form.
///
/// Missing `API_ENDPOINT`/`NYC_TOKEN` renders the diagnostic instead
/// of a form whose every request is doomed.
#[component]
fn ConfigGate() -> impl IntoView {
    match ApiConfig::from_build_env() {
        Ok(config) => {
            provide_context(config);
            view! { <HomePage/> }.into_any()
        }
        Err(err) => {
            leptos::logging::warn!("refusing to mount query form: {err}");
            view! {
                <div class="config-error">
                    <h1>"Configuration error"</h1>
                    <p>{err.to_string()}</p>
                </div>
            }
                .into_any()
        }
    }
}
