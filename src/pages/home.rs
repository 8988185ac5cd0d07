//! Home page with the query form and result area.

use leptos::prelude::*;

use crate::components::query_form::QueryForm;
use crate::components::result_panel::ResultPanel;

/// Single page of the app: heading, query form, and result area.
#[component]
pub fn HomePage() -> impl IntoView {
    view! {
        <div class="home-page">
            <header class="home-page__header">
                <h1>
                    "New York Restaurant Week"
                    <br/>
                    <span class="home-page__highlight">"Food Recommendation AI"</span>
                </h1>
                <p class="home-page__description">
                    "Ask questions about restaurant menus and get detailed answers."
                </p>
            </header>
            <QueryForm/>
            <ResultPanel/>
        </div>
    }
}
