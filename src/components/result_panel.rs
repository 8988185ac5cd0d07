//! Result area rendering the current query outcome.

use leptos::prelude::*;

use crate::state::query::{QueryPhase, QueryState};
use crate::util::markdown::render_markdown_html;

/// Renders the result area purely from the query phase.
///
/// Loading shows a progress row, errors show plain text, and completed
/// answers render as markdown with raw HTML stripped.
#[component]
pub fn ResultPanel() -> impl IntoView {
    let query = expect_context::<RwSignal<QueryState>>();

    view! {
        <div class="result-panel">
            {move || {
                let state = query.get();
                match state.phase {
                    QueryPhase::Idle => ().into_any(),
                    QueryPhase::Loading => view! {
                        <div class="result-panel__loading">
                            <p>"Loading..."</p>
                            <div class="result-panel__spinner" aria-hidden="true"></div>
                        </div>
                    }
                        .into_any(),
                    QueryPhase::Errored => {
                        let message = state.error.unwrap_or_default();
                        view! { <p class="result-panel__error">{message}</p> }.into_any()
                    }
                    QueryPhase::Completed => {
                        let rendered =
                            render_markdown_html(state.answer.as_deref().unwrap_or_default());
                        view! {
                            <div class="result-panel__markdown" inner_html=rendered></div>
                        }
                            .into_any()
                    }
                }
            }}
        </div>
    }
}
