//! Query input form for submitting food/restaurant questions.

use leptos::prelude::*;

#[cfg(feature = "hydrate")]
use crate::config::ApiConfig;
#[cfg(feature = "hydrate")]
use crate::net::poll::PollSettings;
use crate::state::query::QueryState;

/// Text input and submit button for the query widget.
///
/// Submitting spawns the submit-then-poll flow; submitting again while
/// a flow is outstanding starts a fresh generation, which invalidates
/// the earlier chain instead of racing it. Empty text is passed
/// through unchanged; the backend decides what it means.
#[component]
pub fn QueryForm() -> impl IntoView {
    let query = expect_context::<RwSignal<QueryState>>();
    // StoredValue keeps the handlers `Copy` while holding the config.
    #[cfg(feature = "hydrate")]
    let config = StoredValue::new(expect_context::<ApiConfig>());

    let input = RwSignal::new(String::new());

    // Teardown cancels whatever poll chain is still pending.
    on_cleanup(move || query.update(QueryState::cancel));

    let do_submit = move || {
        let text = input.get();
        #[cfg(feature = "hydrate")]
        {
            crate::net::poll::spawn_query(
                config.get_value(),
                query,
                text,
                PollSettings::default(),
            );
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = text;
        }
    };

    let on_click = move |_| do_submit();

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            do_submit();
        }
    };

    view! {
        <div class="query-form">
            <input
                class="query-form__input"
                type="text"
                placeholder="Enter your idea about the food/restaurant you want to eat"
                prop:value=move || input.get()
                on:input=move |ev| input.set(event_target_value(&ev))
                on:keydown=on_keydown
            />
            <button class="btn btn--primary query-form__submit" on:click=on_click>
                "Generate"
            </button>
        </div>
    }
}
