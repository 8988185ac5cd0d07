//! Submit-then-poll flow for one query.
//!
//! SYSTEM CONTEXT
//! ==============
//! `spawn_query` runs the whole lifecycle as a local async task: submit
//! the text, then check the status endpoint sequentially until the
//! backend completes, the attempt budget runs out, or a newer
//! submission supersedes this one. The generation token from
//! `QueryState::begin` gates every write, so a superseded or torn-down
//! flow quietly stops instead of racing the live one.

#[cfg(test)]
#[path = "poll_test.rs"]
mod poll_test;

use crate::net::types::QueryStatusResponse;

/// Placeholder answer when the backend completes without text.
pub const NO_DATA_PLACEHOLDER: &str = "No data returned";

/// Pacing and budget for the status-poll loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PollSettings {
    /// Delay between consecutive status checks.
    pub interval_ms: u64,
    /// Status checks allowed before the flow gives up.
    pub max_attempts: u32,
}

impl Default for PollSettings {
    /// 2 s between checks, capped at roughly five minutes of polling.
    fn default() -> Self {
        Self {
            interval_ms: 2000,
            max_attempts: 150,
        }
    }
}

/// What a successful status response means for the loop.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PollStep {
    /// Not done yet; check again after the interval.
    Continue,
    /// Done; show this answer text.
    Complete(String),
}

/// Map a status body to the next loop action.
///
/// An empty `answer_text` on completion falls back to the placeholder
/// rather than showing a blank result.
pub fn classify_status(status: QueryStatusResponse) -> PollStep {
    if status.is_complete {
        let answer = status
            .answer_text
            .filter(|text| !text.is_empty())
            .unwrap_or_else(|| NO_DATA_PLACEHOLDER.to_owned());
        PollStep::Complete(answer)
    } else {
        PollStep::Continue
    }
}

/// Error message when the attempt budget is exhausted.
pub fn timed_out_message(attempts: u32) -> String {
    format!("An error occurred: no answer after {attempts} status checks")
}

/// Spawn the submit-then-poll flow for `text` as a local async task.
///
/// Bumps the query state into `Loading` immediately; every later write
/// is tagged with the generation returned by that bump.
#[cfg(feature = "hydrate")]
pub fn spawn_query(
    config: crate::config::ApiConfig,
    query: leptos::prelude::RwSignal<crate::state::query::QueryState>,
    text: String,
    settings: PollSettings,
) {
    leptos::task::spawn_local(run_query(config, query, text, settings));
}

#[cfg(feature = "hydrate")]
async fn run_query(
    config: crate::config::ApiConfig,
    query: leptos::prelude::RwSignal<crate::state::query::QueryState>,
    text: String,
    settings: PollSettings,
) {
    use leptos::prelude::{GetUntracked, Update};

    let mut generation = 0;
    query.update(|s| generation = s.begin());

    let query_id = match crate::net::api::submit_query(&config, &text).await {
        Ok(id) => id,
        Err(err) => {
            query.update(|s| s.fail(generation, err.user_message()));
            return;
        }
    };

    if !query.get_untracked().is_current(generation) {
        return;
    }

    for _ in 0..settings.max_attempts {
        match crate::net::api::fetch_query_status(&config, &query_id).await {
            Ok(status) => match classify_status(status) {
                PollStep::Complete(answer) => {
                    query.update(|s| s.complete(generation, answer));
                    return;
                }
                PollStep::Continue => {}
            },
            Err(err) => {
                query.update(|s| s.fail(generation, err.user_message()));
                return;
            }
        }

        gloo_timers::future::sleep(std::time::Duration::from_millis(settings.interval_ms)).await;

        // Superseded or torn down while sleeping: stop without another GET.
        if !query.get_untracked().is_current(generation) {
            return;
        }
    }

    leptos::logging::warn!("query {query_id} exceeded the poll budget");
    query.update(|s| s.fail(generation, timed_out_message(settings.max_attempts)));
}
