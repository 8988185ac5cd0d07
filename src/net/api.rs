//! HTTP calls to the query backend.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning transport errors since these
//! endpoints are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses are parsed for an `error` field and surfaced as
//! [`ApiError::Application`]; request failures become
//! [`ApiError::Transport`]. Callers treat both as terminal.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use crate::config::ApiConfig;
use crate::net::error::ApiError;
use crate::net::types::QueryStatusResponse;
#[cfg(feature = "hydrate")]
use crate::net::types::SubmitQueryRequest;
#[cfg(any(test, feature = "hydrate"))]
use crate::net::types::SubmitQueryResponse;

/// Pull the query identifier out of a 2xx submit response.
///
/// A success body without a usable id leaves nothing to poll, so it is
/// treated as an application error with the generic message.
#[cfg(any(test, feature = "hydrate"))]
fn extract_query_id(body: SubmitQueryResponse) -> Result<String, ApiError> {
    match body.query_id.filter(|id| !id.trim().is_empty()) {
        Some(id) => Ok(id),
        None => Err(ApiError::application(body.error)),
    }
}

/// Submit `text` via `POST /submit_query` and return the query id.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails, the server rejects
/// the submission, or the success body carries no query id.
pub async fn submit_query(config: &ApiConfig, text: &str) -> Result<String, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let payload = SubmitQueryRequest {
            query_text: text.to_owned(),
        };
        let resp = gloo_net::http::Request::post(&config.submit_url())
            .header("Authorization", &config.bearer_header())
            .json(&payload)
            .map_err(|e| ApiError::Transport(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        // Error bodies share the response shape; parse best-effort so a
        // non-JSON body still maps to the generic message.
        let body: SubmitQueryResponse = resp.json().await.unwrap_or_default();
        if !resp.ok() {
            return Err(ApiError::application(body.error));
        }
        extract_query_id(body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, text);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}

/// Check a submitted query via `GET /get_query/{query_id}`.
///
/// # Errors
///
/// Returns an [`ApiError`] when the request fails or the server
/// responds with a non-2xx status.
pub async fn fetch_query_status(
    config: &ApiConfig,
    query_id: &str,
) -> Result<QueryStatusResponse, ApiError> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&config.status_url(query_id))
            .header("accept", "application/json")
            .send()
            .await
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        let body: QueryStatusResponse = resp.json().await.unwrap_or_default();
        if !resp.ok() {
            return Err(ApiError::application(body.error));
        }
        Ok(body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (config, query_id);
        Err(ApiError::Transport("not available on server".to_owned()))
    }
}
