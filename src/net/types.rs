//! Wire DTOs for the query API.
//!
//! DESIGN
//! ======
//! Every response field is optional with serde defaults so partial or
//! error-shaped bodies deserialize instead of failing; callers decide
//! what a missing field means.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// Body of `POST /submit_query`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitQueryRequest {
    /// Raw user text, passed through without client-side validation.
    pub query_text: String,
}

/// Response body of `POST /submit_query`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmitQueryResponse {
    /// Opaque token correlating status checks with this submission.
    #[serde(default)]
    pub query_id: Option<String>,
    /// Server-provided error message on failure bodies.
    #[serde(default)]
    pub error: Option<String>,
}

/// Response body of `GET /get_query/{query_id}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryStatusResponse {
    /// Whether the backend has finished processing the query.
    #[serde(default)]
    pub is_complete: bool,
    /// Markdown answer text, present once complete.
    #[serde(default)]
    pub answer_text: Option<String>,
    /// Server-provided error message on failure bodies.
    #[serde(default)]
    pub error: Option<String>,
}
