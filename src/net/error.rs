//! Failure taxonomy for query API calls.
//!
//! ERROR HANDLING
//! ==============
//! Every failure is terminal for the current query: the flow stops and
//! the message from `user_message` is shown as plain text. Transport
//! and application failures are kept distinct so the UI wording can
//! match what each one means.

#[cfg(test)]
#[path = "error_test.rs"]
mod error_test;

use thiserror::Error;

/// Generic message when the server gives no usable `error` field.
pub const GENERIC_ERROR: &str = "An error occurred";

/// A failed query API call.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The request never completed (DNS, refused connection, timeout).
    #[error("An error occurred: {0}")]
    Transport(String),
    /// The backend answered with a non-2xx status or an error body.
    #[error("{0}")]
    Application(String),
}

impl ApiError {
    /// Build an application error from an optional server `error`
    /// field, falling back to the generic message.
    pub fn application(server_error: Option<String>) -> Self {
        Self::Application(
            server_error
                .filter(|msg| !msg.trim().is_empty())
                .unwrap_or_else(|| GENERIC_ERROR.to_owned()),
        )
    }

    /// Text shown to the user for this failure.
    pub fn user_message(&self) -> String {
        self.to_string()
    }
}
