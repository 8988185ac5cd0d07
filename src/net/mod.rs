//! Networking modules for the query HTTP API.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `poll` drives the submit-then-poll
//! flow, `types` defines the wire schema, and `error` is the failure
//! taxonomy surfaced to the UI.

pub mod api;
pub mod error;
pub mod poll;
pub mod types;
