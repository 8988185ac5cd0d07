//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is kept in plain structs mutated through small methods so the
//! submit/poll lifecycle can be unit tested without a reactive runtime.

pub mod query;
