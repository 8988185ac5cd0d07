//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components read and write the shared query state from Leptos
//! context providers; the form starts the flow, the panel renders it.

pub mod query_form;
pub mod result_panel;
