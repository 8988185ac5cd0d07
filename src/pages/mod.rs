//! Page-level view modules.

pub mod home;
