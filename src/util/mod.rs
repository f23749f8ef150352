//! Helpers shared by page-level code.
//!
//! SYSTEM CONTEXT
//! ==============
//! Kept apart from `state` so navigation concerns do not leak into the data
//! models pages render from.

pub mod route_guard;
