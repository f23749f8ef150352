//! Client-side state models.
//!
//! DESIGN
//! ======
//! State is split by portal (`session`, `client_dashboard`,
//! `therapist_dashboard`). Each model loads from and writes through a
//! `&Store` passed in by the caller; nothing here reaches for global storage.

pub mod client_dashboard;
pub mod session;
pub mod therapist_dashboard;
