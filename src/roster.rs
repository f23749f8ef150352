//! Read-only lookups over the static client/therapist roster.
//!
//! SYSTEM CONTEXT
//! ==============
//! The roster is not persisted; login and the therapist dashboard resolve
//! users against it directly.

#[cfg(test)]
#[path = "roster_test.rs"]
mod roster_test;

use crate::seed;
use crate::types::{Client, Role, Therapist};

pub fn list_clients() -> Vec<Client> {
    seed::clients()
}

pub fn list_therapists() -> Vec<Therapist> {
    seed::therapists()
}

pub fn client_by_id(id: &str) -> Option<Client> {
    seed::clients().into_iter().find(|c| c.id == id)
}

pub fn therapist_by_id(id: &str) -> Option<Therapist> {
    seed::therapists().into_iter().find(|t| t.id == id)
}

/// Clients assigned to `therapist_id`, in roster order.
pub fn clients_by_therapist(therapist_id: &str) -> Vec<Client> {
    seed::clients()
        .into_iter()
        .filter(|c| c.therapist_id == therapist_id)
        .collect()
}

/// Display name for a roster user of the given role, if that user exists.
pub fn user_name(role: Role, user_id: &str) -> Option<String> {
    match role {
        Role::Client => client_by_id(user_id).map(|c| c.name),
        Role::Therapist => therapist_by_id(user_id).map(|t| t.name),
    }
}
