//! Stored record types shared by the store, roster and UI state.
//!
//! DESIGN
//! ======
//! Field names serialize in camelCase so values written by this crate are
//! byte-compatible with data already sitting in a browser profile under the
//! `terapia_*` keys.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use std::fmt;

use serde::{Deserialize, Serialize};

/// Which portal a session belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Therapist,
}

impl Role {
    /// Lowercase wire name (`"client"` / `"therapist"`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Client => "client",
            Self::Therapist => "therapist",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The logged-in role/user pair for the current browser visit.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Session {
    pub role: Role,
    /// Roster id of the client or therapist.
    pub user_id: String,
    /// Display name captured at login.
    pub user_name: String,
}

/// A client on the static roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: String,
    pub name: String,
    pub email: String,
    /// Therapist responsible for this client.
    pub therapist_id: String,
}

/// A therapist on the static roster.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Therapist {
    pub id: String,
    pub name: String,
    pub email: String,
}

/// A weekly self-report.
///
/// Scores are meant to be 1..=5 but are stored as plain integers; the range
/// is checked by [`crate::forms::CheckInForm::validate`] at submission.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CheckIn {
    /// `checkin_<epoch-millis>`.
    pub id: String,
    pub client_id: String,
    /// Creation time, ISO-8601 UTC.
    pub date: String,
    pub mood: i32,
    pub stress: i32,
    pub sleep: i32,
    pub notes: String,
}

/// A therapist-assigned task.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Homework {
    pub id: String,
    pub client_id: String,
    pub title: String,
    pub description: String,
    pub completed: bool,
    /// Calendar date (`YYYY-MM-DD`).
    pub assigned_date: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub due_date: Option<String>,
}

/// A free-text journal note written by a client.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JournalEntry {
    /// `journal_<epoch-millis>`.
    pub id: String,
    pub client_id: String,
    /// Creation time, ISO-8601 UTC.
    pub date: String,
    pub content: String,
}

/// Records that carry a creation timestamp and can be listed newest-first.
pub trait Dated {
    fn date(&self) -> &str;
}

impl Dated for CheckIn {
    fn date(&self) -> &str {
        &self.date
    }
}

impl Dated for JournalEntry {
    fn date(&self) -> &str {
        &self.date
    }
}

/// Records owned by a single client.
pub trait Owned {
    fn client_id(&self) -> &str;
}

impl Owned for CheckIn {
    fn client_id(&self) -> &str {
        &self.client_id
    }
}

impl Owned for Homework {
    fn client_id(&self) -> &str {
        &self.client_id
    }
}

impl Owned for JournalEntry {
    fn client_id(&self) -> &str {
        &self.client_id
    }
}
