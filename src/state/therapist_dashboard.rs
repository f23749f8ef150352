//! Therapist portal state: own client list and a read-only client overview.

#[cfg(test)]
#[path = "therapist_dashboard_test.rs"]
mod therapist_dashboard_test;

use crate::roster;
use crate::store::Store;
use crate::types::{CheckIn, Client, Homework, JournalEntry, Session};
use crate::util::route_guard::{AppRoute, redirect_for};

/// Everything a therapist sees for one client.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientOverview {
    pub client: Client,
    pub check_ins: Vec<CheckIn>,
    pub homework: Vec<Homework>,
    pub journal: Vec<JournalEntry>,
}

impl ClientOverview {
    pub fn load(store: &Store, client: Client) -> Self {
        let check_ins = store.list_check_ins(&client.id);
        let homework = store.list_homework(&client.id);
        let journal = store.list_journal_entries(&client.id);
        Self { client, check_ins, homework, journal }
    }

    pub fn completed_homework(&self) -> usize {
        self.homework.iter().filter(|h| h.completed).count()
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TherapistDashboard {
    pub therapist_id: String,
    pub user_name: String,
    pub clients: Vec<Client>,
    /// Client currently opened from the list, if any.
    pub selected: Option<ClientOverview>,
}

impl TherapistDashboard {
    /// Build the dashboard for a therapist session; `None` for any other session.
    pub fn open(session: Option<&Session>) -> Option<Self> {
        if redirect_for(session, AppRoute::Therapist).is_some() {
            return None;
        }
        let session = session?;
        Some(Self {
            therapist_id: session.user_id.clone(),
            user_name: session.user_name.clone(),
            clients: roster::clients_by_therapist(&session.user_id),
            selected: None,
        })
    }

    /// Open one of this therapist's clients. Unknown or foreign ids leave the
    /// current selection untouched and return `None`.
    pub fn select_client(&mut self, store: &Store, client_id: &str) -> Option<&ClientOverview> {
        let client = self.clients.iter().find(|c| c.id == client_id)?.clone();
        self.selected = Some(ClientOverview::load(store, client));
        self.selected.as_ref()
    }

    pub fn back_to_list(&mut self) {
        self.selected = None;
    }
}
