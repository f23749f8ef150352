//! Client portal state: check-in form, homework list, journal.
//!
//! DESIGN
//! ======
//! Every mutation goes through the store and then reloads the affected list
//! from it, so what the page shows is always what was persisted.

#[cfg(test)]
#[path = "client_dashboard_test.rs"]
mod client_dashboard_test;

use crate::error::StoreError;
use crate::forms::{CheckInForm, CheckInFormError, JournalFormError, validate_journal_content};
use crate::store::Store;
use crate::types::{CheckIn, Homework, JournalEntry, Session};
use crate::util::route_guard::{AppRoute, redirect_for};

#[derive(Debug, thiserror::Error)]
pub enum SubmitError {
    #[error(transparent)]
    CheckIn(#[from] CheckInFormError),
    #[error(transparent)]
    Journal(#[from] JournalFormError),
    #[error(transparent)]
    Store(#[from] StoreError),
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ClientDashboard {
    pub client_id: String,
    pub user_name: String,
    pub check_ins: Vec<CheckIn>,
    pub homework: Vec<Homework>,
    pub journal: Vec<JournalEntry>,
    /// Pending check-in input.
    pub form: CheckInForm,
    /// Pending journal input.
    pub journal_draft: String,
}

impl ClientDashboard {
    /// Load the dashboard for a client session.
    ///
    /// `None` when the session is missing or belongs to a therapist; the
    /// route guard sends that visitor to `/login`.
    pub fn open(store: &Store, session: Option<&Session>) -> Option<Self> {
        if redirect_for(session, AppRoute::Client).is_some() {
            return None;
        }
        let session = session?;
        let mut dashboard = Self {
            client_id: session.user_id.clone(),
            user_name: session.user_name.clone(),
            check_ins: Vec::new(),
            homework: Vec::new(),
            journal: Vec::new(),
            form: CheckInForm::default(),
            journal_draft: String::new(),
        };
        dashboard.refresh(store);
        Some(dashboard)
    }

    /// Reload all three lists from storage.
    pub fn refresh(&mut self, store: &Store) {
        self.check_ins = store.list_check_ins(&self.client_id);
        self.homework = store.list_homework(&self.client_id);
        self.journal = store.list_journal_entries(&self.client_id);
    }

    /// Validate and save the pending check-in, then reset the form.
    ///
    /// On error the form keeps its input so the user can correct it.
    pub fn submit_check_in(&mut self, store: &Store) -> Result<CheckIn, SubmitError> {
        self.form.validate()?;
        let check_in = store.add_check_in(&self.client_id, &self.form)?;
        self.check_ins = store.list_check_ins(&self.client_id);
        self.form = CheckInForm::default();
        Ok(check_in)
    }

    pub fn toggle_homework(&mut self, store: &Store, homework_id: &str) -> Result<Option<bool>, StoreError> {
        let toggled = store.toggle_homework(homework_id)?;
        self.homework = store.list_homework(&self.client_id);
        Ok(toggled)
    }

    /// Save the journal draft unless it is blank, then clear it.
    pub fn submit_journal(&mut self, store: &Store) -> Result<JournalEntry, SubmitError> {
        let content = validate_journal_content(&self.journal_draft)?;
        let entry = store.add_journal_entry(&self.client_id, content)?;
        self.journal = store.list_journal_entries(&self.client_id);
        self.journal_draft.clear();
        Ok(entry)
    }
}
