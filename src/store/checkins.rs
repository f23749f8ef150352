//! Weekly check-ins: append and list newest-first.

#[cfg(test)]
#[path = "checkins_test.rs"]
mod checkins_test;

use log::debug;

use super::{Store, newest_first, owned_by};
use crate::clock::format_timestamp;
use crate::error::StoreError;
use crate::forms::CheckInForm;
use crate::ids::{RecordKind, next_id};
use crate::types::CheckIn;

impl Store {
    /// Record a check-in for `client_id` stamped with the current time.
    ///
    /// Scores are stored as given; range checks belong to
    /// [`CheckInForm::validate`] at the call site.
    pub fn add_check_in(&self, client_id: &str, form: &CheckInForm) -> Result<CheckIn, StoreError> {
        let mut checkins: Vec<CheckIn> = self.load_or_default(&self.keys.checkins);
        let now = self.now_ms();
        let id = next_id(RecordKind::CheckIn, now, |id| checkins.iter().any(|c| c.id == id));

        let check_in = CheckIn {
            id,
            client_id: client_id.to_owned(),
            date: format_timestamp(now),
            mood: form.mood,
            stress: form.stress,
            sleep: form.sleep,
            notes: form.notes.clone(),
        };
        checkins.push(check_in.clone());
        self.write_json(&self.keys.checkins, &checkins)?;

        debug!("check-in {} saved for {client_id}", check_in.id);
        Ok(check_in)
    }

    /// Check-ins for `client_id`, most recent first.
    pub fn list_check_ins(&self, client_id: &str) -> Vec<CheckIn> {
        let all: Vec<CheckIn> = self.load_or_default(&self.keys.checkins);
        newest_first(owned_by(all, client_id))
    }
}
