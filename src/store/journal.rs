//! Journal entries: append and list newest-first, like check-ins.

#[cfg(test)]
#[path = "journal_test.rs"]
mod journal_test;

use log::debug;

use super::{Store, newest_first, owned_by};
use crate::clock::format_timestamp;
use crate::error::StoreError;
use crate::ids::{RecordKind, next_id};
use crate::types::JournalEntry;

impl Store {
    pub fn add_journal_entry(&self, client_id: &str, content: &str) -> Result<JournalEntry, StoreError> {
        let mut entries: Vec<JournalEntry> = self.load_or_default(&self.keys.journal);
        let now = self.now_ms();
        let id = next_id(RecordKind::Journal, now, |id| entries.iter().any(|e| e.id == id));

        let entry = JournalEntry {
            id,
            client_id: client_id.to_owned(),
            date: format_timestamp(now),
            content: content.to_owned(),
        };
        entries.push(entry.clone());
        self.write_json(&self.keys.journal, &entries)?;

        debug!("journal entry {} saved for {client_id}", entry.id);
        Ok(entry)
    }

    /// Journal entries for `client_id`, most recent first.
    pub fn list_journal_entries(&self, client_id: &str) -> Vec<JournalEntry> {
        let all: Vec<JournalEntry> = self.load_or_default(&self.keys.journal);
        newest_first(owned_by(all, client_id))
    }
}
