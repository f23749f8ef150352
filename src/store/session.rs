//! The single session slot.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use log::warn;

use super::Store;
use crate::error::StoreError;
use crate::types::Session;

impl Store {
    /// Current session, or `None` if absent or unreadable.
    pub fn get_session(&self) -> Option<Session> {
        match self.read_json(&self.keys.session) {
            Ok(session) => session,
            Err(e) => {
                warn!("[{}] {e}; treating session as absent", e.error_code());
                None
            }
        }
    }

    /// Overwrite the session slot.
    pub fn set_session(&self, session: &Session) -> Result<(), StoreError> {
        self.write_json(&self.keys.session, session)
    }

    /// Delete the session slot.
    pub fn clear_session(&self) -> Result<(), StoreError> {
        self.backend.remove_item(&self.keys.session)
    }
}
