//! Homework: seeded on first read, mutated only by the completion toggle.

#[cfg(test)]
#[path = "homework_test.rs"]
mod homework_test;

use log::{debug, warn};

use super::{Store, owned_by};
use crate::error::StoreError;
use crate::seed;
use crate::types::Homework;

impl Store {
    /// Homework for `client_id`, in storage order.
    pub fn list_homework(&self, client_id: &str) -> Vec<Homework> {
        owned_by(self.load_homework(), client_id)
    }

    pub fn homework_by_id(&self, homework_id: &str) -> Option<Homework> {
        self.load_homework().into_iter().find(|h| h.id == homework_id)
    }

    /// Flip `completed` on `homework_id` and persist.
    ///
    /// Returns the new flag, or `Ok(None)` (nothing written) when no homework
    /// has that id.
    pub fn toggle_homework(&self, homework_id: &str) -> Result<Option<bool>, StoreError> {
        let mut homework = self.load_homework();
        let Some(item) = homework.iter_mut().find(|h| h.id == homework_id) else {
            debug!("toggle ignored: no homework {homework_id}");
            return Ok(None);
        };
        item.completed = !item.completed;
        let completed = item.completed;

        self.write_json(&self.keys.homework, &homework)?;
        debug!("homework {homework_id} completed={completed}");
        Ok(Some(completed))
    }

    /// Full homework collection.
    ///
    /// Nothing stored yet: write the seed set (when enabled) and return it.
    /// Unreadable data: return the seed set without writing.
    fn load_homework(&self) -> Vec<Homework> {
        match self.read_json::<Vec<Homework>>(&self.keys.homework) {
            Ok(Some(homework)) => homework,
            Ok(None) => {
                if !self.config.seed_homework {
                    return Vec::new();
                }
                let initial = seed::initial_homework();
                if let Err(e) = self.write_json(&self.keys.homework, &initial) {
                    warn!("[{}] {e}; seed homework not persisted", e.error_code());
                }
                initial
            }
            Err(e) => {
                warn!("[{}] {e}; using seed homework", e.error_code());
                if self.config.seed_homework { seed::initial_homework() } else { Vec::new() }
            }
        }
    }
}
