//! Local persistence layer: the only seam between UI state and stored data.
//!
//! DESIGN
//! ======
//! Each record kind lives as one JSON array under its own key. Every
//! mutation is a whole-collection read-modify-write: load the array, change
//! it, write it back. Data volumes are a handful of records per client, so
//! there is no index.
//!
//! ERROR HANDLING
//! ==============
//! The typed operations never fail on reads: missing data reads as empty and
//! corrupt data is logged and read as empty. `read_json` and `verify` expose
//! the underlying distinction for callers that care. Writes return
//! `StoreError` because a browser may refuse them (quota, private mode).
//!
//! TRADE-OFFS
//! ==========
//! Two tabs writing the same key race last-writer-wins. Accepted for a
//! single-user prototype.

mod checkins;
mod homework;
mod journal;
mod session;

#[cfg(test)]
pub(crate) mod test_helpers;


use std::cmp::Reverse;

use log::warn;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::clock::{Clock, SystemClock, parse_timestamp};
use crate::config::{StorageKeys, StoreConfig};
use crate::error::StoreError;
use crate::storage::{DetachedStorage, KeyValueStore, default_backend};
use crate::types::{CheckIn, Dated, Homework, JournalEntry, Owned, Session};

/// Typed access to the `terapia_*` keys of a key-value backend.
pub struct Store {
    backend: Box<dyn KeyValueStore>,
    clock: Box<dyn Clock>,
    config: StoreConfig,
    keys: StorageKeys,
}

impl Store {
    pub fn new(backend: Box<dyn KeyValueStore>, clock: Box<dyn Clock>, config: StoreConfig) -> Self {
        let keys = config.keys();
        Self { backend, clock, config, keys }
    }

    /// Store for the running environment: `localStorage` in the browser,
    /// detached everywhere else.
    pub fn open() -> Self {
        Self::new(default_backend(), Box::new(SystemClock), StoreConfig::from_env())
    }

    /// Store with no backing storage, as used during server-side rendering.
    pub fn detached() -> Self {
        Self::new(Box::new(DetachedStorage), Box::new(SystemClock), StoreConfig::default())
    }

    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    pub fn keys(&self) -> &StorageKeys {
        &self.keys
    }

    /// `true` when writes go nowhere (SSR or storage refused by the browser).
    pub fn is_detached(&self) -> bool {
        self.backend.is_detached()
    }

    /// Read and decode the value under `key`.
    ///
    /// `Ok(None)` means nothing is stored (an empty string counts as nothing);
    /// `Err(StoreError::Corrupt)` means something is stored but does not
    /// decode as `T`.
    pub fn read_json<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, StoreError> {
        let Some(raw) = self.backend.get_item(key)? else {
            return Ok(None);
        };
        if raw.is_empty() {
            return Ok(None);
        }
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StoreError::Corrupt { key: key.to_owned(), source })
    }

    /// Encode `value` and overwrite `key`.
    pub fn write_json<T: Serialize + ?Sized>(&self, key: &str, value: &T) -> Result<(), StoreError> {
        let raw = serde_json::to_string(value).map_err(|source| StoreError::Encode { key: key.to_owned(), source })?;
        self.backend.set_item(key, &raw)
    }

    /// Decode every known key, returning the first failure.
    pub fn verify(&self) -> Result<(), StoreError> {
        self.read_json::<Session>(&self.keys.session)?;
        self.read_json::<Vec<CheckIn>>(&self.keys.checkins)?;
        self.read_json::<Vec<Homework>>(&self.keys.homework)?;
        self.read_json::<Vec<JournalEntry>>(&self.keys.journal)?;
        Ok(())
    }

    /// Typed read that degrades to `T::default()` on missing or unreadable data.
    fn load_or_default<T: DeserializeOwned + Default>(&self, key: &str) -> T {
        match self.read_json(key) {
            Ok(value) => value.unwrap_or_default(),
            Err(e) => {
                warn!("[{}] {e}; reading as empty", e.error_code());
                T::default()
            }
        }
    }

    fn now_ms(&self) -> i64 {
        self.clock.now_ms()
    }
}

/// Keep only records owned by `client_id`, preserving storage order.
fn owned_by<T: Owned>(items: Vec<T>, client_id: &str) -> Vec<T> {
    items.into_iter().filter(|item| item.client_id() == client_id).collect()
}

/// Sort newest first. Stable, so equal timestamps keep insertion order;
/// unparseable dates sort last.
fn newest_first<T: Dated>(mut items: Vec<T>) -> Vec<T> {
    items.sort_by_key(|item| Reverse(parse_timestamp(item.date())));
    items
}
