//! Fixtures shared by store, state and guard tests.

use crate::clock::ManualClock;
use crate::config::StoreConfig;
use crate::storage::MemoryStorage;
use crate::store::Store;

/// 2025-12-21T08:00:00.000Z
pub(crate) const START_MS: i64 = 1_766_304_000_000;

/// Store over fresh in-memory storage with a pinned clock. The returned
/// handles share state with the store.
pub(crate) fn memory_store() -> (Store, MemoryStorage, ManualClock) {
    memory_store_with(StoreConfig::default())
}

pub(crate) fn memory_store_with(config: StoreConfig) -> (Store, MemoryStorage, ManualClock) {
    let storage = MemoryStorage::new();
    let clock = ManualClock::new(START_MS);
    let store = Store::new(Box::new(storage.clone()), Box::new(clock.clone()), config);
    (store, storage, clock)
}
