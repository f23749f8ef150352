//! String key-value backends beneath the store.
//!
//! SYSTEM CONTEXT
//! ==============
//! `localStorage` is the only durable store in the prototype. Putting it
//! behind [`KeyValueStore`] keeps web-sys glue in one hydrate-only file and
//! lets SSR builds and tests run the same store code against a detached or
//! in-memory backend.


#[cfg(feature = "hydrate")]
pub mod browser;
pub mod memory;

#[cfg(feature = "hydrate")]
pub use browser::LocalStorage;
pub use memory::MemoryStorage;

use crate::error::StoreError;

/// Minimal `Storage`-shaped interface: string keys, string values.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StoreError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StoreError>;
    fn remove_item(&self, key: &str) -> Result<(), StoreError>;

    /// `true` when there is no real storage behind this backend.
    fn is_detached(&self) -> bool {
        false
    }
}

/// Backend used outside the browser: nothing is ever stored.
#[derive(Clone, Copy, Debug, Default)]
pub struct DetachedStorage;

impl KeyValueStore for DetachedStorage {
    fn get_item(&self, _key: &str) -> Result<Option<String>, StoreError> {
        Ok(None)
    }

    fn set_item(&self, _key: &str, _value: &str) -> Result<(), StoreError> {
        Ok(())
    }

    fn remove_item(&self, _key: &str) -> Result<(), StoreError> {
        Ok(())
    }

    fn is_detached(&self) -> bool {
        true
    }
}

/// Pick the backend for the current environment.
///
/// In a hydrated browser build this is `window.localStorage`; if the browser
/// refuses storage, or in SSR/native builds, it is [`DetachedStorage`].
pub fn default_backend() -> Box<dyn KeyValueStore> {
    #[cfg(feature = "hydrate")]
    {
        match LocalStorage::open() {
            Ok(storage) => return Box::new(storage),
            Err(e) => log::warn!("{e}; falling back to detached storage"),
        }
    }
    Box::new(DetachedStorage)
}
