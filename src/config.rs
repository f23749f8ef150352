//! Storage configuration: key naming and first-run seeding.
//!
//! DESIGN
//! ======
//! Defaults reproduce the prototype's fixed `terapia_*` keys. Environment
//! overrides only matter for native/SSR builds and tests; in the browser the
//! process environment is empty and the defaults always apply.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_KEY_PREFIX: &str = "terapia";
pub const DEFAULT_SEED_HOMEWORK: bool = true;

/// Tuning for [`crate::Store`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StoreConfig {
    /// Prefix prepended to every storage key (`<prefix>_session`, ...).
    pub key_prefix: String,
    /// Whether the first homework read writes the seed assignments.
    pub seed_homework: bool,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self { key_prefix: DEFAULT_KEY_PREFIX.to_owned(), seed_homework: DEFAULT_SEED_HOMEWORK }
    }
}

impl StoreConfig {
    /// Build config from environment variables.
    ///
    /// Optional:
    /// - `TERAPIA_STORAGE_PREFIX`: default `terapia`
    /// - `TERAPIA_SEED_HOMEWORK`: `true` (default) or `false`
    pub fn from_env() -> Self {
        let key_prefix = std::env::var("TERAPIA_STORAGE_PREFIX")
            .ok()
            .map(|v| v.trim().to_owned())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| DEFAULT_KEY_PREFIX.to_owned());
        Self { key_prefix, seed_homework: env_parse("TERAPIA_SEED_HOMEWORK", DEFAULT_SEED_HOMEWORK) }
    }

    /// Resolve the full set of storage keys for this prefix.
    pub fn keys(&self) -> StorageKeys {
        StorageKeys {
            session: format!("{}_session", self.key_prefix),
            checkins: format!("{}_checkins", self.key_prefix),
            homework: format!("{}_homework", self.key_prefix),
            journal: format!("{}_journal", self.key_prefix),
        }
    }
}

/// Concrete storage key for each persisted slot.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct StorageKeys {
    pub session: String,
    pub checkins: String,
    pub homework: String,
    pub journal: String,
}

pub(crate) fn env_parse<T>(key: &str, default: T) -> T
where
    T: std::str::FromStr + Copy,
{
    std::env::var(key)
        .ok()
        .and_then(|v| v.trim().parse::<T>().ok())
        .unwrap_or(default)
}
