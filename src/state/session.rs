//! Login session state for the current browser visit.
//!
//! SYSTEM CONTEXT
//! ==============
//! Created by `login`, destroyed by `logout`. Route guards and both
//! dashboards read it; pages receive it as a context signal rather than
//! re-reading storage themselves.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::error::StoreError;
use crate::roster;
use crate::store::Store;
use crate::types::{Role, Session};

/// Session context tracking the logged-in user and loading status.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    pub session: Option<Session>,
    pub loading: bool,
}

impl SessionState {
    /// State before storage has been read (first render, SSR).
    pub fn pending() -> Self {
        Self { session: None, loading: true }
    }

    /// Read the stored session.
    pub fn load(store: &Store) -> Self {
        Self { session: store.get_session(), loading: false }
    }

    pub fn role(&self) -> Option<Role> {
        self.session.as_ref().map(|s| s.role)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LoginError {
    #[error("no {role} with id {user_id}")]
    UnknownUser { role: Role, user_id: String },
    #[error(transparent)]
    Store(#[from] StoreError),
}

/// Log in as roster user `user_id` in `role` and persist the session.
///
/// Mock login: no credentials, the user only has to exist on the roster
/// under that role.
pub fn login(store: &Store, role: Role, user_id: &str) -> Result<Session, LoginError> {
    let user_name =
        roster::user_name(role, user_id).ok_or_else(|| LoginError::UnknownUser { role, user_id: user_id.to_owned() })?;
    let session = Session { role, user_id: user_id.to_owned(), user_name };
    store.set_session(&session)?;
    log::info!("logged in as {role} {}", session.user_id);
    Ok(session)
}

pub fn logout(store: &Store) -> Result<(), StoreError> {
    store.clear_session()
}
