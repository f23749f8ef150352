//! Record id generation: `<kind>_<epoch-millis>`.
//!
//! Two records of the same kind created in the same millisecond would share
//! an id under the bare scheme. Callers pass the ids already present in the
//! collection; the millisecond component is bumped until it is free.

#[cfg(test)]
#[path = "ids_test.rs"]
mod ids_test;

/// Record families that get generated ids.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RecordKind {
    CheckIn,
    Journal,
}

impl RecordKind {
    pub fn prefix(self) -> &'static str {
        match self {
            Self::CheckIn => "checkin",
            Self::Journal => "journal",
        }
    }
}

/// Build an id for `kind` at `now_ms`, skipping any id for which `is_taken` is true.
///
/// The search wraps to zero past `i64::MAX`.
pub fn next_id<F>(kind: RecordKind, now_ms: i64, is_taken: F) -> String
where
    F: Fn(&str) -> bool,
{
    let mut ms = now_ms;
    loop {
        let id = format!("{}_{ms}", kind.prefix());
        if !is_taken(&id) {
            return id;
        }
        ms = ms.checked_add(1).unwrap_or(0);
    }
}
