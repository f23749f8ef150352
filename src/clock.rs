//! Wall clock and timestamp text format.
//!
//! DESIGN
//! ======
//! Records store creation time as `YYYY-MM-DDTHH:MM:SS.mmmZ`, the format the
//! browser's `Date.toISOString()` produces, and ordering is computed from the
//! parsed instant rather than the raw string. The clock is a trait so tests
//! can pin time and step it explicitly.

#[cfg(test)]
#[path = "clock_test.rs"]
mod clock_test;

use std::cell::Cell;
use std::rc::Rc;

use time::format_description::BorrowedFormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Date, OffsetDateTime, PrimitiveDateTime};

const TIMESTAMP_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z");
const DATE_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]");
const LOCAL_FORMAT: &[BorrowedFormatItem<'static>] = format_description!("[year]-[month]-[day]T[hour]:[minute]:[second]");
const LOCAL_FRACTION_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond]");

/// Source of "now" in milliseconds since the Unix epoch.
pub trait Clock {
    fn now_ms(&self) -> i64;
}

/// Real wall clock: `Date.now()` in the browser, `SystemTime` elsewhere.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    #[allow(clippy::cast_possible_truncation)]
    fn now_ms(&self) -> i64 {
        #[cfg(feature = "hydrate")]
        {
            js_sys::Date::now() as i64
        }
        #[cfg(not(feature = "hydrate"))]
        {
            use std::time::{SystemTime, UNIX_EPOCH};
            let Ok(dur) = SystemTime::now().duration_since(UNIX_EPOCH) else {
                return 0;
            };
            i64::try_from(dur.as_millis()).unwrap_or(0)
        }
    }
}

/// Hand-driven clock. Clones share the same instant.
#[derive(Clone, Debug, Default)]
pub struct ManualClock {
    now: Rc<Cell<i64>>,
}

impl ManualClock {
    pub fn new(start_ms: i64) -> Self {
        Self { now: Rc::new(Cell::new(start_ms)) }
    }

    pub fn set(&self, ms: i64) {
        self.now.set(ms);
    }

    pub fn advance(&self, delta_ms: i64) {
        self.now.set(self.now.get() + delta_ms);
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.now.get()
    }
}

/// Render epoch millis as an ISO-8601 UTC timestamp with millisecond precision.
///
/// Instants outside the representable calendar range fall back to the raw
/// millisecond count.
pub fn format_timestamp(ms: i64) -> String {
    OffsetDateTime::from_unix_timestamp_nanos(i128::from(ms) * 1_000_000)
        .ok()
        .and_then(|dt| dt.format(TIMESTAMP_FORMAT).ok())
        .unwrap_or_else(|| ms.to_string())
}

/// Parse a stored timestamp back to epoch millis.
///
/// Accepts RFC 3339 date-times, date-times without an offset (read as UTC)
/// and bare `YYYY-MM-DD` dates (read as UTC midnight). Anything else is `None`.
#[allow(clippy::cast_possible_truncation)]
pub fn parse_timestamp(raw: &str) -> Option<i64> {
    let raw = raw.trim();
    let instant = OffsetDateTime::parse(raw, &Rfc3339)
        .or_else(|_| PrimitiveDateTime::parse(raw, LOCAL_FORMAT).map(PrimitiveDateTime::assume_utc))
        .or_else(|_| PrimitiveDateTime::parse(raw, LOCAL_FRACTION_FORMAT).map(PrimitiveDateTime::assume_utc))
        .or_else(|_| Date::parse(raw, DATE_FORMAT).map(|d| d.midnight().assume_utc()))
        .ok()?;
    Some((instant.unix_timestamp_nanos() / 1_000_000) as i64)
}
