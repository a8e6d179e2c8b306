//! Event ids and capture times.
//!
//! Both are side effects, so they are injected: production code uses
//! [`UuidV4`] and [`SystemClock`], tests use [`FixedId`] and [`FixedClock`].

use chrono::{DateTime, FixedOffset, SecondsFormat};
use std::sync::Arc;

/// Produces a fresh unique id per call.
pub trait IdSource: Send + Sync {
    fn next_id(&self) -> String;
}

/// Reports the current wall-clock time.
pub trait Clock: Send + Sync {
    fn now(&self) -> DateTime<FixedOffset>;
}

/// Random UUID v4 ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct UuidV4;

impl IdSource for UuidV4 {
    fn next_id(&self) -> String {
        uuid::Uuid::new_v4().to_string()
    }
}

/// Local time with its UTC offset.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> DateTime<FixedOffset> {
        chrono::Local::now().fixed_offset()
    }
}

/// Always returns the same id.
#[derive(Debug, Clone)]
pub struct FixedId(pub String);

impl IdSource for FixedId {
    fn next_id(&self) -> String {
        self.0.clone()
    }
}

/// Always returns the same instant.
#[derive(Debug, Clone, Copy)]
pub struct FixedClock(pub DateTime<FixedOffset>);

impl Clock for FixedClock {
    fn now(&self) -> DateTime<FixedOffset> {
        self.0
    }
}

/// Id and timestamp assigned to one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Stamp {
    pub id: String,
    /// RFC 3339, second precision, `Z` for UTC.
    pub timestamp: String,
}

impl Stamp {
    pub fn new(id: impl Into<String>, at: DateTime<FixedOffset>) -> Self {
        Self {
            id: id.into(),
            timestamp: at.to_rfc3339_opts(SecondsFormat::Secs, true),
        }
    }
}

/// Issues a [`Stamp`] per transformed event.
#[derive(Clone)]
pub struct Stamper {
    ids: Arc<dyn IdSource>,
    clock: Arc<dyn Clock>,
}

impl Stamper {
    pub fn new(ids: Arc<dyn IdSource>, clock: Arc<dyn Clock>) -> Self {
        Self { ids, clock }
    }

    /// UUID v4 ids and the system clock.
    pub fn system() -> Self {
        Self::new(Arc::new(UuidV4), Arc::new(SystemClock))
    }

    pub fn issue(&self) -> Stamp {
        Stamp::new(self.ids.next_id(), self.clock.now())
    }
}

impl Default for Stamper {
    fn default() -> Self {
        Self::system()
    }
}

impl std::fmt::Debug for Stamper {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Stamper").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn utc_timestamps_use_z_suffix() {
        let at = DateTime::parse_from_rfc3339("2024-01-15T10:00:00.123+00:00").unwrap();
        assert_eq!(Stamp::new("x", at).timestamp, "2024-01-15T10:00:00Z");
    }

    #[test]
    fn offsets_are_kept() {
        let at = DateTime::parse_from_rfc3339("2024-01-15T12:00:00+02:00").unwrap();
        assert_eq!(Stamp::new("x", at).timestamp, "2024-01-15T12:00:00+02:00");
    }

    #[test]
    fn uuid_ids_are_distinct() {
        let stamper = Stamper::system();
        let a = stamper.issue();
        let b = stamper.issue();
        assert_ne!(a.id, b.id);
        assert_eq!(a.id.len(), 36);
    }

    #[test]
    fn system_timestamps_parse_back() {
        let stamp = Stamper::system().issue();
        assert!(DateTime::parse_from_rfc3339(&stamp.timestamp).is_ok());
    }
}
