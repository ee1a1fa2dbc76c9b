//! Log event structure and pooling

use super::field::Field;
use super::pool::{Pool, Reusable};
use super::severity::Severity;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

static EVENT_POOL: Pool<Event> = Pool::new();

/// The fully materialized record of one log call.
///
/// The logger owns an event exclusively until fan-out finishes; every
/// admitting writer sees the same instance read-only and must copy out
/// anything it wants to keep past its `write` call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Event {
    pub severity: Severity,
    pub created: DateTime<Utc>,
    /// Caller `file:line`, empty when unresolved.
    pub source: String,
    pub message: String,
    /// Distinguishes structured events from formatted-text events.
    pub structured: bool,
    pub fields: Vec<Field>,
}

impl Default for Event {
    fn default() -> Self {
        Self {
            severity: Severity::Finest,
            created: DateTime::UNIX_EPOCH,
            source: String::new(),
            message: String::new(),
            structured: false,
            fields: Vec::new(),
        }
    }
}

impl Reusable for Event {
    fn reset(&mut self) {
        self.severity = Severity::Finest;
        self.created = DateTime::UNIX_EPOCH;
        self.source.clear();
        self.message.clear();
        self.structured = false;
        self.fields.clear();
    }
}

/// Take an event from the pool, stamped with the current time.
pub(crate) fn acquire(
    severity: Severity,
    source: String,
    message: String,
    structured: bool,
    fields: Vec<Field>,
) -> Event {
    let mut event = EVENT_POOL.acquire();
    event.severity = severity;
    event.created = Utc::now();
    event.source = source;
    event.message = message;
    event.structured = structured;
    event.fields = fields;
    event
}

/// Return an event to the pool once the last writer is done with it.
pub(crate) fn release(event: Event) {
    EVENT_POOL.release(event);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_acquire_populates() {
        let event = acquire(
            Severity::Warning,
            "lib.rs:7".to_string(),
            "low disk".to_string(),
            true,
            vec![Field::bool("ok", false)],
        );
        assert_eq!(event.severity, Severity::Warning);
        assert_eq!(event.source, "lib.rs:7");
        assert_eq!(event.message, "low disk");
        assert!(event.structured);
        assert_eq!(event.fields.len(), 1);
        assert!(event.created > DateTime::UNIX_EPOCH);
        release(event);
    }

    #[test]
    fn test_release_resets_to_zero_values() {
        let mut event = Event::default();
        event.severity = Severity::Critical;
        event.created = Utc::now();
        event.source = "a.rs:1".to_string();
        event.message = "boom".to_string();
        event.structured = true;
        event.fields.push(Field::int32("n", 1));

        event.reset();

        assert_eq!(event.severity, Severity::Finest);
        assert_eq!(event.created, DateTime::UNIX_EPOCH);
        assert!(event.source.is_empty());
        assert!(event.message.is_empty());
        assert!(!event.structured);
        assert!(event.fields.is_empty());
    }
}
