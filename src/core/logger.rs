//! Logger dispatch engine
//!
//! A logger is a named collection of output bindings, each pairing a minimum
//! severity with a writer. Every dispatch entry runs the same algorithm:
//! a cheap skip check across all bindings, then call-site resolution and
//! message materialization, then fan-out of one pooled event to every
//! binding whose threshold admits the severity.
//!
//! Dispatch is synchronous on the caller's thread, including the writes; the
//! core has no queueing, no retries and no recoverable errors. Configuration
//! (`add_binding`, `close`) takes the write side of the binding lock and
//! should be serialized relative to logging traffic by the caller, typically
//! by configuring during single-threaded startup.

use super::event::{self, Event};
use super::field::Field;
use super::severity::Severity;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::panic::Location;

/// The capability implemented by output backends.
///
/// `write` is called once per admitted event. The event is shared read-only
/// across all admitting bindings within one dispatch and is recycled
/// afterwards, so implementations must copy out anything they keep.
/// `close` is called once during [`Logger::close`], after which `write` is
/// not called again through that binding.
pub trait Writer: Send + Sync {
    fn write(&self, event: &Event);
    fn close(&self);
}

/// A minimum severity paired with the writer that consumes admitted events.
pub struct Binding {
    pub threshold: Severity,
    pub writer: Box<dyn Writer>,
}

/// A named collection of output bindings.
///
/// Dispatch order across bindings is unspecified; callers must not rely on
/// any cross-binding ordering.
pub struct Logger {
    bindings: RwLock<HashMap<String, Binding>>,
}

impl Logger {
    pub fn new() -> Self {
        Self {
            bindings: RwLock::new(HashMap::new()),
        }
    }

    /// Add or replace the binding under `name`.
    ///
    /// Replacing a name does not close the previous writer; the caller owns
    /// the lifecycle of replaced writers.
    pub fn add_binding(
        &self,
        name: impl Into<String>,
        threshold: Severity,
        writer: impl Writer + 'static,
    ) -> &Self {
        self.bindings.write().insert(
            name.into(),
            Binding {
                threshold,
                writer: Box::new(writer),
            },
        );
        self
    }

    /// Close every writer and remove every binding.
    ///
    /// Each writer's `close` runs exactly once. The logger carries no
    /// bindings afterwards; logging resumes only after new bindings are
    /// added.
    pub fn close(&self) {
        let mut bindings = self.bindings.write();
        for (_, binding) in bindings.drain() {
            binding.writer.close();
        }
    }

    pub fn binding_count(&self) -> usize {
        self.bindings.read().len()
    }

    /// Format-style dispatch. The [`fmt::Arguments`] are materialized once,
    /// and only past the skip check.
    ///
    /// The [`logf!`](crate::logf) macro and its per-level variants wrap this.
    #[track_caller]
    pub fn logf(&self, severity: Severity, args: fmt::Arguments<'_>) {
        // Capturing the location is free; the file:line string is only
        // built past the skip check.
        let caller = Location::caller();
        let bindings = self.bindings.read();
        if !admitted(&bindings, severity) {
            return;
        }
        let message = fmt::format(args);
        fan_out(
            &bindings,
            severity,
            source_of(caller),
            message,
            false,
            Vec::new(),
        );
    }

    /// Closure-style dispatch: `message` runs at most once, and only when
    /// some binding admits `severity`.
    #[track_caller]
    pub fn logc<F>(&self, severity: Severity, message: F)
    where
        F: FnOnce() -> String,
    {
        let caller = Location::caller();
        let bindings = self.bindings.read();
        if !admitted(&bindings, severity) {
            return;
        }
        fan_out(
            &bindings,
            severity,
            source_of(caller),
            message(),
            false,
            Vec::new(),
        );
    }

    /// Manual dispatch: the caller supplies the source text directly and no
    /// call-site resolution is performed.
    pub fn log_at(
        &self,
        severity: Severity,
        source: impl Into<String>,
        message: impl Into<String>,
    ) {
        let bindings = self.bindings.read();
        if !admitted(&bindings, severity) {
            return;
        }
        fan_out(
            &bindings,
            severity,
            source.into(),
            message.into(),
            false,
            Vec::new(),
        );
    }

    /// Structured dispatch: the message is kept verbatim and the fields are
    /// attached in order.
    #[track_caller]
    pub fn log_fields(
        &self,
        severity: Severity,
        message: impl Into<String>,
        fields: Vec<Field>,
    ) {
        let caller = Location::caller();
        let bindings = self.bindings.read();
        if !admitted(&bindings, severity) {
            return;
        }
        fan_out(
            &bindings,
            severity,
            source_of(caller),
            message.into(),
            true,
            fields,
        );
    }

    #[track_caller]
    pub fn debug(&self, message: impl Into<String>, fields: Vec<Field>) {
        self.log_fields(Severity::Debug, message, fields);
    }

    #[track_caller]
    pub fn info(&self, message: impl Into<String>, fields: Vec<Field>) {
        self.log_fields(Severity::Info, message, fields);
    }

    #[track_caller]
    pub fn warn(&self, message: impl Into<String>, fields: Vec<Field>) {
        self.log_fields(Severity::Warning, message, fields);
    }

    #[track_caller]
    pub fn error(&self, message: impl Into<String>, fields: Vec<Field>) {
        self.log_fields(Severity::Error, message, fields);
    }
}

impl Default for Logger {
    fn default() -> Self {
        Self::new()
    }
}

/// The skip check: true when at least one binding admits `severity`.
fn admitted(bindings: &HashMap<String, Binding>, severity: Severity) -> bool {
    bindings.values().any(|b| b.threshold.admits(severity))
}

fn source_of(caller: &'static Location<'static>) -> String {
    format!("{}:{}", caller.file(), caller.line())
}

/// Build one pooled event and hand it to every admitting binding, then
/// return it to the pool.
fn fan_out(
    bindings: &HashMap<String, Binding>,
    severity: Severity,
    source: String,
    message: String,
    structured: bool,
    fields: Vec<Field>,
) {
    let event = event::acquire(severity, source, message, structured, fields);
    for binding in bindings.values() {
        if binding.threshold.admits(severity) {
            binding.writer.write(&event);
        }
    }
    event::release(event);
}

#[cfg(test)]
mod tests {
    use super::*;
    use parking_lot::Mutex;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;

    #[derive(Clone, Default)]
    struct Recorder {
        messages: Arc<Mutex<Vec<String>>>,
        closed: Arc<AtomicUsize>,
    }

    impl Writer for Recorder {
        fn write(&self, event: &Event) {
            self.messages.lock().push(event.message.clone());
        }

        fn close(&self) {
            self.closed.fetch_add(1, Ordering::SeqCst);
        }
    }

    #[test]
    fn test_skip_below_every_threshold() {
        let recorder = Recorder::default();
        let logger = Logger::new();
        logger.add_binding("out", Severity::Info, recorder.clone());

        logger.logf(Severity::Debug, format_args!("ignored"));
        assert!(recorder.messages.lock().is_empty());
    }

    #[test]
    fn test_format_materialized_once_for_all_bindings() {
        let a = Recorder::default();
        let b = Recorder::default();
        let logger = Logger::new();
        logger.add_binding("a", Severity::Fine, a.clone());
        logger.add_binding("b", Severity::Fine, b.clone());

        logger.logf(Severity::Info, format_args!("disk {}", "full"));
        assert_eq!(*a.messages.lock(), vec!["disk full"]);
        assert_eq!(*b.messages.lock(), vec!["disk full"]);
    }

    #[test]
    fn test_closure_not_invoked_when_skipped() {
        let recorder = Recorder::default();
        let logger = Logger::new();
        logger.add_binding("out", Severity::Error, recorder.clone());

        let calls = AtomicUsize::new(0);
        logger.logc(Severity::Debug, || {
            calls.fetch_add(1, Ordering::SeqCst);
            "expensive".to_string()
        });
        assert_eq!(calls.load(Ordering::SeqCst), 0);

        logger.logc(Severity::Error, || {
            calls.fetch_add(1, Ordering::SeqCst);
            "expensive".to_string()
        });
        assert_eq!(calls.load(Ordering::SeqCst), 1);
        assert_eq!(*recorder.messages.lock(), vec!["expensive"]);
    }

    #[test]
    fn test_per_binding_threshold_within_fan_out() {
        let low = Recorder::default();
        let high = Recorder::default();
        let logger = Logger::new();
        logger.add_binding("low", Severity::Warning, low.clone());
        logger.add_binding("high", Severity::Error, high.clone());

        logger.logf(Severity::Warning, format_args!("only low"));
        assert_eq!(low.messages.lock().len(), 1);
        assert!(high.messages.lock().is_empty());

        logger.logf(Severity::Error, format_args!("both"));
        assert_eq!(low.messages.lock().len(), 2);
        assert_eq!(high.messages.lock().len(), 1);
    }

    #[test]
    fn test_manual_source_passthrough() {
        let recorder = Recorder::default();
        let logger = Logger::new();
        logger.add_binding("out", Severity::Finest, recorder.clone());

        logger.log_at(Severity::Info, "custom.rs:99", "manual entry");
        assert_eq!(*recorder.messages.lock(), vec!["manual entry"]);
    }

    #[test]
    fn test_add_binding_upserts() {
        let first = Recorder::default();
        let second = Recorder::default();
        let logger = Logger::new();
        logger.add_binding("out", Severity::Finest, first.clone());
        logger.add_binding("out", Severity::Finest, second.clone());
        assert_eq!(logger.binding_count(), 1);

        logger.logf(Severity::Info, format_args!("hello"));
        assert!(first.messages.lock().is_empty());
        assert_eq!(second.messages.lock().len(), 1);
        // The replaced writer was not closed implicitly.
        assert_eq!(first.closed.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn test_close_drains_and_closes_once() {
        let a = Recorder::default();
        let b = Recorder::default();
        let logger = Logger::new();
        logger.add_binding("a", Severity::Info, a.clone());
        logger.add_binding("b", Severity::Info, b.clone());

        logger.close();
        assert_eq!(logger.binding_count(), 0);
        assert_eq!(a.closed.load(Ordering::SeqCst), 1);
        assert_eq!(b.closed.load(Ordering::SeqCst), 1);
    }
}
