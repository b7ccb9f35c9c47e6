//! crates/emit/src/sink.rs
//! The sink boundary: where packed records leave the emitting process's view.

use channel::{Channel, Severity};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

/// Receives packed records on behalf of some downstream consumer.
///
/// Transmission is fire-and-forget: `send` returns no status and emitters
/// never learn whether a record was persisted, dropped, or filtered further
/// downstream. Implementations must tolerate concurrent calls.
pub trait RecordSink: Send + Sync {
    /// Accept one packed record emitted on `channel` at `severity`.
    ///
    /// The bytes are the complete wire-format record; the sink may copy them
    /// but must not assume they outlive the call.
    fn send(&self, bytes: &[u8], channel: &Channel, severity: Severity);
}

/// A sink that discards everything.
///
/// Stands in wherever no real sink has been installed, so emission never has
/// to special-case the uninitialized state.
#[derive(Clone, Copy, Debug, Default)]
pub struct NullSink;

impl RecordSink for NullSink {
    fn send(&self, _bytes: &[u8], _channel: &Channel, _severity: Severity) {}
}

/// A sink that only counts deliveries.
///
/// Useful in tests asserting that gating suppressed (or permitted) records
/// without caring about their contents.
#[derive(Debug, Default)]
pub struct CountingSink {
    received: AtomicUsize,
}

impl CountingSink {
    /// A fresh counter at zero.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of records delivered so far.
    #[must_use]
    pub fn received(&self) -> usize {
        self.received.load(Ordering::SeqCst)
    }
}

impl RecordSink for CountingSink {
    fn send(&self, _bytes: &[u8], _channel: &Channel, _severity: Severity) {
        self.received.fetch_add(1, Ordering::SeqCst);
    }
}

/// One record as a sink received it.
#[derive(Clone, Debug)]
pub struct CapturedRecord {
    /// The complete packed record bytes.
    pub bytes: Vec<u8>,
    /// Subsystem of the emitting channel.
    pub subsystem: String,
    /// Category of the emitting channel.
    pub category: String,
    /// Severity the record was emitted at.
    pub severity: Severity,
}

/// A sink that retains every delivery for later inspection.
#[derive(Debug, Default)]
pub struct CollectingSink {
    records: Mutex<Vec<CapturedRecord>>,
}

impl CollectingSink {
    /// An empty collector.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Copies of everything received so far.
    #[must_use]
    pub fn captured(&self) -> Vec<CapturedRecord> {
        match self.records.lock() {
            Ok(guard) => guard.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// Number of records received so far.
    #[must_use]
    pub fn len(&self) -> usize {
        match self.records.lock() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    /// True when nothing has been received.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl RecordSink for CollectingSink {
    fn send(&self, bytes: &[u8], channel: &Channel, severity: Severity) {
        let record = CapturedRecord {
            bytes: bytes.to_vec(),
            subsystem: channel.subsystem().to_owned(),
            category: channel.category().to_owned(),
            severity,
        };
        match self.records.lock() {
            Ok(mut guard) => guard.push(record),
            Err(poisoned) => poisoned.into_inner().push(record),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counting_sink_tallies_sends() {
        let sink = CountingSink::new();
        let channel = Channel::new("com.example.sink", "count");
        sink.send(&[0u8; 45], &channel, Severity::Info);
        sink.send(&[0u8; 45], &channel, Severity::Error);
        assert_eq!(sink.received(), 2);
    }

    #[test]
    fn collecting_sink_retains_identity_and_bytes() {
        let sink = CollectingSink::new();
        let channel = Channel::new("com.example.sink", "collect");
        sink.send(&[1, 2, 3], &channel, Severity::Fault);

        let captured = sink.captured();
        assert_eq!(captured.len(), 1);
        assert_eq!(captured[0].bytes, vec![1, 2, 3]);
        assert_eq!(captured[0].subsystem, "com.example.sink");
        assert_eq!(captured[0].category, "collect");
        assert_eq!(captured[0].severity, Severity::Fault);
    }

    #[test]
    fn null_sink_accepts_anything() {
        let channel = Channel::new("com.example.sink", "null");
        NullSink.send(&[], &channel, Severity::Default);
    }
}
