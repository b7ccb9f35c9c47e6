//! crates/emit/src/tracing_bridge.rs
//! Bridge between the record pipeline and the tracing ecosystem.
//!
//! [`TracingSink`] is a [`RecordSink`] that forwards each delivered record as
//! a `tracing` event, so a process that already runs a tracing subscriber can
//! observe emissions without a dedicated record consumer. The record bytes
//! stay opaque; only the channel identity, severity, and record length cross
//! the bridge.
//!
//! # Severity mapping
//!
//! Severity is a classification, not a linear scale, so the mapping is by
//! class: default and info become `INFO`, debug becomes `DEBUG`, and both
//! error-class severities become `ERROR`.

use crate::sink::RecordSink;
use channel::{Channel, Severity};
use tracing::Level;

/// Forwards delivered records as `tracing` events.
#[derive(Clone, Copy, Debug, Default)]
pub struct TracingSink;

impl TracingSink {
    /// A new bridge sink.
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// The tracing level a severity is reported at.
    #[must_use]
    pub const fn level_for(severity: Severity) -> Level {
        match severity {
            Severity::Default | Severity::Info => Level::INFO,
            Severity::Debug => Level::DEBUG,
            Severity::Error | Severity::Fault => Level::ERROR,
        }
    }
}

impl RecordSink for TracingSink {
    fn send(&self, bytes: &[u8], channel: &Channel, severity: Severity) {
        let subsystem = channel.subsystem();
        let category = channel.category();
        let len = bytes.len();
        // The level argument to event! must be const, hence one arm per class.
        match Self::level_for(severity) {
            Level::ERROR => tracing::event!(
                Level::ERROR,
                subsystem,
                category,
                severity = severity.name(),
                len,
                "record emitted"
            ),
            Level::DEBUG => tracing::event!(
                Level::DEBUG,
                subsystem,
                category,
                severity = severity.name(),
                len,
                "record emitted"
            ),
            _ => tracing::event!(
                Level::INFO,
                subsystem,
                category,
                severity = severity.name(),
                len,
                "record emitted"
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;
    use std::sync::{Arc, Mutex};
    use tracing_subscriber::fmt::MakeWriter;

    #[derive(Clone, Default)]
    struct BufferWriter(Arc<Mutex<Vec<u8>>>);

    impl io::Write for BufferWriter {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    impl MakeWriter<'_> for BufferWriter {
        type Writer = Self;

        fn make_writer(&self) -> Self::Writer {
            self.clone()
        }
    }

    #[test]
    fn forwarded_event_names_the_channel() {
        let buffer = BufferWriter::default();
        let subscriber = tracing_subscriber::fmt()
            .with_writer(buffer.clone())
            .with_max_level(Level::DEBUG)
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let channel = Channel::new("com.example.bridge", "net");
            TracingSink::new().send(&[0u8; 45], &channel, Severity::Error);
        });

        let output = String::from_utf8(buffer.0.lock().unwrap().clone()).unwrap();
        assert!(output.contains("com.example.bridge"));
        assert!(output.contains("record emitted"));
        assert!(output.contains("ERROR"));
    }

    #[test]
    fn error_class_maps_to_error() {
        assert_eq!(TracingSink::level_for(Severity::Error), Level::ERROR);
        assert_eq!(TracingSink::level_for(Severity::Fault), Level::ERROR);
    }

    #[test]
    fn info_class_maps_to_info() {
        assert_eq!(TracingSink::level_for(Severity::Default), Level::INFO);
        assert_eq!(TracingSink::level_for(Severity::Info), Level::INFO);
    }

    #[test]
    fn debug_maps_to_debug() {
        assert_eq!(TracingSink::level_for(Severity::Debug), Level::DEBUG);
    }
}
