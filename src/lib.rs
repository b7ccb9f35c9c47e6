#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! src/lib.rs
//!
//! # Overview
//!
//! `tracelog` is a channel-gated structured logging facility with a packed
//! binary record format. Events are emitted on a [`Channel`] (a subsystem
//! plus category pair) at one of five [`Severity`] classes; per-severity
//! enablement is re-queried on every call, so configuration changes take
//! effect immediately and a disabled emission costs one gate check and
//! nothing else.
//!
//! The crate is split along its seams:
//!
//! - [`channel`](mod@channel): channel identity, severity classes, and the
//!   enablement configuration the gate consults.
//! - [`record`](mod@record): the flat wire format and the protocol for
//!   sizing, filling, and decoding one record.
//! - [`emit`](mod@emit): the pipeline tying the two together and handing
//!   finished records to a [`RecordSink`].
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use tracelog::{Channel, CollectingSink, Severity, tracelog_error};
//!
//! let sink = Arc::new(CollectingSink::new());
//! tracelog::init(sink.clone());
//!
//! let channel = Channel::new("com.example.app", "network");
//! tracelog_error!(channel, "connect failed: {}", 61i32);
//!
//! assert_eq!(sink.len(), 1);
//! assert_eq!(sink.captured()[0].severity, Severity::Error);
//! ```

pub use channel;
pub use emit;
pub use record;

pub use channel::{
    Channel, ConfigError, EnablementConfig, EnablementOracle, EnablementTable, Severity,
    SeverityFlags, global_table, install_oracle,
};
pub use emit::{
    CapturedRecord, CollectingSink, CountingSink, Emitter, NullSink, RecordSink, SendOutcome,
    global, init,
};
#[cfg(feature = "tracing")]
pub use emit::TracingSink;
pub use emit::{
    tracelog, tracelog_debug, tracelog_default, tracelog_error, tracelog_fault, tracelog_info,
};
pub use record::{
    ArgKind, ArgValue, CallSite, ERRNO_LEN, FormatDescriptor, FormatRef, HEADER_LEN, ModuleHandle,
    PackBuilder, RecordCursor, RecordError, RecordHeader, RecordPack, RecordView, TextRef,
    Timestamps, begin_fill,
};
