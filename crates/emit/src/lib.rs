#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/emit/src/lib.rs
//!
//! # Overview
//!
//! `emit` connects channels to sinks: it gates each event against the
//! channel's current enablement, packs the survivors into the flat record
//! format, and hands them to a [`RecordSink`] fire-and-forget. The
//! [`tracelog!`] macro family drives the pipeline through a process-wide
//! emitter installed once via [`init`].
//!
//! # Design
//!
//! - The gate runs before any other work, every call. A disabled emission
//!   costs one enablement query; there is no size computation, no buffer,
//!   and no sink traffic.
//! - Immediate emissions pack into thread-local scratch, so records under
//!   the scratch size never allocate.
//! - Deferred emissions build a [`RecordPack`](record::RecordPack) up front
//!   and re-check the gate when the pack is finally sent, so a channel
//!   disabled in between suppresses the delivery.
//!
//! # Examples
//!
//! ```
//! use emit::{Channel, CollectingSink, Emitter, Severity};
//! use std::sync::Arc;
//!
//! let sink = Arc::new(CollectingSink::new());
//! let emitter = Emitter::new(sink.clone());
//! let channel = Channel::new("com.example.app", "network");
//!
//! emitter.log(&channel, Severity::Error, "connect failed: {}", &[61i32.into()]);
//! assert_eq!(sink.len(), 1);
//! ```

mod macros;
mod pipeline;
mod scratch;
mod sink;
#[cfg(feature = "tracing")]
mod tracing_bridge;

pub use pipeline::{Emitter, SendOutcome, global, init};
pub use sink::{CapturedRecord, CollectingSink, CountingSink, NullSink, RecordSink};
#[cfg(feature = "tracing")]
pub use tracing_bridge::TracingSink;

// Re-exported so the macros can name everything through `$crate::`.
pub use channel::{Channel, Severity};
pub use record::{ArgValue, CallSite};
