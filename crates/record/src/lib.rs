#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/record/src/lib.rs
//!
//! # Overview
//!
//! `record` defines the packed binary wire format for one log event and the
//! protocol for producing it: compute the exact size from a
//! [`FormatDescriptor`], fill a caller-owned buffer field by field through a
//! [`RecordCursor`], and hand the flat byte sequence to a sink. A filled
//! record is self-contained and safe to copy or transmit as opaque bytes.
//!
//! # Wire contract
//!
//! All fields are little-endian, in this order: continuous (monotonic)
//! timestamp, wall-clock timestamp, module handle, call-site reference,
//! format-string reference, then the trailing argument region led by the
//! captured-errno byte. Arguments follow in call order at fixed per-type
//! widths; there is no compression and no variable-length encoding, so every
//! fill position is computable in O(1) and no byte is ever revisited.
//!
//! # Invariants
//!
//! - The trailing region's length is exactly what the descriptor computed
//!   before any fill occurred; over- and under-fills are typed errors, never
//!   silent truncation.
//! - A zero-argument record's trailing region is exactly the errno byte.
//! - The filler never retains a reference to the buffer beyond the fill.
//!
//! # Examples
//!
//! ```
//! use record::{
//!     ArgValue, FormatDescriptor, RecordHeader, RecordView, begin_fill,
//! };
//!
//! let args = [ArgValue::from(7i32), ArgValue::from("peer closed")];
//! let descriptor = FormatDescriptor::from_args(&args);
//! let total = descriptor.record_size();
//!
//! let mut buf = vec![0u8; total];
//! let mut cursor = begin_fill(&mut buf, total, 32, RecordHeader::default())?;
//! for arg in &args {
//!     cursor.append(arg)?;
//! }
//! let len = cursor.finish()?;
//!
//! let view = RecordView::decode(&buf[..len], &descriptor)?;
//! assert_eq!(view.errno(), 32);
//! # Ok::<(), record::RecordError>(())
//! ```

mod args;
mod decode;
mod descriptor;
mod error;
mod fill;
mod layout;
mod pack;

pub use args::{ArgKind, ArgValue, TextRef};
pub use decode::RecordView;
pub use descriptor::FormatDescriptor;
pub use error::RecordError;
pub use fill::{RecordCursor, begin_fill};
pub use layout::{
    CallSite, ERRNO_LEN, FormatRef, HEADER_LEN, ModuleHandle, RecordHeader, Timestamps,
};
pub use pack::{PackBuilder, RecordPack};
