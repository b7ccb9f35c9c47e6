//! crates/record/src/pack.rs
//! Deferred pack objects: build a record now, transmit it later.

use crate::args::ArgValue;
use crate::descriptor::FormatDescriptor;
use crate::error::RecordError;
use crate::fill::write_prefix;
use crate::layout::{ERRNO_LEN, HEADER_LEN, RecordHeader};

/// Builds a heap-backed record that may outlive the originating stack frame.
///
/// The builder follows the same protocol as the in-place fill: the buffer is
/// sized up front from the descriptor, the header and errno byte are written
/// at construction, and arguments are appended in call order. Sealing the
/// builder verifies the trailing region is exactly full.
///
/// # Examples
///
/// ```
/// use record::{ArgValue, FormatDescriptor, PackBuilder, RecordHeader};
///
/// let args = [ArgValue::from(404i32)];
/// let descriptor = FormatDescriptor::from_args(&args);
///
/// let mut builder = PackBuilder::new(&descriptor, RecordHeader::default(), 2);
/// builder.append(&args[0])?;
/// let pack = builder.finish()?;
///
/// assert_eq!(pack.len(), descriptor.record_size());
/// # Ok::<(), record::RecordError>(())
/// ```
#[derive(Debug)]
pub struct PackBuilder {
    buf: Vec<u8>,
    pos: usize,
    index: usize,
}

impl PackBuilder {
    /// Allocate and prefix a record for the given layout.
    ///
    /// Timestamps are captured here; a pack sent much later still reports
    /// when it was built.
    #[must_use]
    pub fn new(descriptor: &FormatDescriptor, header: RecordHeader, saved_errno: u8) -> Self {
        let mut buf = vec![0u8; descriptor.record_size()];
        write_prefix(&mut buf, saved_errno, header);
        Self {
            buf,
            pos: HEADER_LEN + ERRNO_LEN,
            index: 0,
        }
    }

    /// Append one argument, mirroring the in-place cursor contract.
    pub fn append(&mut self, value: &ArgValue) -> Result<(), RecordError> {
        let width = value.kind().width();
        if self.pos + width > self.buf.len() {
            return Err(RecordError::TrailingOverflow {
                index: self.index,
                width,
                remaining: self.buf.len() - self.pos,
            });
        }
        value.encode_into(&mut self.buf[self.pos..self.pos + width]);
        self.pos += width;
        self.index += 1;
        Ok(())
    }

    /// Seal the builder into an immutable [`RecordPack`].
    ///
    /// Fails if any trailing byte was left unwritten.
    pub fn finish(self) -> Result<RecordPack, RecordError> {
        if self.pos != self.buf.len() {
            return Err(RecordError::UnfilledTrailing {
                remaining: self.buf.len() - self.pos,
            });
        }
        Ok(RecordPack { bytes: self.buf })
    }
}

/// A fully filled, immutable record awaiting transmission.
///
/// Packs are consumed by value when sent; reuse requires a fresh build
/// cycle. The severity is deliberately not part of the pack — it is supplied
/// (and gated) at send time.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct RecordPack {
    bytes: Vec<u8>,
}

impl RecordPack {
    /// Build a complete pack from a header, errno, and argument slice in one
    /// call. The descriptor is derived from the arguments, so the fill
    /// cannot disagree with it.
    #[must_use]
    pub fn build(header: RecordHeader, saved_errno: u8, args: &[ArgValue]) -> Self {
        let descriptor = FormatDescriptor::from_args(args);
        let mut builder = PackBuilder::new(&descriptor, header, saved_errno);
        for value in args {
            if let Err(err) = builder.append(value) {
                // The layout was derived from these exact values.
                unreachable!("derived layout rejected its own argument: {err}");
            }
        }
        match builder.finish() {
            Ok(pack) => pack,
            Err(err) => unreachable!("derived layout left trailing bytes: {err}"),
        }
    }

    /// The packed record bytes.
    #[must_use]
    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Record length in bytes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    /// A record always carries at least its header and errno byte.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Consume the pack, returning the underlying buffer.
    #[must_use]
    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
