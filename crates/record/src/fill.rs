//! crates/record/src/fill.rs
//! The fill protocol: header write, argument appends, completion check.

use crate::args::ArgValue;
use crate::error::RecordError;
use crate::layout::{
    ERRNO_LEN, HEADER_LEN, OFF_CALL_SITE, OFF_CONTINUOUS, OFF_FORMAT, OFF_MODULE, OFF_WALL_NSEC,
    OFF_WALL_SEC, RecordHeader, Timestamps,
};

/// Write the fixed header fields and the errno byte into `buf`.
///
/// Timestamps are captured here, at the moment the record materializes.
pub(crate) fn write_prefix(buf: &mut [u8], saved_errno: u8, header: RecordHeader) {
    let now = Timestamps::capture();
    buf[OFF_CONTINUOUS..OFF_CONTINUOUS + 8].copy_from_slice(&now.continuous_ns.to_le_bytes());
    buf[OFF_WALL_SEC..OFF_WALL_SEC + 8].copy_from_slice(&now.wall_secs.to_le_bytes());
    buf[OFF_WALL_NSEC..OFF_WALL_NSEC + 4].copy_from_slice(&now.wall_nanos.to_le_bytes());
    buf[OFF_MODULE..OFF_MODULE + 8].copy_from_slice(&header.module.as_u64().to_le_bytes());
    buf[OFF_CALL_SITE..OFF_CALL_SITE + 8].copy_from_slice(&header.call_site.as_u64().to_le_bytes());
    buf[OFF_FORMAT..OFF_FORMAT + 8].copy_from_slice(&header.format.as_u64().to_le_bytes());
    buf[HEADER_LEN] = saved_errno;
}

/// Begin filling a record into a caller-owned buffer.
///
/// `total_size` is the value the descriptor computed via
/// [`FormatDescriptor::record_size`](crate::FormatDescriptor::record_size).
/// The buffer must be at least that large; an undersized buffer is a typed
/// error and nothing is written. On success the fixed header fields and the
/// captured-errno byte are in place and the returned cursor is positioned at
/// the first argument slot.
pub fn begin_fill(
    buf: &mut [u8],
    total_size: usize,
    saved_errno: u8,
    header: RecordHeader,
) -> Result<RecordCursor<'_>, RecordError> {
    if buf.len() < total_size || total_size < HEADER_LEN + ERRNO_LEN {
        return Err(RecordError::UndersizedBuffer {
            required: total_size.max(HEADER_LEN + ERRNO_LEN),
            actual: buf.len(),
        });
    }
    write_prefix(buf, saved_errno, header);
    Ok(RecordCursor {
        buf,
        total: total_size,
        pos: HEADER_LEN + ERRNO_LEN,
        index: 0,
    })
}

/// A write position inside a record being filled.
///
/// Arguments are appended in call order at their fixed widths; the cursor
/// never revisits earlier bytes and never retains the buffer beyond the
/// fill. [`finish`](Self::finish) enforces that the trailing region came out
/// exactly full.
#[derive(Debug)]
pub struct RecordCursor<'a> {
    buf: &'a mut [u8],
    total: usize,
    pos: usize,
    index: usize,
}

impl RecordCursor<'_> {
    /// Append one argument.
    ///
    /// Fails if the argument would overflow the computed trailing region,
    /// which means the descriptor and the call site disagree.
    pub fn append(&mut self, value: &ArgValue) -> Result<(), RecordError> {
        let width = value.kind().width();
        if self.pos + width > self.total {
            return Err(RecordError::TrailingOverflow {
                index: self.index,
                width,
                remaining: self.total - self.pos,
            });
        }
        value.encode_into(&mut self.buf[self.pos..self.pos + width]);
        self.pos += width;
        self.index += 1;
        Ok(())
    }

    /// Bytes still unwritten in the trailing region.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.total - self.pos
    }

    /// Number of arguments appended so far.
    #[must_use]
    pub fn appended(&self) -> usize {
        self.index
    }

    /// Complete the fill, verifying no byte was left unwritten.
    ///
    /// Returns the record length on success. An under-full trailing region
    /// is the same contract violation as an overflow, caught at the other
    /// end.
    pub fn finish(self) -> Result<usize, RecordError> {
        if self.pos != self.total {
            return Err(RecordError::UnfilledTrailing {
                remaining: self.total - self.pos,
            });
        }
        Ok(self.total)
    }
}
