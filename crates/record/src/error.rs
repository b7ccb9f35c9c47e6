//! crates/record/src/error.rs
//! Typed errors for the fill and decode protocols.

/// Failures encountered while sizing, filling, or decoding a packed record.
///
/// Every variant is a contract violation surfaced as a typed error so it can
/// fail fast at the boundary; none of them are recoverable mid-record, since
/// a partially filled buffer would corrupt the wire format for downstream
/// consumers.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum RecordError {
    /// The destination buffer is smaller than the computed record size.
    #[error("buffer of {actual} bytes is smaller than the computed record size of {required}")]
    UndersizedBuffer {
        /// Bytes the computed record size requires.
        required: usize,
        /// Bytes the caller actually supplied.
        actual: usize,
    },
    /// An appended argument does not fit in the remaining trailing region.
    #[error(
        "argument {index} ({width} bytes) overflows the trailing region ({remaining} bytes left)"
    )]
    TrailingOverflow {
        /// Zero-based index of the offending argument.
        index: usize,
        /// Width of the offending argument.
        width: usize,
        /// Bytes left in the trailing region before the append.
        remaining: usize,
    },
    /// The fill finished with unwritten bytes in the trailing region.
    #[error("trailing region has {remaining} unwritten bytes after the final argument")]
    UnfilledTrailing {
        /// Bytes that were never written.
        remaining: usize,
    },
    /// A buffer handed to the decoder is shorter than its descriptor requires.
    #[error("record of {actual} bytes is shorter than the {required} bytes the layout requires")]
    TruncatedRecord {
        /// Bytes the descriptor's layout requires.
        required: usize,
        /// Bytes actually present.
        actual: usize,
    },
    /// A buffer handed to the decoder is longer than its descriptor requires.
    #[error("record of {actual} bytes exceeds the {expected}-byte layout")]
    OversizedRecord {
        /// Bytes the descriptor's layout expects.
        expected: usize,
        /// Bytes actually present.
        actual: usize,
    },
}
