//! crates/record/src/decode.rs
//! Read-back of packed records for consumers and tests.

use crate::args::ArgValue;
use crate::descriptor::FormatDescriptor;
use crate::error::RecordError;
use crate::layout::{
    CallSite, ERRNO_LEN, FormatRef, HEADER_LEN, ModuleHandle, OFF_CALL_SITE, OFF_CONTINUOUS,
    OFF_FORMAT, OFF_MODULE, OFF_WALL_NSEC, OFF_WALL_SEC, Timestamps,
};

/// A decoded view of one packed record.
///
/// Decoding needs the same [`FormatDescriptor`] the producer used; the
/// trailing region carries no per-argument tags, so the layout is the shared
/// contract between the two ends.
#[derive(Clone, Debug, PartialEq)]
pub struct RecordView {
    timestamps: Timestamps,
    module: ModuleHandle,
    call_site: CallSite,
    format: FormatRef,
    errno: u8,
    args: Vec<ArgValue>,
}

fn read_u64(bytes: &[u8], offset: usize) -> u64 {
    let mut raw = [0u8; 8];
    raw.copy_from_slice(&bytes[offset..offset + 8]);
    u64::from_le_bytes(raw)
}

fn read_u32(bytes: &[u8], offset: usize) -> u32 {
    let mut raw = [0u8; 4];
    raw.copy_from_slice(&bytes[offset..offset + 4]);
    u32::from_le_bytes(raw)
}

impl RecordView {
    /// Decode a record produced for the given descriptor.
    ///
    /// The buffer must be exactly the descriptor's record size; both
    /// truncation and excess are typed errors, since either means producer
    /// and consumer disagree about the layout.
    pub fn decode(bytes: &[u8], descriptor: &FormatDescriptor) -> Result<Self, RecordError> {
        let required = descriptor.record_size();
        if bytes.len() < required {
            return Err(RecordError::TruncatedRecord {
                required,
                actual: bytes.len(),
            });
        }
        if bytes.len() > required {
            return Err(RecordError::OversizedRecord {
                expected: required,
                actual: bytes.len(),
            });
        }

        let timestamps = Timestamps {
            continuous_ns: read_u64(bytes, OFF_CONTINUOUS),
            wall_secs: read_u64(bytes, OFF_WALL_SEC),
            wall_nanos: read_u32(bytes, OFF_WALL_NSEC),
        };

        let mut pos = HEADER_LEN + ERRNO_LEN;
        let mut args = Vec::with_capacity(descriptor.arg_count());
        for kind in descriptor.kinds() {
            let width = kind.width();
            args.push(ArgValue::decode_from(*kind, &bytes[pos..pos + width]));
            pos += width;
        }

        Ok(Self {
            timestamps,
            module: ModuleHandle::new(read_u64(bytes, OFF_MODULE)),
            call_site: CallSite::new(read_u64(bytes, OFF_CALL_SITE)),
            format: FormatRef::from_raw(read_u64(bytes, OFF_FORMAT)),
            errno: bytes[HEADER_LEN],
            args,
        })
    }

    /// The timestamps captured when the record was filled.
    #[must_use]
    pub const fn timestamps(&self) -> Timestamps {
        self.timestamps
    }

    /// The emitting image's handle.
    #[must_use]
    pub const fn module(&self) -> ModuleHandle {
        self.module
    }

    /// The call-site reference.
    #[must_use]
    pub const fn call_site(&self) -> CallSite {
        self.call_site
    }

    /// The format-string reference.
    #[must_use]
    pub const fn format(&self) -> FormatRef {
        self.format
    }

    /// The errno captured at fill time.
    #[must_use]
    pub const fn errno(&self) -> u8 {
        self.errno
    }

    /// The decoded argument values, in call order.
    #[must_use]
    pub fn args(&self) -> &[ArgValue] {
        &self.args
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fill::begin_fill;
    use crate::layout::RecordHeader;

    fn fill_record(args: &[ArgValue], errno: u8, header: RecordHeader) -> Vec<u8> {
        let descriptor = FormatDescriptor::from_args(args);
        let total = descriptor.record_size();
        let mut buf = vec![0u8; total];
        let mut cursor = begin_fill(&mut buf, total, errno, header).unwrap();
        for value in args {
            cursor.append(value).unwrap();
        }
        let len = cursor.finish().unwrap();
        buf.truncate(len);
        buf
    }

    #[test]
    fn decodes_header_fields_in_wire_order() {
        let header = RecordHeader {
            module: ModuleHandle::new(0x10),
            call_site: CallSite::new(0x20),
            format: FormatRef::from_raw(0x30),
        };
        let bytes = fill_record(&[], 9, header);
        let view = RecordView::decode(&bytes, &FormatDescriptor::new()).unwrap();

        assert_eq!(view.module().as_u64(), 0x10);
        assert_eq!(view.call_site().as_u64(), 0x20);
        assert_eq!(view.format().as_u64(), 0x30);
        assert_eq!(view.errno(), 9);
        assert!(view.args().is_empty());
    }

    #[test]
    fn errno_leads_the_trailing_region() {
        let args = [ArgValue::from(1i32)];
        let bytes = fill_record(&args, 0xEE, RecordHeader::default());
        let view = RecordView::decode(&bytes, &FormatDescriptor::from_args(&args)).unwrap();
        assert_eq!(view.errno(), 0xEE);
        assert_eq!(view.args(), &args);
    }

    #[test]
    fn arguments_come_back_in_call_order() {
        let args = [
            ArgValue::from(false),
            ArgValue::from(-7i32),
            ArgValue::from(1.5f64),
            ArgValue::from(99i64),
        ];
        let bytes = fill_record(&args, 0, RecordHeader::default());
        let view = RecordView::decode(&bytes, &FormatDescriptor::from_args(&args)).unwrap();
        assert_eq!(view.args(), &args);
    }

    #[test]
    fn truncated_buffer_is_rejected() {
        let args = [ArgValue::from(1i64)];
        let bytes = fill_record(&args, 0, RecordHeader::default());
        let descriptor = FormatDescriptor::from_args(&args);
        let err = RecordView::decode(&bytes[..bytes.len() - 1], &descriptor).unwrap_err();
        assert!(matches!(err, RecordError::TruncatedRecord { .. }));
    }

    #[test]
    fn excess_bytes_are_rejected() {
        let bytes = fill_record(&[], 0, RecordHeader::default());
        let mut padded = bytes;
        padded.push(0);
        let err = RecordView::decode(&padded, &FormatDescriptor::new()).unwrap_err();
        assert!(matches!(err, RecordError::OversizedRecord { .. }));
    }
}
