//! crates/record/src/args.rs
//! Encodable argument kinds, their fixed widths, and concrete values.

/// The closed set of encodable argument types.
///
/// Every kind has a fixed wire width. Fixed widths trade compactness for
/// O(1) fill-position computation: a record is filled front to back without
/// ever revisiting earlier bytes.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[repr(u8)]
pub enum ArgKind {
    /// A boolean, one byte (0 or 1).
    Bool,
    /// A 32-bit signed integer.
    Int32,
    /// A 64-bit signed integer.
    Int64,
    /// A 64-bit IEEE 754 float, encoded via its bit pattern.
    Float64,
    /// An opaque pointer-width value.
    Pointer,
    /// A reference to static text, encoded as a pointer-width value.
    TextRef,
}

impl ArgKind {
    /// Ordered list of all argument kinds.
    pub const ALL: [ArgKind; 6] = [
        ArgKind::Bool,
        ArgKind::Int32,
        ArgKind::Int64,
        ArgKind::Float64,
        ArgKind::Pointer,
        ArgKind::TextRef,
    ];

    /// Returns the fixed number of bytes this kind occupies on the wire.
    #[must_use]
    #[inline]
    pub const fn width(self) -> usize {
        match self {
            Self::Bool => 1,
            Self::Int32 => 4,
            Self::Int64 | Self::Float64 | Self::Pointer | Self::TextRef => 8,
        }
    }
}

/// An opaque reference to `'static` text.
///
/// The wire carries only the reference, never the text itself; consumers in
/// the same process can resolve it, out-of-process consumers treat it as an
/// opaque token. This mirrors the reference-not-copy policy used for format
/// strings.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct TextRef(u64);

impl TextRef {
    /// Build a reference from a `'static` string's address.
    #[must_use]
    pub fn of(text: &'static str) -> Self {
        Self(text.as_ptr() as usize as u64)
    }

    /// Build a reference from a raw token (e.g. when decoding).
    #[must_use]
    pub const fn from_raw(raw: u64) -> Self {
        Self(raw)
    }

    /// Returns the raw token.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

/// A concrete argument value, one variant per [`ArgKind`].
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ArgValue {
    /// A boolean.
    Bool(bool),
    /// A 32-bit signed integer.
    Int32(i32),
    /// A 64-bit signed integer.
    Int64(i64),
    /// A 64-bit float.
    Float64(f64),
    /// An opaque pointer-width value.
    Pointer(u64),
    /// A static text reference.
    TextRef(TextRef),
}

impl ArgValue {
    /// Returns the kind of this value.
    #[must_use]
    pub const fn kind(&self) -> ArgKind {
        match self {
            Self::Bool(_) => ArgKind::Bool,
            Self::Int32(_) => ArgKind::Int32,
            Self::Int64(_) => ArgKind::Int64,
            Self::Float64(_) => ArgKind::Float64,
            Self::Pointer(_) => ArgKind::Pointer,
            Self::TextRef(_) => ArgKind::TextRef,
        }
    }

    /// Encode this value into `out`, which must be exactly `kind().width()`
    /// bytes. Little-endian throughout.
    pub(crate) fn encode_into(&self, out: &mut [u8]) {
        debug_assert_eq!(out.len(), self.kind().width());
        match *self {
            Self::Bool(v) => out[0] = u8::from(v),
            Self::Int32(v) => out.copy_from_slice(&v.to_le_bytes()),
            Self::Int64(v) => out.copy_from_slice(&v.to_le_bytes()),
            Self::Float64(v) => out.copy_from_slice(&v.to_bits().to_le_bytes()),
            Self::Pointer(v) => out.copy_from_slice(&v.to_le_bytes()),
            Self::TextRef(v) => out.copy_from_slice(&v.as_u64().to_le_bytes()),
        }
    }

    /// Decode a value of the given kind from `bytes`, which must be exactly
    /// `kind.width()` bytes.
    pub(crate) fn decode_from(kind: ArgKind, bytes: &[u8]) -> Self {
        debug_assert_eq!(bytes.len(), kind.width());
        let u64_of = |b: &[u8]| {
            let mut raw = [0u8; 8];
            raw.copy_from_slice(b);
            u64::from_le_bytes(raw)
        };
        match kind {
            ArgKind::Bool => Self::Bool(bytes[0] != 0),
            ArgKind::Int32 => {
                let mut raw = [0u8; 4];
                raw.copy_from_slice(bytes);
                Self::Int32(i32::from_le_bytes(raw))
            }
            ArgKind::Int64 => Self::Int64(u64_of(bytes) as i64),
            ArgKind::Float64 => Self::Float64(f64::from_bits(u64_of(bytes))),
            ArgKind::Pointer => Self::Pointer(u64_of(bytes)),
            ArgKind::TextRef => Self::TextRef(TextRef::from_raw(u64_of(bytes))),
        }
    }
}

impl From<bool> for ArgValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<i32> for ArgValue {
    fn from(value: i32) -> Self {
        Self::Int32(value)
    }
}

impl From<i64> for ArgValue {
    fn from(value: i64) -> Self {
        Self::Int64(value)
    }
}

impl From<u32> for ArgValue {
    fn from(value: u32) -> Self {
        // Widened so the full range survives the signed wire type.
        Self::Int64(i64::from(value))
    }
}

impl From<f64> for ArgValue {
    fn from(value: f64) -> Self {
        Self::Float64(value)
    }
}

impl From<f32> for ArgValue {
    fn from(value: f32) -> Self {
        Self::Float64(f64::from(value))
    }
}

impl From<&'static str> for ArgValue {
    fn from(value: &'static str) -> Self {
        Self::TextRef(TextRef::of(value))
    }
}
