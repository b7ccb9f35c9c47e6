//! crates/record/src/descriptor.rs
//! Format descriptors and record size computation.

use crate::args::{ArgKind, ArgValue};
use crate::layout::{ERRNO_LEN, HEADER_LEN};

/// Describes a format string's argument layout: the ordered kinds of the
/// arguments a call site will supply.
///
/// Produced by a front-end (or from the argument values themselves) and
/// consumed by the size computation; the packer trusts the descriptor to
/// agree with the arguments actually appended.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct FormatDescriptor {
    kinds: Vec<ArgKind>,
}

impl FormatDescriptor {
    /// An empty descriptor (a format string with no arguments).
    #[must_use]
    pub const fn new() -> Self {
        Self { kinds: Vec::new() }
    }

    /// Build a descriptor from an explicit kind list.
    #[must_use]
    pub fn from_kinds(kinds: Vec<ArgKind>) -> Self {
        Self { kinds }
    }

    /// Build a descriptor matching a slice of concrete argument values.
    #[must_use]
    pub fn from_args(args: &[ArgValue]) -> Self {
        Self {
            kinds: args.iter().map(ArgValue::kind).collect(),
        }
    }

    /// Append one argument kind.
    pub fn push(&mut self, kind: ArgKind) {
        self.kinds.push(kind);
    }

    /// Returns the argument kinds in call order.
    #[must_use]
    pub fn kinds(&self) -> &[ArgKind] {
        &self.kinds
    }

    /// Returns the number of arguments.
    #[must_use]
    pub fn arg_count(&self) -> usize {
        self.kinds.len()
    }

    /// The exact byte count of the trailing encoded-argument region.
    ///
    /// Deterministic and pure: the captured-errno byte plus the sum of each
    /// argument's fixed width. Never smaller than the errno byte, so a
    /// zero-argument format still carries exactly one trailing byte.
    #[must_use]
    #[doc(alias = "compute_size")]
    pub fn trailing_size(&self) -> usize {
        ERRNO_LEN + self.kinds.iter().map(|kind| kind.width()).sum::<usize>()
    }

    /// The full record size: fixed header plus trailing region.
    #[must_use]
    pub fn record_size(&self) -> usize {
        HEADER_LEN + self.trailing_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_descriptor_is_exactly_the_errno_byte() {
        let descriptor = FormatDescriptor::new();
        assert_eq!(descriptor.trailing_size(), ERRNO_LEN);
        assert_eq!(descriptor.record_size(), HEADER_LEN + ERRNO_LEN);
    }

    #[test]
    fn trailing_size_sums_fixed_widths() {
        let descriptor =
            FormatDescriptor::from_kinds(vec![ArgKind::Int32, ArgKind::TextRef, ArgKind::Bool]);
        assert_eq!(descriptor.trailing_size(), ERRNO_LEN + 4 + 8 + 1);
    }

    #[test]
    fn from_args_matches_value_kinds() {
        let args = [ArgValue::from(1i32), ArgValue::from(2.0f64)];
        let descriptor = FormatDescriptor::from_args(&args);
        assert_eq!(descriptor.kinds(), &[ArgKind::Int32, ArgKind::Float64]);
        assert_eq!(descriptor.arg_count(), 2);
    }

    #[test]
    fn push_extends_the_layout() {
        let mut descriptor = FormatDescriptor::new();
        descriptor.push(ArgKind::Int64);
        descriptor.push(ArgKind::Pointer);
        assert_eq!(descriptor.trailing_size(), ERRNO_LEN + 16);
    }

    #[test]
    fn size_computation_is_repeatable() {
        let descriptor = FormatDescriptor::from_kinds(vec![ArgKind::Float64; 5]);
        let first = descriptor.trailing_size();
        for _ in 0..10 {
            assert_eq!(descriptor.trailing_size(), first);
        }
    }
}
