//! crates/record/src/layout.rs
//! Fixed header layout, reference newtypes, and timestamp capture.

use std::hash::{DefaultHasher, Hash, Hasher};
use std::sync::LazyLock;
use std::time::{Instant, SystemTime, UNIX_EPOCH};

/// Total width of the fixed record header, in bytes.
///
/// Continuous timestamp (8) + wall seconds (8) + wall nanoseconds (4) +
/// module handle (8) + call site (8) + format reference (8).
pub const HEADER_LEN: usize = 44;

/// Width of the captured-errno field that leads the trailing region.
pub const ERRNO_LEN: usize = 1;

pub(crate) const OFF_CONTINUOUS: usize = 0;
pub(crate) const OFF_WALL_SEC: usize = 8;
pub(crate) const OFF_WALL_NSEC: usize = 16;
pub(crate) const OFF_MODULE: usize = 20;
pub(crate) const OFF_CALL_SITE: usize = 28;
pub(crate) const OFF_FORMAT: usize = 36;

/// Identifies the binary image a record was emitted from.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct ModuleHandle(u64);

// Anchor whose address stands in for the image base of whatever binary this
// crate is linked into.
static IMAGE_ANCHOR: u8 = 0;

impl ModuleHandle {
    /// Wrap a raw handle value.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// A handle identifying the currently executing image.
    #[must_use]
    pub fn current() -> Self {
        Self(std::ptr::from_ref(&IMAGE_ANCHOR) as usize as u64)
    }

    /// Returns the raw handle value.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

/// Identifies the call site that produced a record.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct CallSite(u64);

impl CallSite {
    /// Wrap a raw call-site token.
    #[must_use]
    pub const fn new(raw: u64) -> Self {
        Self(raw)
    }

    /// Derive a stable token from a source location.
    ///
    /// Deterministic within a build, so repeated emissions from one call
    /// site carry the same token.
    #[must_use]
    pub fn from_location(file: &'static str, line: u32) -> Self {
        let mut hasher = DefaultHasher::new();
        file.hash(&mut hasher);
        line.hash(&mut hasher);
        Self(hasher.finish())
    }

    /// Returns the raw token.
    #[must_use]
    pub const fn as_u64(self) -> u64 {
        self.0
    }
}

/// An opaque reference to the original format string.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct FormatRef(u64);

impl FormatRef {
    /// Build a reference from a `'static` format string's address.
    #[must_use]
    pub fn of(format: &'static str) -> Self {
        Self(format.as_ptr() as usize as u64)
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

/// The caller-supplied identity fields of a record header.
///
/// Timestamps are not part of this struct: they are captured by the fill
/// routine at the moment the buffer is written.
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct RecordHeader {
    /// The emitting binary image.
    pub module: ModuleHandle,
    /// The call site producing the record.
    pub call_site: CallSite,
    /// The format string the arguments belong to.
    pub format: FormatRef,
}

impl RecordHeader {
    /// Build a header for the current image and the given format string.
    #[must_use]
    pub fn for_format(format: &'static str) -> Self {
        Self {
            module: ModuleHandle::current(),
            call_site: CallSite::default(),
            format: FormatRef::of(format),
        }
    }

    /// Returns a copy with the given call site.
    #[must_use]
    pub const fn at(mut self, call_site: CallSite) -> Self {
        self.call_site = call_site;
        self
    }

    /// Returns a copy attributed to the given image handle.
    #[must_use]
    pub const fn with_module(mut self, module: ModuleHandle) -> Self {
        self.module = module;
        self
    }
}

static PROCESS_EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);

/// A pair of timestamps captured at fill time.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Timestamps {
    /// Nanoseconds of monotonic time since the process-wide epoch.
    pub continuous_ns: u64,
    /// Whole seconds of wall-clock time since the Unix epoch.
    pub wall_secs: u64,
    /// Subsecond nanoseconds of the wall-clock timestamp.
    pub wall_nanos: u32,
}

impl Timestamps {
    /// Capture the current monotonic and wall-clock time.
    ///
    /// The monotonic reading never goes backwards within a process; the
    /// wall clock may. A wall clock before the Unix epoch reads as zero.
    #[must_use]
    pub fn capture() -> Self {
        let continuous = PROCESS_EPOCH.elapsed();
        let wall = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default();
        Self {
            continuous_ns: continuous.as_nanos() as u64,
            wall_secs: wall.as_secs(),
            wall_nanos: wall.subsec_nanos(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn header_len_matches_field_sum() {
        assert_eq!(OFF_FORMAT + 8, HEADER_LEN);
        assert_eq!(OFF_WALL_SEC - OFF_CONTINUOUS, 8);
        assert_eq!(OFF_WALL_NSEC - OFF_WALL_SEC, 8);
        assert_eq!(OFF_MODULE - OFF_WALL_NSEC, 4);
        assert_eq!(OFF_CALL_SITE - OFF_MODULE, 8);
        assert_eq!(OFF_FORMAT - OFF_CALL_SITE, 8);
    }

    #[test]
    fn module_handle_is_stable_within_a_process() {
        assert_eq!(ModuleHandle::current(), ModuleHandle::current());
        assert_ne!(ModuleHandle::current().as_u64(), 0);
    }

    #[test]
    fn call_site_tokens_are_deterministic() {
        let a = CallSite::from_location("src/lib.rs", 10);
        let b = CallSite::from_location("src/lib.rs", 10);
        let c = CallSite::from_location("src/lib.rs", 11);
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn continuous_time_is_monotonic() {
        let first = Timestamps::capture();
        let second = Timestamps::capture();
        assert!(second.continuous_ns >= first.continuous_ns);
    }

    #[test]
    fn header_builder_sets_format_and_site() {
        let header = RecordHeader::for_format("hello").at(CallSite::new(9));
        assert_eq!(header.call_site.as_u64(), 9);
        assert_ne!(header.format.as_u64(), 0);
        assert_eq!(header.module, ModuleHandle::current());
    }
}
