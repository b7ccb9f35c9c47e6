//! crates/emit/src/pipeline.rs
//! The emitter: gate, pack, and hand off, plus the process-wide instance.

use crate::scratch::with_scratch;
use crate::sink::{NullSink, RecordSink};
use channel::{Channel, Severity};
use record::{
    ArgValue, CallSite, FormatDescriptor, ModuleHandle, RecordError, RecordHeader, RecordPack,
    begin_fill,
};
use std::fmt;
use std::io;
use std::sync::{Arc, LazyLock, OnceLock};

/// What became of one emission attempt.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum SendOutcome {
    /// The record was packed and handed to the sink.
    Sent,
    /// The gate was closed; nothing was packed or transmitted.
    Suppressed,
}

/// The calling thread's last OS error code, truncated to the wire width.
fn last_errno() -> u8 {
    io::Error::last_os_error().raw_os_error().unwrap_or(0) as u8
}

/// Drives the emission pipeline for one sink.
///
/// Every call re-checks the channel gate before doing any other work, so a
/// disabled emission costs one enablement query and nothing else: no size
/// computation, no buffer, no sink traffic.
#[derive(Clone)]
pub struct Emitter {
    sink: Arc<dyn RecordSink>,
    module: ModuleHandle,
}

impl fmt::Debug for Emitter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Emitter")
            .field("module", &self.module)
            .finish_non_exhaustive()
    }
}

impl Emitter {
    /// An emitter for the current image, delivering to `sink`.
    #[must_use]
    pub fn new(sink: Arc<dyn RecordSink>) -> Self {
        Self {
            sink,
            module: ModuleHandle::current(),
        }
    }

    /// Returns a copy attributed to a different image handle.
    #[must_use]
    pub fn with_module(mut self, module: ModuleHandle) -> Self {
        self.module = module;
        self
    }

    fn header(&self, call_site: CallSite, format: &'static str) -> RecordHeader {
        RecordHeader::for_format(format)
            .at(call_site)
            .with_module(self.module)
    }

    /// Emit one event immediately.
    ///
    /// Packs into thread-local scratch and hands the bytes to the sink in
    /// one motion; nothing happens at all when the gate is closed.
    pub fn log(
        &self,
        channel: &Channel,
        severity: Severity,
        format: &'static str,
        args: &[ArgValue],
    ) -> SendOutcome {
        self.log_from(channel, severity, CallSite::default(), format, args)
    }

    /// Emit one event immediately, attributed to an explicit call site.
    pub fn log_from(
        &self,
        channel: &Channel,
        severity: Severity,
        call_site: CallSite,
        format: &'static str,
        args: &[ArgValue],
    ) -> SendOutcome {
        if !channel.is_enabled(severity) {
            return SendOutcome::Suppressed;
        }

        let errno = last_errno();
        let descriptor = FormatDescriptor::from_args(args);
        let total = descriptor.record_size();
        let header = self.header(call_site, format);

        with_scratch(total, |buf| {
            if let Err(err) = fill_into(buf, total, errno, header, args) {
                // The descriptor is derived from the arguments themselves and
                // the buffer is at least `total` bytes.
                unreachable!("derived layout failed to fill: {err}");
            }
            self.sink.send(&buf[..total], channel, severity);
            SendOutcome::Sent
        })
    }

    /// Build a deferred record now, for transmission later.
    ///
    /// The errno and timestamps reflect this moment, not the eventual send.
    /// Building is unconditional; gating happens in
    /// [`send_pack`](Self::send_pack).
    #[must_use]
    pub fn prepare(
        &self,
        call_site: CallSite,
        format: &'static str,
        args: &[ArgValue],
    ) -> RecordPack {
        RecordPack::build(self.header(call_site, format), last_errno(), args)
    }

    /// Transmit a previously built record.
    ///
    /// The gate is re-checked here with the current configuration; a channel
    /// disabled since the pack was built suppresses the send. The pack is
    /// consumed either way, so a retry requires a fresh build.
    pub fn send_pack(
        &self,
        pack: RecordPack,
        channel: &Channel,
        severity: Severity,
    ) -> SendOutcome {
        if !channel.is_enabled(severity) {
            return SendOutcome::Suppressed;
        }
        self.sink.send(pack.bytes(), channel, severity);
        SendOutcome::Sent
    }
}

fn fill_into(
    buf: &mut [u8],
    total: usize,
    errno: u8,
    header: RecordHeader,
    args: &[ArgValue],
) -> Result<(), RecordError> {
    let mut cursor = begin_fill(buf, total, errno, header)?;
    for value in args {
        cursor.append(value)?;
    }
    cursor.finish()?;
    Ok(())
}

static EMITTER: OnceLock<Emitter> = OnceLock::new();
static FALLBACK: LazyLock<Emitter> = LazyLock::new(|| Emitter::new(Arc::new(NullSink)));

/// Install the process-wide emitter. The first installation wins; later
/// calls return `false` and change nothing.
pub fn init(sink: Arc<dyn RecordSink>) -> bool {
    EMITTER.set(Emitter::new(sink)).is_ok()
}

/// The process-wide emitter.
///
/// Before [`init`] has run this is a null emitter: gating still happens,
/// delivered records go nowhere.
#[must_use]
pub fn global() -> &'static Emitter {
    EMITTER.get().unwrap_or(&FALLBACK)
}
