//! crates/emit/src/scratch.rs
//! Thread-local fill buffers so common emissions never allocate.

use std::cell::RefCell;

/// Stack-style scratch capacity; records larger than this fall back to a
/// per-emission heap allocation.
pub(crate) const SCRATCH_LEN: usize = 512;

thread_local! {
    static SCRATCH: RefCell<[u8; SCRATCH_LEN]> = const { RefCell::new([0u8; SCRATCH_LEN]) };
}

/// Run `fill` with a zeroed buffer of at least `total` bytes.
///
/// Small records reuse the thread-local scratch array; oversized ones get a
/// fresh heap buffer. Re-entrant use (a sink that emits while handling a
/// send) also falls back to the heap rather than aliasing the scratch.
pub(crate) fn with_scratch<R>(total: usize, fill: impl FnOnce(&mut [u8]) -> R) -> R {
    if total <= SCRATCH_LEN {
        return SCRATCH.with(|scratch| match scratch.try_borrow_mut() {
            Ok(mut buf) => {
                buf[..total].fill(0);
                fill(&mut buf[..total])
            }
            Err(_) => {
                let mut buf = vec![0u8; total];
                fill(&mut buf)
            }
        });
    }
    let mut buf = vec![0u8; total];
    fill(&mut buf)
}
