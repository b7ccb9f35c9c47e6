//! crates/channel/src/channel.rs
//! The channel capability type and its process-wide singletons.

use std::sync::{Arc, LazyLock};

use crate::oracle;
use crate::severity::Severity;

/// A named logging endpoint: a `(subsystem, category)` pair with
/// independently gated severities.
///
/// Channels are capabilities, not registries: creating one never fails and
/// never consults global state. Cloning acquires a reference and dropping
/// releases it; the backing allocation is freed when the last clone goes
/// away. Identity is immutable after creation, and enablement always lives
/// in the process-wide oracle, so two channels created with the same names
/// gate identically.
#[derive(Clone, Debug)]
pub struct Channel {
    inner: Arc<ChannelInner>,
}

#[derive(Debug)]
struct ChannelInner {
    subsystem: Box<str>,
    category: Box<str>,
    disabled: bool,
}

static DEFAULT: LazyLock<Channel> = LazyLock::new(|| Channel {
    inner: Arc::new(ChannelInner {
        subsystem: Box::from(""),
        category: Box::from(""),
        disabled: false,
    }),
});

static DISABLED: LazyLock<Channel> = LazyLock::new(|| Channel {
    inner: Arc::new(ChannelInner {
        subsystem: Box::from(""),
        category: Box::from(""),
        disabled: true,
    }),
});

impl Channel {
    /// Create a channel for the given subsystem and category.
    ///
    /// Never fails; empty names are accepted and behave like the unnamed
    /// default identity under the oracle's baseline flags.
    #[must_use]
    pub fn new(subsystem: &str, category: &str) -> Self {
        Self {
            inner: Arc::new(ChannelInner {
                subsystem: Box::from(subsystem),
                category: Box::from(category),
                disabled: false,
            }),
        }
    }

    /// The process-wide default channel.
    ///
    /// Its enablement is governed entirely by the ambient configuration; the
    /// caller has no per-channel control over it.
    #[must_use]
    pub fn default_channel() -> Self {
        DEFAULT.clone()
    }

    /// The process-wide disabled channel.
    ///
    /// Reports every severity as not enabled, forever; no reconfiguration
    /// can turn it on.
    #[must_use]
    pub fn disabled() -> Self {
        DISABLED.clone()
    }

    /// Returns the subsystem name.
    #[must_use]
    pub fn subsystem(&self) -> &str {
        &self.inner.subsystem
    }

    /// Returns the category name.
    #[must_use]
    pub fn category(&self) -> &str {
        &self.inner.category
    }

    /// Returns whether this is the disabled singleton identity.
    #[must_use]
    pub fn is_disabled(&self) -> bool {
        self.inner.disabled
    }

    /// The gate: returns whether the given severity is currently enabled.
    ///
    /// Pure and side-effect free; safe to call at arbitrarily high frequency
    /// and from any number of threads concurrently. The oracle is consulted
    /// on every call so runtime reconfiguration is never missed.
    #[must_use]
    pub fn is_enabled(&self, severity: Severity) -> bool {
        if self.inner.disabled {
            return false;
        }
        oracle::query(&self.inner.subsystem, &self.inner.category, severity)
    }

    /// Convenience for `is_enabled(Severity::Debug)`.
    #[must_use]
    pub fn is_debug_enabled(&self) -> bool {
        self.is_enabled(Severity::Debug)
    }

    /// Returns whether two handles refer to the same channel allocation.
    #[must_use]
    pub fn same_channel(&self, other: &Self) -> bool {
        Arc::ptr_eq(&self.inner, &other.inner)
    }
}
