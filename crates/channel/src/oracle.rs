//! crates/channel/src/oracle.rs
//! The process-wide enablement oracle consulted on every gate check.

use std::sync::{Arc, LazyLock, OnceLock, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::flags::EnablementConfig;
use crate::severity::Severity;

/// Answers enablement queries for `(subsystem, category, severity)` triples.
///
/// The oracle is the configuration boundary of the gate: its answer may
/// change over the process lifetime, so callers must re-query on every
/// emission attempt rather than cache a decision. Implementations must be
/// safe to query concurrently from many threads.
pub trait EnablementOracle: Send + Sync {
    /// Returns whether the given severity is currently enabled for the pair.
    fn query_enabled(&self, subsystem: &str, category: &str, severity: Severity) -> bool;
}

/// The in-process default oracle: a lock-guarded [`EnablementConfig`] that
/// can be replaced at runtime.
#[derive(Debug, Default)]
pub struct EnablementTable {
    config: RwLock<EnablementConfig>,
}

impl EnablementTable {
    /// Create a table holding the given configuration.
    #[must_use]
    pub fn new(config: EnablementConfig) -> Self {
        Self {
            config: RwLock::new(config),
        }
    }

    /// Replace the configuration; the next gate check on any thread sees it.
    pub fn store(&self, config: EnablementConfig) {
        *write_lock(&self.config) = config;
    }

    /// Returns a copy of the current configuration.
    #[must_use]
    pub fn snapshot(&self) -> EnablementConfig {
        read_lock(&self.config).clone()
    }

    /// Mutate the configuration in place, under the write lock.
    ///
    /// Concurrent updates serialize against each other; unlike a
    /// snapshot-mutate-store cycle, no writer can overwrite another
    /// writer's change.
    pub fn update(&self, f: impl FnOnce(&mut EnablementConfig)) {
        f(&mut write_lock(&self.config));
    }
}

impl EnablementOracle for EnablementTable {
    fn query_enabled(&self, subsystem: &str, category: &str, severity: Severity) -> bool {
        read_lock(&self.config)
            .flags_for(subsystem, category)
            .get(severity)
    }
}

// Lock poisoning carries no meaning for a plain configuration value; a
// panicked writer leaves the previous (still well-formed) config behind.
fn read_lock(lock: &RwLock<EnablementConfig>) -> RwLockReadGuard<'_, EnablementConfig> {
    match lock.read() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

fn write_lock(lock: &RwLock<EnablementConfig>) -> RwLockWriteGuard<'_, EnablementConfig> {
    match lock.write() {
        Ok(guard) => guard,
        Err(poisoned) => poisoned.into_inner(),
    }
}

static INSTALLED: OnceLock<Arc<dyn EnablementOracle>> = OnceLock::new();
static TABLE: LazyLock<Arc<EnablementTable>> =
    LazyLock::new(|| Arc::new(EnablementTable::default()));

/// Install a custom process-wide oracle.
///
/// The first installation wins and lives for the process lifetime; returns
/// `false` if an oracle was already installed. Until an oracle is installed,
/// gate checks consult [`global_table`].
pub fn install_oracle(oracle: Arc<dyn EnablementOracle>) -> bool {
    INSTALLED.set(oracle).is_ok()
}

/// Returns the built-in process-wide [`EnablementTable`].
///
/// Reconfiguring this table at runtime changes the answer of subsequent gate
/// checks unless a custom oracle has been installed.
#[must_use]
pub fn global_table() -> &'static Arc<EnablementTable> {
    &TABLE
}

/// Query the active oracle (installed, or the built-in table).
pub(crate) fn query(subsystem: &str, category: &str, severity: Severity) -> bool {
    match INSTALLED.get() {
        Some(oracle) => oracle.query_enabled(subsystem, category, severity),
        None => TABLE.query_enabled(subsystem, category, severity),
    }
}
