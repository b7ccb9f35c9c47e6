//! crates/channel/src/flags.rs
//! Per-severity enablement flags and the process-wide configuration shape.

use crate::error::ConfigError;
use crate::severity::Severity;

/// Independent enablement flags, one per [`Severity`].
///
/// Gating is per-level: enabling `debug` says nothing about `info`, and the
/// error-class levels are toggled separately from the chatty ones.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SeverityFlags {
    /// Default-severity messages.
    pub default_on: bool,
    /// Info-severity messages.
    pub info: bool,
    /// Debug-severity messages.
    pub debug: bool,
    /// Error-severity messages.
    pub error: bool,
    /// Fault-severity messages.
    pub fault: bool,
}

impl SeverityFlags {
    /// Flags with every severity enabled.
    #[must_use]
    pub const fn all_on() -> Self {
        Self {
            default_on: true,
            info: true,
            debug: true,
            error: true,
            fault: true,
        }
    }

    /// Flags with every severity disabled.
    #[must_use]
    pub const fn all_off() -> Self {
        Self {
            default_on: false,
            info: false,
            debug: false,
            error: false,
            fault: false,
        }
    }

    /// Get the flag for a specific severity.
    #[must_use]
    pub const fn get(&self, severity: Severity) -> bool {
        match severity {
            Severity::Default => self.default_on,
            Severity::Info => self.info,
            Severity::Debug => self.debug,
            Severity::Error => self.error,
            Severity::Fault => self.fault,
        }
    }

    /// Set the flag for a specific severity.
    pub fn set(&mut self, severity: Severity, enabled: bool) {
        match severity {
            Severity::Default => self.default_on = enabled,
            Severity::Info => self.info = enabled,
            Severity::Debug => self.debug = enabled,
            Severity::Error => self.error = enabled,
            Severity::Fault => self.fault = enabled,
        }
    }

    /// Enable every severity.
    pub fn enable_all(&mut self) {
        *self = Self::all_on();
    }
}

impl Default for SeverityFlags {
    /// The ambient defaults: default, error, and fault messages are eligible;
    /// info and debug stay off until explicitly requested.
    fn default() -> Self {
        Self {
            default_on: true,
            info: false,
            debug: false,
            error: true,
            fault: true,
        }
    }
}

/// One per-subsystem (optionally per-category) enablement override.
#[derive(Clone, Debug, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
struct OverrideRule {
    subsystem: String,
    category: Option<String>,
    flags: SeverityFlags,
}

/// Process-wide enablement configuration.
///
/// A baseline [`SeverityFlags`] applies to every channel; overrides narrow or
/// widen it per subsystem, or per `(subsystem, category)` pair. The most
/// specific matching rule wins; among rules of equal specificity the one set
/// last wins, mirroring the order configuration files are applied in.
#[derive(Clone, Debug, Default, Eq, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EnablementConfig {
    baseline: SeverityFlags,
    overrides: Vec<OverrideRule>,
}

impl EnablementConfig {
    /// Create a configuration with the given baseline and no overrides.
    #[must_use]
    pub const fn with_baseline(baseline: SeverityFlags) -> Self {
        Self {
            baseline,
            overrides: Vec::new(),
        }
    }

    /// Create a configuration from a verbosity knob.
    ///
    /// Level 0 is the ambient default; level 1 additionally enables info;
    /// level 2 and above enables everything including debug.
    #[must_use]
    pub fn from_verbosity(level: u8) -> Self {
        let mut baseline = SeverityFlags::default();
        if level >= 1 {
            baseline.info = true;
        }
        if level >= 2 {
            baseline.debug = true;
        }
        Self::with_baseline(baseline)
    }

    /// Returns the baseline flags.
    #[must_use]
    pub const fn baseline(&self) -> SeverityFlags {
        self.baseline
    }

    /// Apply a single flag token to the baseline (e.g. `"debug"`, `"-info"`).
    ///
    /// A bare severity name enables that level; a leading `-` disables it.
    /// `"all"` and `"none"` replace the whole baseline.
    pub fn apply_flag_token(&mut self, token: &str) -> Result<(), ConfigError> {
        if token.is_empty() {
            return Err(ConfigError::EmptyFlagToken);
        }

        let (name, enabled) = match token.strip_prefix('-') {
            Some(rest) if rest.is_empty() => return Err(ConfigError::EmptyFlagToken),
            Some(rest) => (rest, false),
            None => (token, true),
        };

        match name {
            "all" => self.baseline = SeverityFlags::all_on(),
            "none" => self.baseline = SeverityFlags::all_off(),
            _ => {
                let severity = severity_from_name(name)?;
                self.baseline.set(severity, enabled);
            }
        }
        Ok(())
    }

    /// Install an override for a subsystem, or for one of its categories.
    ///
    /// Re-installing for the same scope replaces the previous rule.
    pub fn set_override(
        &mut self,
        subsystem: &str,
        category: Option<&str>,
        flags: SeverityFlags,
    ) {
        self.overrides
            .retain(|rule| !(rule.subsystem == subsystem && rule.category.as_deref() == category));
        self.overrides.push(OverrideRule {
            subsystem: subsystem.to_owned(),
            category: category.map(str::to_owned),
            flags,
        });
    }

    /// Resolve the effective flags for a `(subsystem, category)` pair.
    #[must_use]
    pub fn flags_for(&self, subsystem: &str, category: &str) -> SeverityFlags {
        let mut subsystem_match = None;
        let mut exact_match = None;
        for rule in &self.overrides {
            if rule.subsystem != subsystem {
                continue;
            }
            match rule.category.as_deref() {
                Some(c) if c == category => exact_match = Some(rule.flags),
                Some(_) => {}
                None => subsystem_match = Some(rule.flags),
            }
        }
        exact_match.or(subsystem_match).unwrap_or(self.baseline)
    }
}

fn severity_from_name(name: &str) -> Result<Severity, ConfigError> {
    Severity::all()
        .iter()
        .find(|severity| severity.name() == name)
        .copied()
        .ok_or_else(|| ConfigError::UnknownFlagToken(name.to_owned()))
}
