//! crates/channel/src/severity.rs
//! The closed set of log severities and their wire codes.

use core::fmt;

use crate::error::ConfigError;

/// Severity of a log emission.
///
/// The numeric values are the wire codes carried alongside packed records, so
/// consumers can reason about severity without translating identifiers. The
/// set is deliberately not a linear hierarchy: [`Severity::Error`] and
/// [`Severity::Fault`] occupy a separate code range (`0x10..`) from the
/// chatty levels, and gating treats every level as independently toggleable.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Severity {
    /// Messages with no explicit level, always eligible by default.
    Default = 0x00,
    /// Informational messages, useful but not essential.
    Info = 0x01,
    /// Debug-level messages, normally off outside development.
    Debug = 0x02,
    /// Process-level error conditions.
    Error = 0x10,
    /// System-level or multi-process fault conditions.
    Fault = 0x11,
}

impl Severity {
    /// Returns the numeric representation carried on the wire.
    #[must_use]
    #[inline]
    pub const fn as_u8(self) -> u8 {
        self as u8
    }

    /// Ordered list of all severities.
    ///
    /// Arranged by numeric code so callers can iterate deterministically when
    /// building enablement tables or exhaustively testing the gate.
    pub const ALL: [Severity; 5] = [
        Severity::Default,
        Severity::Info,
        Severity::Debug,
        Severity::Error,
        Severity::Fault,
    ];

    /// Returns the ordered list of all severities.
    #[must_use]
    pub const fn all() -> &'static [Severity; 5] {
        &Self::ALL
    }

    /// Returns the lowercase name used in flag tokens and diagnostics.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Default => "default",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Error => "error",
            Self::Fault => "fault",
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl TryFrom<u8> for Severity {
    type Error = ConfigError;

    fn try_from(value: u8) -> Result<Self, ConfigError> {
        match value {
            0x00 => Ok(Self::Default),
            0x01 => Ok(Self::Info),
            0x02 => Ok(Self::Debug),
            0x10 => Ok(Self::Error),
            0x11 => Ok(Self::Fault),
            other => Err(ConfigError::UnknownSeverityCode(other)),
        }
    }
}
