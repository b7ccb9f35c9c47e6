//! crates/channel/src/error.rs
//! Typed errors for configuration parsing and severity decoding.

/// Failures encountered while parsing enablement configuration input.
#[derive(Clone, Debug, Eq, PartialEq, thiserror::Error)]
pub enum ConfigError {
    /// A numeric severity code did not match any known severity.
    #[error("unknown severity code 0x{0:02x}")]
    UnknownSeverityCode(u8),
    /// A flag token named a severity this crate does not define.
    #[error("unknown severity flag: {0}")]
    UnknownFlagToken(String),
    /// An empty flag token was supplied.
    #[error("empty severity flag token")]
    EmptyFlagToken,
}
