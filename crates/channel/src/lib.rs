#![deny(unsafe_code)]
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]

//! crates/channel/src/lib.rs
//!
//! # Overview
//!
//! `channel` provides the named logging endpoints and the enablement gate of
//! the tracelog workspace. A [`Channel`] identifies a `(subsystem, category)`
//! pair; [`Severity`] is the closed set of log importance levels; the gate
//! ([`Channel::is_enabled`]) decides, before any formatting work happens,
//! whether an emission attempt should proceed.
//!
//! # Design
//!
//! Enablement is never owned by the channel itself. Every gate check consults
//! the process-wide [`EnablementOracle`], so a runtime reconfiguration is
//! visible to the very next emission attempt on any thread. Channels are
//! cheaply clonable capabilities backed by an atomically reference-counted
//! allocation; cloning acquires a reference and dropping releases it.
//!
//! # Invariants
//!
//! - The [`Channel::disabled`] singleton reports every severity as not
//!   enabled, across repeated calls and across the process lifetime.
//! - A channel's identity (subsystem, category) is immutable after creation;
//!   only its enablement, held by the oracle, is mutable.
//! - [`Channel::is_enabled`] is side-effect free and safe under
//!   unsynchronized concurrent calls against the same channel.
//!
//! # Examples
//!
//! ```
//! use channel::{Channel, Severity};
//!
//! let net = Channel::new("com.example.app", "network");
//! assert_eq!(net.subsystem(), "com.example.app");
//!
//! // Error and fault are enabled by the ambient defaults; debug is not.
//! assert!(net.is_enabled(Severity::Error));
//! assert!(!net.is_debug_enabled());
//!
//! // The disabled singleton never lets anything through.
//! let off = Channel::disabled();
//! assert!(!off.is_enabled(Severity::Fault));
//! ```

mod channel;
mod error;
mod flags;
mod oracle;
mod severity;

pub use channel::Channel;
pub use error::ConfigError;
pub use flags::{EnablementConfig, SeverityFlags};
pub use oracle::{EnablementOracle, EnablementTable, global_table, install_oracle};
pub use severity::Severity;
