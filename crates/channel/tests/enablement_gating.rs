//! Integration tests for severity gating against the process-wide table.
//!
//! These tests verify that the gate consults the oracle on every call, that
//! runtime reconfiguration is visible to existing channels, and that
//! severities toggle independently of one another.
//!
//! Each test uses its own subsystem override so concurrently running tests
//! never observe one another's reconfiguration, and all writes go through
//! [`EnablementTable::update`] so parallel tests cannot lose each other's
//! overrides.
//!
//! [`EnablementTable::update`]: channel::EnablementTable::update

use channel::{Channel, EnablementConfig, SeverityFlags, Severity, global_table};

fn set_flags(subsystem: &str, flags: SeverityFlags) {
    global_table().update(|config| config.set_override(subsystem, None, flags));
}

/// Verifies a reconfiguration is visible to a channel created beforehand.
#[test]
fn existing_channels_observe_reconfiguration() {
    let channel = Channel::new("gating.reconfig", "io");

    set_flags("gating.reconfig", SeverityFlags::all_off());
    assert!(!channel.is_enabled(Severity::Error));

    set_flags("gating.reconfig", SeverityFlags::all_on());
    assert!(channel.is_enabled(Severity::Error));
    assert!(channel.is_debug_enabled());
}

/// Verifies each severity is gated independently of the others.
#[test]
fn severities_toggle_independently() {
    let channel = Channel::new("gating.independent", "io");

    for severity in Severity::all() {
        let mut flags = SeverityFlags::all_off();
        flags.set(*severity, true);
        set_flags("gating.independent", flags);

        for probe in Severity::all() {
            assert_eq!(channel.is_enabled(*probe), probe == severity);
        }
    }
}

/// Verifies error and fault are not implied by enabling the chatty levels.
#[test]
fn error_class_is_not_a_superset_of_info() {
    let channel = Channel::new("gating.classes", "io");

    let mut flags = SeverityFlags::all_off();
    flags.info = true;
    flags.debug = true;
    set_flags("gating.classes", flags);

    assert!(channel.is_enabled(Severity::Info));
    assert!(channel.is_enabled(Severity::Debug));
    assert!(!channel.is_enabled(Severity::Error));
    assert!(!channel.is_enabled(Severity::Fault));
}

/// Verifies two handles with the same names always gate identically.
#[test]
fn equal_names_gate_identically() {
    let first = Channel::new("gating.equal", "net");
    let second = Channel::new("gating.equal", "net");

    set_flags("gating.equal", SeverityFlags::all_on());
    for severity in Severity::all() {
        assert_eq!(first.is_enabled(*severity), second.is_enabled(*severity));
    }
}

/// Verifies category overrides beat subsystem overrides.
#[test]
fn category_override_is_most_specific() {
    global_table().update(|config| {
        config.set_override("gating.specific", None, SeverityFlags::all_off());
        config.set_override("gating.specific", Some("net"), SeverityFlags::all_on());
    });

    let net = Channel::new("gating.specific", "net");
    let ui = Channel::new("gating.specific", "ui");
    assert!(net.is_debug_enabled());
    assert!(!ui.is_enabled(Severity::Error));
}

/// Verifies verbosity-derived configs follow the documented ladder.
#[test]
fn verbosity_ladder_matches_contract() {
    let quiet = EnablementConfig::from_verbosity(0);
    assert!(!quiet.baseline().info);
    assert!(!quiet.baseline().debug);
    assert!(quiet.baseline().fault);

    let verbose = EnablementConfig::from_verbosity(1);
    assert!(verbose.baseline().info);
    assert!(!verbose.baseline().debug);

    let noisy = EnablementConfig::from_verbosity(2);
    assert!(noisy.baseline().info);
    assert!(noisy.baseline().debug);
}
