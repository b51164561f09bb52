use check_proliant::core::engine::{evaluate, CheckOptions};
use check_proliant::core::rules::{RedundancyPolicy, Severity};
use check_proliant::core::subsystem::Subsystem;

use super::support::{StubSource, FANS_MISSING, FANS_OK, FANS_SPEED_HIGH};

#[test]
fn test_healthy_fans_are_ok() {
    let source = StubSource::new().with(Subsystem::Fan, FANS_OK);
    let result = evaluate(&source, &[Subsystem::Fan], CheckOptions::default());

    assert_eq!(result.severity, Severity::Ok);
    assert_eq!(result.message, "2 fans normal.");
    assert_eq!(result.subsystems[0].record_count, 2);
}

#[test]
fn test_high_speed_fan_is_warning() {
    let source = StubSource::new().with(Subsystem::Fan, FANS_SPEED_HIGH);
    let result = evaluate(&source, &[Subsystem::Fan], CheckOptions::default());

    assert_eq!(result.severity, Severity::Warning);
    assert!(result.message.contains("Fan 2 Speed=HIGH."));
    assert!(!result.message.contains("Status="));
}

#[test]
fn test_missing_fan_is_critical_and_keeps_warning_fragment() {
    let source = StubSource::new().with(Subsystem::Fan, FANS_MISSING);
    let result = evaluate(&source, &[Subsystem::Fan], CheckOptions::default());

    assert_eq!(result.severity, Severity::Critical);
    assert!(result.message.contains("Fan 1 Status=No."));
    assert!(result.message.contains("Fan 1 Speed=HIGH."));
    assert!(result.message.contains("Fan 1 Redundant=No."));
}

#[test]
fn test_ignore_redundant_policy_skips_redundancy_check() {
    let source = StubSource::new().with(Subsystem::Fan, FANS_MISSING);
    let opts = CheckOptions {
        redundancy: RedundancyPolicy::Ignore,
        ..CheckOptions::default()
    };
    let result = evaluate(&source, &[Subsystem::Fan], opts);

    assert_eq!(result.severity, Severity::Critical);
    assert!(!result.message.contains("Redundant=No."));
}
