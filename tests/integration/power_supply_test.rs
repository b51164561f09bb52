use check_proliant::core::engine::{evaluate, CheckOptions};
use check_proliant::core::rules::{RedundancyPolicy, Severity};
use check_proliant::core::subsystem::Subsystem;

use super::support::{StubSource, PSU_FAILED, PSU_OK};

#[test]
fn test_healthy_power_supplies_are_ok() {
    let source = StubSource::new().with(Subsystem::PowerSupply, PSU_OK);
    let result = evaluate(&source, &[Subsystem::PowerSupply], CheckOptions::default());

    assert_eq!(result.severity, Severity::Ok);
    assert_eq!(result.message, "ALL (2) PSUs OK and Redundant.");
}

#[test]
fn test_failed_condition_is_critical() {
    let source = StubSource::new().with(Subsystem::PowerSupply, PSU_FAILED);
    let result = evaluate(&source, &[Subsystem::PowerSupply], CheckOptions::default());

    assert_eq!(result.severity, Severity::Critical);
    assert!(result.message.contains("PSU #1 condition is 'Failed'."));
    assert!(result.message.contains("PSU #1 Not Redundant."));
    assert!(result.message.contains("PSU #2 Not Redundant."));
}

#[test]
fn test_ignore_redundant_reports_condition_only() {
    let source = StubSource::new().with(Subsystem::PowerSupply, PSU_FAILED);
    let opts = CheckOptions {
        redundancy: RedundancyPolicy::Ignore,
        ..CheckOptions::default()
    };
    let result = evaluate(&source, &[Subsystem::PowerSupply], opts);

    assert_eq!(result.severity, Severity::Critical);
    assert!(result.message.contains("PSU #1 condition is 'Failed'."));
    assert!(!result.message.contains("Not Redundant"));
}

#[test]
fn test_ok_summary_under_ignore_redundant() {
    let source = StubSource::new().with(Subsystem::PowerSupply, PSU_OK);
    let opts = CheckOptions {
        redundancy: RedundancyPolicy::Ignore,
        ..CheckOptions::default()
    };
    let result = evaluate(&source, &[Subsystem::PowerSupply], opts);

    assert_eq!(result.severity, Severity::Ok);
    assert_eq!(result.message, "ALL (2) PSUs OK.");
}
