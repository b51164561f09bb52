//! Per-record pass/fail rules for each subsystem.
//!
//! Evaluates the structured records against the domain rules and produces
//! verdicts; severity folding happens in the aggregator.

use crate::core::record::{FanRecord, KvRecord, TemperatureRecord};

/// Warn when a temperature is within this percentage of its critical
/// threshold: the warning band begins at `threshold - threshold / PCT`.
pub const WARN_TEMP_PCT: u32 = 10;

/// Check outcome severity.
///
/// Ordering is the aggregation lattice: Critical always wins, an Unknown
/// subsystem is never masked by a Warning or an Ok. Acquisition-failure
/// Unknown never reaches aggregation; it aborts the invocation first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Severity {
    Ok,
    Warning,
    Unknown,
    Critical,
}

impl Severity {
    /// The worse of two severities. Associative and commutative.
    pub fn worse(self, other: Severity) -> Severity {
        self.max(other)
    }
}

/// Whether non-redundant fans and power supplies are treated as critical.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedundancyPolicy {
    Enforce,
    Ignore,
}

impl RedundancyPolicy {
    pub fn enforced(self) -> bool {
        self == RedundancyPolicy::Enforce
    }
}

/// The outcome of evaluating one record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Verdict {
    pub severity: Severity,
    pub message: Option<String>,
}

impl Verdict {
    pub fn ok() -> Self {
        Verdict {
            severity: Severity::Ok,
            message: None,
        }
    }

    pub fn warning(message: String) -> Self {
        Verdict {
            severity: Severity::Warning,
            message: Some(message),
        }
    }

    pub fn critical(message: String) -> Self {
        Verdict {
            severity: Severity::Critical,
            message: Some(message),
        }
    }
}

/// Evaluate one fan record.
///
/// Presence, speed, and redundancy are independent cumulative checks: a
/// single fan can contribute both a Critical and a Warning fragment.
pub fn evaluate_fan(record: &FanRecord, policy: RedundancyPolicy) -> Vec<Verdict> {
    let mut verdicts = Vec::new();

    if record.present != "Yes" {
        verdicts.push(Verdict::critical(format!(
            "Fan {} Status={}.",
            record.id, record.present
        )));
    }
    if record.speed != "NORMAL" {
        verdicts.push(Verdict::warning(format!(
            "Fan {} Speed={}.",
            record.id, record.speed
        )));
    }
    if policy.enforced() && record.redundant != "Yes" {
        verdicts.push(Verdict::critical(format!(
            "Fan {} Redundant={}.",
            record.id, record.redundant
        )));
    }

    if verdicts.is_empty() {
        verdicts.push(Verdict::ok());
    }
    verdicts
}

/// Evaluate one power supply record.
pub fn evaluate_power_supply(record: &KvRecord, policy: RedundancyPolicy) -> Vec<Verdict> {
    let mut verdicts = Vec::new();

    if let Some(present) = record.get("Present") {
        if present != "Yes" {
            verdicts.push(Verdict::critical(format!("PSU #{} Not Present.", record.id)));
        }
    }
    if policy.enforced() {
        if let Some(redundant) = record.get("Redundant") {
            if redundant != "Yes" {
                verdicts.push(Verdict::critical(format!(
                    "PSU #{} Not Redundant.",
                    record.id
                )));
            }
        }
    }
    if let Some(condition) = record.get("Condition") {
        if condition != "Ok" {
            verdicts.push(Verdict::critical(format!(
                "PSU #{} condition is '{}'.",
                record.id, condition
            )));
        }
    }

    if verdicts.is_empty() {
        verdicts.push(Verdict::ok());
    }
    verdicts
}

/// Evaluate one temperature record against the derived warning band.
///
/// Returns `None` for records without a threshold: they are skipped
/// entirely and do not count as evaluated. The Critical comparison runs
/// first and short-circuits the Warning comparison.
pub fn evaluate_temperature(record: &TemperatureRecord, warn_temp_pct: u32) -> Option<Verdict> {
    let threshold = record.threshold_c?;
    let warn_band = threshold as f64 - threshold as f64 * (1.0 / f64::from(warn_temp_pct));
    let message = format!(
        "{}={}C/{}C",
        record.zone, record.current_c, threshold
    );

    if record.current_c >= threshold {
        Some(Verdict::critical(message))
    } else if record.current_c as f64 >= warn_band {
        Some(Verdict::warning(message))
    } else {
        Some(Verdict::ok())
    }
}

/// Evaluate one processor record: any status other than `Ok` is critical
/// and the status value is reported as-is.
pub fn evaluate_processor(record: &KvRecord) -> Verdict {
    match record.get("Status") {
        Some(status) if status != "Ok" => {
            Verdict::critical(format!("Processor {} {}", record.id, status))
        }
        _ => Verdict::ok(),
    }
}

/// Evaluate one memory module record. `N/A` marks an unpopulated slot and
/// is not a failure.
pub fn evaluate_memory_module(record: &KvRecord) -> Verdict {
    match record.get("Status") {
        Some(status) if status != "Ok" && status != "N/A" => {
            Verdict::critical(format!("DIMM {} Status: {}.", record.id, status))
        }
        _ => Verdict::ok(),
    }
}
