//! Severity and message aggregation.
//!
//! Each subsystem evaluation produces a `SubsystemResult` value; an ordered
//! sequence of those folds into one `OverallResult` with a pure, associative
//! reducer. No running state is shared between subsystems.

use crate::core::rules::{RedundancyPolicy, Severity, Verdict};
use crate::core::subsystem::Subsystem;
use crate::error::CheckError;

/// Per-subsystem aggregate: worst severity, message, and the number of
/// records actually evaluated (skipped records excluded).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SubsystemResult {
    pub subsystem: Subsystem,
    pub severity: Severity,
    pub message: String,
    pub record_count: usize,
}

impl SubsystemResult {
    /// Fold a subsystem's verdicts in record order.
    ///
    /// With no failing verdict the message is the canned OK summary for
    /// `record_count` records; otherwise it concatenates every non-Ok
    /// fragment, space separated.
    pub fn from_verdicts(
        subsystem: Subsystem,
        verdicts: &[Verdict],
        record_count: usize,
        policy: RedundancyPolicy,
    ) -> Self {
        let severity = verdicts
            .iter()
            .fold(Severity::Ok, |worst, v| worst.worse(v.severity));

        let message = if severity == Severity::Ok {
            subsystem.ok_summary(record_count, !policy.enforced())
        } else {
            verdicts
                .iter()
                .filter_map(|v| v.message.as_deref())
                .collect::<Vec<_>>()
                .join(" ")
        };

        SubsystemResult {
            subsystem,
            severity,
            message,
            record_count,
        }
    }

    /// Result for a subsystem whose report could not be parsed. Other
    /// subsystems in the same invocation still proceed.
    pub fn degraded(subsystem: Subsystem, err: &CheckError) -> Self {
        SubsystemResult {
            subsystem,
            severity: Severity::Unknown,
            message: format!("{} check failed: {}", subsystem.id(), err),
            record_count: 0,
        }
    }
}

/// Terminal artifact of one invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverallResult {
    pub severity: Severity,
    pub message: String,
    pub subsystems: Vec<SubsystemResult>,
}

impl OverallResult {
    /// Reduce the requested subsystems' results, in request order.
    ///
    /// Severity is the worst across all subsystems and does not depend on
    /// request order; the message concatenates every subsystem's message
    /// (failure fragments or canned OK summary) in request order.
    pub fn combine(results: Vec<SubsystemResult>) -> Self {
        let severity = results
            .iter()
            .fold(Severity::Ok, |worst, r| worst.worse(r.severity));

        let message = results
            .iter()
            .map(|r| r.message.as_str())
            .filter(|m| !m.is_empty())
            .collect::<Vec<_>>()
            .join(" ");

        OverallResult {
            severity,
            message,
            subsystems: results,
        }
    }

    /// Terminal UNKNOWN for a raw report that was empty or unobtainable.
    /// No aggregation happens; remaining subsystems are not evaluated.
    pub fn acquisition_failure(subsystem: Subsystem, reason: &str) -> Self {
        OverallResult {
            severity: Severity::Unknown,
            message: format!("could not acquire {} report: {}", subsystem.id(), reason),
            subsystems: Vec::new(),
        }
    }
}
