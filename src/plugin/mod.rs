//! Monitoring-plugin output: status line, performance data, exit code.

use std::fmt;

use crate::core::aggregate::OverallResult;
use crate::core::rules::Severity;

/// Monitoring-plugin service states with their wire exit codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ServiceState {
    Ok,
    Warning,
    Critical,
    Unknown,
}

impl ServiceState {
    pub fn exit_code(self) -> i32 {
        match self {
            ServiceState::Ok => 0,
            ServiceState::Warning => 1,
            ServiceState::Critical => 2,
            ServiceState::Unknown => 3,
        }
    }
}

impl fmt::Display for ServiceState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ServiceState::Ok => "OK",
            ServiceState::Warning => "WARNING",
            ServiceState::Critical => "CRITICAL",
            ServiceState::Unknown => "UNKNOWN",
        };
        f.write_str(label)
    }
}

impl From<Severity> for ServiceState {
    fn from(severity: Severity) -> Self {
        match severity {
            Severity::Ok => ServiceState::Ok,
            Severity::Warning => ServiceState::Warning,
            Severity::Critical => ServiceState::Critical,
            Severity::Unknown => ServiceState::Unknown,
        }
    }
}

/// Render the single status line: `STATE: message | perfdata`.
///
/// Perfdata reports the evaluated record count per subsystem, in request
/// order; an acquisition failure has no counts and therefore no perfdata.
pub fn render(result: &OverallResult) -> String {
    let state = ServiceState::from(result.severity);
    let mut line = format!("{}: {}", state, result.message);

    let perfdata: Vec<String> = result
        .subsystems
        .iter()
        .map(|r| format!("{}={}", r.subsystem.perfdata_label(), r.record_count))
        .collect();
    if !perfdata.is_empty() {
        line.push_str(" | ");
        line.push_str(&perfdata.join(" "));
    }
    line
}

/// Print the status line to stdout and exit with the state's code.
pub fn print_and_exit(result: &OverallResult) -> ! {
    println!("{}", render(result));
    std::process::exit(ServiceState::from(result.severity).exit_code())
}
