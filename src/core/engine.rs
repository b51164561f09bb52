//! Check orchestration: acquire → tokenize → extract → evaluate → aggregate.
//!
//! The raw output source is injected as a trait so tests can drive the
//! whole pipeline with canned hpasmcli captures. Subsystems are evaluated
//! strictly sequentially; an acquisition failure aborts the invocation with
//! an overall UNKNOWN, while a parse failure degrades only the affected
//! subsystem.

use log::debug;

use crate::core::aggregate::{OverallResult, SubsystemResult};
use crate::core::extract::{
    extract_fans, extract_memory_modules, extract_power_supplies, extract_processors,
    extract_temperatures,
};
use crate::core::rules::{
    evaluate_fan, evaluate_memory_module, evaluate_power_supply, evaluate_processor,
    evaluate_temperature, RedundancyPolicy, Verdict, WARN_TEMP_PCT,
};
use crate::core::subsystem::Subsystem;
use crate::core::tokenizer::data_lines;
use crate::error::Result;
use crate::source::RawSource;

/// Caller-supplied evaluation options.
#[derive(Debug, Clone, Copy)]
pub struct CheckOptions {
    pub redundancy: RedundancyPolicy,
    pub warn_temp_pct: u32,
}

impl Default for CheckOptions {
    fn default() -> Self {
        CheckOptions {
            redundancy: RedundancyPolicy::Enforce,
            warn_temp_pct: WARN_TEMP_PCT,
        }
    }
}

/// Evaluate the requested subsystems in order and reduce to one result.
pub fn evaluate(
    source: &dyn RawSource,
    requested: &[Subsystem],
    opts: CheckOptions,
) -> OverallResult {
    let mut results = Vec::with_capacity(requested.len());

    for &subsystem in requested {
        let raw = match source.acquire(subsystem) {
            Ok(raw) if !raw.trim().is_empty() => raw,
            Ok(_) => return OverallResult::acquisition_failure(subsystem, "empty report"),
            Err(err) => {
                return OverallResult::acquisition_failure(subsystem, &err.to_string())
            }
        };

        let result = match check_subsystem(&raw, subsystem, opts) {
            Ok(result) => result,
            Err(err) => {
                debug!("{} degraded to UNKNOWN: {}", subsystem, err);
                SubsystemResult::degraded(subsystem, &err)
            }
        };
        results.push(result);
    }

    OverallResult::combine(results)
}

/// Run one subsystem's parse-and-evaluate pass over its raw report.
fn check_subsystem(raw: &str, subsystem: Subsystem, opts: CheckOptions) -> Result<SubsystemResult> {
    let lines = data_lines(raw, subsystem);
    let policy = opts.redundancy;

    let (verdicts, count) = match subsystem {
        Subsystem::Fan => {
            let records = extract_fans(lines)?;
            let verdicts: Vec<Verdict> = records
                .iter()
                .flat_map(|r| evaluate_fan(r, policy))
                .collect();
            (verdicts, records.len())
        }
        Subsystem::PowerSupply => {
            let records = extract_power_supplies(lines);
            let verdicts: Vec<Verdict> = records
                .iter()
                .flat_map(|r| evaluate_power_supply(r, policy))
                .collect();
            (verdicts, records.len())
        }
        Subsystem::Temperature => {
            let records = extract_temperatures(lines)?;
            // Records without a threshold produce no verdict and are
            // excluded from the evaluated count.
            let verdicts: Vec<Verdict> = records
                .iter()
                .filter_map(|r| evaluate_temperature(r, opts.warn_temp_pct))
                .collect();
            let count = verdicts.len();
            (verdicts, count)
        }
        Subsystem::Processor => {
            let records = extract_processors(lines);
            let verdicts: Vec<Verdict> = records.iter().map(evaluate_processor).collect();
            (verdicts, records.len())
        }
        Subsystem::MemoryModule => {
            let records = extract_memory_modules(lines);
            let verdicts: Vec<Verdict> = records.iter().map(evaluate_memory_module).collect();
            (verdicts, records.len())
        }
    };

    debug!("{}: {} records evaluated", subsystem, count);
    Ok(SubsystemResult::from_verdicts(
        subsystem, &verdicts, count, policy,
    ))
}
