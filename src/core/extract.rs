//! Record extractors, one strategy per subsystem.
//!
//! Fan and temperature reports carry one record per data line, split on
//! whitespace into positional fields. Power supply, processor, and memory
//! module reports carry multi-line records driven by a start-of-record
//! pattern; the accumulation is an explicit two-state machine
//! (`Idle` / `Open`) rather than trailing-variable tracking.
//!
//! A positional line with too few fields is a `MalformedRecord` error; the
//! caller degrades that subsystem to UNKNOWN instead of panicking.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::core::record::{FanRecord, KvRecord, TemperatureRecord};
use crate::error::{CheckError, Result};

static PSU_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Power supply #(\S+)").expect("static regex"));
static PROC_START: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^Processor\s*:\s*(\S+)").expect("static regex"));

/// Extract fan records from `SHOW FANS` data lines.
///
/// Columns: number, location, present, speed, %-of-max, redundant, ...
pub fn extract_fans<'a, I>(lines: I) -> Result<Vec<FanRecord>>
where
    I: Iterator<Item = &'a str>,
{
    let mut records = Vec::new();
    for line in lines {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 6 {
            return Err(CheckError::malformed_record("fan", line));
        }
        records.push(FanRecord {
            id: fields[0].trim_start_matches('#').to_string(),
            present: fields[2].to_string(),
            speed: fields[3].to_string(),
            redundant: fields[5].to_string(),
        });
    }
    Ok(records)
}

/// Extract temperature records from `SHOW TEMP` data lines.
///
/// Columns: sensor, location, current (`40C/104F`), threshold (`70C/158F`).
/// A `-` current reading means no sensor is fitted in that zone and the
/// line produces no record at all.
pub fn extract_temperatures<'a, I>(lines: I) -> Result<Vec<TemperatureRecord>>
where
    I: Iterator<Item = &'a str>,
{
    let mut records = Vec::new();
    for line in lines {
        let fields: Vec<&str> = line.split_whitespace().collect();
        if fields.len() < 4 {
            return Err(CheckError::malformed_record("temperature", line));
        }
        if fields[2] == "-" {
            continue;
        }
        let current_c = parse_celsius(fields[2])
            .ok_or_else(|| CheckError::malformed_record("temperature", line))?;
        let threshold_c = if fields[3] == "-" {
            None
        } else {
            Some(
                parse_celsius(fields[3])
                    .ok_or_else(|| CheckError::malformed_record("temperature", line))?,
            )
        };
        records.push(TemperatureRecord {
            zone: fields[1].to_string(),
            current_c,
            threshold_c,
        });
    }
    Ok(records)
}

/// Parse the integer Celsius part of a reading like `40C/104F`.
fn parse_celsius(field: &str) -> Option<i64> {
    let celsius = match field.find('C') {
        Some(idx) => &field[..idx],
        None => field,
    };
    celsius.parse().ok()
}

/// Extract power supply records from `SHOW POWERSUPPLY` data lines.
pub fn extract_power_supplies<'a, I>(lines: I) -> Vec<KvRecord>
where
    I: Iterator<Item = &'a str>,
{
    extract_multiline(
        lines,
        |line| {
            PSU_START
                .captures(line)
                .map(|caps| caps[1].to_string())
        },
        |_| false,
    )
}

/// Extract processor records from the processor section of `SHOW SERVER`.
///
/// The section ends at the `Processor total` line; text before the first
/// `Processor:` header (system model, serial number) is ignored.
pub fn extract_processors<'a, I>(lines: I) -> Vec<KvRecord>
where
    I: Iterator<Item = &'a str>,
{
    extract_multiline(
        lines,
        |line| {
            PROC_START
                .captures(line)
                .map(|caps| caps[1].to_string())
        },
        |line| line.starts_with("Processor total"),
    )
}

/// Extract memory module records from `SHOW DIMM` data lines.
///
/// A record starts on the `Module #: <n>` key/value line; the module
/// number (the value side) is the identifier.
pub fn extract_memory_modules<'a, I>(lines: I) -> Vec<KvRecord>
where
    I: Iterator<Item = &'a str>,
{
    extract_multiline(
        lines,
        |line| {
            line.split_once(':').and_then(|(key, value)| {
                if key.trim().starts_with("Module") {
                    Some(value.trim().to_string())
                } else {
                    None
                }
            })
        },
        |_| false,
    )
}

enum Accumulator {
    Idle,
    Open(KvRecord),
}

impl Accumulator {
    /// Finalize the open record, if any, leaving the machine idle.
    fn finalize(&mut self, records: &mut Vec<KvRecord>) {
        if let Accumulator::Open(record) = std::mem::replace(self, Accumulator::Idle) {
            records.push(record);
        }
    }
}

/// Two-state accumulation over a kv section.
///
/// `start` recognizes a start-of-record line and yields the new record's
/// identifier; `terminator` recognizes the end of the section. `key: value`
/// lines are accumulated into the open record; lines outside any record
/// (or without a colon) are ignored.
fn extract_multiline<'a, I, S, T>(lines: I, start: S, terminator: T) -> Vec<KvRecord>
where
    I: Iterator<Item = &'a str>,
    S: Fn(&str) -> Option<String>,
    T: Fn(&str) -> bool,
{
    let mut records = Vec::new();
    let mut state = Accumulator::Idle;

    for line in lines {
        let line = line.trim();

        if terminator(line) {
            state.finalize(&mut records);
            continue;
        }

        if let Some(id) = start(line) {
            state.finalize(&mut records);
            state = Accumulator::Open(KvRecord::new(id));
            continue;
        }

        if let Accumulator::Open(record) = &mut state {
            if let Some((key, value)) = line.split_once(':') {
                record
                    .fields
                    .insert(key.trim().to_string(), value.trim().to_string());
            }
        }
    }

    state.finalize(&mut records);
    records
}
