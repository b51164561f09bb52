//! Hardware subsystem identifiers and their hpasmcli wiring.

use std::fmt;
use std::str::FromStr;

use crate::error::CheckError;

/// One hardware category evaluated independently.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subsystem {
    Fan,
    PowerSupply,
    Temperature,
    Processor,
    MemoryModule,
}

/// Fixed evaluation order for the composite `all` request.
pub const ALL_SUBSYSTEMS: [Subsystem; 5] = [
    Subsystem::Fan,
    Subsystem::PowerSupply,
    Subsystem::Temperature,
    Subsystem::Processor,
    Subsystem::MemoryModule,
];

impl Subsystem {
    /// Canonical identifier used in CLI arguments and perfdata labels.
    pub fn id(&self) -> &'static str {
        match self {
            Subsystem::Fan => "fan",
            Subsystem::PowerSupply => "power-supply",
            Subsystem::Temperature => "temperature",
            Subsystem::Processor => "processor",
            Subsystem::MemoryModule => "memory-module",
        }
    }

    /// The hpasmcli command that produces this subsystem's report.
    pub fn command(&self) -> &'static str {
        match self {
            Subsystem::Fan => "SHOW FANS",
            Subsystem::PowerSupply => "SHOW POWERSUPPLY",
            Subsystem::Temperature => "SHOW TEMP",
            Subsystem::Processor => "SHOW SERVER",
            Subsystem::MemoryModule => "SHOW DIMM",
        }
    }

    /// Column-header and underline prefixes dropped by the tokenizer.
    ///
    /// Matched by prefix, not full equality: hpasmcli pads headers with
    /// trailing whitespace that varies between firmware revisions.
    pub fn header_prefixes(&self) -> &'static [&'static str] {
        match self {
            Subsystem::Fan => &["Fan  Loc", "---  ---"],
            Subsystem::PowerSupply => &[],
            Subsystem::Temperature => &["Sensor   Location", "------   --------"],
            Subsystem::Processor => &[],
            Subsystem::MemoryModule => &["DIMM Conf", "---------"],
        }
    }

    /// Perfdata label for the evaluated record count.
    pub fn perfdata_label(&self) -> &'static str {
        match self {
            Subsystem::Fan => "fans",
            Subsystem::PowerSupply => "psus",
            Subsystem::Temperature => "temp_zones",
            Subsystem::Processor => "processors",
            Subsystem::MemoryModule => "dimms",
        }
    }

    /// Canned summary for a subsystem with no failing records.
    pub fn ok_summary(&self, count: usize, ignore_redundant: bool) -> String {
        match self {
            Subsystem::Fan => format!("{} fans normal.", count),
            Subsystem::PowerSupply => {
                if ignore_redundant {
                    format!("ALL ({}) PSUs OK.", count)
                } else {
                    format!("ALL ({}) PSUs OK and Redundant.", count)
                }
            }
            Subsystem::Temperature => format!("ALL ({}) Temp Zones OK.", count),
            Subsystem::Processor => format!("ALL ({}) processors Ok.", count),
            Subsystem::MemoryModule => format!("ALL ({}) DIMMs Ok.", count),
        }
    }
}

impl fmt::Display for Subsystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Subsystem {
    type Err = CheckError;

    /// Accepts both the canonical identifiers and the short aliases of the
    /// original plugin (`ps`, `temp`, `proc`, `dimm`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "fan" => Ok(Subsystem::Fan),
            "power-supply" | "ps" => Ok(Subsystem::PowerSupply),
            "temperature" | "temp" => Ok(Subsystem::Temperature),
            "processor" | "proc" => Ok(Subsystem::Processor),
            "memory-module" | "dimm" => Ok(Subsystem::MemoryModule),
            other => Err(CheckError::UnsupportedSubsystem(other.to_string())),
        }
    }
}

/// Expand a requested type into the subsystem sequence to evaluate.
///
/// `all` expands to every subsystem in the fixed order of `ALL_SUBSYSTEMS`.
pub fn parse_request(s: &str) -> Result<Vec<Subsystem>, CheckError> {
    if s == "all" {
        Ok(ALL_SUBSYSTEMS.to_vec())
    } else {
        Ok(vec![s.parse()?])
    }
}
