//! Shared test fixtures: a stub raw source and realistic hpasmcli captures.

use std::collections::HashMap;

use check_proliant::core::subsystem::Subsystem;
use check_proliant::error::{CheckError, Result};
use check_proliant::source::RawSource;

/// In-memory raw source; a subsystem without a registered report fails
/// acquisition, like a dead hpasmcli would.
pub struct StubSource {
    reports: HashMap<Subsystem, String>,
}

impl StubSource {
    pub fn new() -> Self {
        StubSource {
            reports: HashMap::new(),
        }
    }

    pub fn with(mut self, subsystem: Subsystem, raw: &str) -> Self {
        self.reports.insert(subsystem, raw.to_string());
        self
    }

    /// All five subsystems reporting healthy hardware.
    pub fn healthy() -> Self {
        StubSource::new()
            .with(Subsystem::Fan, FANS_OK)
            .with(Subsystem::PowerSupply, PSU_OK)
            .with(Subsystem::Temperature, TEMP_OK)
            .with(Subsystem::Processor, SERVER_OK)
            .with(Subsystem::MemoryModule, DIMM_OK)
    }
}

impl RawSource for StubSource {
    fn acquire(&self, subsystem: Subsystem) -> Result<String> {
        self.reports
            .get(&subsystem)
            .cloned()
            .ok_or_else(|| CheckError::acquisition(format!("no report for {}", subsystem)))
    }
}

pub const FANS_OK: &str = "\
SHOW FANS

Fan  Location        Present Speed  of max  Redundant  Partner  Hot-pluggable
---  --------        ------- -----  ------  ---------  -------  -------------
#1   I/O_ZONE        Yes     NORMAL 45%     Yes        0        Yes
#2   CPU_ZONE        Yes     NORMAL 45%     Yes        0        Yes
";

pub const FANS_SPEED_HIGH: &str = "\
SHOW FANS

Fan  Location        Present Speed  of max  Redundant  Partner  Hot-pluggable
---  --------        ------- -----  ------  ---------  -------  -------------
#1   I/O_ZONE        Yes     NORMAL 45%     Yes        0        Yes
#2   CPU_ZONE        Yes     HIGH   100%    Yes        0        Yes
";

pub const FANS_MISSING: &str = "\
SHOW FANS

Fan  Location        Present Speed  of max  Redundant  Partner  Hot-pluggable
---  --------        ------- -----  ------  ---------  -------  -------------
#1   I/O_ZONE        No      HIGH   100%    No         0        Yes
#2   CPU_ZONE        Yes     NORMAL 45%     Yes        0        Yes
";

pub const FANS_MALFORMED: &str = "\
SHOW FANS

Fan  Location        Present Speed  of max  Redundant  Partner  Hot-pluggable
---  --------        ------- -----  ------  ---------  -------  -------------
#1   I/O_ZONE        Yes
";

pub const PSU_OK: &str = "\
SHOW POWERSUPPLY

Power supply #1
        Present  : Yes
        Redundant: Yes
        Condition: Ok
        Hotplug  : Supported
Power supply #2
        Present  : Yes
        Redundant: Yes
        Condition: Ok
        Hotplug  : Supported
";

pub const PSU_FAILED: &str = "\
SHOW POWERSUPPLY

Power supply #1
        Present  : Yes
        Redundant: No
        Condition: Failed
        Hotplug  : Supported
Power supply #2
        Present  : Yes
        Redundant: No
        Condition: Ok
        Hotplug  : Supported
";

pub const TEMP_OK: &str = "\
SHOW TEMP

Sensor   Location              Temp       Threshold
------   --------              ----       ---------
#1        I/O_ZONE             40C/104F   70C/158F
#2        AMBIENT              20C/68F    39C/102F
#3        CPU#1                -          -
#4        CPU#2                37C/98F    -
#5        POWER_SUPPLY_BAY     35C/95F    55C/131F
";

pub const TEMP_WARNING: &str = "\
SHOW TEMP

Sensor   Location              Temp       Threshold
------   --------              ----       ---------
#1        I/O_ZONE             69C/156F   70C/158F
#2        AMBIENT              20C/68F    39C/102F
";

pub const TEMP_CRITICAL: &str = "\
SHOW TEMP

Sensor   Location              Temp       Threshold
------   --------              ----       ---------
#1        I/O_ZONE             71C/159F   70C/158F
#2        AMBIENT              20C/68F    39C/102F
";

pub const SERVER_OK: &str = "\
SHOW SERVER

System        : ProLiant DL380 G5
Serial No.    : CZJ71801RW
ROM version   : P56 11/01/2008
iLo present   : Yes
Embedded NICs : 2

Processor: 0
        Name         : Intel Xeon
        Stepping     : 11
        Speed        : 2333 MHz
        Bus          : 1333 MHz
        Core         : 4
        Thread       : 4
        Socket       : 1
        Level2 Cache : 8192 KBytes
        Status       : Ok

Processor: 1
        Name         : Intel Xeon
        Stepping     : 11
        Speed        : 2333 MHz
        Bus          : 1333 MHz
        Core         : 4
        Thread       : 4
        Socket       : 2
        Level2 Cache : 8192 KBytes
        Status       : Ok

Processor total  : 2

Memory installed : 16384 MBytes
ECC supported    : Yes
";

pub const SERVER_PROC_FAILED: &str = "\
SHOW SERVER

System        : ProLiant DL380 G5
Serial No.    : CZJ71801RW

Processor: 0
        Name         : Intel Xeon
        Status       : Ok

Processor: 1
        Name         : Intel Xeon
        Status       : Failed

Processor total  : 2

Memory installed : 16384 MBytes
";

pub const DIMM_OK: &str = "\
SHOW DIMM

DIMM Configuration
------------------
Cartridge #:   0
Module #:      1
Present:       Yes
Form Factor:   fb-dimm
Memory Type:   DDR2(14)
Size:          4096 MB
Speed:         667 MHz
Status:        Ok

Cartridge #:   0
Module #:      2
Present:       Yes
Form Factor:   fb-dimm
Memory Type:   DDR2(14)
Size:          4096 MB
Speed:         667 MHz
Status:        N/A
";

pub const DIMM_DEGRADED: &str = "\
SHOW DIMM

DIMM Configuration
------------------
Cartridge #:   0
Module #:      1
Present:       Yes
Status:        Ok

Cartridge #:   0
Module #:      2
Present:       Yes
Status:        Degraded
";
