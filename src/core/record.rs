//! Structured views of one physical component instance.
//!
//! Records are value types: created by the extractors, consumed once by the
//! rule evaluators, then discarded.

use std::collections::HashMap;

/// One fan line from `SHOW FANS`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FanRecord {
    /// Fan number, leading `#` stripped.
    pub id: String,
    pub present: String,
    pub speed: String,
    pub redundant: String,
}

/// One sensor line from `SHOW TEMP`.
///
/// Lines whose current reading is the `-` sentinel never become records;
/// a `-` threshold yields `threshold_c: None` (present but not evaluable
/// against a threshold).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemperatureRecord {
    pub zone: String,
    pub current_c: i64,
    pub threshold_c: Option<i64>,
}

/// One multi-line record (power supply, processor, or memory module):
/// an identifier from the start-of-record line plus the accumulated
/// `key: value` pairs. Unknown keys are retained but not interpreted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KvRecord {
    pub id: String,
    pub fields: HashMap<String, String>,
}

impl KvRecord {
    pub fn new(id: String) -> Self {
        KvRecord {
            id,
            fields: HashMap::new(),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key).map(String::as_str)
    }
}
