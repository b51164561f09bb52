// Core business logic module

pub mod aggregate;
pub mod config;
pub mod engine;
pub mod extract;
pub mod record;
pub mod rules;
pub mod subsystem;
pub mod tokenizer;

// Re-export commonly used items
pub use aggregate::{OverallResult, SubsystemResult};
pub use config::Config;
pub use engine::{evaluate, CheckOptions};
pub use record::{FanRecord, KvRecord, TemperatureRecord};
pub use rules::{RedundancyPolicy, Severity, Verdict, WARN_TEMP_PCT};
pub use subsystem::{Subsystem, ALL_SUBSYSTEMS};
