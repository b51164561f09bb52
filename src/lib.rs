// check_proliant library - Public API

// Re-export error types
pub mod error;
pub use error::{CheckError, Result};

// Module declarations
pub mod core;
pub mod plugin;
pub mod source;

// Re-export commonly used types
pub use crate::core::config::Config;
pub use crate::core::engine::evaluate;
pub use crate::core::rules::{RedundancyPolicy, Severity};
pub use crate::core::subsystem::Subsystem;

// Initialize logging. env_logger writes to stderr, so the plugin's
// status line on stdout stays clean for the monitoring host.
pub fn init_logging() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Warn)
        .init();
}
