// Raw output acquisition boundary

pub mod hpasmcli;

pub use hpasmcli::HpasmcliSource;

use crate::core::subsystem::Subsystem;
use crate::error::Result;

/// Supplier of one subsystem's raw report text.
///
/// Implementations own all blocking (process spawn, timeout); the engine
/// only ever sees a completed capture or an acquisition error. A partial
/// or garbled read must surface as an error, never as silent text.
pub trait RawSource {
    fn acquire(&self, subsystem: Subsystem) -> Result<String>;
}
