mod monitor;
mod monitor_set;
#[cfg(feature = "recorder")]
mod recorder;

/// Identifies a registered monitor. Never reused within a runtime.
pub type MonitorId = u64;

pub use monitor::Monitor;
pub(crate) use monitor_set::MonitorSet;
#[cfg(feature = "recorder")]
pub use recorder::Recorder;
