//! Disk cleanup engine: finds reclaimable files in temporary directories,
//! browser caches, system log/dump locations and the recycle bin, and
//! optionally deletes them.

pub mod audit;
pub mod categories;
pub mod cleaner;
pub mod disk_info;
pub mod engine;
pub mod error;
mod full_cycle;
pub mod logfile;
pub mod policy;
pub mod processor;
pub mod progress;
pub mod provider;
pub mod utils;

pub use audit::{AuditEvent, AuditSink, TracingAudit};
pub use categories::{Category, PathConfig};
pub use cleaner::{CleanupOutcome, Mode};
pub use engine::{CleanupEngine, EngineConfig};
pub use error::CleanError;
pub use policy::EligibilityPolicy;
pub use progress::ProgressSink;
pub use provider::{FileSystemProvider, LocalFileSystem};

/// Version reported in session records and the banner.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
