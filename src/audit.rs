use std::path::PathBuf;
use std::time::Duration;

use crate::cleaner::{CleanupOutcome, Mode};
use crate::utils;

/// Something worth keeping a record of while cleaning.
#[derive(Debug, Clone, PartialEq)]
pub enum AuditEvent {
    SessionStarted { version: &'static str, elevated: bool },
    SessionEnded { elapsed: Duration },
    PathMissing { pattern: String },
    FileFound { path: PathBuf, bytes: u64 },
    WouldDelete { path: PathBuf, bytes: u64 },
    FileDeleted { path: PathBuf, bytes: u64 },
    DeleteFailed { path: PathBuf, error: String },
    PathFailed { pattern: String, mode: Mode, error: String },
    RecycleBinDryRun { bytes: u64 },
    RecycleBinEmptied { bytes: u64 },
    RecycleBinFailed { error: String },
    Progress { label: String, percent: u8 },
    Summary { scope: String, mode: Mode, outcome: CleanupOutcome },
}

/// Destination for audit records, injected into the engine.
pub trait AuditSink: Send + Sync {
    fn record(&self, event: AuditEvent);
}

/// Forwards audit records to `tracing`, which the binary routes to the
/// console and the log file.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingAudit;

impl AuditSink for TracingAudit {
    fn record(&self, event: AuditEvent) {
        match event {
            AuditEvent::SessionStarted { version, elevated } => {
                tracing::info!(version, elevated, "=== cclean session started ===");
            }
            AuditEvent::SessionEnded { elapsed } => {
                tracing::info!(
                    "=== cclean session ended (duration: {:.3}s) ===",
                    elapsed.as_secs_f64()
                );
            }
            AuditEvent::PathMissing { pattern } => {
                tracing::debug!(%pattern, "path does not exist");
            }
            AuditEvent::FileFound { path, bytes } => {
                tracing::debug!("Found: {} ({})", path.display(), utils::format_size(bytes));
            }
            AuditEvent::WouldDelete { path, bytes } => {
                tracing::debug!(
                    "DRY RUN: Would delete {} ({})",
                    path.display(),
                    utils::format_size(bytes)
                );
            }
            AuditEvent::FileDeleted { path, bytes } => {
                tracing::debug!("Deleted: {} ({})", path.display(), utils::format_size(bytes));
            }
            AuditEvent::DeleteFailed { path, error } => {
                tracing::warn!(path = %path.display(), %error, "failed to delete file");
            }
            AuditEvent::PathFailed {
                pattern,
                mode: Mode::Scan,
                error,
            } => {
                tracing::warn!(%pattern, "{error}");
            }
            AuditEvent::PathFailed {
                pattern,
                mode: Mode::Clean,
                error,
            } => {
                tracing::error!(%pattern, "{error}");
            }
            AuditEvent::RecycleBinDryRun { bytes } => {
                tracing::info!(
                    "DRY RUN: Would empty Recycle Bin ({})",
                    utils::format_size(bytes)
                );
            }
            AuditEvent::RecycleBinEmptied { bytes } => {
                tracing::info!(bytes, "Recycle Bin emptied successfully");
            }
            AuditEvent::RecycleBinFailed { error } => {
                tracing::error!("{error}");
            }
            AuditEvent::Progress { label, percent } => {
                tracing::info!("{label} ({percent}%)");
            }
            AuditEvent::Summary {
                scope,
                mode,
                outcome,
            } => {
                let verb = match mode {
                    Mode::Scan => "scan",
                    Mode::Clean => "cleanup",
                };
                let freed = utils::format_size(outcome.bytes_freed());
                match outcome.error_summary() {
                    None => tracing::info!(
                        "{scope} {verb} completed: {}/{} files processed, {freed} freed",
                        outcome.files_deleted(),
                        outcome.files_scanned(),
                    ),
                    Some(errors) => tracing::error!(
                        "{scope} {verb} completed: {}/{} files processed, {freed} freed (Error: {errors})",
                        outcome.files_deleted(),
                        outcome.files_scanned(),
                    ),
                }
            }
        }
    }
}
