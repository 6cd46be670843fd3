use crate::audit::{AuditEvent, AuditSink};
use crate::categories::Category;
use crate::cleaner::{CleanupOutcome, Mode};
use crate::progress::ProgressSink;
use crate::provider::FileSystemProvider;

/// Scan or empty the recycle bin as a single unit.
///
/// The bin always counts as one scanned item; cleaning it counts as one
/// deleted item and frees whatever it held before being emptied.
pub(crate) fn run(
    fs: &dyn FileSystemProvider,
    audit: &dyn AuditSink,
    progress: &dyn ProgressSink,
    mode: Mode,
    dry_run: bool,
) -> CleanupOutcome {
    progress.on_progress(Category::RecycleBin.progress_label(mode), 0);

    let Some(bin) = fs.recycle_bin_path() else {
        let error = "Cannot locate the Recycle Bin".to_string();
        audit.record(AuditEvent::RecycleBinFailed {
            error: error.clone(),
        });
        return CleanupOutcome::failed(error);
    };

    let size = fs.directory_size(&bin);
    let mut outcome = CleanupOutcome::new();
    outcome.record_found();

    match mode {
        Mode::Scan => {
            outcome.record_bytes(size);
            progress.on_progress("Recycle Bin scan completed", 100);
        }
        Mode::Clean if dry_run => {
            outcome.record_deleted();
            outcome.record_bytes(size);
            audit.record(AuditEvent::RecycleBinDryRun { bytes: size });
            progress.on_progress("Recycle Bin cleanup completed", 100);
        }
        Mode::Clean => match fs.empty_recycle_bin() {
            Ok(()) => {
                outcome.record_deleted();
                outcome.record_bytes(size);
                audit.record(AuditEvent::RecycleBinEmptied { bytes: size });
                progress.on_progress("Recycle Bin cleanup completed", 100);
            }
            Err(err) => {
                let error = format!("Failed to empty Recycle Bin: {err}");
                outcome.record_failure(error.clone());
                audit.record(AuditEvent::RecycleBinFailed { error });
            }
        },
    }

    outcome
}
