use crate::audit::{AuditEvent, AuditSink};
use crate::cleaner::{CleanupOutcome, Mode};
use crate::policy::EligibilityPolicy;
use crate::provider::{self, FileSystemProvider};

/// Scans or cleans a single configured location.
///
/// A failure here is always reported through the returned outcome and never
/// affects sibling locations.
#[derive(Clone, Copy)]
pub struct PathProcessor<'a> {
    pub fs: &'a dyn FileSystemProvider,
    pub policy: &'a EligibilityPolicy,
    pub audit: &'a dyn AuditSink,
    pub dry_run: bool,
    pub verbose: bool,
}

impl PathProcessor<'_> {
    pub fn process(&self, pattern: &str, mode: Mode) -> CleanupOutcome {
        let mut outcome = CleanupOutcome::new();

        let expanded = self.fs.expand(pattern);
        if !self.fs.exists(&provider::search_root(&expanded)) {
            if self.verbose {
                self.audit.record(AuditEvent::PathMissing {
                    pattern: pattern.to_string(),
                });
            }
            return outcome;
        }

        let files = match self.fs.enumerate(&expanded) {
            Ok(files) => files,
            Err(err) => {
                let verb = match mode {
                    Mode::Scan => "scanning",
                    Mode::Clean => "cleaning",
                };
                let message = format!("Error {verb} {pattern}: {err}");
                self.audit.record(AuditEvent::PathFailed {
                    pattern: pattern.to_string(),
                    mode,
                    error: message.clone(),
                });
                return CleanupOutcome::failed(message);
            }
        };

        for file in files {
            if !self.policy.is_eligible(self.fs, &file) {
                continue;
            }

            let size = self.fs.size(&file);
            outcome.record_found();

            match mode {
                Mode::Scan => {
                    outcome.record_bytes(size);
                    if self.verbose {
                        self.audit.record(AuditEvent::FileFound {
                            path: file,
                            bytes: size,
                        });
                    }
                }
                Mode::Clean if self.dry_run => {
                    outcome.record_deleted();
                    outcome.record_bytes(size);
                    if self.verbose {
                        self.audit.record(AuditEvent::WouldDelete {
                            path: file,
                            bytes: size,
                        });
                    }
                }
                Mode::Clean => match self.fs.delete(&file) {
                    Ok(()) => {
                        outcome.record_deleted();
                        outcome.record_bytes(size);
                        if self.verbose {
                            self.audit.record(AuditEvent::FileDeleted {
                                path: file,
                                bytes: size,
                            });
                        }
                    }
                    Err(err) => {
                        let message = format!("Failed to delete {}: {err}", file.display());
                        // Only the first failure of a location is kept in the outcome.
                        if outcome.succeeded() {
                            outcome.record_failure(message);
                        }
                        self.audit.record(AuditEvent::DeleteFailed {
                            path: file,
                            error: err.to_string(),
                        });
                    }
                },
            }
        }

        outcome
    }
}
