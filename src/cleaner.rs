/// Whether a run only measures reclaimable space or actually deletes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Scan,
    Clean,
}

impl Mode {
    /// Short label used in per-step progress events.
    pub fn step_label(self) -> &'static str {
        match self {
            Mode::Scan => "Scanning...",
            Mode::Clean => "Cleaning...",
        }
    }
}

/// Result of scanning or cleaning a path, a category, or everything.
///
/// Outcomes only grow: counts are summed by [`CleanupOutcome::merge`] and
/// error messages are appended in the order they were recorded. An outcome
/// has succeeded exactly when no error was recorded into it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CleanupOutcome {
    files_scanned: u64,
    files_deleted: u64,
    bytes_freed: u64,
    errors: Vec<String>,
}

impl CleanupOutcome {
    /// An empty, successful outcome.
    pub fn new() -> Self {
        Self::default()
    }

    /// An outcome with no counts carrying a single failure.
    pub fn failed(message: impl Into<String>) -> Self {
        let mut outcome = Self::default();
        outcome.record_failure(message);
        outcome
    }

    /// Files examined and found eligible, regardless of mode.
    pub fn files_scanned(&self) -> u64 {
        self.files_scanned
    }

    /// Files removed, or that would have been removed under dry-run.
    pub fn files_deleted(&self) -> u64 {
        self.files_deleted
    }

    /// Bytes of the counted files.
    pub fn bytes_freed(&self) -> u64 {
        self.bytes_freed
    }

    pub fn succeeded(&self) -> bool {
        self.errors.is_empty()
    }

    /// All recorded failures joined by `"; "`, or `None` on success.
    pub fn error_summary(&self) -> Option<String> {
        if self.errors.is_empty() {
            None
        } else {
            Some(self.errors.join("; "))
        }
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    /// Fold `other` into `self`: counts add up, errors are appended.
    pub fn merge(&mut self, other: CleanupOutcome) {
        self.files_scanned += other.files_scanned;
        self.files_deleted += other.files_deleted;
        self.bytes_freed += other.bytes_freed;
        self.errors.extend(other.errors);
    }

    /// An eligible file that was found but not (yet) removed.
    pub(crate) fn record_found(&mut self) {
        self.files_scanned += 1;
    }

    pub(crate) fn record_bytes(&mut self, bytes: u64) {
        self.bytes_freed += bytes;
    }

    /// A found file that was removed. Callers must have recorded it as found.
    pub(crate) fn record_deleted(&mut self) {
        debug_assert!(self.files_deleted < self.files_scanned);
        self.files_deleted += 1;
    }

    pub(crate) fn record_failure(&mut self, message: impl Into<String>) {
        self.errors.push(message.into());
    }
}

impl std::iter::Sum for CleanupOutcome {
    fn sum<I: Iterator<Item = CleanupOutcome>>(iter: I) -> Self {
        iter.fold(CleanupOutcome::new(), |mut total, outcome| {
            total.merge(outcome);
            total
        })
    }
}
