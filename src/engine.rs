//! Cleanup orchestration: runs every configured location of a category
//! through a [`PathProcessor`], aggregates the outcomes and reports progress.

use std::sync::Arc;

use rayon::prelude::*;

use crate::audit::{AuditEvent, AuditSink};
use crate::categories::{trash, Category, PathConfig, Target};
use crate::cleaner::{CleanupOutcome, Mode};
use crate::policy::EligibilityPolicy;
use crate::processor::PathProcessor;
use crate::progress::{percent_of, ProgressSink, Silent};
use crate::provider::FileSystemProvider;

/// Run-time switches of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EngineConfig {
    /// Count what a clean would remove without touching the filesystem.
    pub dry_run: bool,
    /// Audit every file found or removed, and every progress step.
    pub verbose: bool,
    /// Worker threads used for the locations of one category.
    pub jobs: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            dry_run: false,
            verbose: false,
            jobs: 1,
        }
    }
}

pub struct CleanupEngine {
    fs: Box<dyn FileSystemProvider>,
    audit: Arc<dyn AuditSink>,
    paths: PathConfig,
    policy: EligibilityPolicy,
    config: EngineConfig,
    progress: Option<Box<dyn ProgressSink>>,
}

impl CleanupEngine {
    pub fn new(
        fs: Box<dyn FileSystemProvider>,
        audit: Arc<dyn AuditSink>,
        paths: PathConfig,
    ) -> Self {
        Self {
            fs,
            audit,
            paths,
            policy: EligibilityPolicy::default(),
            config: EngineConfig::default(),
            progress: None,
        }
    }

    pub fn config(&self) -> EngineConfig {
        self.config
    }

    pub fn set_dry_run(&mut self, enabled: bool) {
        self.config.dry_run = enabled;
    }

    pub fn set_verbose(&mut self, enabled: bool) {
        self.config.verbose = enabled;
    }

    /// Process up to `jobs` locations of a category at once. Zero is treated as one.
    pub fn set_jobs(&mut self, jobs: usize) {
        self.config.jobs = jobs.max(1);
    }

    pub fn set_progress_sink(&mut self, sink: impl ProgressSink + 'static) {
        self.progress = Some(Box::new(sink));
    }

    pub fn clear_progress_sink(&mut self) {
        self.progress = None;
    }

    pub fn scan(&self, category: Category) -> CleanupOutcome {
        self.run(category, Mode::Scan)
    }

    pub fn clean(&self, category: Category) -> CleanupOutcome {
        self.run(category, Mode::Clean)
    }

    pub fn empty_recycle_bin(&self) -> CleanupOutcome {
        self.run(Category::RecycleBin, Mode::Clean)
    }

    pub fn run(&self, category: Category, mode: Mode) -> CleanupOutcome {
        let outcome = self.run_with(category, mode, &self.audited(self.sink()));
        self.audit.record(AuditEvent::Summary {
            scope: category.label().to_string(),
            mode,
            outcome: outcome.clone(),
        });
        outcome
    }

    pub(crate) fn sink(&self) -> &dyn ProgressSink {
        match &self.progress {
            Some(sink) => sink.as_ref(),
            None => &Silent,
        }
    }

    pub(crate) fn audit(&self) -> &dyn AuditSink {
        self.audit.as_ref()
    }

    pub(crate) fn audited<'a>(&'a self, sink: &'a dyn ProgressSink) -> Audited<'a> {
        Audited {
            inner: sink,
            audit: self.audit.as_ref(),
            verbose: self.config.verbose,
        }
    }

    /// Run one category, reporting progress to `progress` as is. Callers
    /// wrap it in [`CleanupEngine::audited`] where the events should be logged.
    pub(crate) fn run_with(
        &self,
        category: Category,
        mode: Mode,
        progress: &dyn ProgressSink,
    ) -> CleanupOutcome {
        match self.paths.target(category) {
            Target::RecycleBin => trash::run(
                self.fs.as_ref(),
                self.audit.as_ref(),
                progress,
                mode,
                self.config.dry_run,
            ),
            Target::Paths(patterns) => {
                progress.on_progress(category.progress_label(mode), 0);
                self.process_paths(patterns, mode, progress)
            }
        }
    }

    fn process_paths(
        &self,
        patterns: &[String],
        mode: Mode,
        progress: &dyn ProgressSink,
    ) -> CleanupOutcome {
        let processor = PathProcessor {
            fs: self.fs.as_ref(),
            policy: &self.policy,
            audit: self.audit.as_ref(),
            dry_run: self.config.dry_run,
            verbose: self.config.verbose,
        };

        let total = patterns.len();
        let mut aggregate = CleanupOutcome::new();
        let mut merge = |index: usize, outcome: CleanupOutcome| {
            aggregate.merge(outcome);
            progress.on_progress(mode.step_label(), percent_of(index + 1, total));
        };

        match self.pool() {
            Some(pool) => {
                // Results come back in configuration order and are merged on
                // this thread, one at a time.
                let outcomes: Vec<CleanupOutcome> = pool.install(|| {
                    patterns
                        .par_iter()
                        .map(|pattern| processor.process(pattern, mode))
                        .collect()
                });
                for (index, outcome) in outcomes.into_iter().enumerate() {
                    merge(index, outcome);
                }
            }
            None => {
                for (index, pattern) in patterns.iter().enumerate() {
                    merge(index, processor.process(pattern, mode));
                }
            }
        }

        aggregate
    }

    fn pool(&self) -> Option<rayon::ThreadPool> {
        if self.config.jobs <= 1 {
            return None;
        }
        match rayon::ThreadPoolBuilder::new()
            .num_threads(self.config.jobs)
            .build()
        {
            Ok(pool) => Some(pool),
            Err(err) => {
                tracing::warn!(jobs = self.config.jobs, error = %err, "falling back to sequential processing");
                None
            }
        }
    }
}

/// Mirrors progress into the audit trail when running verbosely.
pub(crate) struct Audited<'a> {
    inner: &'a dyn ProgressSink,
    audit: &'a dyn AuditSink,
    verbose: bool,
}

impl ProgressSink for Audited<'_> {
    fn on_progress(&self, label: &str, percent: u8) {
        self.inner.on_progress(label, percent);
        if self.verbose {
            self.audit.record(AuditEvent::Progress {
                label: label.to_string(),
                percent,
            });
        }
    }
}
