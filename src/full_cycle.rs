use crate::audit::AuditEvent;
use crate::categories::Category;
use crate::cleaner::{CleanupOutcome, Mode};
use crate::engine::CleanupEngine;
use crate::progress::{Banded, ProgressSink};

/// Progress width given to each category of a full run.
const BAND: u8 = 25;

impl CleanupEngine {
    /// Scan every category.
    pub fn full_scan(&self) -> CleanupOutcome {
        self.run_all(Mode::Scan)
    }

    /// Clean every category, recycle bin included.
    pub fn full_clean(&self) -> CleanupOutcome {
        self.run_all(Mode::Clean)
    }

    /// Run all categories in order, each in its own quarter of the progress
    /// range. A failing category never stops the ones after it.
    pub fn run_all(&self, mode: Mode) -> CleanupOutcome {
        let sink = self.sink();
        let outer = self.audited(sink);
        let (opening, prefix) = match mode {
            Mode::Scan => ("Performing full system scan...", "Full scan"),
            Mode::Clean => ("Performing full system cleanup...", "Full cleanup"),
        };
        outer.on_progress(opening, 0);

        let mut total = CleanupOutcome::new();
        for (stage, category) in Category::ALL.into_iter().enumerate() {
            let start = stage as u8 * BAND;
            let band = Banded::new(&outer, start, BAND);
            total.merge(self.run_with(category, mode, &band));

            let end = start + BAND;
            if end < 100 {
                let label = format!("{prefix}: {} completed", category.milestone_noun());
                outer.on_progress(&label, end);
            } else {
                outer.on_progress(&format!("{prefix} completed"), end);
            }
        }

        self.audit().record(AuditEvent::Summary {
            scope: "All Categories".to_string(),
            mode,
            outcome: total.clone(),
        });
        total
    }
}
