use chrono::Utc;

use crate::models::{HeadingSpan, OutlineEntry, ScanReport, VisibilitySample};

use super::config::OutlineConfig;
use super::scan::assign_ids;
use super::tracker::ActiveSectionTracker;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutlinePhase {
    Unscanned,
    Observing,
    TornDown,
}

/// Per-document outline lifecycle: scan once at mount, observe while the
/// document is on screen, tear down once at unmount. Ids exist before any
/// observation can land, and every call is total; out-of-phase calls are
/// inert rather than errors.
#[derive(Debug)]
pub struct DocumentOutliner {
    config: OutlineConfig,
    document: String,
    phase: OutlinePhase,
    entries: Vec<OutlineEntry>,
    tracker: ActiveSectionTracker,
    report: Option<ScanReport>,
}

impl DocumentOutliner {
    #[must_use]
    pub fn new(document: impl Into<String>, config: OutlineConfig) -> Self {
        Self {
            config,
            document: document.into(),
            phase: OutlinePhase::Unscanned,
            entries: Vec::new(),
            tracker: ActiveSectionTracker::default(),
            report: None,
        }
    }

    /// Runs id assignment over the document's headings and starts observing.
    /// A repeat scan while observing returns the existing outline unchanged;
    /// a scan after teardown yields an empty outline.
    pub fn scan(&mut self, headings: &[HeadingSpan]) -> &[OutlineEntry] {
        if self.phase != OutlinePhase::Unscanned {
            return &self.entries;
        }

        let outcome = assign_ids(headings, &self.config);
        self.report = Some(ScanReport {
            document: self.document.clone(),
            heading_count: outcome.entries.len(),
            collisions: outcome.collisions,
            fallbacks: outcome.fallbacks,
            scroll_margin_px: self.config.scroll_margin_px,
            scanned_at: Utc::now(),
        });
        self.tracker =
            ActiveSectionTracker::new(outcome.entries.iter().map(|entry| entry.id.clone()));
        self.entries = outcome.entries;
        self.phase = OutlinePhase::Observing;
        &self.entries
    }

    /// Feeds one visibility batch. Ignored outside the observing phase.
    pub fn observe(&mut self, samples: &[VisibilitySample]) -> Option<&str> {
        if self.phase != OutlinePhase::Observing {
            return None;
        }
        self.tracker.observe(samples)
    }

    #[must_use]
    pub fn active_id(&self) -> Option<&str> {
        if self.phase != OutlinePhase::Observing {
            return None;
        }
        self.tracker.active_id()
    }

    /// Releases everything the matching scan registered. Idempotent; later
    /// scans and observations stay inert.
    pub fn teardown(&mut self) {
        if self.phase == OutlinePhase::TornDown {
            return;
        }
        self.phase = OutlinePhase::TornDown;
        self.entries.clear();
        self.tracker = ActiveSectionTracker::default();
        self.report = None;
    }

    #[must_use]
    pub fn outline(&self) -> &[OutlineEntry] {
        &self.entries
    }

    #[must_use]
    pub fn scan_report(&self) -> Option<&ScanReport> {
        self.report.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> OutlinePhase {
        self.phase
    }
}
