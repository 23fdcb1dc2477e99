use std::collections::HashSet;

use crate::filter::{FilterConfig, FilterEngine, category_options};
use crate::models::{FilterOutcome, FilterRequest, QaRecord};

/// Open/collapsed record ids, keyed by record id and unbounded. Fully
/// independent of filtering: a record hidden by the current filter keeps its
/// disclosure state until toggled again.
#[derive(Debug, Clone, Default)]
pub struct DisclosureState {
    open: HashSet<u64>,
}

impl DisclosureState {
    /// Flips the id and reports whether it is open afterwards. Ids outside
    /// the record list are tolerated; they simply never render.
    pub fn toggle(&mut self, id: u64) -> bool {
        if self.open.remove(&id) {
            false
        } else {
            self.open.insert(id);
            true
        }
    }

    #[must_use]
    pub fn is_open(&self, id: u64) -> bool {
        self.open.contains(&id)
    }

    #[must_use]
    pub fn open_count(&self) -> usize {
        self.open.len()
    }
}

/// Mount-scoped controller for one FAQ widget: owns the immutable record
/// list, the current query and category, and the disclosure state. The
/// visible list is re-derived on every read instead of cached; at a few
/// hundred records the filter is cheaper than invalidation bookkeeping.
#[derive(Debug)]
pub struct FaqPanel {
    records: Vec<QaRecord>,
    engine: FilterEngine,
    request: FilterRequest,
    disclosure: DisclosureState,
}

impl FaqPanel {
    #[must_use]
    pub fn new(records: Vec<QaRecord>, config: FilterConfig) -> Self {
        Self {
            records,
            engine: FilterEngine::new(config),
            request: FilterRequest::default(),
            disclosure: DisclosureState::default(),
        }
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.request.query = query.into();
    }

    pub fn set_category(&mut self, category: impl Into<String>) {
        self.request.category = category.into();
    }

    /// Ranked view for the current query and category, with the stage trace.
    #[must_use]
    pub fn visible(&self) -> FilterOutcome {
        self.engine.run(&self.records, &self.request)
    }

    #[must_use]
    pub fn categories(&self) -> Vec<String> {
        category_options(&self.records)
    }

    pub fn toggle(&mut self, id: u64) -> bool {
        self.disclosure.toggle(id)
    }

    #[must_use]
    pub fn is_open(&self, id: u64) -> bool {
        self.disclosure.is_open(id)
    }

    #[must_use]
    pub fn records(&self) -> &[QaRecord] {
        &self.records
    }

    #[must_use]
    pub fn request(&self) -> &FilterRequest {
        &self.request
    }
}
