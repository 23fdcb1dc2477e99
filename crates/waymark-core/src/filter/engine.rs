use std::time::Instant;

use uuid::Uuid;

use crate::models::{FilterOutcome, FilterRequest, FilterTrace, QaRecord};

use super::config::FilterConfig;
use super::matching::filter_records_counted;

#[derive(Debug, Clone)]
pub struct FilterEngine {
    config: FilterConfig,
}

impl FilterEngine {
    #[must_use]
    pub const fn new(config: FilterConfig) -> Self {
        Self { config }
    }

    /// Runs the filter pipeline and attaches a trace document describing how
    /// each stage narrowed the candidate set.
    pub fn run(&self, records: &[QaRecord], request: &FilterRequest) -> FilterOutcome {
        let start = Instant::now();
        let trace_id = Uuid::new_v4().to_string();
        let (mut hits, counts) =
            filter_records_counted(records, &request.query, &request.category, &self.config);
        if let Some(limit) = request.limit {
            hits.truncate(limit);
        }

        let trace = FilterTrace {
            trace_id,
            query: request.query.clone(),
            category: request.category.clone(),
            candidate_count: records.len(),
            kept_by_category: counts.kept_by_category,
            matched_exact: counts.matched_exact,
            matched_overlap: counts.matched_overlap,
            latency_ms: start.elapsed().as_millis(),
        };

        FilterOutcome { hits, trace }
    }
}
