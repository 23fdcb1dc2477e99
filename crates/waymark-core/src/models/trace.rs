use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterTrace {
    pub trace_id: String,
    pub query: String,
    pub category: String,
    pub candidate_count: usize,
    pub kept_by_category: usize,
    pub matched_exact: usize,
    pub matched_overlap: usize,
    pub latency_ms: u128,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScanReport {
    pub document: String,
    pub heading_count: usize,
    pub collisions: usize,
    pub fallbacks: usize,
    pub scroll_margin_px: u32,
    pub scanned_at: DateTime<Utc>,
}
