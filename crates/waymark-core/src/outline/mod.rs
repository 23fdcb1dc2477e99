mod config;
mod scan;
mod session;
mod tracker;

pub use config::OutlineConfig;
pub use scan::{ScanOutcome, assign_ids};
pub use session::{DocumentOutliner, OutlinePhase};
pub use tracker::ActiveSectionTracker;

#[cfg(test)]
mod tests;
