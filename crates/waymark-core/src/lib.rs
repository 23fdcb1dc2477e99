// Public fallible APIs in this crate share one concrete error contract (`WaymarkError`).
// Repeating per-function `# Errors` boilerplate obscures behavior more than it clarifies.
#![allow(
    clippy::missing_errors_doc,
    reason = "crate-wide fallible API uses one explicit error type; per-item boilerplate would duplicate contract"
)]

pub mod config;
pub mod content;
pub mod error;
pub mod filter;
pub mod jsonl;
#[cfg(feature = "markdown")]
pub mod markdown;
pub mod models;
pub mod outline;
pub mod panel;
pub(crate) mod text;

pub use config::AppConfig;
pub use error::{Result, WaymarkError};
pub use filter::{FilterConfig, FilterEngine};
pub use outline::{DocumentOutliner, OutlineConfig};
pub use panel::{DisclosureState, FaqPanel};
