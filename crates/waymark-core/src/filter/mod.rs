mod categories;
mod config;
mod engine;
mod matching;

pub use categories::{ALL_CATEGORY, category_options};
pub use config::FilterConfig;
pub use engine::FilterEngine;
pub use matching::filter_records;
