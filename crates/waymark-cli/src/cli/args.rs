use std::path::PathBuf;

use clap::Args;

use super::parsers::{parse_heading_level, parse_unit_interval_f32};

#[derive(Debug, Args)]
pub struct FilterArgs {
    /// JSON file holding the QA record array.
    pub records: PathBuf,
    /// Free-text query; empty keeps every record in the active category.
    #[arg(long, default_value = "", allow_hyphen_values = true)]
    pub query: String,
    /// Category closure; `all` disables the category stage.
    #[arg(long, default_value = "all")]
    pub category: String,
    #[arg(long)]
    pub limit: Option<usize>,
    /// Drop query tokens of this many characters or fewer.
    #[arg(long)]
    pub min_token_chars: Option<usize>,
    /// Fraction of query tokens a record must contain.
    #[arg(long, value_parser = parse_unit_interval_f32)]
    pub overlap_ratio: Option<f32>,
    /// Print the full outcome including the trace document.
    #[arg(long, default_value_t = false)]
    pub trace: bool,
}

#[derive(Debug, Args)]
pub struct CategoriesArgs {
    pub records: PathBuf,
}

#[derive(Debug, Args)]
pub struct OutlineArgs {
    /// Markdown article to scan.
    pub article: PathBuf,
    /// Shallowest heading tier to keep (`1..=6`).
    #[arg(long, value_parser = parse_heading_level)]
    pub min_level: Option<u8>,
    /// Deepest heading tier to keep (`1..=6`).
    #[arg(long, value_parser = parse_heading_level)]
    pub max_level: Option<u8>,
    /// Print the scan report alongside the outline.
    #[arg(long, default_value_t = false)]
    pub report: bool,
}

#[derive(Debug, Args)]
pub struct ScanArgs {
    /// Content directory holding markdown articles.
    pub root: PathBuf,
    /// Exclude source paths by glob pattern.
    #[arg(long = "exclude", value_name = "GLOB")]
    pub exclude: Vec<String>,
    /// Include hidden files/directories in the walk.
    #[arg(long, default_value_t = false)]
    pub include_hidden: bool,
}

#[derive(Debug, Args)]
pub struct TrackArgs {
    /// Markdown article whose outline receives the samples.
    pub article: PathBuf,
    /// JSONL log: one visibility sample batch per line.
    pub samples: PathBuf,
}
