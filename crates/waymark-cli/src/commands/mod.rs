use std::io::Write;
use std::path::Path;
use std::{fs, io};

use anyhow::{Context, Result};
use serde_json::json;
use waymark_core::content::{ContentFilter, collect_articles};
use waymark_core::error::ErrorPayload;
use waymark_core::filter::category_options;
use waymark_core::jsonl::parse_sample_batches;
use waymark_core::markdown::heading_spans;
use waymark_core::models::{FilterRequest, QaRecord};
use waymark_core::{
    AppConfig, DocumentOutliner, FilterConfig, FilterEngine, OutlineConfig, WaymarkError,
};

use crate::cli::Commands;


pub(crate) fn run(command: Commands) -> Result<()> {
    let config = surface("config", None, AppConfig::from_env())?;

    match command {
        Commands::Filter(args) => {
            let engine = FilterEngine::new(resolve_filter_config(
                config.filter,
                args.min_token_chars,
                args.overlap_ratio,
            ));
            let records = load_records(&args.records)?;
            let request = FilterRequest {
                query: args.query,
                category: args.category,
                limit: args.limit,
            };
            let outcome = engine.run(&records, &request);
            if args.trace {
                print_json(&outcome)?;
            } else {
                print_json(&outcome.hits)?;
            }
        }
        Commands::Categories(args) => {
            let records = load_records(&args.records)?;
            print_json(&category_options(&records))?;
        }
        Commands::Outline(args) => {
            let outline_config =
                resolve_outline_config(config.outline, args.min_level, args.max_level)?;
            let content = read_article(&args.article)?;
            let spans = heading_spans(&content, &outline_config);
            let mut session = DocumentOutliner::new(article_name(&args.article), outline_config);
            session.scan(&spans);
            if args.report {
                print_json(&json!({
                    "outline": session.outline(),
                    "report": session.scan_report(),
                }))?;
            } else {
                print_json(&session.outline())?;
            }
        }
        Commands::Scan(args) => {
            let filter = surface(
                "scan",
                None,
                ContentFilter::new(&args.exclude, args.include_hidden),
            )?;
            let articles = surface(
                "scan",
                Some(&args.root),
                collect_articles(&args.root, &filter),
            )?;

            let mut reports = Vec::with_capacity(articles.len());
            for relative in &articles {
                let content = read_article(&args.root.join(relative))?;
                let spans = heading_spans(&content, &config.outline);
                let document = relative.to_string_lossy().replace('\\', "/");
                let mut session = DocumentOutliner::new(document, config.outline.clone());
                session.scan(&spans);
                reports.push(json!({
                    "outline": session.outline(),
                    "report": session.scan_report(),
                }));
            }
            print_json(&reports)?;
        }
        Commands::Track(args) => {
            let content = read_article(&args.article)?;
            let raw = fs::read_to_string(&args.samples)
                .with_context(|| format!("failed to read samples: {}", args.samples.display()))?;
            let batches = parse_sample_batches(&raw);
            if batches.items.is_empty() && batches.skipped_lines > 0 {
                let samples_path = args.samples.display().to_string();
                let err = batches.all_invalid_error("visibility samples", Some(&samples_path));
                return Err(surface_error("track", Some(&args.samples), err));
            }

            let document = article_name(&args.article);
            let spans = heading_spans(&content, &config.outline);
            let mut session = DocumentOutliner::new(document.as_str(), config.outline);
            session.scan(&spans);

            let mut timeline = Vec::with_capacity(batches.items.len());
            for (index, batch) in batches.items.iter().enumerate() {
                let active = session.observe(batch);
                timeline.push(json!({
                    "batch": index + 1,
                    "active_id": active,
                }));
            }
            session.teardown();

            let first_error = batches
                .first_error
                .as_ref()
                .map(|(line, message)| json!({ "line": line, "message": message }));
            print_json(&json!({
                "document": document,
                "skipped_lines": batches.skipped_lines,
                "first_error": first_error,
                "timeline": timeline,
            }))?;
        }
    }

    Ok(())
}

fn resolve_filter_config(
    base: FilterConfig,
    min_token_chars: Option<usize>,
    overlap_ratio: Option<f32>,
) -> FilterConfig {
    let mut config = base;
    if let Some(chars) = min_token_chars {
        config.min_token_chars = chars;
    }
    if let Some(ratio) = overlap_ratio {
        config.overlap_ratio = ratio;
    }
    config
}

fn resolve_outline_config(
    base: OutlineConfig,
    min_level: Option<u8>,
    max_level: Option<u8>,
) -> Result<OutlineConfig> {
    let mut config = base;
    if let Some(level) = min_level {
        config.min_level = level;
    }
    if let Some(level) = max_level {
        config.max_level = level;
    }
    if config.min_level > config.max_level {
        anyhow::bail!(
            "--min-level ({}) cannot exceed --max-level ({})",
            config.min_level,
            config.max_level
        );
    }
    Ok(config)
}

fn load_records(path: &Path) -> Result<Vec<QaRecord>> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("failed to read records: {}", path.display()))?;
    serde_json::from_str(&raw).with_context(|| format!("invalid records JSON: {}", path.display()))
}

fn read_article(path: &Path) -> Result<String> {
    fs::read_to_string(path).with_context(|| format!("failed to read article: {}", path.display()))
}

fn article_name(path: &Path) -> String {
    path.file_name()
        .map(|value| value.to_string_lossy().to_string())
        .unwrap_or_else(|| path.display().to_string())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}

/// Routes a core failure through both channels: one compact payload line on
/// stderr for tooling, the error itself up the anyhow chain.
fn surface<T>(
    operation: &'static str,
    path: Option<&Path>,
    result: waymark_core::Result<T>,
) -> Result<T> {
    result.map_err(|err| surface_error(operation, path, err))
}

fn surface_error(operation: &'static str, path: Option<&Path>, err: WaymarkError) -> anyhow::Error {
    let payload = err.to_payload(operation, path.map(|p| p.display().to_string()));
    emit_error_payload(&payload);
    anyhow::Error::new(err)
}

fn emit_error_payload(payload: &ErrorPayload) {
    let mut stderr = io::stderr().lock();
    if serde_json::to_writer(&mut stderr, payload).is_ok() {
        let _ = writeln!(stderr);
    }
}
