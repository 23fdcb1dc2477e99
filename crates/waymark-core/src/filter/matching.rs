use crate::models::QaRecord;
use crate::text::{normalize_query, tokenize_query};

use super::categories::ALL_CATEGORY;
use super::config::FilterConfig;

#[derive(Debug, Clone, Copy, Default)]
pub(super) struct MatchCounts {
    pub(super) kept_by_category: usize,
    pub(super) matched_exact: usize,
    pub(super) matched_overlap: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum MatchKind {
    Exact,
    Overlap,
}

/// Applies the category, query, and ranking stages over an immutable record
/// list. Total over every input shape; an empty result is a valid outcome.
#[must_use]
pub fn filter_records(
    records: &[QaRecord],
    query: &str,
    category: &str,
    config: &FilterConfig,
) -> Vec<QaRecord> {
    filter_records_counted(records, query, category, config).0
}

pub(super) fn filter_records_counted(
    records: &[QaRecord],
    query: &str,
    category: &str,
    config: &FilterConfig,
) -> (Vec<QaRecord>, MatchCounts) {
    let mut counts = MatchCounts::default();
    let query_norm = normalize_query(query);
    let tokens = tokenize_query(query, config.min_token_chars);
    let threshold = overlap_threshold(tokens.len(), config.overlap_ratio);

    let mut hits = Vec::new();
    for record in records {
        if !category_keeps(record, category) {
            continue;
        }
        counts.kept_by_category += 1;

        if !query_norm.is_empty() {
            let haystack = build_haystack(record);
            match query_match(&haystack, &query_norm, &tokens, threshold) {
                Some(MatchKind::Exact) => counts.matched_exact += 1,
                Some(MatchKind::Overlap) => counts.matched_overlap += 1,
                None => continue,
            }
        }
        hits.push(record.clone());
    }

    sort_hits_by_popularity_desc(&mut hits);
    (hits, counts)
}

fn category_keeps(record: &QaRecord, category: &str) -> bool {
    if category.is_empty() || category == ALL_CATEGORY {
        return true;
    }
    record.category.as_deref() == Some(category)
}

/// Lowercased question, plain answer, and category, space-joined. Rich
/// answers contribute nothing.
pub(super) fn build_haystack(record: &QaRecord) -> String {
    let answer = record.answer_text().unwrap_or_default();
    let category = record.category.as_deref().unwrap_or_default();
    let mut text =
        String::with_capacity(record.question.len() + answer.len() + category.len() + 2);
    text.push_str(&record.question);
    text.push(' ');
    text.push_str(answer);
    text.push(' ');
    text.push_str(category);
    text.to_lowercase()
}

/// The full normalized query as a verbatim substring wins outright; otherwise
/// enough tokens must each appear somewhere in the match text.
pub(super) fn query_match(
    haystack: &str,
    query_norm: &str,
    tokens: &[String],
    threshold: usize,
) -> Option<MatchKind> {
    if haystack.contains(query_norm) {
        return Some(MatchKind::Exact);
    }
    let matched = tokens
        .iter()
        .filter(|token| haystack.contains(token.as_str()))
        .count();
    (matched >= threshold).then_some(MatchKind::Overlap)
}

pub(super) fn overlap_threshold(token_count: usize, ratio: f32) -> usize {
    ceil_to_usize(usize_to_f32(token_count) * ratio)
}

pub(super) fn sort_hits_by_popularity_desc(hits: &mut [QaRecord]) {
    // Stable sort; records with equal popularity keep their input order.
    hits.sort_by(|a, b| b.popularity.cmp(&a.popularity));
}

#[allow(
    clippy::cast_precision_loss,
    reason = "token counts stay far below f32 integer precision"
)]
const fn usize_to_f32(value: usize) -> f32 {
    value as f32
}

#[allow(
    clippy::cast_possible_truncation,
    clippy::cast_sign_loss,
    reason = "the ceiling of a bounded non-negative token product fits usize"
)]
fn ceil_to_usize(value: f32) -> usize {
    value.ceil().max(0.0) as usize
}
