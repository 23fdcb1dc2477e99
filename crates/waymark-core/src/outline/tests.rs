use std::collections::HashSet;

use crate::models::{HeadingSpan, VisibilitySample};
use crate::outline::{ActiveSectionTracker, DocumentOutliner, OutlineConfig, OutlinePhase};

fn heading(text: &str, level: u8) -> HeadingSpan {
    HeadingSpan {
        text: text.to_string(),
        level,
        id: None,
    }
}

fn preassigned(text: &str, level: u8, id: &str) -> HeadingSpan {
    HeadingSpan {
        text: text.to_string(),
        level,
        id: Some(id.to_string()),
    }
}

fn sample(id: &str, ratio: f32) -> VisibilitySample {
    VisibilitySample {
        id: id.to_string(),
        ratio,
    }
}

fn outliner() -> DocumentOutliner {
    DocumentOutliner::new("guides/lima.md", OutlineConfig::default())
}

#[test]
fn scan_assigns_slug_ids_in_document_order() {
    let mut session = outliner();
    let entries = session.scan(&[
        heading("Getting There", 2),
        heading("By Bus", 3),
        heading("Where to Stay", 2),
    ]);

    let ids: Vec<&str> = entries.iter().map(|entry| entry.id.as_str()).collect();
    assert_eq!(ids, vec!["getting-there", "by-bus", "where-to-stay"]);
    assert_eq!(entries[0].label, "Getting There");
    assert_eq!(entries[1].level, 3);
}

#[test]
fn duplicate_heading_text_gets_positional_suffix() {
    let mut session = outliner();
    let entries = session.scan(&[heading("Overview", 2), heading("Overview", 2)]);

    let ids: Vec<&str> = entries.iter().map(|entry| entry.id.as_str()).collect();
    assert_eq!(ids, vec!["overview", "overview-2"]);
}

#[test]
fn textless_heading_gets_positional_fallback() {
    let mut session = outliner();
    let entries = session.scan(&[
        heading("Intro", 2),
        heading("Food", 2),
        heading("Drink", 2),
        heading("", 2),
    ]);

    assert_eq!(entries[3].id, "section-4");
    assert_eq!(entries[3].label, "Section 4");
}

#[test]
fn every_id_is_unique_even_with_repeated_text() {
    let mut session = outliner();
    let entries = session.scan(&[
        heading("Tips", 2),
        heading("Tips", 2),
        heading("Tips", 3),
        heading("Tips", 2),
    ]);

    assert_eq!(entries.len(), 4);
    let distinct: HashSet<&str> = entries.iter().map(|entry| entry.id.as_str()).collect();
    assert_eq!(distinct.len(), 4);
}

#[test]
fn preassigned_ids_are_kept_verbatim_and_registered() {
    let mut session = outliner();
    let entries = session.scan(&[
        preassigned("Introduction", 2, "overview"),
        heading("Overview", 2),
    ]);

    let ids: Vec<&str> = entries.iter().map(|entry| entry.id.as_str()).collect();
    assert_eq!(ids, vec!["overview", "overview-2"]);
}

#[test]
fn derived_suffix_collision_with_preassigned_id_still_resolves() {
    let mut session = outliner();
    let entries = session.scan(&[
        preassigned("Old Overview", 2, "overview-3"),
        heading("Overview", 2),
        heading("Overview", 2),
    ]);

    let ids: Vec<&str> = entries.iter().map(|entry| entry.id.as_str()).collect();
    assert_eq!(ids, vec!["overview-3", "overview", "overview-3-2"]);
    let distinct: HashSet<&&str> = ids.iter().collect();
    assert_eq!(distinct.len(), 3);
}

#[test]
fn long_heading_text_is_clipped_without_a_dangling_hyphen() {
    let mut session = outliner();
    let text = "What is the single best neighbourhood for first-time visitors to stay in";
    let entries = session.scan(&[heading(text, 2)]);

    let id = &entries[0].id;
    assert!(id.chars().count() <= 60, "id too long: {id}");
    assert!(!id.ends_with('-'));
    assert!(id.starts_with("what-is-the-single-best"));
    // The label keeps the full visible text.
    assert_eq!(entries[0].label, text);
}

#[test]
fn scan_report_counts_collisions_and_fallbacks() {
    let mut session = outliner();
    session.scan(&[heading("Overview", 2), heading("Overview", 2), heading("", 3)]);

    let report = session.scan_report().expect("report after scan");
    assert_eq!(report.document, "guides/lima.md");
    assert_eq!(report.heading_count, 3);
    assert_eq!(report.collisions, 1);
    assert_eq!(report.fallbacks, 1);
    assert_eq!(report.scroll_margin_px, 96);
}

#[test]
fn repeat_scan_while_observing_returns_existing_outline() {
    let mut session = outliner();
    session.scan(&[heading("Overview", 2)]);
    let entries = session.scan(&[heading("Completely Different", 2)]);

    assert_eq!(entries.len(), 1);
    assert_eq!(entries[0].id, "overview");
}

#[test]
fn observe_before_scan_is_inert() {
    let mut session = outliner();
    assert_eq!(session.observe(&[sample("overview", 0.9)]), None);
    assert_eq!(session.active_id(), None);
    assert_eq!(session.phase(), OutlinePhase::Unscanned);
}

#[test]
fn greatest_visible_fraction_wins_the_active_slot() {
    let mut session = outliner();
    session.scan(&[heading("Overview", 2), heading("Getting There", 2)]);

    let active = session.observe(&[sample("getting-there", 0.2), sample("overview", 0.7)]);
    assert_eq!(active, Some("overview"));

    let active = session.observe(&[sample("getting-there", 0.8), sample("overview", 0.1)]);
    assert_eq!(active, Some("getting-there"));
}

#[test]
fn equal_fractions_keep_the_first_reported_sample() {
    let mut session = outliner();
    session.scan(&[heading("Overview", 2), heading("Getting There", 2)]);

    let active = session.observe(&[sample("getting-there", 0.5), sample("overview", 0.5)]);
    assert_eq!(active, Some("getting-there"));
}

#[test]
fn empty_batches_retain_the_previous_active_id() {
    let mut session = outliner();
    session.scan(&[heading("Overview", 2), heading("Getting There", 2)]);

    session.observe(&[sample("overview", 0.6)]);
    assert_eq!(session.observe(&[]), Some("overview"));
    assert_eq!(session.observe(&[sample("overview", 0.0)]), Some("overview"));
    assert_eq!(session.active_id(), Some("overview"));
}

#[test]
fn unknown_ids_never_become_active() {
    let mut session = outliner();
    session.scan(&[heading("Overview", 2)]);

    assert_eq!(session.observe(&[sample("phantom", 0.9)]), None);
    session.observe(&[sample("overview", 0.4)]);
    assert_eq!(session.observe(&[sample("phantom", 0.9)]), Some("overview"));
}

#[test]
fn tracker_ignores_non_finite_fractions() {
    let mut tracker = ActiveSectionTracker::new(["intro".to_string(), "food".to_string()]);

    assert_eq!(tracker.observe(&[sample("intro", f32::NAN)]), None);
    assert_eq!(
        tracker.observe(&[sample("intro", f32::INFINITY), sample("food", 0.3)]),
        Some("food")
    );
}

#[test]
fn teardown_clears_state_and_is_idempotent() {
    let mut session = outliner();
    session.scan(&[heading("Overview", 2)]);
    session.observe(&[sample("overview", 0.5)]);

    session.teardown();
    assert_eq!(session.phase(), OutlinePhase::TornDown);
    assert!(session.outline().is_empty());
    assert_eq!(session.active_id(), None);
    assert!(session.scan_report().is_none());

    // Late callbacks and repeat teardowns are inert.
    session.teardown();
    assert_eq!(session.observe(&[sample("overview", 0.9)]), None);
    assert!(session.scan(&[heading("Overview", 2)]).is_empty());
}
