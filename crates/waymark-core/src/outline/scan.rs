use std::collections::HashSet;

use crate::models::{HeadingSpan, OutlineEntry};
use crate::text::slug_candidate;

use super::config::OutlineConfig;

#[derive(Debug, Clone, Default)]
pub struct ScanOutcome {
    pub entries: Vec<OutlineEntry>,
    pub collisions: usize,
    pub fallbacks: usize,
}

/// Assigns an id to every heading in document order. Pre-assigned ids are
/// kept verbatim but still registered, so later derived ids cannot shadow
/// them. A heading with no sluggable text gets `section-<pos>` (1-indexed);
/// a colliding derived id gets the heading's position appended.
#[must_use]
pub fn assign_ids(headings: &[HeadingSpan], config: &OutlineConfig) -> ScanOutcome {
    let mut outcome = ScanOutcome::default();
    let mut taken = HashSet::<String>::new();

    for (index, heading) in headings.iter().enumerate() {
        let position = index + 1;
        let id = match heading.id.as_deref() {
            Some(preassigned) => preassigned.to_string(),
            None => derive_id(&heading.text, position, config, &taken, &mut outcome),
        };
        taken.insert(id.clone());

        let label = if heading.text.trim().is_empty() {
            format!("Section {position}")
        } else {
            heading.text.clone()
        };
        outcome.entries.push(OutlineEntry {
            id,
            label,
            level: heading.level,
        });
    }

    outcome
}

fn derive_id(
    text: &str,
    position: usize,
    config: &OutlineConfig,
    taken: &HashSet<String>,
    outcome: &mut ScanOutcome,
) -> String {
    let candidate = slug_candidate(text, config.max_slug_chars);
    let id = if candidate.is_empty() {
        outcome.fallbacks += 1;
        format!("section-{position}")
    } else {
        candidate
    };

    if !taken.contains(&id) {
        return id;
    }
    outcome.collisions += 1;

    let mut deduped = format!("{id}-{position}");
    // Distinct positions keep derived suffixes apart; only a pre-assigned id
    // can still collide here, so extend until the finite set clears.
    let mut round = 2usize;
    while taken.contains(&deduped) {
        deduped = format!("{id}-{position}-{round}");
        round += 1;
    }
    deduped
}
