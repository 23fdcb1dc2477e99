use std::collections::HashSet;

use crate::models::VisibilitySample;

/// Active-section state fed by visibility observation batches. Only ids
/// registered at construction participate; whenever a batch brings no known
/// intersecting heading, the previous answer stays in place so the position
/// indicator never empties mid-scroll.
#[derive(Debug, Clone, Default)]
pub struct ActiveSectionTracker {
    known: HashSet<String>,
    active: Option<String>,
}

impl ActiveSectionTracker {
    #[must_use]
    pub fn new(known_ids: impl IntoIterator<Item = String>) -> Self {
        Self {
            known: known_ids.into_iter().collect(),
            active: None,
        }
    }

    /// Feeds one observation batch: the headings currently intersecting the
    /// viewport and their visible fractions. The greatest ratio wins; on a
    /// tie the sample reported first keeps the slot. Non-finite and
    /// non-positive ratios and unknown ids are ignored.
    pub fn observe(&mut self, samples: &[VisibilitySample]) -> Option<&str> {
        let mut best: Option<(&str, f32)> = None;
        for sample in samples {
            if !sample.ratio.is_finite() || sample.ratio <= 0.0 {
                continue;
            }
            if !self.known.contains(&sample.id) {
                continue;
            }
            match best {
                Some((_, best_ratio)) if sample.ratio <= best_ratio => {}
                _ => best = Some((sample.id.as_str(), sample.ratio)),
            }
        }

        if let Some((id, _)) = best {
            self.active = Some(id.to_string());
        }
        self.active_id()
    }

    #[must_use]
    pub fn active_id(&self) -> Option<&str> {
        self.active.as_deref()
    }
}
