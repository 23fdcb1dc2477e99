use std::collections::HashSet;

use crate::models::QaRecord;

/// Synthetic category that disables the category stage.
pub const ALL_CATEGORY: &str = "all";

/// Control options for the category selector: distinct non-empty categories
/// in first-seen record order, with the synthetic option prepended.
#[must_use]
pub fn category_options(records: &[QaRecord]) -> Vec<String> {
    let mut out = vec![ALL_CATEGORY.to_string()];
    let mut seen = HashSet::from([ALL_CATEGORY]);
    for record in records {
        let Some(category) = record.category.as_deref().filter(|c| !c.is_empty()) else {
            continue;
        };
        if seen.insert(category) {
            out.push(category.to_string());
        }
    }
    out
}
