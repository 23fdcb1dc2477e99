use serde::de::DeserializeOwned;

use crate::error::WaymarkError;
use crate::models::VisibilitySample;

#[derive(Debug, Clone)]
pub struct JsonlOutcome<T> {
    pub items: Vec<T>,
    pub skipped_lines: usize,
    pub first_error: Option<(usize, String)>,
}

impl<T> JsonlOutcome<T> {
    /// Error for the nothing-parsed case. Partially damaged logs replay with
    /// the good lines; a log with no usable line at all is a caller mistake.
    #[must_use]
    pub fn all_invalid_error(&self, label: &str, path: Option<&str>) -> WaymarkError {
        let location = path
            .filter(|value| !value.is_empty())
            .map(|value| format!(" ({value})"))
            .unwrap_or_default();

        match &self.first_error {
            Some((line_no, message)) => WaymarkError::Validation(format!(
                "{label} parse failed{location}: skipped {} invalid lines (first at line {line_no}: {message})",
                self.skipped_lines
            )),
            None => WaymarkError::Validation(format!(
                "{label} parse failed{location}: skipped {} invalid lines",
                self.skipped_lines
            )),
        }
    }
}

pub fn parse_jsonl_tolerant<T>(raw: &str) -> JsonlOutcome<T>
where
    T: DeserializeOwned,
{
    let mut items = Vec::new();
    let mut skipped_lines = 0usize;
    let mut first_error = None::<(usize, String)>;

    for (line_no, line) in raw.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<T>(line) {
            Ok(value) => items.push(value),
            Err(err) => {
                skipped_lines += 1;
                if first_error.is_none() {
                    first_error = Some((line_no + 1, err.to_string()));
                }
            }
        }
    }

    JsonlOutcome {
        items,
        skipped_lines,
        first_error,
    }
}

/// Visibility replay input: one line per observer callback, each a JSON
/// array of `{id, ratio}` samples.
#[must_use]
pub fn parse_sample_batches(raw: &str) -> JsonlOutcome<Vec<VisibilitySample>> {
    parse_jsonl_tolerant(raw)
}
