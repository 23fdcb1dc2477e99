use serde::{Deserialize, Serialize};

use crate::models::trace::FilterTrace;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QaRecord {
    pub id: u64,
    pub question: String,
    #[serde(default)]
    pub answer: Answer,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub popularity: i64,
}

/// Plain-text answers participate in matching and in the plain-text
/// projection; rich answers are carried through untouched and contribute
/// nothing to either.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Answer {
    Text(String),
    Rich(serde_json::Value),
}

impl Default for Answer {
    fn default() -> Self {
        Self::Text(String::new())
    }
}

impl QaRecord {
    #[must_use]
    pub fn answer_text(&self) -> Option<&str> {
        match &self.answer {
            Answer::Text(text) => Some(text.as_str()),
            Answer::Rich(_) => None,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterRequest {
    pub query: String,
    #[serde(default = "default_category")]
    pub category: String,
    #[serde(default)]
    pub limit: Option<usize>,
}

impl Default for FilterRequest {
    fn default() -> Self {
        Self {
            query: String::new(),
            category: default_category(),
            limit: None,
        }
    }
}

fn default_category() -> String {
    "all".to_string()
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FilterOutcome {
    pub hits: Vec<QaRecord>,
    pub trace: FilterTrace,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct QaPair {
    pub question: String,
    pub answer: String,
}

/// The (question, plain answer) projection an external structured-data
/// formatter consumes. Records with rich answers are skipped.
#[must_use]
pub fn plain_text_pairs(records: &[QaRecord]) -> Vec<QaPair> {
    records
        .iter()
        .filter_map(|record| {
            record.answer_text().map(|answer| QaPair {
                question: record.question.clone(),
                answer: answer.to_string(),
            })
        })
        .collect()
}
