use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OutlineEntry {
    pub id: String,
    pub label: String,
    pub level: u8,
}

/// One heading as delivered by a heading source, in document order. The
/// optional `id` is a pre-assigned identifier that scan keeps verbatim.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct HeadingSpan {
    pub text: String,
    pub level: u8,
    #[serde(default)]
    pub id: Option<String>,
}

/// One observed heading and its visible fraction. A batch of samples is one
/// observer callback: the set of headings currently intersecting the viewport.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct VisibilitySample {
    pub id: String,
    pub ratio: f32,
}
