use pulldown_cmark::{Event, HeadingLevel, Options, Parser, Tag, TagEnd};

use crate::models::HeadingSpan;
use crate::outline::OutlineConfig;

/// Extracts heading spans from a markdown document: headings within the
/// configured tier range, their visible text, and any explicit `{#id}`
/// attribute as the pre-assigned id. Image alt text is excluded, matching
/// what a DOM text read of the rendered heading would produce; fenced code
/// never yields headings because the parser never reports it as one.
#[must_use]
pub fn heading_spans(content: &str, config: &OutlineConfig) -> Vec<HeadingSpan> {
    let mut options = Options::empty();
    options.insert(Options::ENABLE_TABLES);
    options.insert(Options::ENABLE_STRIKETHROUGH);
    options.insert(Options::ENABLE_TASKLISTS);
    options.insert(Options::ENABLE_FOOTNOTES);
    options.insert(Options::ENABLE_HEADING_ATTRIBUTES);

    let mut spans = Vec::new();
    let mut current: Option<HeadingSpan> = None;
    let mut image_depth = 0usize;

    for event in Parser::new_ext(content, options) {
        match event {
            Event::Start(Tag::Heading { level, id, .. }) => {
                let tier = heading_tier(level);
                if config.tracks_level(tier) {
                    current = Some(HeadingSpan {
                        text: String::new(),
                        level: tier,
                        id: id.map(|value| value.to_string()),
                    });
                }
            }
            Event::End(TagEnd::Heading(_)) => {
                if let Some(mut span) = current.take() {
                    span.text = span.text.trim().to_string();
                    spans.push(span);
                }
                image_depth = 0;
            }
            Event::Start(Tag::Image { .. }) => {
                if current.is_some() {
                    image_depth += 1;
                }
            }
            Event::End(TagEnd::Image) => {
                if current.is_some() {
                    image_depth = image_depth.saturating_sub(1);
                }
            }
            Event::Text(text) | Event::Code(text) => {
                if image_depth == 0
                    && let Some(span) = current.as_mut()
                {
                    span.text.push_str(&text);
                }
            }
            Event::SoftBreak | Event::HardBreak => {
                if let Some(span) = current.as_mut() {
                    span.text.push(' ');
                }
            }
            _ => {}
        }
    }

    spans
}

const fn heading_tier(level: HeadingLevel) -> u8 {
    match level {
        HeadingLevel::H1 => 1,
        HeadingLevel::H2 => 2,
        HeadingLevel::H3 => 3,
        HeadingLevel::H4 => 4,
        HeadingLevel::H5 => 5,
        HeadingLevel::H6 => 6,
    }
}
