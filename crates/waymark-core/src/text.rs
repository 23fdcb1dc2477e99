#[must_use]
pub fn normalize_query(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Splits a raw query into match tokens: lowercased, whitespace-separated,
/// with tokens of `min_token_chars` characters or fewer dropped. Repeated
/// tokens are kept; each occurrence counts toward the overlap majority.
#[must_use]
pub fn tokenize_query(raw: &str, min_token_chars: usize) -> Vec<String> {
    normalize_query(raw)
        .split_whitespace()
        .filter(|token| token.chars().count() > min_token_chars)
        .map(ToString::to_string)
        .collect()
}

/// Derives a slug candidate from heading text: lowercase, keep only ASCII
/// lowercase letters, digits, whitespace, and hyphens, then join whitespace
/// runs with single hyphens and clip to `max_chars`. Returns an empty string
/// when nothing survives; the caller substitutes a positional fallback.
#[must_use]
pub fn slug_candidate(text: &str, max_chars: usize) -> String {
    let mut kept = String::with_capacity(text.len());
    for c in text.to_lowercase().chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() || c.is_whitespace() || c == '-' {
            kept.push(c);
        }
    }

    let joined = kept.split_whitespace().collect::<Vec<_>>().join("-");
    let clipped = match joined.char_indices().nth(max_chars) {
        Some((clip_idx, _)) => &joined[..clip_idx],
        None => joined.as_str(),
    };
    clipped.trim_end_matches('-').to_string()
}
