#[derive(Debug, Clone)]
pub struct FilterConfig {
    /// Query tokens of this many characters or fewer are dropped before
    /// overlap counting.
    pub min_token_chars: usize,
    /// Fraction of query tokens that must appear in a record's match text;
    /// the threshold is the ceiling of `token_count * overlap_ratio`.
    pub overlap_ratio: f32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            min_token_chars: 2,
            overlap_ratio: 0.5,
        }
    }
}
