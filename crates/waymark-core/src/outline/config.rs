#[derive(Debug, Clone)]
pub struct OutlineConfig {
    /// Slug candidates are clipped to this many characters before collision
    /// handling.
    pub max_slug_chars: usize,
    /// Shallowest heading tier the outline tracks.
    pub min_level: u8,
    /// Deepest heading tier the outline tracks.
    pub max_level: u8,
    /// Offset the rendering layer applies when scrolling to an anchor so the
    /// target heading lands below fixed chrome. Carried on the scan report,
    /// never interpreted here.
    pub scroll_margin_px: u32,
}

impl Default for OutlineConfig {
    fn default() -> Self {
        Self {
            max_slug_chars: 60,
            min_level: 2,
            max_level: 3,
            scroll_margin_px: 96,
        }
    }
}

impl OutlineConfig {
    #[must_use]
    pub fn tracks_level(&self, level: u8) -> bool {
        (self.min_level..=self.max_level).contains(&level)
    }
}
