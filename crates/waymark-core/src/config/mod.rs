use crate::error::{Result, WaymarkError};
use crate::filter::FilterConfig;
use crate::outline::OutlineConfig;

mod env;

const ENV_FILTER_MIN_TOKEN_CHARS: &str = "WAYMARK_FILTER_MIN_TOKEN_CHARS";
const ENV_FILTER_OVERLAP_RATIO: &str = "WAYMARK_FILTER_OVERLAP_RATIO";
const ENV_OUTLINE_MAX_SLUG_CHARS: &str = "WAYMARK_OUTLINE_MAX_SLUG_CHARS";
const ENV_OUTLINE_MIN_LEVEL: &str = "WAYMARK_OUTLINE_MIN_LEVEL";
const ENV_OUTLINE_MAX_LEVEL: &str = "WAYMARK_OUTLINE_MAX_LEVEL";
const ENV_OUTLINE_SCROLL_MARGIN_PX: &str = "WAYMARK_OUTLINE_SCROLL_MARGIN_PX";

#[derive(Debug, Clone, Default)]
pub struct AppConfig {
    pub filter: FilterConfig,
    pub outline: OutlineConfig,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            filter: FilterConfig::from_env(),
            outline: OutlineConfig::from_env()?,
        })
    }
}

impl FilterConfig {
    #[must_use]
    fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            min_token_chars: env::read_env_usize(
                ENV_FILTER_MIN_TOKEN_CHARS,
                defaults.min_token_chars,
                0,
            ),
            overlap_ratio: env::read_env_f32(ENV_FILTER_OVERLAP_RATIO)
                .filter(|ratio| (0.0..=1.0).contains(ratio))
                .unwrap_or(defaults.overlap_ratio),
        }
    }
}

impl OutlineConfig {
    fn from_env() -> Result<Self> {
        let defaults = Self::default();
        let (min_level, max_level) = resolve_level_bounds(
            env::read_env_u8(ENV_OUTLINE_MIN_LEVEL),
            env::read_env_u8(ENV_OUTLINE_MAX_LEVEL),
        )?;
        Ok(Self {
            max_slug_chars: env::read_env_usize(
                ENV_OUTLINE_MAX_SLUG_CHARS,
                defaults.max_slug_chars,
                1,
            ),
            min_level,
            max_level,
            scroll_margin_px: env::read_env_u32(ENV_OUTLINE_SCROLL_MARGIN_PX)
                .unwrap_or(defaults.scroll_margin_px),
        })
    }
}

fn resolve_level_bounds(min_raw: Option<u8>, max_raw: Option<u8>) -> Result<(u8, u8)> {
    let defaults = OutlineConfig::default();
    let min_level = min_raw
        .filter(|level| (1..=6).contains(level))
        .unwrap_or(defaults.min_level);
    let max_level = max_raw
        .filter(|level| (1..=6).contains(level))
        .unwrap_or(defaults.max_level);
    if min_level > max_level {
        return Err(WaymarkError::Validation(format!(
            "invalid outline level bounds: {ENV_OUTLINE_MIN_LEVEL}={min_level} exceeds {ENV_OUTLINE_MAX_LEVEL}={max_level}"
        )));
    }
    Ok((min_level, max_level))
}
