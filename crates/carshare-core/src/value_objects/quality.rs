//! Download quality tiers

use serde::{Deserialize, Serialize};
use std::fmt;

/// Quality tier selectable for an image download.
///
/// `Original` serves the stored bytes untouched; the other tiers downscale
/// into a bounding box while preserving the source aspect ratio.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum QualityTier {
    #[default]
    Original,
    High,
    Medium,
    Low,
}

impl QualityTier {
    /// Maximum (width, height) for this tier, or `None` for `Original`
    pub const fn max_dimensions(&self) -> Option<(u32, u32)> {
        match self {
            Self::Original => None,
            Self::High => Some((1920, 1080)),
            Self::Medium => Some((1280, 720)),
            Self::Low => Some((640, 480)),
        }
    }

    /// Compute the letterboxed output size for a source image.
    ///
    /// Starts from the tier's bounding box and shrinks one side so the
    /// source aspect ratio is preserved. Returns `None` for `Original`
    /// (no transform) and for degenerate zero-sized sources.
    pub fn target_size(&self, src_width: u32, src_height: u32) -> Option<(u32, u32)> {
        let (box_w, box_h) = self.max_dimensions()?;
        if src_width == 0 || src_height == 0 {
            return None;
        }

        let aspect = f64::from(src_width) / f64::from(src_height);
        let mut width = f64::from(box_w);
        let mut height = f64::from(box_h);

        if width / height > aspect {
            width = height * aspect;
        } else {
            height = width / aspect;
        }

        let width = (width.round() as u32).max(1);
        let height = (height.round() as u32).max(1);
        Some((width, height))
    }
}

impl fmt::Display for QualityTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Original => "original",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        };
        f.write_str(name)
    }
}

/// Error when parsing a QualityTier from string
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown quality tier: {0}")]
pub struct QualityTierParseError(pub String);

impl std::str::FromStr for QualityTier {
    type Err = QualityTierParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "original" => Ok(Self::Original),
            "high" => Ok(Self::High),
            "medium" => Ok(Self::Medium),
            "low" => Ok(Self::Low),
            other => Err(QualityTierParseError(other.to_string())),
        }
    }
}
