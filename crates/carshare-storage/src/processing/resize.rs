//! Downscale an uploaded image into a quality tier's bounding box.
//!
//! The output dimensions come from [`QualityTier::target_size`]: the tier's
//! box shrunk on one side so the source aspect ratio is preserved. Non-original
//! tiers always re-encode as JPEG.

use image::codecs::jpeg::JpegEncoder;
use image::imageops::FilterType;
use tracing::debug;

use carshare_core::QualityTier;

/// JPEG encode quality for tiered downloads
pub const JPEG_QUALITY: u8 = 90;

/// Error type for image processing
#[derive(Debug, thiserror::Error)]
pub enum ProcessError {
    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),

    #[error("Source image has no usable dimensions")]
    DegenerateSource,
}

/// Result of rendering an image at a quality tier
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Rendered {
    /// Serve the stored bytes untouched (original tier)
    Passthrough,
    /// Re-encoded JPEG at the tier's letterboxed dimensions
    Jpeg {
        bytes: Vec<u8>,
        width: u32,
        height: u32,
    },
}

/// Render stored image bytes at the requested quality tier.
///
/// `Original` never touches the bytes, so unsupported formats only fail
/// when a downscaled tier is actually requested.
pub fn render_quality(data: &[u8], tier: QualityTier) -> Result<Rendered, ProcessError> {
    if tier == QualityTier::Original {
        return Ok(Rendered::Passthrough);
    }

    let source = image::load_from_memory(data)?;
    let (width, height) = tier
        .target_size(source.width(), source.height())
        .ok_or(ProcessError::DegenerateSource)?;

    let resized = source.resize_exact(width, height, FilterType::Lanczos3);

    let mut bytes = Vec::new();
    let encoder = JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY);
    resized.write_with_encoder(encoder)?;

    debug!(
        %tier,
        src_width = source.width(),
        src_height = source.height(),
        out_width = width,
        out_height = height,
        "Rendered quality tier"
    );

    Ok(Rendered::Jpeg {
        bytes,
        width,
        height,
    })
}
