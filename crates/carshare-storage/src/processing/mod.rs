//! Quality-tier image processing

mod resize;

pub use resize::{render_quality, ProcessError, Rendered, JPEG_QUALITY};
