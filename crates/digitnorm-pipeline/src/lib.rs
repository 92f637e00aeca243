#![deny(missing_docs)]
//! Unified digit normalization pipeline
//!
//! Both entry points, freehand canvas strokes and uploaded photos, feed the
//! same shared stages: guard, bounds scan, geometric fit, inversion, PNG
//! encode. One module owns the scan threshold and the target geometry so the
//! two paths cannot drift apart.

/// Error types for the pipeline module.
pub mod error;

/// The normalization stages and their composition.
pub mod normalize;

pub use crate::error::PipelineError;
pub use crate::normalize::{
    encode, fit_to_canvas, normalize, normalize_photo, process_canvas, process_upload,
    NormalizedImage,
};

/// Side length of the target canvas in pixels.
pub const CANVAS_SIZE: usize = 28;

/// Side length of the box the digit content is scaled into.
pub const CONTENT_SIZE: usize = 20;

/// Background intensity of the source convention (white).
pub const BACKGROUND_COLOR: u8 = 255;

/// Reference intensities strictly below this value count as foreground.
///
/// Slightly below pure white so anti-aliased stroke edges register while
/// near-white sensor noise does not.
pub const FOREGROUND_THRESHOLD: u8 = 250;
