#![deny(missing_docs)]
//! Pixel buffer types for the digit normalization pipeline

/// image representation for the normalization stages.
pub mod image;

/// Error types for the image module.
pub mod error;

/// axis-aligned pixel rectangles.
pub mod rect;

pub use crate::error::ImageError;
pub use crate::image::{Image, ImageDtype, ImageSize};
pub use crate::rect::PixelRect;
