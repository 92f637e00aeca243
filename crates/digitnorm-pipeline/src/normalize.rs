use digitnorm_image::{Image, ImageError, ImageSize, PixelRect};
use digitnorm_imgproc::bounds::{content_bounds, has_content};
use digitnorm_imgproc::color::{flatten_alpha, gray_from_rgba_mean};
use digitnorm_imgproc::enhance::invert_rgba;
use digitnorm_imgproc::interpolation::InterpolationMode;
use digitnorm_imgproc::resize::resize_region;
use digitnorm_io::functional::decode_image_any_rgba8;
use digitnorm_io::png::encode_image_png_rgba8;

use crate::error::PipelineError;
use crate::{BACKGROUND_COLOR, CANVAS_SIZE, CONTENT_SIZE, FOREGROUND_THRESHOLD};

/// The terminal product of the pipeline.
///
/// A 28×28 RGBA buffer in the target convention: the digit bright on a dark
/// background, centered inside the content box. Only the pipeline can
/// construct one, so holding a `NormalizedImage` means the guard, bounds,
/// geometric and photometric stages have all run.
#[derive(Clone, Debug, PartialEq)]
pub struct NormalizedImage(Image<u8, 4>);

impl NormalizedImage {
    /// Borrow the underlying buffer.
    pub fn as_image(&self) -> &Image<u8, 4> {
        &self.0
    }

    /// Consume the wrapper and return the underlying buffer.
    pub fn into_image(self) -> Image<u8, 4> {
        self.0
    }
}

/// Scale the bounded content into the target canvas, preserving aspect ratio.
///
/// The content is resampled to fit a [`CONTENT_SIZE`] square and centered on
/// a [`CANVAS_SIZE`] canvas pre-filled with the background color. A bounding
/// box with zero extent (a single-point mark) is clamped to one pixel so the
/// scale stays finite.
pub fn fit_to_canvas(src: &Image<u8, 4>, bounds: &PixelRect) -> Result<Image<u8, 4>, ImageError> {
    let width = bounds.width.max(1);
    let height = bounds.height.max(1);

    let scale = (CONTENT_SIZE as f32 / width as f32).min(CONTENT_SIZE as f32 / height as f32);
    let scaled_width = width as f32 * scale;
    let scaled_height = height as f32 * scale;
    let offset_x = (CANVAS_SIZE as f32 - scaled_width) / 2.0;
    let offset_y = (CANVAS_SIZE as f32 - scaled_height) / 2.0;

    log::debug!(
        "fit {} with scale {} at offset ({}, {})",
        bounds,
        scale,
        offset_x,
        offset_y
    );

    let src_rect = PixelRect {
        left: bounds.left,
        top: bounds.top,
        width,
        height,
    };
    let dst_rect = PixelRect {
        left: offset_x.round() as usize,
        top: offset_y.round() as usize,
        width: (scaled_width.round() as usize).max(1),
        height: (scaled_height.round() as usize).max(1),
    };

    let mut canvas = Image::from_size_val(
        ImageSize {
            width: CANVAS_SIZE,
            height: CANVAS_SIZE,
        },
        BACKGROUND_COLOR,
    )?;

    resize_region(
        src,
        &mut canvas,
        &src_rect,
        &dst_rect,
        InterpolationMode::Bilinear,
    )?;

    Ok(canvas)
}

/// Normalize a monochrome source buffer into the target convention.
///
/// This is the shared path behind both entry points: reject empty input,
/// find the content bounds, fit the content into the canvas, invert. The
/// input is expected to be dark strokes on a light background with the red
/// channel standing in for intensity, which the drawing surface produces
/// directly and [`normalize_photo`] arranges for uploads.
///
/// # Errors
///
/// [`PipelineError::EmptyInput`] when no pixel passes the foreground
/// threshold.
pub fn normalize(src: &Image<u8, 4>) -> Result<NormalizedImage, PipelineError> {
    if !has_content(src, FOREGROUND_THRESHOLD) {
        return Err(PipelineError::EmptyInput);
    }

    // the guard above makes absence unreachable here; answered anyway
    let bounds =
        content_bounds(src, FOREGROUND_THRESHOLD).ok_or(PipelineError::EmptyInput)?;

    let canvas = fit_to_canvas(src, &bounds)?;

    let mut inverted = Image::from_size_val(canvas.size(), 0u8)?;
    invert_rgba(&canvas, &mut inverted)?;

    Ok(NormalizedImage(inverted))
}

/// Normalize an uploaded photo.
///
/// Prepends the photometric preparation a camera image needs (alpha
/// flattening against the white background, then unweighted grayscale
/// reduction) and runs the same shared path as the canvas entry point.
pub fn normalize_photo(src: &Image<u8, 4>) -> Result<NormalizedImage, PipelineError> {
    let mut flat = Image::from_size_val(src.size(), 0u8)?;
    flatten_alpha(src, &mut flat, BACKGROUND_COLOR)?;

    let mut gray = Image::from_size_val(src.size(), 0u8)?;
    gray_from_rgba_mean(&flat, &mut gray)?;

    normalize(&gray)
}

/// Serialize a normalized image into a lossless PNG payload.
pub fn encode(image: &NormalizedImage) -> Result<Vec<u8>, PipelineError> {
    encode_image_png_rgba8(image.as_image()).map_err(PipelineError::Encode)
}

/// Run the full canvas pipeline: normalize the drawing and encode it.
pub fn process_canvas(src: &Image<u8, 4>) -> Result<Vec<u8>, PipelineError> {
    encode(&normalize(src)?)
}

/// Run the full upload pipeline: decode the file bytes, normalize, encode.
///
/// Decode failures propagate as [`PipelineError::Decode`]; the input is
/// never forwarded unprocessed.
pub fn process_upload(bytes: &[u8]) -> Result<Vec<u8>, PipelineError> {
    let image = decode_image_any_rgba8(bytes).map_err(PipelineError::Decode)?;

    log::debug!("decoded upload: {}", image.size());

    encode(&normalize_photo(&image)?)
}
