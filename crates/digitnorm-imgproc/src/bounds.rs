use rayon::prelude::*;

use digitnorm_image::{Image, PixelRect};

/// Channel sampled by the foreground predicate.
///
/// The drawing surface produces monochrome strokes and the upload path is
/// grayscaled before the scan, so the red channel stands in for intensity.
const REFERENCE_CHANNEL: usize = 0;

/// Check whether the image contains any foreground pixel.
///
/// A pixel is foreground when its reference channel is strictly below
/// `threshold`. This is the validation run before committing to the full
/// pipeline: a `false` result means there is nothing to normalize.
///
/// # Example
///
/// ```
/// use digitnorm_image::{Image, ImageSize};
/// use digitnorm_imgproc::bounds::has_content;
///
/// let blank = Image::<u8, 4>::from_size_val(
///     ImageSize { width: 4, height: 4 },
///     255u8,
/// ).unwrap();
///
/// assert!(!has_content(&blank, 250));
/// ```
pub fn has_content(src: &Image<u8, 4>, threshold: u8) -> bool {
    src.as_slice()
        .par_chunks_exact(4)
        .any(|pixel| pixel[REFERENCE_CHANNEL] < threshold)
}

/// Find the tight bounding box of the foreground pixels.
///
/// Scans every pixel once, tracking the inclusive min/max x and y among
/// pixels whose reference channel is strictly below `threshold`. The
/// resulting width and height follow the `max - min` convention, so a
/// single foreground pixel yields a zero-sized rectangle.
///
/// Returns `None` when no foreground pixel exists; callers are expected to
/// have rejected that case up front via [`has_content`], but an empty buffer
/// here is answered with absence rather than a panic.
pub fn content_bounds(src: &Image<u8, 4>, threshold: u8) -> Option<PixelRect> {
    let cols = src.cols();

    // per-row span of foreground columns, reduced across rows
    let span = src
        .as_slice()
        .par_chunks_exact(cols * 4)
        .enumerate()
        .filter_map(|(y, row)| {
            let mut min_x = None;
            let mut max_x = 0;
            for (x, pixel) in row.chunks_exact(4).enumerate() {
                if pixel[REFERENCE_CHANNEL] < threshold {
                    if min_x.is_none() {
                        min_x = Some(x);
                    }
                    max_x = x;
                }
            }
            min_x.map(|min_x| (min_x, max_x, y, y))
        })
        .reduce_with(|a, b| (a.0.min(b.0), a.1.max(b.1), a.2.min(b.2), a.3.max(b.3)));

    span.map(|(min_x, max_x, min_y, max_y)| PixelRect {
        left: min_x,
        top: min_y,
        width: max_x - min_x,
        height: max_y - min_y,
    })
}
