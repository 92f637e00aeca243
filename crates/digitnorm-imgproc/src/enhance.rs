use digitnorm_image::{Image, ImageError};

use crate::parallel;

/// Invert the color channels of an RGBA image.
///
/// dst(x,y,c) = 255 - src(x,y,c) for c in {R, G, B}; alpha is passed
/// through. Flips dark-strokes-on-light input into the bright-on-dark
/// convention the classifier expects. Applying the operation twice restores
/// the original image.
///
/// Precondition: the input and output images must have the same size.
pub fn invert_rgba(src: &Image<u8, 4>, dst: &mut Image<u8, 4>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        dst_pixel[0] = 255 - src_pixel[0];
        dst_pixel[1] = 255 - src_pixel[1];
        dst_pixel[2] = 255 - src_pixel[2];
        dst_pixel[3] = src_pixel[3];
    });

    Ok(())
}
