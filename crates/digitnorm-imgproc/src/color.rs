use digitnorm_image::{Image, ImageError};

use crate::parallel;

/// Composite an RGBA image over a uniform opaque background.
///
/// Uploaded photos may carry transparency; the bounds scan reads raw channel
/// values, so transparent pixels must be resolved against the background
/// color first. Output alpha is fully opaque.
///
/// Precondition: the input and output images must have the same size.
pub fn flatten_alpha(
    src: &Image<u8, 4>,
    dst: &mut Image<u8, 4>,
    background: u8,
) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let alpha = src_pixel[3] as u16;
        for c in 0..3 {
            let value = src_pixel[c] as u16 * alpha + background as u16 * (255 - alpha);
            dst_pixel[c] = (value / 255) as u8;
        }
        dst_pixel[3] = 255;
    });

    Ok(())
}

/// Convert an RGBA image to grayscale using the unweighted channel mean:
///
/// Y = (R + G + B) / 3
///
/// The mean replaces all three color channels; alpha is passed through.
///
/// Precondition: the input and output images must have the same size.
///
/// # Example
///
/// ```
/// use digitnorm_image::{Image, ImageSize};
/// use digitnorm_imgproc::color::gray_from_rgba_mean;
///
/// let image = Image::<u8, 4>::new(
///     ImageSize { width: 1, height: 1 },
///     vec![30u8, 60, 90, 255],
/// ).unwrap();
///
/// let mut gray = Image::<u8, 4>::from_size_val(image.size(), 0u8).unwrap();
///
/// gray_from_rgba_mean(&image, &mut gray).unwrap();
/// assert_eq!(gray.as_slice(), &[60u8, 60, 60, 255]);
/// ```
pub fn gray_from_rgba_mean(src: &Image<u8, 4>, dst: &mut Image<u8, 4>) -> Result<(), ImageError> {
    if src.size() != dst.size() {
        return Err(ImageError::InvalidImageSize(
            src.cols(),
            src.rows(),
            dst.cols(),
            dst.rows(),
        ));
    }

    parallel::par_iter_rows(src, dst, |src_pixel, dst_pixel| {
        let sum = src_pixel[0] as u16 + src_pixel[1] as u16 + src_pixel[2] as u16;
        let mean = (sum / 3) as u8;
        dst_pixel[0] = mean;
        dst_pixel[1] = mean;
        dst_pixel[2] = mean;
        dst_pixel[3] = src_pixel[3];
    });

    Ok(())
}
