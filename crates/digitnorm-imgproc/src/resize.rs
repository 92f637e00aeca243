use rayon::prelude::*;

use digitnorm_image::{Image, ImageDtype, ImageError, PixelRect};

use crate::interpolation::{interpolate_pixel, InterpolationMode};

/// Resample a region of the source image into a region of the destination.
///
/// Maps destination pixel centers back into the source rectangle and
/// interpolates there, leaving every destination pixel outside `dst_rect`
/// untouched. Both rectangles must be non-empty and lie inside their images.
///
/// # Example
///
/// ```
/// use digitnorm_image::{Image, ImageSize, PixelRect};
/// use digitnorm_imgproc::interpolation::InterpolationMode;
/// use digitnorm_imgproc::resize::resize_region;
///
/// let src = Image::<u8, 1>::from_size_val(
///     ImageSize { width: 4, height: 4 },
///     7u8,
/// ).unwrap();
/// let mut dst = Image::<u8, 1>::from_size_val(
///     ImageSize { width: 8, height: 8 },
///     0u8,
/// ).unwrap();
///
/// let src_rect = PixelRect { left: 0, top: 0, width: 4, height: 4 };
/// let dst_rect = PixelRect { left: 2, top: 2, width: 4, height: 4 };
///
/// resize_region(&src, &mut dst, &src_rect, &dst_rect, InterpolationMode::Bilinear).unwrap();
///
/// assert_eq!(dst.get([2, 2, 0]), Some(&7u8));
/// assert_eq!(dst.get([0, 0, 0]), Some(&0u8));
/// ```
pub fn resize_region<T, const C: usize>(
    src: &Image<T, C>,
    dst: &mut Image<T, C>,
    src_rect: &PixelRect,
    dst_rect: &PixelRect,
    interpolation: InterpolationMode,
) -> Result<(), ImageError>
where
    T: ImageDtype,
{
    if src_rect.width == 0
        || src_rect.height == 0
        || src_rect.right() > src.width()
        || src_rect.bottom() > src.height()
    {
        return Err(ImageError::RectOutOfBounds(
            src_rect.left,
            src_rect.top,
            src_rect.width,
            src_rect.height,
            src.width(),
            src.height(),
        ));
    }

    if dst_rect.width == 0
        || dst_rect.height == 0
        || dst_rect.right() > dst.width()
        || dst_rect.bottom() > dst.height()
    {
        return Err(ImageError::RectOutOfBounds(
            dst_rect.left,
            dst_rect.top,
            dst_rect.width,
            dst_rect.height,
            dst.width(),
            dst.height(),
        ));
    }

    let scale_x = src_rect.width as f32 / dst_rect.width as f32;
    let scale_y = src_rect.height as f32 / dst_rect.height as f32;

    // sampling stays inside the source region, inclusive bounds
    let u_min = src_rect.left as f32;
    let v_min = src_rect.top as f32;
    let u_max = (src_rect.right() - 1) as f32;
    let v_max = (src_rect.bottom() - 1) as f32;

    let dst_cols = dst.cols();

    dst.as_slice_mut()
        .par_chunks_exact_mut(dst_cols * C)
        .skip(dst_rect.top)
        .take(dst_rect.height)
        .enumerate()
        .for_each(|(row, dst_row)| {
            let v = (v_min + (row as f32 + 0.5) * scale_y - 0.5).clamp(v_min, v_max);
            let out = &mut dst_row[dst_rect.left * C..dst_rect.right() * C];

            for (col, dst_pixel) in out.chunks_exact_mut(C).enumerate() {
                let u = (u_min + (col as f32 + 0.5) * scale_x - 0.5).clamp(u_min, u_max);
                let pixel = interpolate_pixel(src, u, v, interpolation);
                for (value, sample) in dst_pixel.iter_mut().zip(pixel.iter()) {
                    *value = T::from_f32(*sample);
                }
            }
        });

    Ok(())
}
