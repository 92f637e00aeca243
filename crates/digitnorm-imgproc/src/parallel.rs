use rayon::prelude::*;

use digitnorm_image::Image;

/// Apply a function to each pixel pair of two same-sized images, row-parallel.
///
/// The callback receives one source pixel (a `C1`-sample slice) and one
/// destination pixel (a `C2`-sample slice) at a time.
pub fn par_iter_rows<T1, const C1: usize, T2, const C2: usize>(
    src: &Image<T1, C1>,
    dst: &mut Image<T2, C2>,
    f: impl Fn(&[T1], &mut [T2]) + Send + Sync,
) where
    T1: Clone + Send + Sync,
    T2: Clone + Send + Sync,
{
    let src_cols = src.cols();
    let dst_cols = dst.cols();

    src.as_slice()
        .par_chunks_exact(C1 * src_cols)
        .zip(dst.as_slice_mut().par_chunks_exact_mut(C2 * dst_cols))
        .for_each(|(src_chunk, dst_chunk)| {
            src_chunk
                .chunks_exact(C1)
                .zip(dst_chunk.chunks_exact_mut(C2))
                .for_each(|(src_pixel, dst_pixel)| {
                    f(src_pixel, dst_pixel);
                });
        });
}
