use std::io::Cursor;

use digitnorm_image::{Image, ImageSize};

use crate::error::IoError;

/// Decode an image of any common raster format into rgba8.
///
/// The format is guessed from the byte content, not from a file name, since
/// uploads arrive as anonymous buffers. Whatever the source color model, the
/// result is expanded to four 8-bit channels.
///
/// # Arguments
///
/// * `bytes` - The raw bytes of the image file.
///
/// # Returns
///
/// A RGBA image with four channels (rgba8).
pub fn decode_image_any_rgba8(bytes: &[u8]) -> Result<Image<u8, 4>, IoError> {
    let img = image::ImageReader::new(Cursor::new(bytes))
        .with_guessed_format()?
        .decode()?;

    let size = ImageSize {
        width: img.width() as usize,
        height: img.height() as usize,
    };

    let buf = img.into_rgba8();

    Ok(Image::new(size, buf.into_raw())?)
}

#[cfg(test)]
mod tests {
    use digitnorm_image::{Image, ImageSize};

    use crate::error::IoError;
    use crate::functional::decode_image_any_rgba8;

    #[test]
    fn decode_any_from_png_bytes() -> Result<(), IoError> {
        let image = Image::<u8, 4>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![10u8, 20, 30, 255, 40, 50, 60, 255],
        )?;
        let bytes = crate::png::encode_image_png_rgba8(&image)?;

        let decoded = decode_image_any_rgba8(&bytes)?;
        assert_eq!(decoded.size(), image.size());
        assert_eq!(decoded.as_slice(), image.as_slice());
        Ok(())
    }

    #[test]
    fn decode_any_expands_gray_to_rgba() -> Result<(), IoError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![0u8, 200],
        )?;
        let bytes = crate::png::encode_image_png_gray8(&image)?;

        let decoded = decode_image_any_rgba8(&bytes)?;
        assert_eq!(decoded.num_channels(), 4);
        assert_eq!(
            decoded.as_slice(),
            &[0u8, 0, 0, 255, 200, 200, 200, 255]
        );
        Ok(())
    }

    #[test]
    fn decode_any_rejects_garbage() {
        let result = decode_image_any_rgba8(&[0u8, 1, 2, 3]);
        assert!(result.is_err());
    }
}
