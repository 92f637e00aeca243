use digitnorm_image::{Image, ImageSize};
use png::{BitDepth, ColorType, Decoder, Encoder};

use crate::error::IoError;

/// Encode an RGBA image as a PNG payload (rgba8).
///
/// PNG is lossless, so every intensity value survives the trip to the
/// inference service unchanged.
///
/// # Arguments
///
/// - `image` - The image to serialize.
///
/// # Returns
///
/// The encoded PNG bytes.
pub fn encode_image_png_rgba8(image: &Image<u8, 4>) -> Result<Vec<u8>, IoError> {
    encode_png_impl(
        image.as_slice(),
        image.size(),
        BitDepth::Eight,
        ColorType::Rgba,
    )
}

/// Encode a single channel image as a PNG payload (grayscale 8-bit).
///
/// # Arguments
///
/// - `image` - The image to serialize.
///
/// # Returns
///
/// The encoded PNG bytes.
pub fn encode_image_png_gray8(image: &Image<u8, 1>) -> Result<Vec<u8>, IoError> {
    encode_png_impl(
        image.as_slice(),
        image.size(),
        BitDepth::Eight,
        ColorType::Grayscale,
    )
}

// utility function to encode the png data
fn encode_png_impl(
    data: &[u8],
    size: ImageSize,
    depth: BitDepth,
    color_type: ColorType,
) -> Result<Vec<u8>, IoError> {
    let mut buf = Vec::new();

    let mut encoder = Encoder::new(&mut buf, size.width as u32, size.height as u32);
    encoder.set_color(color_type);
    encoder.set_depth(depth);

    let mut writer = encoder
        .write_header()
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    writer
        .write_image_data(data)
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;
    writer
        .finish()
        .map_err(|e| IoError::PngEncodingError(e.to_string()))?;

    Ok(buf)
}

/// Decode a PNG payload with four channels (rgba8).
///
/// # Arguments
///
/// - `bytes` - Raw bytes of the png file.
///
/// # Returns
///
/// A RGBA image with four channels (rgba8).
pub fn decode_image_png_rgba8(bytes: &[u8]) -> Result<Image<u8, 4>, IoError> {
    let mut reader = Decoder::new(bytes)
        .read_info()
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;

    let mut buf = vec![0; reader.output_buffer_size()];
    let info = reader
        .next_frame(&mut buf)
        .map_err(|e| IoError::PngDecodeError(e.to_string()))?;

    if info.color_type != ColorType::Rgba || info.bit_depth != BitDepth::Eight {
        return Err(IoError::PngDecodeError(format!(
            "Expected an 8-bit rgba image, got {:?} {:?}",
            info.color_type, info.bit_depth
        )));
    }

    buf.truncate(info.buffer_size());

    Ok(Image::new(
        ImageSize {
            width: info.width as usize,
            height: info.height as usize,
        },
        buf,
    )?)
}

#[cfg(test)]
mod tests {
    use digitnorm_image::{Image, ImageSize};

    use crate::error::IoError;

    #[test]
    fn encode_decode_rgba8() -> Result<(), IoError> {
        let image = Image::<u8, 4>::new(
            ImageSize {
                width: 2,
                height: 2,
            },
            vec![
                255u8, 0, 0, 255, 0, 255, 0, 255, 0, 0, 255, 255, 128, 128, 128, 64,
            ],
        )?;

        let bytes = super::encode_image_png_rgba8(&image)?;
        assert_eq!(&bytes[1..4], b"PNG");

        let decoded = super::decode_image_png_rgba8(&bytes)?;
        assert_eq!(decoded.size(), image.size());
        assert_eq!(decoded.as_slice(), image.as_slice());
        Ok(())
    }

    #[test]
    fn encode_gray8_magic() -> Result<(), IoError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 3,
                height: 1,
            },
            vec![0u8, 128, 255],
        )?;

        let bytes = super::encode_image_png_gray8(&image)?;
        assert_eq!(&bytes[1..4], b"PNG");
        Ok(())
    }

    #[test]
    fn decode_garbage_fails() {
        let result = super::decode_image_png_rgba8(&[0u8; 16]);
        assert!(matches!(result, Err(IoError::PngDecodeError(_))));
    }

    #[test]
    fn decode_gray_as_rgba_fails() -> Result<(), IoError> {
        let image = Image::<u8, 1>::new(
            ImageSize {
                width: 2,
                height: 1,
            },
            vec![0u8, 255],
        )?;
        let bytes = super::encode_image_png_gray8(&image)?;

        let result = super::decode_image_png_rgba8(&bytes);
        assert!(matches!(result, Err(IoError::PngDecodeError(_))));
        Ok(())
    }
}
