/// An error type for the image module.
#[derive(thiserror::Error, Debug)]
pub enum ImageError {
    /// Error when the data length does not match the image size.
    #[error("Data length ({0}) does not match the image size ({1})")]
    InvalidChannelShape(usize, usize),

    /// Error when the image sizes of an operation do not match.
    #[error("Image size ({0}, {1}) does not match the expected size ({2}, {3})")]
    InvalidImageSize(usize, usize, usize, usize),

    /// Error when a rectangle does not fit inside an image.
    #[error("Rectangle (left: {0}, top: {1}, width: {2}, height: {3}) exceeds the image bounds ({4}, {5})")]
    RectOutOfBounds(usize, usize, usize, usize, usize, usize),
}
