use digitnorm_image::ImageError;
use digitnorm_io::IoError;

/// An error type for the pipeline module.
#[derive(thiserror::Error, Debug)]
pub enum PipelineError {
    /// No foreground pixel found anywhere in the source buffer.
    ///
    /// Surfaced before any geometric work or network call; the user can
    /// redraw or re-upload.
    #[error("no drawable content found in the input")]
    EmptyInput,

    /// The uploaded bytes could not be decoded into a pixel buffer.
    #[error("failed to decode the uploaded image. {0}")]
    Decode(#[source] IoError),

    /// The normalized image could not be serialized for transport.
    #[error("failed to encode the normalized image. {0}")]
    Encode(#[source] IoError),

    /// An image operation failed.
    #[error(transparent)]
    Image(#[from] ImageError),
}
