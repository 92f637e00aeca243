#![doc = env!("CARGO_PKG_DESCRIPTION")]

#[doc(inline)]
pub use digitnorm_image as image;

#[doc(inline)]
pub use digitnorm_imgproc as imgproc;

#[doc(inline)]
pub use digitnorm_io as io;

#[doc(inline)]
pub use digitnorm_pipeline as pipeline;
