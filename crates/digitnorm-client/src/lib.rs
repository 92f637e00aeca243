#![deny(missing_docs)]
//! Transport client for the remote digit inference service
//!
//! Thin glue around the pipeline: the normalized PNG goes out as the single
//! `file` field of a multipart request, the JSON verdict comes back as a
//! [`Prediction`]. The pipeline's contract ends at producing the payload;
//! timeouts and retries are the caller's business.

/// The predict client and the awaited decode step.
pub mod client;

/// Error types for the client module.
pub mod error;

/// Wire types of the inference service response.
pub mod response;

pub use crate::client::{decode_upload, PredictClient};
pub use crate::error::ClientError;
pub use crate::response::{PredictResponse, Prediction, DIGIT_CLASSES};
