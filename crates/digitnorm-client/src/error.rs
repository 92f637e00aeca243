use digitnorm_pipeline::PipelineError;

/// An error type for the client module.
#[derive(thiserror::Error, Debug)]
pub enum ClientError {
    /// The normalization pipeline rejected the input.
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    /// The request to the inference service failed.
    #[error("request to the inference service failed. {0}")]
    Request(#[from] reqwest::Error),

    /// The blocking decode task did not complete.
    #[error("the decode task did not complete. {0}")]
    Join(#[from] tokio::task::JoinError),

    /// The inference service answered but reported a failure.
    #[error("the inference service reported a failure. {0}")]
    Service(String),
}
