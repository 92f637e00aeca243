use digitnorm_image::Image;
use digitnorm_io::functional::decode_image_any_rgba8;
use digitnorm_pipeline::{encode, normalize_photo, process_canvas, PipelineError};

use crate::error::ClientError;
use crate::response::{PredictResponse, Prediction};

/// Name of the multipart field the service expects.
const UPLOAD_FIELD: &str = "file";

/// File name attached to the uploaded PNG part.
const UPLOAD_FILE_NAME: &str = "digit.png";

/// Client for the remote digit inference service.
///
/// Wraps a `reqwest::Client`, so it is cheap to clone and safe to share.
#[derive(Debug, Clone)]
pub struct PredictClient {
    http: reqwest::Client,
    endpoint: String,
}

impl PredictClient {
    /// Create a client for the given predict endpoint.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            endpoint: endpoint.into(),
        }
    }

    /// Send an encoded digit image to the inference service.
    ///
    /// Posts the PNG payload as the single `file` field of a multipart
    /// request and maps the JSON verdict into a [`Prediction`].
    pub async fn predict(&self, png: Vec<u8>) -> Result<Prediction, ClientError> {
        let part = reqwest::multipart::Part::bytes(png)
            .file_name(UPLOAD_FILE_NAME)
            .mime_str("image/png")?;
        let form = reqwest::multipart::Form::new().part(UPLOAD_FIELD, part);

        log::info!("posting digit image to {}", self.endpoint);

        let response = self
            .http
            .post(&self.endpoint)
            .multipart(form)
            .send()
            .await?
            .error_for_status()?;

        let payload: PredictResponse = response.json().await?;

        if !payload.success {
            let message = payload
                .error
                .unwrap_or_else(|| "unspecified failure".to_string());
            log::warn!("inference service rejected the request: {message}");
            return Err(ClientError::Service(message));
        }

        Ok(payload.into_prediction())
    }

    /// Normalize a finished drawing and request a classification for it.
    pub async fn predict_canvas(&self, src: &Image<u8, 4>) -> Result<Prediction, ClientError> {
        let png = process_canvas(src)?;
        self.predict(png).await
    }

    /// Decode an uploaded file, normalize it, and request a classification.
    pub async fn predict_upload(&self, bytes: Vec<u8>) -> Result<Prediction, ClientError> {
        let image = decode_upload(bytes).await?;
        let png = encode(&normalize_photo(&image)?)?;
        self.predict(png).await
    }
}

/// Decode uploaded file bytes into a pixel buffer as an explicit awaited step.
///
/// Decoding a large photo is CPU-bound, so it runs on the blocking pool; the
/// caller awaits either a buffer or a decode failure.
pub async fn decode_upload(bytes: Vec<u8>) -> Result<Image<u8, 4>, ClientError> {
    let decoded = tokio::task::spawn_blocking(move || decode_image_any_rgba8(&bytes)).await?;
    let image = decoded.map_err(PipelineError::Decode)?;

    log::debug!("decoded upload: {}", image.size());

    Ok(image)
}
