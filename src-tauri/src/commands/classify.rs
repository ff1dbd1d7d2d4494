//! Tauri command that forwards a selected image to the classifier.

use base64::Engine;
use serde::Deserialize;
use tauri::AppHandle;
use tracing::info;

use crate::classifier::{ClassifierClient, ImageUpload, Prediction};
use crate::commands::config::resolve_endpoint;
use crate::error::BlightScanError;

/// Request payload from the detect page.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassifyRequest {
    /// Base64-encoded image bytes
    pub image_base64: String,
    /// Original filename, forwarded in the multipart part
    pub file_name: String,
    /// MIME type reported by the browser; may be empty
    #[serde(default)]
    pub mime_type: String,
}

impl ClassifyRequest {
    fn into_upload(self) -> Result<ImageUpload, BlightScanError> {
        let bytes = base64::engine::general_purpose::STANDARD
            .decode(&self.image_base64)
            .map_err(|e| BlightScanError::InvalidImage(format!("invalid base64 image data: {}", e)))?;

        Ok(ImageUpload {
            bytes,
            file_name: self.file_name,
            mime_type: self.mime_type,
        })
    }
}

/// Classify one image. Failures come back as a display string; the caller
/// decides whether the answer is still wanted.
#[tauri::command]
pub async fn classify_image(app: AppHandle, request: ClassifyRequest) -> Result<Prediction, String> {
    info!("Starting classification for '{}'", request.file_name);

    let upload = request.into_upload()?;
    let endpoint = resolve_endpoint(&app)?;
    let client = ClassifierClient::new(&endpoint).map_err(BlightScanError::from)?;

    let prediction = client.classify(upload).await.map_err(BlightScanError::from)?;
    Ok(prediction)
}
