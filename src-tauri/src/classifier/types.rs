use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Classifier answer. Any 2xx body that does not match this shape is a
/// malformed response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Prediction {
    pub class: String,
    pub confidence: f64,
}

/// Image to upload, as received from the frontend.
#[derive(Debug, Clone, PartialEq)]
pub struct ImageUpload {
    pub bytes: Vec<u8>,
    pub file_name: String,
    pub mime_type: String,
}

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("Invalid classifier endpoint '{endpoint}': {reason}")]
    InvalidEndpoint { endpoint: String, reason: String },

    #[error("Failed to build HTTP client: {0}")]
    ClientBuild(String),

    #[error("Classifier request failed: {0}")]
    Transport(String),

    #[error("Classifier returned {status}: {body}")]
    Status { status: u16, body: String },

    #[error("Classifier response is not a prediction: {0}")]
    MalformedResponse(String),
}
