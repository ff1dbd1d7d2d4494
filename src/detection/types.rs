use std::sync::Arc;

use serde::{Deserialize, Serialize};

/// The image the user picked or dropped.
///
/// The payload sits behind an `Arc` so the controller, the preview source and
/// an in-flight submission can all hold the same bytes without copying.
#[derive(Debug, Clone, PartialEq)]
pub struct SelectedFile {
    pub name: String,
    pub mime_type: String,
    pub bytes: Arc<[u8]>,
}

impl SelectedFile {
    pub fn new(name: impl Into<String>, mime_type: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            name: name.into(),
            mime_type: mime_type.into(),
            bytes: Arc::from(bytes),
        }
    }
}

/// Classifier answer, as returned by the `classify_image` backend command.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictionResult {
    pub class: String,
    pub confidence: f64,
}

impl PredictionResult {
    pub fn new(class: impl Into<String>, confidence: f64) -> Self {
        Self {
            class: class.into(),
            confidence,
        }
    }
}
