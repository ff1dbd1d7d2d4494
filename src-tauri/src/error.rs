use thiserror::Error;

use crate::classifier::ClassifierError;

#[derive(Debug, Error)]
pub enum BlightScanError {
    #[error("Config error: {0}")]
    Config(String),

    #[error("Invalid image payload: {0}")]
    InvalidImage(String),

    #[error(transparent)]
    Classifier(#[from] ClassifierError),
}

impl From<BlightScanError> for String {
    fn from(err: BlightScanError) -> Self {
        err.to_string()
    }
}
