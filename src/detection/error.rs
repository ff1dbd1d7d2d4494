use thiserror::Error;

/// Why a submit action was refused. None of these change state.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SubmitError {
    #[error("No image selected")]
    NoFileSelected,

    #[error("A classification request is already in flight")]
    AlreadySubmitting,

    #[error("A result is already shown; reset to test another image")]
    ResultAlreadyShown,
}

/// Failure to derive a displayable preview from a selected file.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PreviewError {
    #[error("Could not create image preview: {0}")]
    Unavailable(String),
}

/// Recoverable notice shown to the user after something went wrong.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum UploadNotice {
    #[error("Error uploading file: {0}")]
    Upload(String),

    #[error(transparent)]
    Preview(#[from] PreviewError),
}
