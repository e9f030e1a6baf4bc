use thiserror::Error;

#[derive(Error, Debug)]
pub enum CodelineError {
    #[error("No lines to select the longest from")]
    EmptyInput,

    #[error("Image error: {0}")]
    ImageLoad(String),

    #[error("OCR error: {0}")]
    Ocr(String),

    #[error("OCR unavailable: {0}")]
    OcrUnavailable(String),

    #[error("No text detected in image")]
    NoTextDetected,

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl CodelineError {
    /// Process exit code reported by the CLI for this error.
    ///
    /// Code 2 is left to clap for usage errors.
    pub fn exit_code(&self) -> i32 {
        match self {
            CodelineError::ImageLoad(_) => 3,
            CodelineError::OcrUnavailable(_) => 4,
            CodelineError::NoTextDetected | CodelineError::EmptyInput => 5,
            CodelineError::Ocr(_) => 6,
            CodelineError::Config(_) | CodelineError::Io(_) | CodelineError::Json(_) => 1,
        }
    }
}

pub type Result<T> = std::result::Result<T, CodelineError>;
