use thiserror::Error;

#[derive(Error, Debug)]
pub enum SeTeukError {
    #[error("Submission has no usable content: provide activity text, teacher comments, or at least one file")]
    EmptySubmission,

    #[error("A submission is already in flight")]
    SubmissionInFlight,

    #[error("GEMINI_API_KEY is not set")]
    MissingApiKey,

    #[error("Model service error: {0}")]
    Service(String),

    #[error("Response did not match the expected schema: {0}")]
    Schema(String),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, SeTeukError>;
