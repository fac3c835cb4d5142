use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("page not found: {0}")]
    PageNotFound(String),

    #[error("submission rejected: {0}")]
    SubmissionRejected(String),
}
