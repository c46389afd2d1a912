pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid card {index}: {message}")]
    Validation { index: usize, message: String },

    #[error("deck JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
