pub use dot_matrix_core::Error as CoreError;

/// Errors raised while reading configuration or glyph data.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Core(#[from] CoreError),
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}
