//! Error types for admin-tools

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("Duplicate navigation path {path}: \"{first}\" and \"{second}\"")]
    DuplicatePath {
        path: String,
        first: String,
        second: String,
    },

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
