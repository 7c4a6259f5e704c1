//! Error types and conversions

use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    /// A specification referenced a catalog id that does not exist. Shells
    /// are expected to only offer ids drawn from the catalog, so hitting
    /// this is a programming error, not a user-input problem.
    #[error("unknown {kind} id: {id}")]
    UnknownCatalogEntry { kind: &'static str, id: String },

    #[error("Invalid parameters: {0}")]
    InvalidParams(String),

    #[error("Server error: {0}")]
    Server(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type AppResult<T> = Result<T, AppError>;

impl From<AppError> for String {
    fn from(err: AppError) -> String {
        err.to_string()
    }
}
