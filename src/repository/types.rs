use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("listing {0} not found")]
    NotFound(String),

    #[error("listing {0} already exists")]
    DuplicateId(String),

    #[error("listing store I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("listing store is not valid JSON: {0}")]
    Serde(#[from] serde_json::Error),
}
