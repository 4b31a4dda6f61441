use thiserror::Error;

#[derive(Debug, Error)]
pub enum RepositoryError {
    #[error("Dataset error: {0}")]
    Dataset(String),
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl From<std::io::Error> for RepositoryError {
    fn from(err: std::io::Error) -> Self {
        RepositoryError::Dataset(format!("Failed to read dataset: {err}"))
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::Dataset(format!("Failed to parse dataset: {err}"))
    }
}
