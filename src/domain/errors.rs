use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum DomainError {
    #[error("File not found or empty file")]
    SourceNotFound,
    #[error("Order Not found")]
    NotFound,
    #[error("{0}")]
    MalformedData(String),
}
