use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Employee already exists with given email: {0}")]
    EmailAlreadyExists(String),

    #[error("Repository error: {0}")]
    RepositoryError(String),
}
