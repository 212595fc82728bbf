use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Internal error: {0}")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

pub type GridResult<T> = Result<T, GridError>;
