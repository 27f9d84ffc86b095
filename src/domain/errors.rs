// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("invalid title: {0}")]
    InvalidTitle(String),
    #[error("slug already taken: {0}")]
    SlugCollision(String),
    #[error("no free slug for `{base}` after {attempts} attempts")]
    SlugCollisionExhausted { base: String, attempts: u32 },
    #[error("not found: {0}")]
    NotFound(String),
    #[error("backend unavailable: {0}")]
    BackendUnavailable(String),
}
