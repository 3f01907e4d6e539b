// src/domain/errors.rs
use thiserror::Error;

pub type DomainResult<T> = Result<T, DomainError>;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("validation error: {0}")]
    Validation(String),
    #[error("immutable field: {0} cannot be changed after creation")]
    ImmutableField(&'static str),
    #[error("not found: {0}")]
    NotFound(String),
}

impl DomainError {
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation(_))
    }

    pub fn is_immutable_field(&self) -> bool {
        matches!(self, Self::ImmutableField(_))
    }
}
