//! Domain Errors
//!
//! Absence is not an error here: lookups return `Option` and
//! existence-checked writes return `Mutation`.

use thiserror::Error;

/// Domain layer errors
#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Repository error: {0}")]
    Repository(String),
}
