//! Raw user input backing the contacts table controls.

use thiserror::Error;
use validator::ValidationErrors;

pub mod email;
pub mod filters;

#[derive(Debug, Error)]
/// Errors that can occur when processing form data.
pub enum FormError {
    #[error("validation errors: {0}")]
    Validation(#[from] ValidationErrors),

    #[error("Subject is required.")]
    MissingSubject,

    #[error("Body is required.")]
    MissingBody,

    #[error("{0} must be a non-negative integer")]
    InvalidNumber(&'static str),

    #[error("invalid event slug")]
    InvalidEventSlug,
}
