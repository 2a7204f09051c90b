//! Behaviour of the contacts table and the bulk email panel.

use thiserror::Error;

use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;
use crate::repository::errors::RepositoryError;

pub mod contacts;
pub mod email;
pub mod events;
pub mod render;

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Form(#[from] FormError),

    #[error(transparent)]
    Repository(#[from] RepositoryError),

    #[error("type constraint violation: {0}")]
    TypeConstraint(#[from] TypeConstraintError),

    /// A bulk email is already being sent.
    #[error("a request is already in flight")]
    Busy,
}

pub type ServiceResult<T> = Result<T, ServiceError>;
