use thiserror::Error;

use crate::models::error::GENERIC_ERROR_MESSAGE;

#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The request never produced a response.
    #[error("Transport error: {0}")]
    Transport(String),

    /// Non-2xx response; `message` is already resolved from the error payload.
    #[error("Server error ({status}): {message}")]
    Server { status: u16, message: String },

    #[error("Decode error: {0}")]
    Decode(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("CSRF token is missing")]
    MissingCsrfToken,
}

pub type RepositoryResult<T> = Result<T, RepositoryError>;

impl RepositoryError {
    /// Text suitable for showing to the user.
    ///
    /// Server messages are shown verbatim; transport and decoding failures
    /// collapse into the generic message and are only detailed in the logs.
    pub fn user_message(&self) -> String {
        match self {
            RepositoryError::Server { message, .. } => message.clone(),
            RepositoryError::MissingCsrfToken => "CSRF token is missing.".to_string(),
            RepositoryError::Transport(_)
            | RepositoryError::Decode(_)
            | RepositoryError::ValidationError(_) => GENERIC_ERROR_MESSAGE.to_string(),
        }
    }
}

impl From<serde_json::Error> for RepositoryError {
    fn from(err: serde_json::Error) -> Self {
        RepositoryError::Decode(err.to_string())
    }
}

impl From<serde_html_form::ser::Error> for RepositoryError {
    fn from(err: serde_html_form::ser::Error) -> Self {
        RepositoryError::ValidationError(format!("Query encoding error: {err}"))
    }
}

#[cfg(feature = "client")]
impl From<reqwest::Error> for RepositoryError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            RepositoryError::Decode(err.to_string())
        } else {
            RepositoryError::Transport(err.to_string())
        }
    }
}
