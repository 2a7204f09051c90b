//! Bulk email panel.

use crate::domain::email::{EmailDispatchOutcome, EmailDispatchRequest, EmailDraft};
use crate::domain::query::QueryState;
use crate::dto::email::StatusMessage;
use crate::forms::email::EmailForm;
use crate::repository::EmailDispatcher;
use crate::repository::errors::RepositoryResult;
use crate::services::{ServiceError, ServiceResult};

pub const SEND_LABEL: &str = "Send Email";
pub const SENDING_LABEL: &str = "Sending...";
pub const SENDING_STATUS: &str = "Sending emails, please wait...";

/// State of the email panel: inputs, in-flight flag and status feedback.
#[derive(Debug, Default)]
pub struct EmailComposer {
    form: EmailForm,
    sending: bool,
    status: Option<StatusMessage>,
}

impl EmailComposer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opening the panel clears any previous status.
    pub fn open(&mut self) {
        self.status = None;
    }

    pub fn form(&self) -> &EmailForm {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut EmailForm {
        &mut self.form
    }

    pub fn status(&self) -> Option<&StatusMessage> {
        self.status.as_ref()
    }

    pub fn is_sending(&self) -> bool {
        self.sending
    }

    pub fn submit_enabled(&self) -> bool {
        !self.sending
    }

    pub fn submit_label(&self) -> &'static str {
        if self.sending { SENDING_LABEL } else { SEND_LABEL }
    }

    /// Validates the inputs and builds the request from the applied query.
    ///
    /// On success the panel switches to its sending state; the caller must
    /// report the result through [`EmailComposer::finish`].
    pub fn prepare(&mut self, query: &QueryState) -> ServiceResult<EmailDispatchRequest> {
        if self.sending {
            return Err(ServiceError::Busy);
        }

        let draft = EmailDraft::try_from(&self.form).map_err(|err| {
            self.status = Some(StatusMessage::error(err.to_string()));
            err
        })?;

        self.sending = true;
        self.status = Some(StatusMessage::info(SENDING_STATUS));
        Ok(EmailDispatchRequest::new(draft, query))
    }

    /// Leaves the sending state and reports the server's answer.
    pub fn finish(
        &mut self,
        outcome: RepositoryResult<EmailDispatchOutcome>,
    ) -> ServiceResult<EmailDispatchOutcome> {
        self.sending = false;

        match outcome {
            Ok(outcome) if outcome.is_success() => {
                log::info!("Bulk email accepted: {}", outcome.message);
                self.status = Some(StatusMessage::success(outcome.message.clone()));
                self.form.clear_content();
                Ok(outcome)
            }
            Ok(outcome) => {
                log::warn!("Bulk email not sent: {}", outcome.message);
                self.status = Some(StatusMessage::error(outcome.message.clone()));
                Ok(outcome)
            }
            Err(err) => {
                log::error!("Failed to send bulk email: {err}");
                self.status = Some(StatusMessage::error(format!(
                    "Error: {}",
                    err.user_message()
                )));
                Err(err.into())
            }
        }
    }

    /// Validates, sends and records the outcome in one step.
    pub async fn send<R>(
        &mut self,
        repo: &R,
        query: &QueryState,
    ) -> ServiceResult<EmailDispatchOutcome>
    where
        R: EmailDispatcher + ?Sized,
    {
        let request = self.prepare(query)?;
        let outcome = repo.send_emails(&request).await;
        self.finish(outcome)
    }
}
