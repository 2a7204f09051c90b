//! Bulk email panel inputs.

use serde::Deserialize;
use validator::Validate;

use crate::domain::email::EmailDraft;
use crate::domain::types::{EmailBody, EmailSubject, EventSlug};
use crate::forms::FormError;

#[derive(Clone, Debug, Default, Deserialize, Validate, PartialEq, Eq)]
#[serde(default)]
/// Form data for composing a bulk email.
pub struct EmailForm {
    /// Email subject line. The length limit applies to the trimmed text.
    #[validate(length(max = 255))]
    pub subject: String,
    /// Plain-text body.
    pub body: String,
    /// Optional HTML alternative of the body, sanitized before sending.
    pub html_body: String,
    /// Slug of the event the email promotes, if any.
    pub event_slug: String,
}

impl EmailForm {
    /// Empties the content inputs after a successful send.
    pub fn clear_content(&mut self) {
        self.subject.clear();
        self.body.clear();
        self.html_body.clear();
    }
}

impl TryFrom<&EmailForm> for EmailDraft {
    type Error = FormError;

    fn try_from(form: &EmailForm) -> Result<Self, Self::Error> {
        let subject =
            EmailSubject::new(form.subject.as_str()).map_err(|_| FormError::MissingSubject)?;
        let body = EmailBody::new(form.body.as_str()).map_err(|_| FormError::MissingBody)?;

        EmailForm {
            subject: subject.as_str().to_string(),
            ..form.clone()
        }
        .validate()?;

        let html_body = Some(form.html_body.trim())
            .filter(|html| !html.is_empty())
            .map(ammonia::clean)
            .filter(|html| !html.trim().is_empty());

        let event_slug = match form.event_slug.trim() {
            "" => None,
            slug => Some(EventSlug::new(slug).map_err(|_| FormError::InvalidEventSlug)?),
        };

        Ok(Self {
            subject,
            body,
            html_body,
            event_slug,
        })
    }
}
