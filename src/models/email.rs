//! Wire models for the bulk email endpoint.

use serde::Deserialize;

use crate::domain::email::EmailDispatchOutcome;

/// Body of a 2xx response from the send-emails endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct SendEmailsResponse {
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub recipients_count: Option<usize>,
    #[serde(default)]
    pub sent_count: Option<usize>,
}

impl From<SendEmailsResponse> for EmailDispatchOutcome {
    fn from(response: SendEmailsResponse) -> Self {
        let message = response
            .message
            .map(|m| m.trim().to_string())
            .filter(|m| !m.is_empty())
            .unwrap_or_else(|| match response.status.as_deref() {
                Some("success") => "Emails sent.".to_string(),
                _ => "No emails were sent.".to_string(),
            });

        Self {
            status: response.status,
            message,
            recipients_count: response.recipients_count,
            sent_count: response.sent_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_success_acknowledgement() {
        let response: SendEmailsResponse =
            serde_json::from_str(r#"{"status": "success", "message": "Sent to 12 recipients"}"#)
                .unwrap();

        let outcome = EmailDispatchOutcome::from(response);

        assert!(outcome.is_success());
        assert_eq!(outcome.message, "Sent to 12 recipients");
    }

    #[test]
    fn message_only_response_is_not_a_success() {
        let response: SendEmailsResponse = serde_json::from_str(
            r#"{"message": "No users found matching the filter criteria. No emails sent."}"#,
        )
        .unwrap();

        let outcome = EmailDispatchOutcome::from(response);

        assert!(!outcome.is_success());
        assert_eq!(
            outcome.message,
            "No users found matching the filter criteria. No emails sent."
        );
    }

    #[test]
    fn counters_are_carried_over() {
        let response: SendEmailsResponse = serde_json::from_str(
            r#"{"status": "success", "message": "ok", "recipients_count": 3, "sent_count": 2}"#,
        )
        .unwrap();

        let outcome = EmailDispatchOutcome::from(response);

        assert_eq!(outcome.recipients_count, Some(3));
        assert_eq!(outcome.sent_count, Some(2));
    }
}
