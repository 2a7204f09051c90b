//! Turns fetched contacts, or a failed fetch, into table content.
//!
//! Rows carry plain display text; escaping belongs to whatever emits markup.

use crate::domain::contact::ContactRecord;
use crate::dto::contacts::{ContactRow, TableBody};
use crate::repository::errors::RepositoryError;

/// Placeholder for a field the record does not carry.
pub const NOT_AVAILABLE: &str = "N/A";

/// Trimmed cell text, or [`NOT_AVAILABLE`] when nothing is left.
fn text_or_na(value: Option<&str>) -> String {
    value
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn count_or_na(value: Option<u32>) -> String {
    value.map_or_else(|| NOT_AVAILABLE.to_string(), |n| n.to_string())
}

pub fn render_row(contact: &ContactRecord) -> ContactRow {
    ContactRow {
        username: text_or_na(contact.username.as_deref()),
        email: text_or_na(contact.email.as_deref()),
        company: text_or_na(contact.company.as_deref()),
        job_title: text_or_na(contact.job_title.as_deref()),
        location: format!(
            "{}, {}",
            text_or_na(contact.city.as_deref()),
            text_or_na(contact.state.as_deref())
        ),
        hosting_events: count_or_na(contact.total_hosting_events),
        registered_events: count_or_na(contact.total_registered_events),
        date_joined: contact
            .date_joined
            .map_or_else(|| NOT_AVAILABLE.to_string(), |d| d.format("%Y-%m-%d").to_string()),
    }
}

/// Rows for a page of results, or the empty state when there are none.
pub fn render_rows(contacts: &[ContactRecord]) -> TableBody {
    if contacts.is_empty() {
        TableBody::Empty
    } else {
        TableBody::Populated(contacts.iter().map(render_row).collect())
    }
}

/// Error banner replacing the rows after a failed fetch.
pub fn render_error(err: &RepositoryError) -> TableBody {
    TableBody::Error(format!("Error: {}", err.user_message()))
}

#[cfg(test)]
mod tests {
    use chrono::DateTime;

    use super::*;
    use crate::models::error::GENERIC_ERROR_MESSAGE;

    #[test]
    fn no_results_renders_empty_state() {
        let body = render_rows(&[]);
        assert!(body.shows_no_results());
        assert!(body.rows().is_empty());
    }

    #[test]
    fn missing_fields_fall_back_to_na() {
        let contact = ContactRecord {
            username: Some("ada".into()),
            email: Some("ada@example.com".into()),
            city: Some("London".into()),
            total_hosting_events: Some(2),
            ..Default::default()
        };

        let row = render_row(&contact);

        assert_eq!(row.username, "ada");
        assert_eq!(row.company, "N/A");
        assert_eq!(row.job_title, "N/A");
        assert_eq!(row.location, "London, N/A");
        assert_eq!(row.hosting_events, "2");
        assert_eq!(row.registered_events, "N/A");
        assert_eq!(row.date_joined, "N/A");
    }

    #[test]
    fn join_date_is_shown_as_calendar_date() {
        let contact = ContactRecord {
            date_joined: DateTime::parse_from_rfc3339("2024-03-05T10:15:00+07:00").ok(),
            ..Default::default()
        };
        assert_eq!(render_row(&contact).date_joined, "2024-03-05");
    }

    #[test]
    fn cell_text_is_kept_verbatim() {
        let contact = ContactRecord {
            company: Some("AT&T".into()),
            job_title: Some(" R&D <Lead> ".into()),
            ..Default::default()
        };
        let row = render_row(&contact);
        assert_eq!(row.company, "AT&T");
        assert_eq!(row.job_title, "R&D <Lead>");
    }

    #[test]
    fn one_row_per_record() {
        let contacts = vec![ContactRecord::default(), ContactRecord::default()];
        assert_eq!(render_rows(&contacts).rows().len(), 2);
    }

    #[test]
    fn server_error_is_prefixed_and_hides_no_results() {
        let body = render_error(&RepositoryError::Server {
            status: 500,
            message: "Internal error".into(),
        });
        assert_eq!(body.error_text(), Some("Error: Internal error"));
        assert!(!body.shows_no_results());
    }

    #[test]
    fn server_message_is_not_escaped() {
        let body = render_error(&RepositoryError::Server {
            status: 400,
            message: "company: Use \"A & B\" <short> names".into(),
        });
        assert_eq!(
            body.error_text(),
            Some("Error: company: Use \"A & B\" <short> names")
        );
    }

    #[test]
    fn transport_error_uses_generic_text() {
        let body = render_error(&RepositoryError::Transport("timed out".into()));
        assert_eq!(
            body.error_text().map(str::to_string),
            Some(format!("Error: {GENERIC_ERROR_MESSAGE}"))
        );
    }
}
