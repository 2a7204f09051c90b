use serde::Serialize;

use crate::domain::filter::FilterSet;
use crate::domain::query::QueryState;
use crate::domain::types::{EmailBody, EmailSubject, EventSlug, Ordering, SearchTerm};

/// Validated email content entered by the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailDraft {
    pub subject: EmailSubject,
    pub body: EmailBody,
    pub html_body: Option<String>,
    pub event_slug: Option<EventSlug>,
}

/// Bulk email request scoped by the applied listing criteria.
///
/// Recipients are implicit: every contact matching `filters` and `search`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EmailDispatchRequest {
    pub subject: EmailSubject,
    pub body: EmailBody,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub html_body: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub event_slug: Option<EventSlug>,
    #[serde(flatten)]
    pub filters: FilterSet,
    pub ordering: Ordering,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchTerm>,
}

impl EmailDispatchRequest {
    /// Merges the draft with a snapshot of the applied query state.
    pub fn new(draft: EmailDraft, query: &QueryState) -> Self {
        Self {
            subject: draft.subject,
            body: draft.body,
            html_body: draft.html_body,
            event_slug: draft.event_slug,
            filters: query.filters().clone(),
            ordering: query.ordering().clone(),
            search: query.search().cloned(),
        }
    }
}

/// Server acknowledgement of a dispatch request.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EmailDispatchOutcome {
    pub status: Option<String>,
    pub message: String,
    pub recipients_count: Option<usize>,
    pub sent_count: Option<usize>,
}

impl EmailDispatchOutcome {
    /// Only an explicit `"success"` status counts as a completed send.
    pub fn is_success(&self) -> bool {
        self.status.as_deref() == Some("success")
    }
}
