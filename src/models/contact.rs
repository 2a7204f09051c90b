//! Wire models for the contacts listing endpoint.

use chrono::DateTime;
use serde::{Deserialize, Serialize};

use crate::domain::contact::ContactRecord;
use crate::domain::filter::FilterSet;
use crate::domain::page::PageMetadata;
use crate::domain::query::QueryState;
use crate::domain::types::{ContactId, Ordering, PageSize, SearchTerm};

/// Query string sent to the contacts endpoint.
///
/// Filters come first so the encoded string reads
/// `company=Acme&page=1&page_size=10&ordering=username`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ListContactsParams {
    #[serde(flatten)]
    pub filters: FilterSet,
    pub page: usize,
    pub page_size: PageSize,
    pub ordering: Ordering,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub search: Option<SearchTerm>,
}

impl ListContactsParams {
    /// URL-encodes the parameters.
    pub fn to_query_string(&self) -> Result<String, serde_html_form::ser::Error> {
        serde_html_form::to_string(self)
    }
}

impl From<&QueryState> for ListContactsParams {
    fn from(state: &QueryState) -> Self {
        Self {
            filters: state.filters().clone(),
            page: state.page(),
            page_size: state.page_size(),
            ordering: state.ordering().clone(),
            search: state.search().cloned(),
        }
    }
}

/// Contact as serialized by the API.
#[derive(Clone, Debug, Deserialize, Default)]
#[serde(default)]
pub struct ContactPayload {
    pub id: Option<i32>,
    pub username: Option<String>,
    pub email: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub gender: Option<String>,
    pub job_title: Option<String>,
    pub company: Option<String>,
    pub city: Option<String>,
    pub state: Option<String>,
    pub total_owned_events: Option<u32>,
    pub total_hosting_events: Option<u32>,
    #[serde(alias = "total_attended_events")]
    pub total_registered_events: Option<u32>,
    pub date_joined: Option<String>,
}

/// One page of the paginated listing.
#[derive(Clone, Debug, Deserialize)]
pub struct ContactsPageResponse {
    #[serde(default)]
    pub results: Vec<ContactPayload>,
    pub count: usize,
    pub next: Option<String>,
    pub previous: Option<String>,
}

/// Contacts of one page together with the paging metadata.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactsPage {
    pub contacts: Vec<ContactRecord>,
    pub metadata: PageMetadata,
}

fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
}

impl From<ContactPayload> for ContactRecord {
    fn from(payload: ContactPayload) -> Self {
        let date_joined = payload.date_joined.as_deref().and_then(|raw| {
            DateTime::parse_from_rfc3339(raw)
                .map_err(|err| log::warn!("Ignoring unparsable date_joined {raw:?}: {err}"))
                .ok()
        });

        Self {
            id: payload.id.and_then(|id| ContactId::new(id).ok()),
            username: non_blank(payload.username),
            email: non_blank(payload.email),
            first_name: non_blank(payload.first_name),
            last_name: non_blank(payload.last_name),
            phone_number: non_blank(payload.phone_number),
            gender: non_blank(payload.gender),
            job_title: non_blank(payload.job_title),
            company: non_blank(payload.company),
            city: non_blank(payload.city),
            state: non_blank(payload.state),
            total_owned_events: payload.total_owned_events,
            total_hosting_events: payload.total_hosting_events,
            total_registered_events: payload.total_registered_events,
            date_joined,
        }
    }
}

impl From<ContactsPageResponse> for ContactsPage {
    fn from(response: ContactsPageResponse) -> Self {
        Self {
            metadata: PageMetadata {
                count: response.count,
                has_next: response.next.is_some_and(|url| !url.is_empty()),
                has_previous: response.previous.is_some_and(|url| !url.is_empty()),
            },
            contacts: response.results.into_iter().map(Into::into).collect(),
        }
    }
}
