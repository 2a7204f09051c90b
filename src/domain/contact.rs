use chrono::{DateTime, FixedOffset};
use serde::Serialize;

use crate::domain::types::ContactId;

/// Contact as shown in the listing table.
///
/// Read-only: the controller never edits contacts, it only displays the
/// server's view of them.
#[derive(Clone, Debug, Serialize, PartialEq, Default)]
pub struct ContactRecord {
    pub id: Option<ContactId>,
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
    pub total_registered_events: Option<u32>,
    pub date_joined: Option<DateTime<FixedOffset>>,
}

impl ContactRecord {
    /// Full name assembled from the first and last name, if any is present.
    pub fn full_name(&self) -> Option<String> {
        let parts: Vec<&str> = [self.first_name.as_deref(), self.last_name.as_deref()]
            .into_iter()
            .flatten()
            .map(str::trim)
            .filter(|part| !part.is_empty())
            .collect();

        if parts.is_empty() {
            None
        } else {
            Some(parts.join(" "))
        }
    }
}
