//! Data-access seams between the services and the CRM API.

use async_trait::async_trait;

use crate::domain::email::{EmailDispatchOutcome, EmailDispatchRequest};
use crate::domain::event::EventSummary;
use crate::models::contact::{ContactsPage, ListContactsParams};
use crate::repository::errors::RepositoryResult;

pub mod csrf;
pub mod errors;
#[cfg(feature = "client")]
pub mod http;
#[cfg(any(test, feature = "test-mocks"))]
pub mod mock;

#[cfg(feature = "client")]
pub use http::HttpRepository;

#[async_trait]
pub trait ContactReader {
    async fn list_contacts(&self, params: &ListContactsParams) -> RepositoryResult<ContactsPage>;
}

#[async_trait]
pub trait EventReader {
    async fn list_events(&self) -> RepositoryResult<Vec<EventSummary>>;
}

#[async_trait]
pub trait EmailDispatcher {
    async fn send_emails(
        &self,
        request: &EmailDispatchRequest,
    ) -> RepositoryResult<EmailDispatchOutcome>;
}
