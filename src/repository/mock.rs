//! Mock repository implementations for isolating services in tests.

use async_trait::async_trait;
use mockall::mock;

use crate::domain::email::{EmailDispatchOutcome, EmailDispatchRequest};
use crate::domain::event::EventSummary;
use crate::models::contact::{ContactsPage, ListContactsParams};
use crate::repository::errors::RepositoryResult;
use crate::repository::{ContactReader, EmailDispatcher, EventReader};

mock! {
    pub Repository {}

    #[async_trait]
    impl ContactReader for Repository {
        async fn list_contacts(&self, params: &ListContactsParams) -> RepositoryResult<ContactsPage>;
    }

    #[async_trait]
    impl EventReader for Repository {
        async fn list_events(&self) -> RepositoryResult<Vec<EventSummary>>;
    }

    #[async_trait]
    impl EmailDispatcher for Repository {
        async fn send_emails(
            &self,
            request: &EmailDispatchRequest,
        ) -> RepositoryResult<EmailDispatchOutcome>;
    }
}
