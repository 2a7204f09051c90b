//! In-memory stand-in for the CRM API shared by the integration tests.
#![allow(dead_code)]

use std::collections::VecDeque;
use std::sync::Mutex;

use async_trait::async_trait;
use crm_contacts::domain::email::{EmailDispatchOutcome, EmailDispatchRequest};
use crm_contacts::domain::event::EventSummary;
use crm_contacts::models::contact::{ContactsPage, ContactsPageResponse, ListContactsParams};
use crm_contacts::models::email::SendEmailsResponse;
use crm_contacts::models::error::extract_error_message;
use crm_contacts::repository::errors::{RepositoryError, RepositoryResult};
use crm_contacts::repository::{ContactReader, EmailDispatcher, EventReader};

/// Replays canned JSON bodies and records every request it receives.
#[derive(Default)]
pub struct FakeCrm {
    contact_replies: Mutex<VecDeque<(u16, String)>>,
    email_replies: Mutex<VecDeque<(u16, String)>>,
    pub contact_requests: Mutex<Vec<String>>,
    pub email_requests: Mutex<Vec<serde_json::Value>>,
}

impl FakeCrm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reply_contacts(&self, status: u16, body: serde_json::Value) {
        self.contact_replies
            .lock()
            .unwrap()
            .push_back((status, body.to_string()));
    }

    pub fn reply_email(&self, status: u16, body: serde_json::Value) {
        self.email_replies
            .lock()
            .unwrap()
            .push_back((status, body.to_string()));
    }

    pub fn contact_queries(&self) -> Vec<String> {
        self.contact_requests.lock().unwrap().clone()
    }

    pub fn email_payloads(&self) -> Vec<serde_json::Value> {
        self.email_requests.lock().unwrap().clone()
    }
}

fn respond<T: serde::de::DeserializeOwned>(reply: Option<(u16, String)>) -> RepositoryResult<T> {
    let (status, body) =
        reply.ok_or_else(|| RepositoryError::Transport("connection refused".into()))?;
    if !(200..300).contains(&status) {
        return Err(RepositoryError::Server {
            status,
            message: extract_error_message(&body),
        });
    }
    Ok(serde_json::from_str(&body)?)
}

#[async_trait]
impl ContactReader for FakeCrm {
    async fn list_contacts(&self, params: &ListContactsParams) -> RepositoryResult<ContactsPage> {
        self.contact_requests
            .lock()
            .unwrap()
            .push(params.to_query_string()?);
        let reply = self.contact_replies.lock().unwrap().pop_front();
        let page: ContactsPageResponse = respond(reply)?;
        Ok(page.into())
    }
}

#[async_trait]
impl EventReader for FakeCrm {
    async fn list_events(&self) -> RepositoryResult<Vec<EventSummary>> {
        Ok(Vec::new())
    }
}

#[async_trait]
impl EmailDispatcher for FakeCrm {
    async fn send_emails(
        &self,
        request: &EmailDispatchRequest,
    ) -> RepositoryResult<EmailDispatchOutcome> {
        self.email_requests
            .lock()
            .unwrap()
            .push(serde_json::to_value(request)?);
        let reply = self.email_replies.lock().unwrap().pop_front();
        let ack: SendEmailsResponse = respond(reply)?;
        Ok(ack.into())
    }
}

/// Listing body with `rows` generic contacts out of `count`.
pub fn contacts_body(count: usize, rows: usize, next: bool, previous: bool) -> serde_json::Value {
    let results: Vec<_> = (0..rows)
        .map(|i| {
            serde_json::json!({
                "id": i + 1,
                "username": format!("user{i}"),
                "email": format!("user{i}@example.com"),
                "company": "Acme",
                "city": "Austin",
                "state": "TX",
                "total_hosting_events": 1,
                "total_attended_events": 3,
                "date_joined": "2024-01-15T09:30:00Z",
            })
        })
        .collect();
    serde_json::json!({
        "count": count,
        "next": next.then_some("http://crm/api/crm/users/?page=2"),
        "previous": previous.then_some("http://crm/api/crm/users/?page=1"),
        "results": results,
    })
}
