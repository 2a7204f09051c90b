//! `reqwest`-backed implementation of the repository traits.

use std::sync::Arc;

use async_trait::async_trait;
use reqwest::cookie::{CookieStore, Jar};
use reqwest::header::{ACCEPT, REFERER};
use reqwest::{Client, Response, Url};
use serde::de::DeserializeOwned;

use crate::domain::email::{EmailDispatchOutcome, EmailDispatchRequest};
use crate::domain::event::EventSummary;
use crate::domain::types::PageSize;
use crate::models::config::ClientConfig;
use crate::models::contact::{ContactsPage, ContactsPageResponse, ListContactsParams};
use crate::models::email::SendEmailsResponse;
use crate::models::error::extract_error_message;
use crate::models::event::EventPayload;
use crate::repository::csrf::resolve_csrf_token;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{ContactReader, EmailDispatcher, EventReader};

/// Talks to the CRM REST API over HTTP.
#[derive(Clone)]
pub struct HttpRepository {
    client: Client,
    jar: Arc<Jar>,
    base_url: Url,
    config: ClientConfig,
}

impl HttpRepository {
    /// Builds the HTTP client and seeds the cookie jar from the configuration.
    ///
    /// Rejects an unparsable `base_url` and a zero `default_page_size`.
    pub fn new(config: ClientConfig) -> RepositoryResult<Self> {
        let base_url = Url::parse(&config.base_url).map_err(|e| {
            RepositoryError::ValidationError(format!("Invalid base_url {}: {e}", config.base_url))
        })?;
        PageSize::new(config.default_page_size)?;

        let jar = Arc::new(Jar::default());
        for cookie in &config.cookies {
            jar.add_cookie_str(cookie, &base_url);
        }

        let client = Client::builder().cookie_provider(jar.clone()).build()?;

        Ok(Self {
            client,
            jar,
            base_url,
            config,
        })
    }

    fn csrf_token(&self) -> Option<String> {
        let cookies = self.jar.cookies(&self.base_url);
        let cookie_header = cookies.as_ref().and_then(|value| value.to_str().ok());
        resolve_csrf_token(
            self.config.csrf_token.as_deref(),
            cookie_header,
            &self.config.csrf_cookie_name,
        )
    }
}

/// Reads the body and either decodes it or turns it into a server error.
async fn decode<T: DeserializeOwned>(response: Response) -> RepositoryResult<T> {
    let status = response.status();
    let url = response.url().clone();
    let body = response.text().await?;

    if !status.is_success() {
        let message = extract_error_message(&body);
        log::error!("Request to {url} failed with {status}: {message}");
        return Err(RepositoryError::Server {
            status: status.as_u16(),
            message,
        });
    }

    serde_json::from_str(&body).map_err(|err| {
        log::error!("Failed to decode response from {url}: {err}");
        RepositoryError::from(err)
    })
}

#[async_trait]
impl ContactReader for HttpRepository {
    async fn list_contacts(&self, params: &ListContactsParams) -> RepositoryResult<ContactsPage> {
        let url = format!("{}?{}", self.config.contacts_url(), params.to_query_string()?);
        log::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await
            .map_err(|err| {
                log::error!("Failed to fetch contacts: {err}");
                RepositoryError::from(err)
            })?;

        let page: ContactsPageResponse = decode(response).await?;
        Ok(page.into())
    }
}

#[async_trait]
impl EventReader for HttpRepository {
    async fn list_events(&self) -> RepositoryResult<Vec<EventSummary>> {
        let url = self.config.events_url();
        log::debug!("GET {url}");

        let response = self
            .client
            .get(&url)
            .header(ACCEPT, "application/json")
            .send()
            .await?;

        let payloads: Vec<EventPayload> = decode(response).await?;

        Ok(payloads
            .into_iter()
            .filter_map(|payload| {
                let slug = payload.slug.clone();
                EventSummary::try_from(payload)
                    .map_err(|err| log::warn!("Skipping event {slug:?}: {err}"))
                    .ok()
            })
            .collect())
    }
}

#[async_trait]
impl EmailDispatcher for HttpRepository {
    async fn send_emails(
        &self,
        request: &EmailDispatchRequest,
    ) -> RepositoryResult<EmailDispatchOutcome> {
        let token = self.csrf_token().ok_or(RepositoryError::MissingCsrfToken)?;
        let url = self.config.send_emails_url();
        log::info!(
            "POST {url} (subject {:?}, {} filters)",
            request.subject.as_str(),
            request.filters.len()
        );

        let response = self
            .client
            .post(&url)
            .header(ACCEPT, "application/json")
            .header(REFERER, self.base_url.as_str())
            .header(self.config.csrf_header.as_str(), token)
            .json(request)
            .send()
            .await
            .map_err(|err| {
                log::error!("Failed to dispatch emails: {err}");
                RepositoryError::from(err)
            })?;

        let ack: SendEmailsResponse = decode(response).await?;
        Ok(ack.into())
    }
}
