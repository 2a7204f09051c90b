//! Configuration model loaded from external sources.

use serde::Deserialize;

fn default_contacts_path() -> String {
    "/api/crm/users/".to_string()
}

fn default_events_path() -> String {
    "/api/crm/events/".to_string()
}

fn default_send_emails_path() -> String {
    "/api/crm/send-emails/".to_string()
}

fn default_csrf_header() -> String {
    "X-CSRFToken".to_string()
}

fn default_csrf_cookie_name() -> String {
    "csrftoken".to_string()
}

fn default_page_size() -> usize {
    10
}

#[derive(Clone, Debug, Deserialize)]
/// Endpoints and request settings used by the contacts client.
pub struct ClientConfig {
    /// Scheme and host of the CRM, e.g. `https://crm.example.com`.
    pub base_url: String,
    #[serde(default = "default_contacts_path")]
    pub contacts_path: String,
    #[serde(default = "default_events_path")]
    pub events_path: String,
    #[serde(default = "default_send_emails_path")]
    pub send_emails_path: String,
    /// Header carrying the CSRF token on state-changing requests.
    #[serde(default = "default_csrf_header")]
    pub csrf_header: String,
    /// Token copied from the page's hidden form field. Takes precedence over
    /// the cookie.
    #[serde(default)]
    pub csrf_token: Option<String>,
    /// Cookie consulted when no explicit token is configured.
    #[serde(default = "default_csrf_cookie_name")]
    pub csrf_cookie_name: String,
    /// `Set-Cookie` style values seeded into the cookie jar at startup.
    #[serde(default)]
    pub cookies: Vec<String>,
    #[serde(default = "default_page_size")]
    pub default_page_size: usize,
}

impl ClientConfig {
    /// Joins the base URL with an endpoint path.
    pub fn endpoint(&self, path: &str) -> String {
        format!(
            "{}/{}",
            self.base_url.trim_end_matches('/'),
            path.trim_start_matches('/')
        )
    }

    pub fn contacts_url(&self) -> String {
        self.endpoint(&self.contacts_path)
    }

    pub fn events_url(&self) -> String {
        self.endpoint(&self.events_path)
    }

    pub fn send_emails_url(&self) -> String {
        self.endpoint(&self.send_emails_path)
    }
}
