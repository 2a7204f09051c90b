//! View data for the contacts table.

use serde::Serialize;

use crate::pagination::PaginationView;

/// One rendered table row. Every cell is plain display text.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct ContactRow {
    pub username: String,
    pub email: String,
    pub company: String,
    pub job_title: String,
    /// `"city, state"`.
    pub location: String,
    pub hosting_events: String,
    pub registered_events: String,
    pub date_joined: String,
}

/// Mutually exclusive states of the table body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "state", content = "data", rename_all = "snake_case")]
pub enum TableBody {
    Loading,
    Error(String),
    Empty,
    Populated(Vec<ContactRow>),
}

impl TableBody {
    pub fn is_loading(&self) -> bool {
        matches!(self, TableBody::Loading)
    }

    /// Whether the "no results" indicator is visible.
    pub fn shows_no_results(&self) -> bool {
        matches!(self, TableBody::Empty)
    }

    pub fn error_text(&self) -> Option<&str> {
        match self {
            TableBody::Error(text) => Some(text),
            _ => None,
        }
    }

    pub fn rows(&self) -> &[ContactRow] {
        match self {
            TableBody::Populated(rows) => rows,
            _ => &[],
        }
    }
}

/// Everything the front end needs to draw the table.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct TableView {
    pub body: TableBody,
    pub pagination: PaginationView,
}
