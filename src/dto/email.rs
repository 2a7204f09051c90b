//! View data for the bulk email panel.

use serde::Serialize;

use crate::domain::event::EventSummary;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusLevel {
    Info,
    Success,
    Error,
}

/// Feedback shown in the panel's status area.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Info,
            text: text.into(),
        }
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Success,
            text: text.into(),
        }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self {
            level: StatusLevel::Error,
            text: text.into(),
        }
    }
}

/// Entry of the target-event selector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EventOption {
    /// Slug submitted with the email; empty for "no event".
    pub value: String,
    pub label: String,
}

/// Selector entries with a leading "no event" choice.
pub fn event_options(events: &[EventSummary]) -> Vec<EventOption> {
    std::iter::once(EventOption {
        value: String::new(),
        label: "No event".to_string(),
    })
    .chain(events.iter().map(|event| EventOption {
        value: event.slug.to_string(),
        label: event.title.clone(),
    }))
    .collect()
}
