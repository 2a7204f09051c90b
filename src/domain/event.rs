use serde::Serialize;

use crate::domain::types::EventSlug;

/// Event offered in the optional target-event selector.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct EventSummary {
    pub slug: EventSlug,
    pub title: String,
}
