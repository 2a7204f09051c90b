use serde::Deserialize;

use crate::domain::event::EventSummary;
use crate::domain::types::{EventSlug, TypeConstraintError};

/// Event entry returned by the events listing endpoint.
#[derive(Clone, Debug, Deserialize)]
pub struct EventPayload {
    pub slug: String,
    #[serde(default)]
    pub title: String,
}

impl TryFrom<EventPayload> for EventSummary {
    type Error = TypeConstraintError;

    fn try_from(payload: EventPayload) -> Result<Self, Self::Error> {
        let slug = EventSlug::new(payload.slug)?;
        let title = match payload.title.trim() {
            "" => slug.to_string(),
            title => title.to_string(),
        };
        Ok(Self { slug, title })
    }
}
