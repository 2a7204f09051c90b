use crate::domain::event::EventSummary;
use crate::repository::EventReader;
use crate::services::ServiceResult;

/// Loads the events offered in the target-event selector.
pub async fn load_events<R>(repo: &R) -> ServiceResult<Vec<EventSummary>>
where
    R: EventReader + ?Sized,
{
    let events = repo.list_events().await.map_err(|e| {
        log::error!("Failed to list events: {e}");
        e
    })?;

    log::debug!("Loaded {} events", events.len());

    Ok(events)
}
