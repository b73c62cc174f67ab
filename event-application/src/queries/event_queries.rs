use chrono::Utc;
use tracing::{debug, error};

use crate::dtos::{EventProfile, EventSummary, NewestQuery};
use crate::{AppError, AppState};
use event_domain::EventId;

pub async fn list_newest_events(
    state: &AppState,
    query: NewestQuery,
) -> Result<Vec<EventSummary>, AppError> {
    let limit = query.limit.unwrap_or(state.config.newest_limit).clamp(1, 200);
    let events = state.event_repo.get_newest(limit).await.map_err(|err| {
        error!("failed to fetch newest events: {}", err);
        AppError::Internal(err)
    })?;
    debug!(limit, count = events.len(), "fetched newest events");
    let now = Utc::now();
    Ok(events
        .iter()
        .map(|event| EventSummary::from_event(event, now))
        .collect())
}

pub async fn get_event_profile(
    state: &AppState,
    event_id: EventId,
) -> Result<EventProfile, AppError> {
    let event = state
        .event_repo
        .get(event_id)
        .await
        .map_err(|err| {
            error!("failed to fetch event {}: {}", event_id, err);
            AppError::Internal(err)
        })?
        .ok_or_else(|| AppError::NotFound(format!("event {}", event_id)))?;
    Ok(EventProfile::from_event(&event, Utc::now()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::event_commands::create_event;
    use crate::dtos::CreateEventRequest;
    use crate::test_support::state_with_memory_repo;

    fn request(name: &str) -> CreateEventRequest {
        CreateEventRequest {
            name: name.to_string(),
            ..CreateEventRequest::default()
        }
    }

    #[tokio::test]
    async fn newest_events_come_first() {
        let state = state_with_memory_repo();
        for name in ["first", "second", "third"] {
            create_event(&state, request(name)).await.expect("create");
        }

        let newest = list_newest_events(&state, NewestQuery { limit: Some(1) })
            .await
            .expect("newest");
        assert_eq!(newest.len(), 1);
        assert_eq!(newest[0].name, "third");

        let all = list_newest_events(&state, NewestQuery::default())
            .await
            .expect("all");
        let names: Vec<_> = all.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["third", "second", "first"]);
    }

    #[tokio::test]
    async fn zero_limit_is_raised_to_one() {
        let state = state_with_memory_repo();
        create_event(&state, request("only")).await.expect("create");
        let newest = list_newest_events(&state, NewestQuery { limit: Some(0) })
            .await
            .expect("newest");
        assert_eq!(newest.len(), 1);
    }

    #[tokio::test]
    async fn profile_reports_stored_and_effective_progress() {
        let state = state_with_memory_repo();
        let id = create_event(
            &state,
            CreateEventRequest {
                progress: Some(11),
                progress_type: Some(4),
                tasks: vec!["a".to_string(), "b".to_string()],
                ..request("Eventname")
            },
        )
        .await
        .expect("create");

        let profile = get_event_profile(&state, id).await.expect("profile");
        assert_eq!(profile.summary.name, "Eventname");
        assert_eq!(profile.summary.progress, 11);
        assert_eq!(profile.summary.progress_type, "TASKS");
        assert_eq!(profile.summary.effective_progress, 0);
        assert_eq!(profile.tasks.len(), 2);
        assert_eq!(profile.created_by, "unknown");
    }

    #[tokio::test]
    async fn missing_profile_is_not_found() {
        let state = state_with_memory_repo();
        let err = get_event_profile(&state, EventId(7))
            .await
            .expect_err("missing");
        assert!(matches!(err, AppError::NotFound(_)));
    }
}
