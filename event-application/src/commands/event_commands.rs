use tracing::{error, info};

use crate::dtos::{CreateEventRequest, NewMediaRequest, NewTaskRequest, TaskStatusUpdate};
use crate::{AppError, AppState};
use event_domain::{Account, Event, EventId, Media, MediaId, Money, Task, TaskId, TaskStatus};

pub async fn create_event(
    state: &AppState,
    request: CreateEventRequest,
) -> Result<EventId, AppError> {
    let name = request.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::BadRequest("name is required".to_string()));
    }

    let mut event = Event::new(name);
    if let Some(description) = normalize_optional_text(request.description) {
        event.description = description;
    }
    if let Some(value) = request.event_type {
        event.set_type(value)?;
    }
    if let Some(value) = request.progress_type {
        event.set_progress_type(value)?;
    }
    if let Some(progress) = request.progress {
        event.progress = progress;
    }
    if let Some(start) = request.start {
        event.start = start;
    }
    if let Some(end) = request.end {
        event.end = end;
    }
    if let Some(costs) = parse_money(request.costs)? {
        event.costs = costs;
    }
    if let Some(budget) = parse_money(request.budget)? {
        event.budget = budget;
    }
    if let Some(earnings) = parse_money(request.earnings)? {
        event.earnings = earnings;
    }
    event.created_by = account_ref(request.created_by);
    for title in request.tasks {
        let title = title.trim();
        if title.is_empty() {
            continue;
        }
        let mut task = Task::new(title);
        task.created_by = event.created_by.clone();
        event.add_task(task);
    }

    let id = state.event_repo.create(&mut event).await.map_err(|err| {
        error!("failed to create event: {}", err);
        AppError::Internal(err)
    })?;
    info!(
        event_id = %id,
        event_type = %event.event_type(),
        tasks = event.count_tasks(),
        "event created"
    );
    Ok(id)
}

pub async fn add_task(
    state: &AppState,
    event_id: EventId,
    request: NewTaskRequest,
) -> Result<TaskId, AppError> {
    let title = request.title.trim().to_string();
    if title.is_empty() {
        return Err(AppError::BadRequest("title is required".to_string()));
    }
    let mut event = load_event(state, event_id).await?;

    let mut task = Task::new(title);
    if let Some(description) = normalize_optional_text(request.description) {
        task.description = description;
    }
    task.created_by = account_ref(request.created_by);
    event.add_task(task);

    save_event(state, &mut event).await?;
    // Positional tasks get ids on save; the new task is the last entry.
    let task_id = event
        .tasks()
        .iter()
        .last()
        .map(|task| task.id)
        .unwrap_or(TaskId::UNASSIGNED);
    info!(event_id = %event_id, task_id = %task_id, "task added");
    Ok(task_id)
}

pub async fn update_task_status(
    state: &AppState,
    event_id: EventId,
    update: TaskStatusUpdate,
) -> Result<(), AppError> {
    let status = TaskStatus::try_from(update.status)?;
    let task_id = TaskId(update.task_id);
    let mut event = load_event(state, event_id).await?;
    let task = event.find_task_mut(task_id).ok_or_else(|| {
        AppError::NotFound(format!("task {} in event {}", task_id, event_id))
    })?;
    task.status = status;

    save_event(state, &mut event).await?;
    info!(event_id = %event_id, task_id = %task_id, status = %status, "task status updated");
    Ok(())
}

pub async fn add_media(
    state: &AppState,
    event_id: EventId,
    request: NewMediaRequest,
) -> Result<MediaId, AppError> {
    let name = request.name.trim().to_string();
    if name.is_empty() {
        return Err(AppError::BadRequest("media name is required".to_string()));
    }
    let mut event = load_event(state, event_id).await?;

    let mut media = Media::new(name);
    if let Some(path) = normalize_optional_text(request.path) {
        media.set_path(path);
    }
    if let Some(description) = normalize_optional_text(request.description) {
        media.description = description;
    }
    media.size = request.size.unwrap_or_default();
    media.created_by = account_ref(request.created_by);
    event.add_media(media);

    save_event(state, &mut event).await?;
    let media_id = event
        .media()
        .last()
        .map(|media| media.id)
        .unwrap_or(MediaId::UNASSIGNED);
    info!(event_id = %event_id, media_id = %media_id, "media added");
    Ok(media_id)
}

async fn load_event(state: &AppState, event_id: EventId) -> Result<Event, AppError> {
    state
        .event_repo
        .get(event_id)
        .await
        .map_err(|err| {
            error!("failed to load event {}: {}", event_id, err);
            AppError::Internal(err)
        })?
        .ok_or_else(|| AppError::NotFound(format!("event {}", event_id)))
}

async fn save_event(state: &AppState, event: &mut Event) -> Result<(), AppError> {
    state.event_repo.update(event).await.map_err(|err| {
        error!("failed to update event {}: {}", event.id(), err);
        AppError::Internal(err)
    })
}

fn parse_money(value: Option<String>) -> Result<Option<Money>, AppError> {
    match normalize_optional_text(value) {
        Some(raw) => Ok(Some(raw.parse::<Money>()?)),
        None => Ok(None),
    }
}

fn account_ref(id: Option<u64>) -> Account {
    match id {
        Some(id) if id > 0 => Account::reference(id),
        _ => Account::null(),
    }
}

fn normalize_optional_text(value: Option<String>) -> Option<String> {
    match value {
        Some(raw) => {
            let trimmed = raw.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        }
        None => None,
    }
}
