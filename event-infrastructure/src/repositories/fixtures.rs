use event_domain::{
    Account, Event, EventRepository, EventType, Media, Money, ProgressType, Task, TaskId,
};

use crate::utils::parse_date;

pub(crate) fn seminar_event() -> Event {
    let mut event = Event::new("Eventname");
    event.set_type(EventType::Seminar.as_i64()).expect("seminar");
    event.description = "Event description".to_string();
    event.created_by = Account::reference(1u64);
    event.start = parse_date("2000-05-05").expect("start");
    event.end = parse_date("2005-05-05").expect("end");

    let money: Money = "1.23".parse().expect("money");
    event.costs = money;
    event.budget = money;
    event.earnings = money;

    for title in ["EventTask 1", "EventTask 2"] {
        let mut task = Task::new(title);
        task.created_by = Account::reference(1u64);
        event.add_task(task);
    }

    event.progress = 11;
    event
        .set_progress_type(ProgressType::Tasks.as_i64())
        .expect("tasks");

    let mut media = Media::new("Event Media");
    media.created_by = Account::reference(1u64);
    media.description = "desc".to_string();
    media.set_path("some/path");
    media.size = 11;
    media.extension = "png".to_string();
    event.add_media(media);
    event
}

/// Creates the seminar event, reads it back and compares what the gateway
/// promises to keep.
pub(crate) async fn assert_round_trip(repo: &dyn EventRepository) {
    let mut event = seminar_event();
    let id = repo.create(&mut event).await.expect("create");
    assert!(event.id().0 > 0);
    assert_eq!(id, event.id());

    let loaded = repo.get(id).await.expect("get").expect("stored event");
    assert_eq!(loaded.name, event.name);
    assert_eq!(loaded.description, event.description);
    assert_eq!(loaded.count_tasks(), event.count_tasks());
    assert_eq!(loaded.count_tasks(), 2);
    assert_eq!(
        loaded.start.format("%Y-%m-%d").to_string(),
        event.start.format("%Y-%m-%d").to_string()
    );
    assert_eq!(
        loaded.end.format("%Y-%m-%d").to_string(),
        event.end.format("%Y-%m-%d").to_string()
    );
    assert_eq!(loaded.costs.amount(), event.costs.amount());
    assert_eq!(loaded.budget.amount(), event.budget.amount());
    assert_eq!(loaded.earnings.amount(), event.earnings.amount());
    assert_eq!(loaded.progress, 11);
    assert_eq!(loaded.progress_type(), ProgressType::Tasks);
    assert_eq!(loaded.event_type(), EventType::Seminar);
    assert_eq!(
        loaded.media().last().map(|m| m.name.clone()),
        event.media().last().map(|m| m.name.clone())
    );
    assert_eq!(loaded.created_at(), event.created_at());
    assert!(loaded.tasks().iter().all(|task| task.id.is_assigned()));
}

/// Creates an event mixing a task that already carries an id with one that
/// does not, then checks both come back under distinct ids.
pub(crate) async fn assert_mixed_task_ids_survive(repo: &dyn EventRepository) {
    let mut event = Event::new("Mixed");
    event.add_task(Task::with_id(1u64, "explicit"));
    event.add_task(Task::new("positional"));
    let id = repo.create(&mut event).await.expect("create");

    let loaded = repo.get(id).await.expect("get").expect("stored event");
    assert_eq!(loaded.count_tasks(), 2);
    assert_eq!(loaded.task(TaskId(1)).title, "explicit");
    let positional = loaded
        .tasks()
        .iter()
        .find(|task| task.title == "positional")
        .expect("positional task");
    assert!(positional.id.is_assigned());
    assert_ne!(positional.id, TaskId(1));

    let mut reloaded = loaded;
    reloaded.add_task(Task::new("later"));
    repo.update(&mut reloaded).await.expect("update");
    let stored = repo.get(id).await.expect("get").expect("stored event");
    assert_eq!(stored.count_tasks(), 3);
    assert_eq!(stored.task(TaskId(1)).title, "explicit");
}
