use anyhow::Result;
use chrono::{DateTime, Utc};
use clap::{Parser, Subcommand};
use serde_json::{json, Value};
use tracing::debug;

use event_application::commands::event_commands;
use event_application::dtos::{
    CreateEventRequest, NewMediaRequest, NewTaskRequest, NewestQuery, TaskStatusUpdate,
};
use event_application::queries::event_queries;
use event_application::{AppState, EventOperation};
use event_domain::{EventId, EventType, ProgressType, TaskStatus};
use event_infrastructure::parse_date;

#[derive(Parser, Debug)]
#[command(name = "eventmanagement")]
#[command(about = "Manage events, their tasks and media", long_about = None)]
pub struct Args {
    /// Path to config file
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the most recently created events
    List {
        #[arg(short, long)]
        limit: Option<usize>,
    },
    /// Create an event
    Create {
        #[arg(long)]
        name: String,
        #[arg(long)]
        description: Option<String>,
        /// Event type name or code, e.g. SEMINAR or 7
        #[arg(long = "type")]
        event_type: Option<EventType>,
        /// Progress type name or code, e.g. TASKS or 4
        #[arg(long)]
        progress_type: Option<ProgressType>,
        #[arg(long, allow_negative_numbers = true)]
        progress: Option<i32>,
        /// YYYY-MM-DD or RFC 3339
        #[arg(long, value_parser = parse_date_arg)]
        start: Option<DateTime<Utc>>,
        /// YYYY-MM-DD or RFC 3339
        #[arg(long, value_parser = parse_date_arg)]
        end: Option<DateTime<Utc>>,
        #[arg(long)]
        costs: Option<String>,
        #[arg(long)]
        budget: Option<String>,
        #[arg(long)]
        earnings: Option<String>,
        #[arg(long)]
        created_by: Option<u64>,
        /// Task title; repeat for several tasks
        #[arg(long = "task")]
        tasks: Vec<String>,
    },
    /// Show one event with tasks, media and derived progress
    Profile { id: u64 },
    /// Add a task to an event
    AddTask {
        event_id: u64,
        #[arg(long)]
        title: String,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        created_by: Option<u64>,
    },
    /// Change the status of a task
    TaskStatus {
        event_id: u64,
        task_id: u64,
        status: TaskStatus,
    },
    /// Attach media to an event
    AddMedia {
        event_id: u64,
        #[arg(long)]
        name: String,
        #[arg(long)]
        path: Option<String>,
        #[arg(long)]
        description: Option<String>,
        #[arg(long)]
        size: Option<u64>,
        #[arg(long)]
        created_by: Option<u64>,
    },
}

impl Command {
    pub fn operation(&self) -> EventOperation {
        match self {
            Command::List { .. } => EventOperation::List,
            Command::Create { .. } => EventOperation::Create,
            Command::Profile { .. } => EventOperation::Profile,
            Command::AddTask { .. } => EventOperation::AddTask,
            Command::TaskStatus { .. } => EventOperation::UpdateTask,
            Command::AddMedia { .. } => EventOperation::AddMedia,
        }
    }
}

pub async fn execute(state: &AppState, command: Command) -> Result<Value> {
    let operation = command.operation();
    debug!(
        operation = ?operation,
        permission = ?operation.required_permission(),
        "executing command"
    );

    let output = match command {
        Command::List { limit } => {
            let events =
                event_queries::list_newest_events(state, NewestQuery { limit }).await?;
            serde_json::to_value(events)?
        }
        Command::Create {
            name,
            description,
            event_type,
            progress_type,
            progress,
            start,
            end,
            costs,
            budget,
            earnings,
            created_by,
            tasks,
        } => {
            let request = CreateEventRequest {
                name,
                description,
                event_type: event_type.map(|kind| kind.as_i64()),
                progress_type: progress_type.map(|kind| kind.as_i64()),
                progress,
                start,
                end,
                costs,
                budget,
                earnings,
                created_by,
                tasks,
            };
            let id = event_commands::create_event(state, request).await?;
            json!({ "id": id.0 })
        }
        Command::Profile { id } => {
            let profile = event_queries::get_event_profile(state, EventId(id)).await?;
            serde_json::to_value(profile)?
        }
        Command::AddTask {
            event_id,
            title,
            description,
            created_by,
        } => {
            let request = NewTaskRequest {
                title,
                description,
                created_by,
            };
            let task_id = event_commands::add_task(state, EventId(event_id), request).await?;
            json!({ "event_id": event_id, "task_id": task_id.0 })
        }
        Command::TaskStatus {
            event_id,
            task_id,
            status,
        } => {
            let update = TaskStatusUpdate {
                task_id,
                status: status.as_i64(),
            };
            event_commands::update_task_status(state, EventId(event_id), update).await?;
            json!({ "event_id": event_id, "task_id": task_id, "status": status.as_str() })
        }
        Command::AddMedia {
            event_id,
            name,
            path,
            description,
            size,
            created_by,
        } => {
            let request = NewMediaRequest {
                name,
                path,
                description,
                size,
                created_by,
            };
            let media_id = event_commands::add_media(state, EventId(event_id), request).await?;
            json!({ "event_id": event_id, "media_id": media_id.0 })
        }
    };
    Ok(output)
}

fn parse_date_arg(value: &str) -> Result<DateTime<Utc>, String> {
    parse_date(value).map_err(|err| err.to_string())
}
