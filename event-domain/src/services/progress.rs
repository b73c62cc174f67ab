// Progress derivation
// Pure functions of the schedule, the clock and the task list.

use chrono::{DateTime, Utc};

use crate::entities::TaskList;
use crate::value_objects::ProgressType;

#[derive(Debug, Clone, Copy)]
pub struct ProgressContext<'a> {
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
    pub now: DateTime<Utc>,
    pub tasks: &'a TaskList,
}

/// Derived completion in percent, or `None` for manual progress where the
/// stored value is authoritative.
pub fn derive_progress(kind: ProgressType, context: &ProgressContext<'_>) -> Option<u8> {
    match kind {
        ProgressType::Manual => None,
        ProgressType::Linear => Some(schedule_progress(context, |t| t)),
        ProgressType::Exponential => Some(schedule_progress(context, exponential_ease)),
        ProgressType::Log => Some(schedule_progress(context, logarithmic_ease)),
        ProgressType::Tasks => Some(task_progress(context.tasks)),
    }
}

/// Share of the schedule already elapsed at `now`, clamped to [0, 1].
/// `None` when the window is empty or inverted.
pub fn elapsed_fraction(
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    now: DateTime<Utc>,
) -> Option<f64> {
    let total = (end - start).num_milliseconds();
    if total <= 0 {
        return None;
    }
    let elapsed = (now - start).num_milliseconds();
    Some((elapsed as f64 / total as f64).clamp(0.0, 1.0))
}

pub fn task_progress(tasks: &TaskList) -> u8 {
    if tasks.is_empty() {
        return 0;
    }
    to_percent(tasks.completed() as f64 / tasks.len() as f64)
}

// Slow start, fast finish. f(0) = 0, f(1) = 1.
fn exponential_ease(t: f64) -> f64 {
    (10f64.powf(t) - 1.0) / 9.0
}

// Fast start, slow finish. Inverse of the exponential curve.
fn logarithmic_ease(t: f64) -> f64 {
    (1.0 + 9.0 * t).log10()
}

fn schedule_progress(context: &ProgressContext<'_>, ease: impl Fn(f64) -> f64) -> u8 {
    match elapsed_fraction(context.start, context.end, context.now) {
        Some(t) => to_percent(ease(t)),
        None => 0,
    }
}

fn to_percent(fraction: f64) -> u8 {
    (fraction.clamp(0.0, 1.0) * 100.0).round() as u8
}
