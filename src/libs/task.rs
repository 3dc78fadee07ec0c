//! Task records and the value types used to create and edit them.
//!
//! Timestamps are stored as ISO-8601 text without a timezone, in local time.
//! `created_at` and `updated_at` are always written by the store and parse
//! strictly; `due_time` is kept as the raw stored text and parsed on demand,
//! so a malformed deadline never prevents a task from being listed.

use chrono::{NaiveDateTime, TimeDelta};
use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Format used when writing timestamps. `%.f` drops the fraction when it is zero.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.f";

/// Formats accepted when reading timestamps, from stored rows or user input.
const ACCEPTED_FORMATS: &[&str] = &[
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

pub fn format_timestamp(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}

/// Parses an ISO-8601 local timestamp, with or without seconds, using either
/// `T` or a space between date and time.
pub fn parse_timestamp(value: &str) -> Option<NaiveDateTime> {
    let value = value.trim();
    ACCEPTED_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(value, format).ok())
}

/// Whole minutes in `delta`, rounded toward negative infinity.
pub fn floor_minutes(delta: TimeDelta) -> i64 {
    delta.num_seconds().div_euclid(60)
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum TaskError {
    #[error("Task description must not be empty")]
    EmptyDescription,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::High, Priority::Medium, Priority::Low];

    /// Strict parse; `None` for anything but `high`, `medium` or `low`.
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "high" => Some(Priority::High),
            "medium" => Some(Priority::Medium),
            "low" => Some(Priority::Low),
            _ => None,
        }
    }

    /// Lenient parse used on task creation: unknown values become `Medium`.
    pub fn coerce(value: &str) -> Self {
        Self::parse(value).unwrap_or_default()
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }

    /// Fixed English display label (statistics and task views). Not localized.
    pub fn label(&self) -> &'static str {
        match self {
            Priority::High => "High priority",
            Priority::Medium => "Medium priority",
            Priority::Low => "Low priority",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Task {
    pub id: i64,
    pub description: String,
    pub priority: Priority,
    pub completed: bool,
    pub created_at: NaiveDateTime,
    pub updated_at: NaiveDateTime,
    /// Raw stored deadline, see [`Task::due_at`].
    pub due_time: Option<String>,
}

impl Task {
    /// The parsed deadline, or `None` when absent or unparsable.
    pub fn due_at(&self) -> Option<NaiveDateTime> {
        self.due_time.as_deref().and_then(parse_timestamp)
    }

    /// Time until the deadline for a pending task with a readable due time.
    pub fn time_left(&self, now: NaiveDateTime) -> Option<TimeDelta> {
        if self.completed {
            return None;
        }
        self.due_at().map(|due| due - now)
    }
}

/// Input for [`crate::db::tasks::Tasks::insert`].
#[derive(Debug, Clone)]
pub struct NewTask {
    pub description: String,
    pub priority: Priority,
    pub due_time: Option<NaiveDateTime>,
}

impl NewTask {
    pub fn new(description: &str) -> Self {
        Self {
            description: description.to_string(),
            priority: Priority::default(),
            due_time: None,
        }
    }

    /// Sets the priority from user text, falling back to `Medium`.
    pub fn priority(mut self, priority: &str) -> Self {
        self.priority = Priority::coerce(priority);
        self
    }

    pub fn due(mut self, due_time: NaiveDateTime) -> Self {
        self.due_time = Some(due_time);
        self
    }
}

/// What an edit does to the due time.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum DueTimeEdit {
    /// Not provided: the stored value stays.
    #[default]
    Keep,
    /// Provided as an empty string: the deadline is removed.
    Clear,
    /// Provided with a value: the deadline is replaced.
    Set(NaiveDateTime),
}

impl DueTimeEdit {
    /// Interprets raw user input. An unparsable value is treated as not
    /// provided.
    pub fn from_input(input: Option<&str>) -> Self {
        match input {
            None => DueTimeEdit::Keep,
            Some(value) if value.is_empty() => DueTimeEdit::Clear,
            Some(value) => parse_timestamp(value).map_or(DueTimeEdit::Keep, DueTimeEdit::Set),
        }
    }
}

/// Selective update for [`crate::db::tasks::Tasks::edit`].
///
/// `description` applies only when non-empty after trimming and `priority`
/// only when it names a valid level; both are ignored otherwise.
#[derive(Debug, Clone, Default)]
pub struct TaskEdit {
    pub description: Option<String>,
    pub priority: Option<String>,
    pub due_time: DueTimeEdit,
}

/// A pending task inside the upcoming window.
#[derive(Debug, Clone, Serialize)]
pub struct UpcomingTask {
    #[serde(flatten)]
    pub task: Task,
    pub time_left_minutes: i64,
}
