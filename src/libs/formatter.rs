//! Display formatting for table cells.
//!
//! ```rust
//! use todobell::libs::formatter::format_minutes;
//!
//! assert_eq!(format_minutes(90), "01:30");
//! assert_eq!(format_minutes(-5), "00:00");
//! ```

use crate::libs::task::{Task, TIMESTAMP_FORMAT};
use chrono::NaiveDateTime;

const DISPLAY_FORMAT: &str = "%Y-%m-%d %H:%M";

/// Minutes as `HH:MM`; negative values show as `00:00`.
pub fn format_minutes(minutes: i64) -> String {
    let minutes = minutes.max(0);
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

pub fn format_datetime(ts: &NaiveDateTime) -> String {
    ts.format(DISPLAY_FORMAT).to_string()
}

/// Due column of a task: formatted deadline, the raw text when it cannot be
/// read, or `-` when there is none.
pub fn format_due(task: &Task) -> String {
    match (task.due_at(), task.due_time.as_deref()) {
        (Some(due), _) => format_datetime(&due),
        (None, Some(raw)) if !raw.trim().is_empty() => format!("{} (?)", raw),
        _ => "-".to_string(),
    }
}

/// Status column.
pub fn format_status(task: &Task) -> &'static str {
    if task.completed {
        "done"
    } else {
        "pending"
    }
}

/// Full-precision timestamp as stored, used by `show`.
pub fn format_stored(ts: &NaiveDateTime) -> String {
    ts.format(TIMESTAMP_FORMAT).to_string()
}
