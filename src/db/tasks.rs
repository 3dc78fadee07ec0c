//! Task persistence and the statistics computed over it.
//!
//! [`Tasks`] is the single owner of task records. It holds one connection
//! and a [`Clock`]; each method runs its statements and returns, nothing is
//! cached between calls.
//!
//! Missing ids are reported through the return value (`false` or `None`),
//! never as errors. Invalid priorities are coerced or ignored and unreadable
//! due times are skipped by the temporal queries. Only storage failures and
//! an empty description on insert come back as `Err`.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todobell::db::{db::Db, tasks::Tasks};
//! use todobell::libs::task::NewTask;
//!
//! let mut tasks = Tasks::new(Db::new()?);
//! let id = tasks.insert(&NewTask::new("Buy milk").priority("high"))?;
//! assert!(tasks.complete(id)?);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::db::db::Db;
use crate::libs::clock::{Clock, SystemClock};
use crate::libs::stats::{CompletionStatistics, DailyCompletion, OverallStatistics, MAX_STATS_DAYS};
use crate::libs::task::{
    floor_minutes, format_timestamp, parse_timestamp, DueTimeEdit, NewTask, Priority, Task, TaskEdit, TaskError, UpcomingTask,
};
use crate::msg_debug;
use anyhow::Result;
use chrono::{Days, NaiveDate, NaiveDateTime, TimeDelta};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSqlOutput, Type, Value, ValueRef};
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row, ToSql};
use std::collections::BTreeMap;

const TASK_COLUMNS: &str = "id, description, priority, completed, created_at, updated_at, due_time";
const INSERT_TASK: &str =
    "INSERT INTO tasks (description, priority, completed, created_at, updated_at, due_time) VALUES (?1, ?2, 0, ?3, ?3, ?4)";
const COMPLETE_TASK: &str = "UPDATE tasks SET completed = 1, updated_at = ?2 WHERE id = ?1 AND completed = 0";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const SELECT_PRIORITY_COUNTS: &str = "SELECT priority, COUNT(*), COALESCE(SUM(completed), 0) FROM tasks GROUP BY priority";
const SELECT_DAILY_COMPLETIONS: &str = "SELECT DATE(updated_at) AS completion_date, priority, COUNT(*)
    FROM tasks
    WHERE completed = 1 AND DATE(updated_at) BETWEEN ?1 AND ?2
    GROUP BY completion_date, priority";
const COUNT_TASKS: &str = "SELECT COUNT(*), COALESCE(SUM(completed), 0) FROM tasks";
const COUNT_COMPLETED_ON: &str = "SELECT COUNT(*) FROM tasks WHERE completed = 1 AND DATE(updated_at) = ?1";
const COUNT_ADDED_ON: &str = "SELECT COUNT(*) FROM tasks WHERE DATE(created_at) = ?1";

const DATE_FORMAT: &str = "%Y-%m-%d";

/// Lookahead of the informational upcoming list.
pub const UPCOMING_WINDOW_MINUTES: i64 = 24 * 60;

impl ToSql for Priority {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for Priority {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        let text = value.as_str()?;
        Priority::parse(text).ok_or_else(|| FromSqlError::Other(format!("unknown priority '{}'", text).into()))
    }
}

fn timestamp_column(row: &Row, idx: usize) -> rusqlite::Result<NaiveDateTime> {
    let text: String = row.get(idx)?;
    parse_timestamp(&text)
        .ok_or_else(|| rusqlite::Error::FromSqlConversionFailure(idx, Type::Text, format!("invalid timestamp '{}'", text).into()))
}

fn task_from_row(row: &Row) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        description: row.get(1)?,
        priority: row.get(2)?,
        completed: row.get(3)?,
        created_at: timestamp_column(row, 4)?,
        updated_at: timestamp_column(row, 5)?,
        due_time: row.get(6)?,
    })
}

pub struct Tasks {
    conn: Connection,
    clock: Box<dyn Clock>,
}

impl Tasks {
    /// Store on top of `db`, using the local wall clock.
    pub fn new(db: Db) -> Self {
        Self::with_clock(db, SystemClock)
    }

    pub fn with_clock<C: Clock + 'static>(db: Db, clock: C) -> Self {
        Self {
            conn: db.conn,
            clock: Box::new(clock),
        }
    }

    pub fn now(&self) -> NaiveDateTime {
        self.clock.now()
    }

    /// Creates a task and returns its id.
    ///
    /// `created_at` and `updated_at` are both set to the current time.
    pub fn insert(&mut self, task: &NewTask) -> Result<i64> {
        if task.description.trim().is_empty() {
            return Err(TaskError::EmptyDescription.into());
        }

        let now = format_timestamp(&self.clock.now());
        let due_time = task.due_time.as_ref().map(format_timestamp);
        self.conn.execute(INSERT_TASK, params![task.description, task.priority, now, due_time])?;

        let id = self.conn.last_insert_rowid();
        msg_debug!(format!("Task {} created with {} priority", id, task.priority));
        Ok(id)
    }

    /// All tasks in primary key order.
    pub fn fetch_all(&mut self) -> Result<Vec<Task>> {
        let mut stmt = self.conn.prepare(&format!("SELECT {} FROM tasks ORDER BY id", TASK_COLUMNS))?;
        let task_iter = stmt.query_map([], task_from_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Task>> {
        self.conn
            .query_row(&format!("SELECT {} FROM tasks WHERE id = ?1", TASK_COLUMNS), params![id], task_from_row)
            .optional()
            .map_err(Into::into)
    }

    /// Marks a pending task as completed.
    ///
    /// Returns `false` when the task does not exist or is already completed;
    /// the `completed = 0` guard makes the transition happen at most once.
    pub fn complete(&mut self, id: i64) -> Result<bool> {
        let now = format_timestamp(&self.clock.now());
        let affected = self.conn.execute(COMPLETE_TASK, params![id, now])?;
        if affected > 0 {
            msg_debug!(format!("Task {} completed", id));
        }
        Ok(affected > 0)
    }

    /// Hard-deletes a task. Returns `true` iff a row was removed.
    pub fn delete(&mut self, id: i64) -> Result<bool> {
        let affected = self.conn.execute(DELETE_TASK, params![id])?;
        if affected > 0 {
            msg_debug!(format!("Task {} deleted", id));
        }
        Ok(affected > 0)
    }

    /// Applies the applicable parts of `edit`.
    ///
    /// Returns `false` without writing when nothing in `edit` applies or the
    /// task does not exist. Otherwise the fields and `updated_at` are written
    /// in one statement.
    pub fn edit(&mut self, id: i64, edit: &TaskEdit) -> Result<bool> {
        let mut assignments: Vec<&str> = Vec::new();
        let mut values: Vec<Value> = Vec::new();

        if let Some(description) = edit.description.as_deref().map(str::trim).filter(|d| !d.is_empty()) {
            assignments.push("description = ?");
            values.push(Value::Text(description.to_string()));
        }

        if let Some(priority) = edit.priority.as_deref().and_then(Priority::parse) {
            assignments.push("priority = ?");
            values.push(Value::Text(priority.as_str().to_string()));
        }

        match &edit.due_time {
            DueTimeEdit::Keep => {}
            DueTimeEdit::Clear => assignments.push("due_time = NULL"),
            DueTimeEdit::Set(due_time) => {
                assignments.push("due_time = ?");
                values.push(Value::Text(format_timestamp(due_time)));
            }
        }

        if assignments.is_empty() {
            return Ok(false);
        }

        assignments.push("updated_at = ?");
        values.push(Value::Text(format_timestamp(&self.clock.now())));
        values.push(Value::Integer(id));

        let query = format!("UPDATE tasks SET {} WHERE id = ?", assignments.join(", "));
        let affected = self.conn.execute(&query, params_from_iter(values.iter()))?;
        if affected > 0 {
            msg_debug!(format!("Task {} edited ({} fields)", id, assignments.len() - 1));
        }
        Ok(affected > 0)
    }

    /// Pending tasks due within the next 24 hours, relative to `now`.
    ///
    /// A task qualifies when `0 < due - now <= 24h`. Tasks whose due time
    /// cannot be parsed are skipped.
    pub fn upcoming(&mut self, now: NaiveDateTime) -> Result<Vec<UpcomingTask>> {
        let window = TimeDelta::minutes(UPCOMING_WINDOW_MINUTES);
        let upcoming = self
            .fetch_all()?
            .into_iter()
            .filter_map(|task| {
                let time_left = task.time_left(now)?;
                (time_left > TimeDelta::zero() && time_left <= window).then(|| UpcomingTask {
                    time_left_minutes: floor_minutes(time_left),
                    task,
                })
            })
            .collect();
        Ok(upcoming)
    }

    /// Completion counts per priority; all three priorities are present.
    pub fn completion_statistics(&mut self) -> Result<CompletionStatistics> {
        let mut stmt = self.conn.prepare(SELECT_PRIORITY_COUNTS)?;
        let rows = stmt.query_map([], |row| Ok((row.get::<_, Priority>(0)?, row.get::<_, u64>(1)?, row.get::<_, u64>(2)?)))?;

        let mut counts = Vec::new();
        for row in rows {
            counts.push(row?);
        }
        Ok(CompletionStatistics::from_counts(counts))
    }

    /// Completions per calendar day for the last `days` days, today included,
    /// oldest first. `days` is clamped to [`MAX_STATS_DAYS`].
    pub fn daily_completion_stats(&mut self, days: u32) -> Result<Vec<DailyCompletion>> {
        let days = days.min(MAX_STATS_DAYS);
        if days == 0 {
            return Ok(Vec::new());
        }

        let today = self.clock.today();
        let first_day = today - Days::new(u64::from(days - 1));

        let mut daily: BTreeMap<NaiveDate, DailyCompletion> = first_day
            .iter_days()
            .take(days as usize)
            .map(|date| (date, DailyCompletion::empty(date)))
            .collect();

        let mut stmt = self.conn.prepare(SELECT_DAILY_COMPLETIONS)?;
        let rows = stmt.query_map(
            params![first_day.format(DATE_FORMAT).to_string(), today.format(DATE_FORMAT).to_string()],
            |row| Ok((row.get::<_, String>(0)?, row.get::<_, Priority>(1)?, row.get::<_, u64>(2)?)),
        )?;

        for row in rows {
            let (date, priority, count) = row?;
            let Ok(date) = NaiveDate::parse_from_str(&date, DATE_FORMAT) else {
                continue;
            };
            if let Some(day) = daily.get_mut(&date) {
                day.add(priority, count);
            }
        }

        Ok(daily.into_values().collect())
    }

    /// Headline numbers across all tasks.
    pub fn overall_statistics(&mut self) -> Result<OverallStatistics> {
        let now = self.clock.now();
        let today = now.date().format(DATE_FORMAT).to_string();

        let (total_tasks, completed_tasks): (u64, u64) = self.conn.query_row(COUNT_TASKS, [], |row| Ok((row.get(0)?, row.get(1)?)))?;
        let today_completed: u64 = self.conn.query_row(COUNT_COMPLETED_ON, params![today], |row| row.get(0))?;
        let today_added: u64 = self.conn.query_row(COUNT_ADDED_ON, params![today], |row| row.get(0))?;
        let upcoming_tasks = self.upcoming(now)?.len() as u64;

        Ok(OverallStatistics {
            total_tasks,
            completed_tasks,
            pending_tasks: total_tasks - completed_tasks,
            today_completed,
            today_added,
            upcoming_tasks,
            overall_completion_rate: crate::libs::stats::completion_rate(completed_tasks, total_tasks),
        })
    }
}
