//! Due-time reminders.
//!
//! A reminder pass takes one snapshot of the task set, picks the pending tasks
//! whose deadline falls inside the reminder window and hands one message per
//! task to a [`Notifier`]. The pass keeps no state between runs: a task stays
//! eligible on every pass while it is inside the window, and a reminder whose
//! delivery fails is simply not sent for that pass.
//!
//! The reminder window (30 minutes by default) is independent of the 24-hour
//! window used by [`crate::db::tasks::Tasks::upcoming`].

use crate::api::Notifier;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::task::{floor_minutes, Task};
use crate::{msg_debug, msg_warning};
use anyhow::Result;
use chrono::{NaiveDateTime, TimeDelta};

/// Default lookahead for actionable reminders.
pub const REMINDER_WINDOW_MINUTES: i64 = 30;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reminder {
    pub task_id: i64,
    pub description: String,
    /// Whole minutes until the deadline, rounded down.
    pub minutes_left: i64,
}

impl Reminder {
    /// Notification text sent to the recipient.
    pub fn text(&self) -> String {
        Message::ReminderText(self.description.clone(), self.minutes_left).to_string()
    }
}

/// Reminders due for `tasks` at `now` with the default 30-minute window.
pub fn evaluate(now: NaiveDateTime, tasks: &[Task]) -> Vec<Reminder> {
    evaluate_within(now, tasks, REMINDER_WINDOW_MINUTES)
}

/// Reminders for pending tasks with `0 < due - now <= window_minutes`.
///
/// Completed tasks and tasks without a readable due time are skipped.
pub fn evaluate_within(now: NaiveDateTime, tasks: &[Task], window_minutes: i64) -> Vec<Reminder> {
    let window = TimeDelta::minutes(window_minutes);
    tasks
        .iter()
        .filter_map(|task| {
            let time_left = task.time_left(now)?;
            (time_left > TimeDelta::zero() && time_left <= window).then(|| Reminder {
                task_id: task.id,
                description: task.description.clone(),
                minutes_left: floor_minutes(time_left),
            })
        })
        .collect()
}

/// Outcome of one reminder pass.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CycleReport {
    /// Tasks inside the reminder window.
    pub due: usize,
    pub sent: usize,
    pub failed: usize,
}

/// Runs reminder passes against a store and delivers through `N`.
pub struct ReminderEvaluator<N: Notifier> {
    notifier: N,
    recipient_id: String,
    window_minutes: i64,
}

impl<N: Notifier> ReminderEvaluator<N> {
    pub fn new(notifier: N, recipient_id: &str) -> Self {
        Self {
            notifier,
            recipient_id: recipient_id.to_string(),
            window_minutes: REMINDER_WINDOW_MINUTES,
        }
    }

    pub fn window_minutes(mut self, window_minutes: i64) -> Self {
        self.window_minutes = window_minutes;
        self
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    /// One pass: read all tasks once, evaluate, dispatch.
    ///
    /// Only a failure to read the task set is returned as an error. Delivery
    /// failures are logged and counted in the report, and the remaining
    /// reminders are still dispatched.
    pub async fn run_cycle(&self, tasks: &mut Tasks, now: NaiveDateTime) -> Result<CycleReport> {
        let snapshot = tasks.fetch_all()?;
        let reminders = evaluate_within(now, &snapshot, self.window_minutes);

        let mut report = CycleReport {
            due: reminders.len(),
            ..CycleReport::default()
        };

        for reminder in &reminders {
            match self.notifier.send(&self.recipient_id, &reminder.text()).await {
                Ok(()) => {
                    msg_debug!(Message::ReminderSent(reminder.task_id, reminder.minutes_left));
                    report.sent += 1;
                }
                Err(e) => {
                    msg_warning!(Message::ReminderSendFailed(reminder.task_id, e.to_string()));
                    report.failed += 1;
                }
            }
        }

        Ok(report)
    }
}
