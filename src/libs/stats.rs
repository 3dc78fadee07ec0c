//! Completion statistics over the task collection.
//!
//! The store produces the raw counts with SQL aggregates; this module holds
//! the result types and the arithmetic shared by them.
//!
//! ## Completion rate
//!
//! ```text
//! Completion rate = completed / total * 100, rounded to one decimal
//! ```
//!
//! An empty group has a rate of `0.0` rather than being undefined.

use crate::libs::task::Priority;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;

/// Upper bound for the daily completion history.
pub const MAX_STATS_DAYS: u32 = 30;

/// Default length of the daily completion history.
pub const DEFAULT_STATS_DAYS: u32 = 7;

/// Percentage of `completed` in `total`, rounded to one decimal place.
pub fn completion_rate(completed: u64, total: u64) -> f64 {
    if total == 0 {
        return 0.0;
    }
    round1(completed as f64 / total as f64 * 100.0)
}

fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PriorityStats {
    pub label: String,
    pub total: u64,
    pub completed: u64,
    pub pending: u64,
    pub completion_rate: f64,
}

impl PriorityStats {
    pub fn new(priority: Priority, total: u64, completed: u64) -> Self {
        Self {
            label: priority.label().to_string(),
            total,
            completed,
            pending: total.saturating_sub(completed),
            completion_rate: completion_rate(completed, total),
        }
    }
}

/// Per-priority completion counts. Every priority is always present.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(transparent)]
pub struct CompletionStatistics(BTreeMap<Priority, PriorityStats>);

impl CompletionStatistics {
    /// Builds the full table from `(priority, total, completed)` rows, filling
    /// priorities without tasks with zeros.
    pub fn from_counts(rows: impl IntoIterator<Item = (Priority, u64, u64)>) -> Self {
        let mut stats: BTreeMap<Priority, PriorityStats> = rows
            .into_iter()
            .map(|(priority, total, completed)| (priority, PriorityStats::new(priority, total, completed)))
            .collect();
        for priority in Priority::ALL {
            stats.entry(priority).or_insert_with(|| PriorityStats::new(priority, 0, 0));
        }
        Self(stats)
    }

    pub fn get(&self, priority: Priority) -> &PriorityStats {
        // from_counts guarantees every key
        &self.0[&priority]
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&Priority, &PriorityStats)> {
        self.0.iter()
    }
}

/// Completions on a single calendar day, by priority.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCompletion {
    pub date: NaiveDate,
    pub high: u64,
    pub medium: u64,
    pub low: u64,
    pub total: u64,
}

impl DailyCompletion {
    pub fn empty(date: NaiveDate) -> Self {
        Self {
            date,
            high: 0,
            medium: 0,
            low: 0,
            total: 0,
        }
    }

    pub fn add(&mut self, priority: Priority, count: u64) {
        match priority {
            Priority::High => self.high += count,
            Priority::Medium => self.medium += count,
            Priority::Low => self.low += count,
        }
        self.total += count;
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OverallStatistics {
    pub total_tasks: u64,
    pub completed_tasks: u64,
    pub pending_tasks: u64,
    pub today_completed: u64,
    pub today_added: u64,
    pub upcoming_tasks: u64,
    pub overall_completion_rate: f64,
}
