use super::formatter::{format_datetime, format_due, format_minutes, format_status, format_stored};
use super::stats::{CompletionStatistics, DailyCompletion, OverallStatistics};
use super::task::{Task, UpcomingTask};
use anyhow::Result;
use prettytable::{format, row, Table};
use serde::Serialize;

pub struct View {}

impl View {
    /// Pretty-printed JSON on stdout, for the `--json` flags.
    pub fn json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
        println!("{}", serde_json::to_string_pretty(value)?);
        Ok(())
    }

    pub fn tasks(tasks: &[Task]) -> Result<()> {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.set_titles(row!["ID", "DESCRIPTION", "PRIORITY", "STATUS", "DUE", "CREATED"]);
        for task in tasks {
            table.add_row(row![
                task.id,
                task.description,
                task.priority,
                format_status(task),
                format_due(task),
                format_datetime(&task.created_at)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn task(task: &Task) -> Result<()> {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);

        table.add_row(row![b->"ID", task.id]);
        table.add_row(row![b->"Description", task.description]);
        table.add_row(row![b->"Priority", task.priority.label()]);
        table.add_row(row![b->"Status", format_status(task)]);
        table.add_row(row![b->"Due", format_due(task)]);
        table.add_row(row![b->"Created", format_stored(&task.created_at)]);
        table.add_row(row![b->"Updated", format_stored(&task.updated_at)]);
        table.printstd();

        Ok(())
    }

    pub fn upcoming(tasks: &[UpcomingTask]) -> Result<()> {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.set_titles(row!["ID", "DESCRIPTION", "PRIORITY", "DUE", "LEFT"]);
        for upcoming in tasks {
            table.add_row(row![
                upcoming.task.id,
                upcoming.task.description,
                upcoming.task.priority,
                format_due(&upcoming.task),
                r->format_minutes(upcoming.time_left_minutes)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn completion_statistics(stats: &CompletionStatistics) -> Result<()> {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.set_titles(row!["PRIORITY", "TOTAL", "COMPLETED", "PENDING", "RATE"]);
        for (_, priority) in stats.iter() {
            table.add_row(row![
                priority.label,
                r->priority.total,
                r->priority.completed,
                r->priority.pending,
                r->format!("{:.1}%", priority.completion_rate)
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn daily_completion(days: &[DailyCompletion]) -> Result<()> {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_BOX_CHARS);

        table.set_titles(row!["DATE", "HIGH", "MEDIUM", "LOW", "TOTAL"]);
        for day in days {
            table.add_row(row![day.date, r->day.high, r->day.medium, r->day.low, r->day.total]);
        }
        table.printstd();

        Ok(())
    }

    pub fn overall(stats: &OverallStatistics) -> Result<()> {
        let mut table = Table::new();
        table.set_format(*format::consts::FORMAT_CLEAN);

        table.add_row(row![b->"Total tasks", r->stats.total_tasks]);
        table.add_row(row![b->"Completed", r->stats.completed_tasks]);
        table.add_row(row![b->"Pending", r->stats.pending_tasks]);
        table.add_row(row![b->"Completed today", r->stats.today_completed]);
        table.add_row(row![b->"Added today", r->stats.today_added]);
        table.add_row(row![b->"Due within 24h", r->stats.upcoming_tasks]);
        table.add_row(row![b->"Completion rate", r->format!("{:.1}%", stats.overall_completion_rate)]);
        table.printstd();

        Ok(())
    }
}
