//! Text for every [`Message`].
//!
//! All user-facing wording lives in this one `match`, so changing a message
//! or translating the application touches a single file. Variants carry the
//! values they interpolate.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task #{} created", id),
            Message::TaskCompleted(id) => format!("Task #{} marked as completed", id),
            Message::TaskNotCompleted(id) => format!("Task #{} was not found or is already completed", id),
            Message::TaskDeleted(id) => format!("Task #{} deleted", id),
            Message::TaskUpdated(id) => format!("Task #{} updated", id),
            Message::TaskNotUpdated(id) => format!("Task #{} was not updated: not found or nothing to change", id),
            Message::TaskNotFoundWithId(id) => format!("Task with ID {} not found.", id),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::NoTasksFound => "No tasks yet. Add one with `todobell add`.".to_string(),
            Message::ConfirmDeleteTask(description) => format!("Delete task '{}'?", description),
            Message::InvalidDueTime(value) => {
                format!("Could not read due time '{}', expected YYYY-MM-DD HH:MM", value)
            }
            Message::PriorityFallback(value) => format!("Unknown priority '{}', using medium", value),
            Message::PriorityIgnored(value) => format!("Unknown priority '{}', keeping the current one", value),

            // === UPCOMING & STATISTICS MESSAGES ===
            Message::UpcomingHeader => "Due within the next 24 hours:".to_string(),
            Message::NoUpcomingTasks => "Nothing due within the next 24 hours.".to_string(),
            Message::CompletionStatsHeader => "Completion by priority".to_string(),
            Message::DailyStatsHeader(days) => format!("Completed per day, last {} day(s)", days),
            Message::DailyStatsClamped(requested, max) => {
                format!("{} days requested, showing the maximum of {}", requested, max)
            }
            Message::OverallStatsHeader => "Overview".to_string(),

            // === REMINDER MESSAGES ===
            Message::ReminderText(description, minutes) => {
                format!("⏰ Reminder: task \"{}\" is due in {} minute(s)!", description, minutes)
            }
            Message::ReminderSent(id, minutes) => format!("Reminder for task #{} sent ({} min left)", id, minutes),
            Message::ReminderSendFailed(id, error) => format!("Failed to send reminder for task #{}: {}", id, error),
            Message::ReminderCycleCompleted(due, sent, failed) => {
                format!("Reminder pass finished: {} due, {} sent, {} failed", due, sent, failed)
            }
            Message::ReminderCycleFailed(error) => format!("Reminder pass failed: {}", error),
            Message::RemindersDispatched(sent, due) => format!("Sent {} of {} reminder(s)", sent, due),
            Message::NoRemindersDue => "No reminders due right now.".to_string(),
            Message::TelegramNotConfigured => {
                "Telegram is not configured. Run `todobell init` or set TODOBELL_TELEGRAM_TOKEN and TODOBELL_TELEGRAM_CHAT_ID."
                    .to_string()
            }

            // === WATCHER MESSAGES ===
            Message::WatcherStarted(interval) => format!("Watching for due tasks every {}s. Press Ctrl+C to stop.", interval),
            Message::WatcherShuttingDown => "Watcher shutting down...".to_string(),
            Message::WatcherReceivedSigterm => "Received SIGTERM".to_string(),
            Message::WatcherReceivedSigint => "Received SIGINT".to_string(),
            Message::WatcherReceivedCtrlC => "Received Ctrl+C".to_string(),
            Message::WatcherSignalHandlerFailed(error) => format!("Failed to install signal handler: {}", error),
            Message::WatcherCtrlCListenFailed(error) => format!("Unable to listen for Ctrl+C: {}", error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleTelegram => "Telegram settings".to_string(),
            Message::ConfigModuleReminder => "Reminder settings".to_string(),
            Message::ConfigModuleDatabase => "Database settings".to_string(),
            Message::PromptSelectModules => "Select sections to configure".to_string(),
            Message::PromptTelegramToken => "Enter your Telegram bot token".to_string(),
            Message::PromptTelegramChatId => "Enter the chat ID that receives reminders".to_string(),
            Message::PromptReminderInterval => "Check interval (seconds)".to_string(),
            Message::PromptReminderWindow => "Remind this many minutes before the due time".to_string(),
            Message::PromptDatabasePath => "Database file path (empty for default)".to_string(),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled.".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending database migrations", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("✓ Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("✗ Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All database migrations completed successfully".to_string(),
            Message::DatabaseVersion(version) => format!("Current database version: {}", version),
            Message::DatabaseUpToDate => "Database schema is up to date".to_string(),
            Message::DatabaseNeedsUpdate => "Database schema needs to be updated".to_string(),
            Message::MigrationHistory => "Migration history:".to_string(),
            Message::MigrationHistoryEntry(version, name, applied_at) => {
                format!("  v{}: {} (applied: {})", version, name, applied_at)
            }
            Message::PendingMigration(version, name) => format!("  v{}: {} (pending)", version, name),
            Message::NothingToRollback => "Nothing to rollback".to_string(),
            Message::RollingBack(from, to) => format!("Rolling back from v{} to v{}", from, to),
            Message::RollbackCompleted(version) => format!("Rollback to v{} completed", version),
        };

        write!(f, "{}", text)
    }
}
