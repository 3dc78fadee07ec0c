#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(i64),
    TaskCompleted(i64),
    TaskNotCompleted(i64),
    TaskDeleted(i64),
    TaskUpdated(i64),
    TaskNotUpdated(i64),
    TaskNotFoundWithId(i64),
    TasksHeader,
    NoTasksFound,
    ConfirmDeleteTask(String),
    InvalidDueTime(String),
    PriorityFallback(String),
    PriorityIgnored(String),

    // === UPCOMING & STATISTICS MESSAGES ===
    UpcomingHeader,
    NoUpcomingTasks,
    CompletionStatsHeader,
    DailyStatsHeader(u32),
    DailyStatsClamped(u32, u32),
    OverallStatsHeader,

    // === REMINDER MESSAGES ===
    ReminderText(String, i64),
    ReminderSent(i64, i64),
    ReminderSendFailed(i64, String),
    ReminderCycleCompleted(usize, usize, usize),
    ReminderCycleFailed(String),
    RemindersDispatched(usize, usize),
    NoRemindersDue,
    TelegramNotConfigured,

    // === WATCHER MESSAGES ===
    WatcherStarted(u64),
    WatcherShuttingDown,
    WatcherReceivedSigterm,
    WatcherReceivedSigint,
    WatcherReceivedCtrlC,
    WatcherSignalHandlerFailed(String),
    WatcherCtrlCListenFailed(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleTelegram,
    ConfigModuleReminder,
    ConfigModuleDatabase,
    PromptSelectModules,
    PromptTelegramToken,
    PromptTelegramChatId,
    PromptReminderInterval,
    PromptReminderWindow,
    PromptDatabasePath,

    // === GENERAL MESSAGES ===
    OperationCancelled,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    DatabaseVersion(u32),
    DatabaseUpToDate,
    DatabaseNeedsUpdate,
    MigrationHistory,
    MigrationHistoryEntry(u32, String, String),
    PendingMigration(u32, String),
    NothingToRollback,
    RollingBack(u32, u32),
    RollbackCompleted(u32),
}
