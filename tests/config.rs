#[cfg(test)]
mod tests {
    use std::sync::{Mutex, MutexGuard};
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};
    use todobell::db::db::Db;
    use todobell::libs::config::{
        Config, DatabaseConfig, ReminderConfig, TelegramConfig, CONFIG_FILE_NAME, TELEGRAM_CHAT_ID_ENV, TELEGRAM_TOKEN_ENV,
    };
    use todobell::libs::data_storage::DataStorage;

    // Tests in this file share HOME and the Telegram variables
    static ENV_LOCK: Mutex<()> = Mutex::new(());

    struct ConfigTestContext {
        _guard: MutexGuard<'static, ()>,
        temp_dir: TempDir,
    }

    impl TestContext for ConfigTestContext {
        fn setup() -> Self {
            let guard = ENV_LOCK.lock().unwrap_or_else(|e| e.into_inner());
            let temp_dir = tempfile::tempdir().unwrap();
            std::env::set_var("HOME", temp_dir.path());
            std::env::set_var("LOCALAPPDATA", temp_dir.path());
            std::env::remove_var(TELEGRAM_TOKEN_ENV);
            std::env::remove_var(TELEGRAM_CHAT_ID_ENV);
            ConfigTestContext { _guard: guard, temp_dir }
        }
    }

    fn telegram(token: &str, chat_id: &str) -> TelegramConfig {
        TelegramConfig {
            bot_token: token.to_string(),
            chat_id: chat_id.to_string(),
        }
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_read_without_file_returns_default(_ctx: &mut ConfigTestContext) {
        let config = Config::read().unwrap();
        assert_eq!(config, Config::default());
        assert_eq!(config.reminder.unwrap_or_default(), ReminderConfig::default());
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_save_and_read_back(_ctx: &mut ConfigTestContext) {
        let config = Config {
            telegram: Some(telegram("123:ABC", "42")),
            reminder: Some(ReminderConfig {
                interval_secs: 30,
                window_minutes: 15,
            }),
            database: None,
        };
        config.save().unwrap();

        assert_eq!(Config::read().unwrap(), config);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_unset_sections_are_omitted(ctx: &mut ConfigTestContext) {
        let config = Config {
            reminder: Some(ReminderConfig::default()),
            ..Config::default()
        };
        config.save().unwrap();

        let path = DataStorage::new().get_path(CONFIG_FILE_NAME).unwrap();
        assert!(path.starts_with(ctx.temp_dir.path()));

        let raw = std::fs::read_to_string(path).unwrap();
        assert!(raw.contains("\"interval_secs\": 60"));
        assert!(!raw.contains("telegram"));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_environment_overrides_stored_credentials(_ctx: &mut ConfigTestContext) {
        let config = Config {
            telegram: Some(telegram("stored-token", "stored-chat")),
            ..Config::default()
        };
        assert_eq!(config.telegram_credentials(), Some(telegram("stored-token", "stored-chat")));

        std::env::set_var(TELEGRAM_CHAT_ID_ENV, "env-chat");
        assert_eq!(config.telegram_credentials(), Some(telegram("stored-token", "env-chat")));

        std::env::set_var(TELEGRAM_TOKEN_ENV, "env-token");
        assert_eq!(Config::default().telegram_credentials(), Some(telegram("env-token", "env-chat")));
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_incomplete_credentials(_ctx: &mut ConfigTestContext) {
        assert_eq!(Config::default().telegram_credentials(), None);

        let config = Config {
            telegram: Some(telegram("123:ABC", "  ")),
            ..Config::default()
        };
        assert_eq!(config.telegram_credentials(), None);
    }

    #[test_context(ConfigTestContext)]
    #[test]
    fn test_configured_database_path(ctx: &mut ConfigTestContext) {
        let db_path = ctx.temp_dir.path().join("elsewhere.db");
        Config {
            database: Some(DatabaseConfig {
                path: db_path.to_string_lossy().to_string(),
            }),
            ..Config::default()
        }
        .save()
        .unwrap();

        Db::new().unwrap();
        assert!(db_path.exists());
    }
}
