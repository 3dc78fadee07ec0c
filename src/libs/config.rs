//! Configuration management for todobell.
//!
//! Settings live in a pretty-printed `config.json` inside the application data
//! directory. Every section is optional: a missing file or section means the
//! built-in defaults apply, so the task commands work with no setup at all.
//!
//! ## Sections
//!
//! - **telegram**: bot token and chat id used for reminder delivery
//! - **reminder**: watch loop interval and reminder window
//! - **database**: alternative location of the SQLite file
//!
//! Telegram credentials can also come from the environment (or a `.env`
//! file): `TODOBELL_TELEGRAM_TOKEN` and `TODOBELL_TELEGRAM_CHAT_ID` override
//! the values stored on disk.
//!
//! ```rust,no_run
//! use todobell::libs::config::Config;
//!
//! let config = Config::read()?;
//! let reminder = config.reminder.unwrap_or_default();
//! println!("checking every {}s", reminder.interval_secs);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::data_storage::DataStorage;
use crate::libs::messages::Message;
use crate::msg_print;
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Input, MultiSelect};
use serde::{Deserialize, Serialize};
use std::env;
use std::fs::{self, File};

pub const CONFIG_FILE_NAME: &str = "config.json";

pub const TELEGRAM_TOKEN_ENV: &str = "TODOBELL_TELEGRAM_TOKEN";
pub const TELEGRAM_CHAT_ID_ENV: &str = "TODOBELL_TELEGRAM_CHAT_ID";

/// A section offered by the setup wizard.
#[derive(Debug, Clone)]
pub struct ConfigModule {
    pub key: String,
    pub name: String,
}

/// Telegram bot credentials for reminder delivery.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct TelegramConfig {
    pub bot_token: String,
    /// Chat that receives the reminders.
    pub chat_id: String,
}

impl TelegramConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "telegram".to_string(),
            name: "Telegram".to_string(),
        }
    }

    /// Both values are present.
    pub fn is_complete(&self) -> bool {
        !self.bot_token.trim().is_empty() && !self.chat_id.trim().is_empty()
    }

    pub fn init(config: &Option<TelegramConfig>) -> Result<Self> {
        let default = config.clone().unwrap_or(TelegramConfig {
            bot_token: String::new(),
            chat_id: String::new(),
        });
        msg_print!(Message::ConfigModuleTelegram);

        Ok(TelegramConfig {
            bot_token: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTelegramToken.to_string())
                .default(default.bot_token)
                .interact_text()?,
            chat_id: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptTelegramChatId.to_string())
                .default(default.chat_id)
                .interact_text()?,
        })
    }
}

/// Timing of the reminder watch loop.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct ReminderConfig {
    /// Seconds between two evaluation cycles.
    pub interval_secs: u64,
    /// Pending tasks due within this many minutes get a reminder.
    pub window_minutes: i64,
}

impl Default for ReminderConfig {
    fn default() -> Self {
        ReminderConfig {
            interval_secs: 60,
            window_minutes: 30,
        }
    }
}

impl ReminderConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "reminder".to_string(),
            name: "Reminder".to_string(),
        }
    }

    pub fn init(config: &Option<ReminderConfig>) -> Result<Self> {
        let default = config.clone().unwrap_or_default();
        msg_print!(Message::ConfigModuleReminder);

        Ok(ReminderConfig {
            interval_secs: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptReminderInterval.to_string())
                .default(default.interval_secs)
                .validate_with(|value: &u64| if *value > 0 { Ok(()) } else { Err("must be positive") })
                .interact_text()?,
            window_minutes: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptReminderWindow.to_string())
                .default(default.window_minutes)
                .validate_with(|value: &i64| if *value > 0 { Ok(()) } else { Err("must be positive") })
                .interact_text()?,
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct DatabaseConfig {
    /// Path of the SQLite file. Empty means the default location.
    pub path: String,
}

impl DatabaseConfig {
    pub fn module() -> ConfigModule {
        ConfigModule {
            key: "database".to_string(),
            name: "Database".to_string(),
        }
    }

    pub fn init(config: &Option<DatabaseConfig>) -> Result<Self> {
        let default = config.clone().map(|database| database.path).unwrap_or_default();
        msg_print!(Message::ConfigModuleDatabase);

        Ok(DatabaseConfig {
            path: Input::with_theme(&ColorfulTheme::default())
                .with_prompt(Message::PromptDatabasePath.to_string())
                .default(default)
                .allow_empty(true)
                .interact_text()?,
        })
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct Config {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub telegram: Option<TelegramConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub reminder: Option<ReminderConfig>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database: Option<DatabaseConfig>,
}

impl Config {
    /// Reads the configuration file, or the default when there is none.
    ///
    /// # Errors
    ///
    /// Fails when the file exists but cannot be read or parsed.
    pub fn read() -> Result<Config> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        if !config_file_path.exists() {
            return Ok(Config::default());
        }

        let config_str = fs::read_to_string(config_file_path)?;
        let config: Config = serde_json::from_str(&config_str)?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let config_file_path = DataStorage::new().get_path(CONFIG_FILE_NAME)?;

        let config_file = File::create(config_file_path)?;
        serde_json::to_writer_pretty(&config_file, &self)?;
        Ok(())
    }

    /// Telegram credentials with environment overrides applied.
    ///
    /// A `.env` file in the working directory is loaded first. Each variable
    /// replaces the matching stored value on its own; `None` is returned when
    /// either value ends up missing.
    pub fn telegram_credentials(&self) -> Option<TelegramConfig> {
        dotenv::dotenv().ok();

        let stored = self.telegram.clone();
        let bot_token = env::var(TELEGRAM_TOKEN_ENV)
            .ok()
            .or_else(|| stored.as_ref().map(|telegram| telegram.bot_token.clone()));
        let chat_id = env::var(TELEGRAM_CHAT_ID_ENV)
            .ok()
            .or_else(|| stored.as_ref().map(|telegram| telegram.chat_id.clone()));

        let telegram = TelegramConfig {
            bot_token: bot_token?,
            chat_id: chat_id?,
        };
        telegram.is_complete().then_some(telegram)
    }

    /// Interactive setup wizard. Current values are offered as defaults.
    pub fn init() -> Result<Self> {
        let mut config = Self::read().unwrap_or_default();

        let node_descriptions = vec![TelegramConfig::module(), ReminderConfig::module(), DatabaseConfig::module()];

        let selected_nodes = MultiSelect::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::PromptSelectModules.to_string())
            .items(&node_descriptions.iter().map(|module| &module.name).collect::<Vec<_>>())
            .interact()?;

        for &selection in &selected_nodes {
            match node_descriptions[selection].key.as_str() {
                "telegram" => config.telegram = Some(TelegramConfig::init(&config.telegram)?),
                "reminder" => config.reminder = Some(ReminderConfig::init(&config.reminder)?),
                "database" => config.database = Some(DatabaseConfig::init(&config.database)?),
                _ => {}
            }
        }

        Ok(config)
    }
}
