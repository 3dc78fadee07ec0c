//! # todobell - tasks with due-time reminders
//!
//! A command-line task list backed by SQLite. Tasks have a description, a
//! priority and an optional due time; pending tasks that are about to become
//! due are announced through a Telegram bot.
//!
//! ## Features
//!
//! - **Task store**: create, complete, edit and delete tasks
//! - **Statistics**: completion per priority, per day and overall
//! - **Upcoming list**: pending tasks due within 24 hours
//! - **Reminders**: 30-minute lookahead, delivered once per polling pass
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todobell::commands::Cli;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     Cli::menu().await
//! }
//! ```

pub mod api;
pub mod commands;
pub mod db;
pub mod libs;
