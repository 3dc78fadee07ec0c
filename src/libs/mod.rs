//! Core library modules.
//!
//! - **Domain**: task records, statistics types, reminder evaluation
//! - **Infrastructure**: configuration, data directory, clock, messaging
//! - **Presentation**: table rendering and cell formatting
//!
//! ```rust,no_run
//! use todobell::db::{db::Db, tasks::Tasks};
//! use todobell::libs::reminder::evaluate;
//!
//! let mut tasks = Tasks::new(Db::new()?);
//! let now = tasks.now();
//! let reminders = evaluate(now, &tasks.fetch_all()?);
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod clock;
pub mod config;
pub mod data_storage;
pub mod formatter;
pub mod messages;
pub mod reminder;
pub mod stats;
pub mod task;
pub mod view;
pub mod watcher;
