//! Persistence layer.
//!
//! A single SQLite file holds the `tasks` table and the `migrations`
//! bookkeeping table. [`db::Db`] opens and migrates the file;
//! [`tasks::Tasks`] runs every task query on top of it.
//!
//! ```rust,no_run
//! use todobell::db::{db::Db, tasks::Tasks};
//!
//! let mut tasks = Tasks::new(Db::open("todobell.db")?);
//! let stats = tasks.completion_statistics()?;
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection setup.
pub mod db;

/// Versioned schema changes and their history.
pub mod migrations;

/// Task CRUD, temporal queries and statistics.
pub mod tasks;
