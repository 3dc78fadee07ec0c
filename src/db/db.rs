use crate::db::migrations::init_with_migrations;
use crate::libs::config::Config;
use crate::libs::data_storage::DataStorage;
use anyhow::Result;
use rusqlite::Connection;
use std::path::{Path, PathBuf};

pub const DB_FILE_NAME: &str = "todobell.db";

/// An open, migrated SQLite database.
///
/// The process entry point opens one `Db` and hands it to the store; nothing
/// in the crate keeps a global connection.
pub struct Db {
    pub conn: Connection,
}

impl Db {
    /// Opens the database at the configured location, or the default file in
    /// the data directory when no path is configured.
    pub fn new() -> Result<Db> {
        let path = Self::resolve_path()?;
        Self::open(path)
    }

    /// Opens (creating if needed) the database at `path` and applies pending
    /// migrations.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Db> {
        let mut conn = Connection::open(path)?;
        init_with_migrations(&mut conn)?;

        Ok(Db { conn })
    }

    /// Opens the configured database without touching its schema.
    pub fn new_without_migrations() -> Result<Connection> {
        let path = Self::resolve_path()?;
        Ok(Connection::open(path)?)
    }

    fn resolve_path() -> Result<PathBuf> {
        let configured = Config::read()?.database.map(|database| database.path);
        match configured {
            Some(path) if !path.trim().is_empty() => Ok(PathBuf::from(path)),
            _ => DataStorage::new().get_path(DB_FILE_NAME),
        }
    }
}
