use crate::{
    db::{db::Db, tasks::Tasks},
    libs::{config::Config, watcher::Watcher},
};
use anyhow::Result;
use std::time::Duration;

/// Runs reminder passes in the foreground until interrupted.
pub async fn cmd() -> Result<()> {
    let config = Config::read()?;
    let evaluator = super::remind::evaluator(&config)?;
    let interval = Duration::from_secs(config.reminder.unwrap_or_default().interval_secs.max(1));

    let mut watcher = Watcher::new(Tasks::new(Db::new()?), evaluator, interval);
    watcher.run_with_signal_handling().await
}
