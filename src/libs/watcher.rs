//! Periodic reminder loop for the `watch` command.
//!
//! The first pass runs immediately, then one pass per interval until the
//! shutdown future resolves. A pass that fails (for example because the
//! database is locked) is reported and the loop carries on with the next tick.

use crate::api::Notifier;
use crate::db::tasks::Tasks;
use crate::libs::messages::Message;
use crate::libs::reminder::{CycleReport, ReminderEvaluator};
use crate::{msg_debug, msg_error, msg_info};
use anyhow::Result;
use std::future::Future;
use std::time::Duration;
use tokio::time::MissedTickBehavior;

pub struct Watcher<N: Notifier> {
    tasks: Tasks,
    evaluator: ReminderEvaluator<N>,
    interval: Duration,
    cycles: u64,
}

impl<N: Notifier> Watcher<N> {
    pub fn new(tasks: Tasks, evaluator: ReminderEvaluator<N>, interval: Duration) -> Self {
        Self {
            tasks,
            evaluator,
            interval,
            cycles: 0,
        }
    }

    /// Number of passes run so far.
    pub fn cycles(&self) -> u64 {
        self.cycles
    }

    pub fn evaluator(&self) -> &ReminderEvaluator<N> {
        &self.evaluator
    }

    /// Runs a single pass at the store's current time.
    pub async fn tick(&mut self) -> Option<CycleReport> {
        self.cycles += 1;
        let now = self.tasks.now();

        match self.evaluator.run_cycle(&mut self.tasks, now).await {
            Ok(report) => {
                msg_debug!(Message::ReminderCycleCompleted(report.due, report.sent, report.failed));
                Some(report)
            }
            Err(e) => {
                msg_error!(Message::ReminderCycleFailed(e.to_string()));
                None
            }
        }
    }

    /// Ticks until `shutdown` resolves.
    pub async fn run_until<F: Future<Output = ()>>(&mut self, shutdown: F) -> Result<()> {
        tokio::pin!(shutdown);

        let mut ticker = tokio::time::interval(self.interval);
        ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            tokio::select! {
                _ = &mut shutdown => {
                    msg_info!(Message::WatcherShuttingDown);
                    break;
                }
                _ = ticker.tick() => {
                    self.tick().await;
                }
            }
        }

        Ok(())
    }

    /// Ticks until SIGINT or SIGTERM (Ctrl+C elsewhere).
    pub async fn run_with_signal_handling(&mut self) -> Result<()> {
        msg_info!(Message::WatcherStarted(self.interval.as_secs()));
        self.run_until(shutdown_signal()).await
    }
}

async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match (signal(SignalKind::terminate()), signal(SignalKind::interrupt())) {
            (Ok(mut sigterm), Ok(mut sigint)) => {
                tokio::select! {
                    _ = sigterm.recv() => {
                        msg_info!(Message::WatcherReceivedSigterm);
                    }
                    _ = sigint.recv() => {
                        msg_info!(Message::WatcherReceivedSigint);
                    }
                }
                return;
            }
            (Err(e), _) | (_, Err(e)) => {
                msg_error!(Message::WatcherSignalHandlerFailed(e.to_string()));
            }
        }
    }

    match tokio::signal::ctrl_c().await {
        Ok(()) => {
            msg_info!(Message::WatcherReceivedCtrlC);
        }
        Err(e) => {
            msg_error!(Message::WatcherCtrlCListenFailed(e.to_string()));
            // Without any signal source the loop runs until the process is killed
            std::future::pending::<()>().await;
        }
    }
}
