use crate::{
    db::{db::Db, tasks::Tasks},
    libs::{
        messages::Message,
        stats::{DEFAULT_STATS_DAYS, MAX_STATS_DAYS},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;
use serde_json::json;

#[derive(Debug, Args)]
pub struct StatsArgs {
    /// Length of the daily history
    #[arg(short, long, default_value_t = DEFAULT_STATS_DAYS)]
    days: u32,
    /// Print JSON instead of tables
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: StatsArgs) -> Result<()> {
    let mut tasks = Tasks::new(Db::new()?);

    let overall = tasks.overall_statistics()?;
    let by_priority = tasks.completion_statistics()?;
    let daily = tasks.daily_completion_stats(args.days)?;

    if args.json {
        return View::json(&json!({
            "overall": overall,
            "by_priority": by_priority,
            "daily": daily,
        }));
    }

    if args.days > MAX_STATS_DAYS {
        msg_info!(Message::DailyStatsClamped(args.days, MAX_STATS_DAYS));
    }

    msg_print!(Message::OverallStatsHeader, true);
    View::overall(&overall)?;

    msg_print!(Message::CompletionStatsHeader, true);
    View::completion_statistics(&by_priority)?;

    msg_print!(Message::DailyStatsHeader(args.days.min(MAX_STATS_DAYS)), true);
    View::daily_completion(&daily)
}
