use crate::{
    db::{db::Db, tasks::Tasks},
    libs::{messages::Message, view::View},
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct UpcomingArgs {
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: UpcomingArgs) -> Result<()> {
    let mut tasks = Tasks::new(Db::new()?);
    let upcoming = tasks.upcoming(tasks.now())?;

    if args.json {
        return View::json(&upcoming);
    }

    if upcoming.is_empty() {
        msg_info!(Message::NoUpcomingTasks);
        return Ok(());
    }

    msg_print!(Message::UpcomingHeader, true);
    View::upcoming(&upcoming)
}
