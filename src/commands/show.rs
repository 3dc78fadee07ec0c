use crate::{
    db::{db::Db, tasks::Tasks},
    libs::{messages::Message, view::View},
    msg_error,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ShowArgs {
    /// Task ID
    id: i64,
    /// Print JSON instead of a table
    #[arg(long)]
    json: bool,
}

pub fn cmd(args: ShowArgs) -> Result<()> {
    let Some(task) = Tasks::new(Db::new()?).get_by_id(args.id)? else {
        msg_error!(Message::TaskNotFoundWithId(args.id));
        return Ok(());
    };

    if args.json {
        View::json(&task)
    } else {
        View::task(&task)
    }
}
