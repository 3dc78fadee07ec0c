use crate::{
    db::{db::Db, tasks::Tasks},
    libs::messages::Message,
    msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    /// Task ID
    id: i64,
}

pub fn cmd(args: DoneArgs) -> Result<()> {
    if Tasks::new(Db::new()?).complete(args.id)? {
        msg_success!(Message::TaskCompleted(args.id));
    } else {
        msg_warning!(Message::TaskNotCompleted(args.id));
    }

    Ok(())
}
