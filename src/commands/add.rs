use crate::{
    db::{db::Db, tasks::Tasks},
    libs::{
        messages::Message,
        task::{parse_timestamp, NewTask, Priority},
    },
    msg_bail_anyhow, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// What needs to be done
    #[arg(required = true)]
    description: String,
    /// high, medium or low
    #[arg(short, long, default_value = "medium")]
    priority: String,
    /// Deadline, e.g. "2025-06-01 18:30"
    #[arg(short, long)]
    due: Option<String>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    if Priority::parse(&args.priority).is_none() {
        msg_warning!(Message::PriorityFallback(args.priority.clone()));
    }

    let mut task = NewTask::new(&args.description).priority(&args.priority);
    if let Some(due) = args.due.as_deref() {
        match parse_timestamp(due) {
            Some(due_time) => task = task.due(due_time),
            None => msg_bail_anyhow!(Message::InvalidDueTime(due.to_string())),
        }
    }

    let id = Tasks::new(Db::new()?).insert(&task)?;
    msg_success!(Message::TaskCreated(id));

    Ok(())
}
