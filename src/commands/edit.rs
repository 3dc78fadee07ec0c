use crate::{
    db::{db::Db, tasks::Tasks},
    libs::{
        messages::Message,
        task::{DueTimeEdit, Priority, TaskEdit},
    },
    msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct EditArgs {
    /// Task ID
    id: i64,
    /// New description
    #[arg(long)]
    description: Option<String>,
    /// New priority: high, medium or low
    #[arg(short, long)]
    priority: Option<String>,
    /// New deadline; pass "" to remove it
    #[arg(short, long)]
    due: Option<String>,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    if let Some(priority) = args.priority.as_deref().filter(|p| Priority::parse(p).is_none()) {
        msg_warning!(Message::PriorityIgnored(priority.to_string()));
    }

    let due_time = DueTimeEdit::from_input(args.due.as_deref());
    if let (DueTimeEdit::Keep, Some(due)) = (&due_time, args.due.as_deref()) {
        msg_warning!(Message::InvalidDueTime(due.to_string()));
    }

    let edit = TaskEdit {
        description: args.description,
        priority: args.priority,
        due_time,
    };

    if Tasks::new(Db::new()?).edit(args.id, &edit)? {
        msg_success!(Message::TaskUpdated(args.id));
    } else {
        msg_warning!(Message::TaskNotUpdated(args.id));
    }

    Ok(())
}
