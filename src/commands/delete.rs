use crate::{
    db::{db::Db, tasks::Tasks},
    libs::messages::Message,
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ID
    id: i64,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut tasks = Tasks::new(Db::new()?);

    let Some(task) = tasks.get_by_id(args.id)? else {
        msg_error!(Message::TaskNotFoundWithId(args.id));
        return Ok(());
    };

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.description).to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    if tasks.delete(args.id)? {
        msg_success!(Message::TaskDeleted(args.id));
    } else {
        // Removed by someone else between the lookup and the delete
        msg_error!(Message::TaskNotFoundWithId(args.id));
    }

    Ok(())
}
