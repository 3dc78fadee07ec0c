//! Command-line interface.
//!
//! Every subcommand lives in its own module with an `Args` struct and a
//! `cmd` function. [`Cli::menu`] parses the arguments and dispatches.

pub mod add;
pub mod delete;
pub mod done;
pub mod edit;
pub mod init;
pub mod list;
pub mod migrations;
pub mod remind;
pub mod show;
pub mod stats;
pub mod upcoming;
pub mod watch;

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a task")]
    Add(add::AddArgs),
    #[command(about = "List all tasks")]
    List(list::ListArgs),
    #[command(about = "Show a single task")]
    Show(show::ShowArgs),
    #[command(about = "Mark a task as completed")]
    Done(done::DoneArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Edit a task", arg_required_else_help = true)]
    Edit(edit::EditArgs),
    #[command(about = "Pending tasks due within the next 24 hours")]
    Upcoming(upcoming::UpcomingArgs),
    #[command(about = "Completion statistics")]
    Stats(stats::StatsArgs),
    #[command(about = "Send reminders for tasks that are due soon")]
    Remind,
    #[command(about = "Send reminders periodically until stopped")]
    Watch,
    #[command(about = "Inspect database migrations")]
    Migrations(migrations::MigrationsArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub async fn menu() -> Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Show(args) => show::cmd(args),
            Commands::Done(args) => done::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Upcoming(args) => upcoming::cmd(args),
            Commands::Stats(args) => stats::cmd(args),
            Commands::Remind => remind::cmd().await,
            Commands::Watch => watch::cmd().await,
            Commands::Migrations(args) => migrations::cmd(args),
        }
    }
}
