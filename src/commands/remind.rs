use crate::{
    api::TelegramNotifier,
    db::{db::Db, tasks::Tasks},
    libs::{config::Config, messages::Message, reminder::ReminderEvaluator},
    msg_error_anyhow, msg_info, msg_success, msg_warning,
};
use anyhow::Result;

/// Builds the Telegram-backed evaluator from the configuration.
pub(crate) fn evaluator(config: &Config) -> Result<ReminderEvaluator<TelegramNotifier>> {
    let telegram = config
        .telegram_credentials()
        .ok_or_else(|| msg_error_anyhow!(Message::TelegramNotConfigured))?;
    let reminder = config.reminder.clone().unwrap_or_default();

    let notifier = TelegramNotifier::new(&telegram.bot_token)?;
    Ok(ReminderEvaluator::new(notifier, &telegram.chat_id).window_minutes(reminder.window_minutes))
}

pub async fn cmd() -> Result<()> {
    let evaluator = evaluator(&Config::read()?)?;
    let mut tasks = Tasks::new(Db::new()?);

    let now = tasks.now();
    let report = evaluator.run_cycle(&mut tasks, now).await?;

    if report.due == 0 {
        msg_info!(Message::NoRemindersDue);
    } else if report.failed == 0 {
        msg_success!(Message::RemindersDispatched(report.sent, report.due));
    } else {
        msg_warning!(Message::RemindersDispatched(report.sent, report.due));
    }

    Ok(())
}
