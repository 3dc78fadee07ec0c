use super::{Notifier, NotifyError};
use serde::Serialize;
use std::time::Duration;

const TELEGRAM_API_URL: &str = "https://api.telegram.org";
const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

#[derive(Debug, Serialize)]
struct SendMessage<'a> {
    chat_id: &'a str,
    text: &'a str,
}

/// Sends messages through the Telegram Bot API `sendMessage` method.
pub struct TelegramNotifier {
    client: reqwest::Client,
    base_url: String,
    bot_token: String,
}

impl TelegramNotifier {
    pub fn new(bot_token: &str) -> Result<Self, NotifyError> {
        Self::with_base_url(TELEGRAM_API_URL, bot_token)
    }

    /// Client for a Bot API compatible server other than the public one.
    pub fn with_base_url(base_url: &str, bot_token: &str) -> Result<Self, NotifyError> {
        let client = reqwest::Client::builder().timeout(REQUEST_TIMEOUT).build()?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
            bot_token: bot_token.to_string(),
        })
    }

    fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.base_url, self.bot_token)
    }
}

impl Notifier for TelegramNotifier {
    async fn send(&self, recipient_id: &str, text: &str) -> Result<(), NotifyError> {
        let response = self
            .client
            .post(self.send_message_url())
            .json(&SendMessage { chat_id: recipient_id, text })
            .send()
            .await?;

        let status = response.status();
        if status.is_success() {
            return Ok(());
        }

        // The body carries Telegram's `description` of the failure
        let body = response.text().await.unwrap_or_default();
        Err(NotifyError::Rejected {
            status: status.as_u16(),
            body,
        })
    }
}
