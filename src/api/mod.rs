//! Outbound notification channels.
//!
//! The reminder evaluator only knows the [`Notifier`] trait; the concrete
//! transport is chosen by the command that builds the evaluator. Telegram is
//! the one shipped implementation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todobell::api::{Notifier, telegram::TelegramNotifier};
//!
//! # async fn demo() -> anyhow::Result<()> {
//! let notifier = TelegramNotifier::new("123:ABC")?;
//! notifier.send("42", "⏰ Reminder").await?;
//! # Ok(())
//! # }
//! ```

use thiserror::Error;

pub mod telegram;

pub use telegram::TelegramNotifier;

/// Delivery failure reported by a [`Notifier`].
#[derive(Debug, Error)]
pub enum NotifyError {
    /// Network or client failure. The request URL is stripped, since it
    /// carries the bot token.
    #[error("request failed: {0}")]
    Transport(reqwest::Error),

    #[error("rejected with status {status}: {body}")]
    Rejected { status: u16, body: String },
}

/// Delivers a text message to a recipient.
///
/// Implementations perform a single attempt; retrying is left to the caller.
#[allow(async_fn_in_trait)]
pub trait Notifier {
    async fn send(&self, recipient_id: &str, text: &str) -> Result<(), NotifyError>;
}

impl From<reqwest::Error> for NotifyError {
    fn from(error: reqwest::Error) -> Self {
        NotifyError::Transport(error.without_url())
    }
}
