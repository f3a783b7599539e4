pub mod message;
pub mod telegram;

use crate::model::{ChatId, NotifyError};

pub use telegram::TelegramNotifier;

/// Delivers one text message to a destination chat.
#[async_trait::async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, destination: &ChatId, text: &str) -> Result<(), NotifyError>;
}
