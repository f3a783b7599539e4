pub mod sender;

use crate::model::{ChatId, NotifyError};
use crate::notifier::Notifier;
use reqwest::Client;

pub const TELEGRAM_API_URL: &str = "https://api.telegram.org";

pub struct TelegramNotifier {
    pub bot_token: String,
    pub client: Client,
    pub api_url: String,
}

impl TelegramNotifier {
    pub fn new(bot_token: String, client: Client) -> Self {
        Self {
            bot_token,
            client,
            api_url: TELEGRAM_API_URL.to_string(),
        }
    }

    pub fn send_message_url(&self) -> String {
        format!("{}/bot{}/sendMessage", self.api_url, self.bot_token)
    }
}

#[async_trait::async_trait]
impl Notifier for TelegramNotifier {
    async fn send(&self, destination: &ChatId, text: &str) -> Result<(), NotifyError> {
        sender::send_html(self, destination, text).await
    }
}
