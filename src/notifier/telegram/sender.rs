// notifier/telegram/sender.rs

use crate::model::{ChatId, NotifyError};
use crate::notifier::telegram::TelegramNotifier;
use std::time::Duration;
use tokio::time::timeout;
use tracing::{info, warn};

/// Sends an HTML-formatted message via Telegram.
pub async fn send_html(
    notifier: &TelegramNotifier,
    chat_id: &ChatId,
    text: &str,
) -> Result<(), NotifyError> {
    let url = notifier.send_message_url();
    let params = [
        ("chat_id", chat_id.to_string()),
        ("text", text.to_string()),
        ("parse_mode", "HTML".to_string()),
        ("disable_web_page_preview", "true".to_string()),
    ];
    let response = match timeout(
        Duration::from_secs(10),
        notifier.client.post(&url).form(&params).send(),
    )
    .await
    {
        Ok(Ok(resp)) => resp,
        Ok(Err(e)) => {
            // The URL carries the bot token.
            let e = e.without_url();
            warn!("❌ Telegram send() failed: {:?}", e);
            return Err(NotifyError::Api(e.to_string()));
        }
        Err(_) => {
            warn!("⏳ Telegram send() timed out");
            return Err(NotifyError::Timeout);
        }
    };
    let status = response.status();
    let body = response.text().await.unwrap_or_else(|_| "unknown".into());
    if !status.is_success() {
        warn!("❌ Telegram API responded [{}]: {}", status, body);
        return Err(NotifyError::Status {
            status: status.as_u16(),
            body,
        });
    }
    info!("✅ Telegram message sent to {} [{}]", chat_id, status);
    Ok(())
}
