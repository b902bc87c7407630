//! Customer notifications over the Telegram Bot API.
//!
//! Optional: the notifier only exists when a bot token is configured, and
//! the whole feature degrades to a 503 without one. Messages are addressed
//! by the recipient phone, which Telegram resolves to a chat when the
//! customer has registered that number with the bot.

use reqwest::Client;
use secrecy::ExposeSecret;
use serde::{Deserialize, Serialize};
use serde_json::json;
use tracing::{info, instrument};

use docustore_core::{Action, DocumentId};

use crate::config::TelegramConfig;
use crate::error::AppError;
use crate::models::CurrentUser;
use crate::services::ensure;
use crate::state::AppState;

const TELEGRAM_API_BASE: &str = "https://api.telegram.org";

/// What the message is about; picks the emoji prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    /// The item is ready for pickup.
    Ready,
    /// The item could not be located.
    Lost,
    /// Pickup-date reminder.
    Reminder,
    /// Anything else.
    #[serde(other)]
    Other,
}

impl NotificationKind {
    #[must_use]
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Ready => "✅",
            Self::Lost => "❌",
            Self::Reminder => "⏰",
            Self::Other => "📦",
        }
    }
}

/// Notifier backed by the Telegram Bot API `sendMessage` method.
pub struct TelegramNotifier {
    client: Client,
    config: TelegramConfig,
}

impl TelegramNotifier {
    #[must_use]
    pub fn new(config: &TelegramConfig) -> Self {
        Self {
            client: Client::new(),
            config: config.clone(),
        }
    }

    fn compose(kind: NotificationKind, message: &str, phone: &str) -> String {
        format!("{} {message}\n\n📱 Телефон: {phone}", kind.emoji())
    }

    /// Deliver `message` (prefixed per `kind`) to the customer at `phone`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Notify`] when the request fails or Telegram
    /// answers with a non-success status.
    pub async fn notify(
        &self,
        phone: &str,
        kind: NotificationKind,
        message: &str,
    ) -> Result<(), AppError> {
        let url = format!(
            "{TELEGRAM_API_BASE}/bot{}/sendMessage",
            self.config.bot_token.expose_secret()
        );
        let body = json!({
            "chat_id": phone,
            "text": Self::compose(kind, message, phone),
            "parse_mode": "HTML",
        });

        let response = self
            .client
            .post(&url)
            .json(&body)
            .send()
            .await
            .map_err(|e| AppError::Notify(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(AppError::Notify(format!("telegram {status}: {detail}")));
        }
        Ok(())
    }
}

/// Send a notification about the document identified by `id`.
///
/// # Errors
///
/// Permission error for customers, not-found for an unknown `id`, a 503
/// when no bot token is configured, and a delivery error when Telegram
/// refuses the message.
#[instrument(skip(state, message), fields(actor = %actor.name, %id, ?kind))]
pub async fn send(
    state: &AppState,
    actor: &CurrentUser,
    id: DocumentId,
    kind: NotificationKind,
    message: &str,
) -> Result<(), AppError> {
    ensure(actor, Action::Notify)?;

    let phone = state
        .documents()
        .read()
        .await
        .get(id)
        .map(|d| d.recipient_phone.clone())
        .ok_or_else(|| AppError::NotFound(id.to_string()))?;

    let notifier = state.notifier().ok_or(AppError::NotifyUnavailable)?;
    notifier.notify(&phone, kind, message).await?;

    info!(%id, "notification sent");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_picks_the_emoji() {
        assert_eq!(NotificationKind::Ready.emoji(), "✅");
        assert_eq!(NotificationKind::Lost.emoji(), "❌");
        assert_eq!(NotificationKind::Reminder.emoji(), "⏰");
        assert_eq!(NotificationKind::Other.emoji(), "📦");
    }

    #[test]
    fn unknown_kind_deserialises_as_other() {
        let kind: NotificationKind = serde_json::from_str("\"promo\"").expect("lenient");
        assert_eq!(kind, NotificationKind::Other);
    }

    #[test]
    fn message_carries_emoji_and_phone_footer() {
        let text =
            TelegramNotifier::compose(NotificationKind::Ready, "Ваш документ готов", "+7000");
        assert_eq!(text, "✅ Ваш документ готов\n\n📱 Телефон: +7000");
    }
}
