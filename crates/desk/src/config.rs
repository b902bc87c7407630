//! Desk configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional (all have defaults)
//! - `DESK_HOST` - Bind address (default: 127.0.0.1)
//! - `DESK_PORT` - Listen port (default: 3002)
//! - `DESK_STORE_NAME` - Display name of the deposit desk (default: DocuStore)
//! - `DESK_CREATOR_PASSWORD` - Shared creator password (default: 202505)
//! - `DESK_ADMIN_PASSWORD` - Shared admin password (default: 2025)
//! - `DESK_CASHIER_PASSWORD` - Shared cashier password (default: 25)
//! - `DESK_FORM_PROFILE` - Issue form profile, `full` or `compact` (default: full)
//! - `DESK_DEPOSIT_FEE` - Default deposit fee shown in settings (default: 0)
//! - `DESK_PICKUP_FEE` - Default pickup fee shown in settings (default: 0)
//! - `DESK_QR_ENDPOINT` - QR image generator base URL
//!   (default: <https://api.qrserver.com/v1/create-qr-code/>)
//! - `DESK_QR_SIZE` - QR image size in pixels (default: 300)
//! - `DESK_ANNOUNCE_LANGUAGE` - Announcement language tag (default: ru-RU)
//! - `DESK_ANNOUNCE_RATE` - Announcement speech rate (default: 0.9)
//!
//! ## Optional (Telegram - enables customer notifications)
//! - `TELEGRAM_BOT_TOKEN` - Telegram Bot API token
//!
//! The shared role passwords are a deliberate placeholder for real
//! authentication: everyone holding a password shares one role. They are
//! kept out of source and never logged, but per-identity credentials are
//! an open question, not something this service invents.

use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use rust_decimal::Decimal;
use secrecy::SecretString;
use thiserror::Error;

const DEFAULT_STORE_NAME: &str = "DocuStore";
const DEFAULT_QR_ENDPOINT: &str = "https://api.qrserver.com/v1/create-qr-code/";
const DEFAULT_ANNOUNCE_LANGUAGE: &str = "ru-RU";
const DEFAULT_ANNOUNCE_RATE: f32 = 0.9;

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingEnvVar(String),
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Which issue-form variant is in effect.
///
/// The desk form historically shipped in two variants; they collapse here
/// into one schema where the profile decides which optional fields the
/// validation requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FormProfile {
    /// Full client questionnaire: last name, item description and pickup
    /// date are required.
    #[default]
    Full,
    /// Stripped-down form: only name, phone and the two fees are required.
    Compact,
}

impl FromStr for FormProfile {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "full" => Ok(Self::Full),
            "compact" => Ok(Self::Compact),
            _ => Err(format!("invalid form profile: {s} (expected full|compact)")),
        }
    }
}

/// Desk application configuration.
#[derive(Debug, Clone)]
pub struct DeskConfig {
    /// IP address to bind the server to
    pub host: IpAddr,
    /// Port to listen on
    pub port: u16,
    /// Display name of the deposit desk
    pub store_name: String,
    /// Shared role passwords
    pub passwords: RolePasswords,
    /// Issue form profile
    pub form_profile: FormProfile,
    /// Default deposit fee (settings panel)
    pub deposit_fee: Decimal,
    /// Default pickup fee (settings panel)
    pub pickup_fee: Decimal,
    /// QR image generator configuration
    pub qr: QrConfig,
    /// Audio announcement configuration
    pub announce: AnnounceConfig,
    /// Telegram configuration (optional - enables customer notifications)
    pub telegram: Option<TelegramConfig>,
}

/// Shared role passwords.
///
/// Implements `Debug` manually so no password ever reaches a log line.
#[derive(Clone)]
pub struct RolePasswords {
    /// Creator (super-admin) password
    pub creator: SecretString,
    /// Admin password
    pub admin: SecretString,
    /// Cashier password
    pub cashier: SecretString,
}

impl std::fmt::Debug for RolePasswords {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RolePasswords")
            .field("creator", &"[REDACTED]")
            .field("admin", &"[REDACTED]")
            .field("cashier", &"[REDACTED]")
            .finish()
    }
}

impl RolePasswords {
    fn from_env() -> Self {
        Self {
            creator: SecretString::from(get_env_or_default("DESK_CREATOR_PASSWORD", "202505")),
            admin: SecretString::from(get_env_or_default("DESK_ADMIN_PASSWORD", "2025")),
            cashier: SecretString::from(get_env_or_default("DESK_CASHIER_PASSWORD", "25")),
        }
    }
}

/// QR image generator configuration.
#[derive(Debug, Clone)]
pub struct QrConfig {
    /// Base URL of the QR image endpoint
    pub endpoint: String,
    /// Image size in pixels (square)
    pub size: u32,
}

impl QrConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let size = get_env_or_default("DESK_QR_SIZE", "300")
            .parse::<u32>()
            .map_err(|e| ConfigError::InvalidEnvVar("DESK_QR_SIZE".to_string(), e.to_string()))?;

        Ok(Self {
            endpoint: get_env_or_default("DESK_QR_ENDPOINT", DEFAULT_QR_ENDPOINT),
            size,
        })
    }
}

/// Audio announcement configuration.
#[derive(Debug, Clone)]
pub struct AnnounceConfig {
    /// BCP-47 language tag for the spoken announcement
    pub language: String,
    /// Speech rate (1.0 is normal speed)
    pub rate: f32,
}

impl AnnounceConfig {
    fn from_env() -> Result<Self, ConfigError> {
        let rate = get_env_or_default("DESK_ANNOUNCE_RATE", "0.9")
            .parse::<f32>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("DESK_ANNOUNCE_RATE".to_string(), e.to_string())
            })?;

        Ok(Self {
            language: get_env_or_default("DESK_ANNOUNCE_LANGUAGE", DEFAULT_ANNOUNCE_LANGUAGE),
            rate,
        })
    }
}

/// Telegram Bot API configuration.
///
/// Implements `Debug` manually to redact the bot token.
#[derive(Clone)]
pub struct TelegramConfig {
    /// Bot token from `@BotFather`
    pub bot_token: SecretString,
}

impl std::fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &"[REDACTED]")
            .finish()
    }
}

impl TelegramConfig {
    /// Load Telegram configuration from environment.
    ///
    /// Returns `None` if `TELEGRAM_BOT_TOKEN` is not set (notifications disabled).
    fn from_env() -> Option<Self> {
        get_optional_env("TELEGRAM_BOT_TOKEN").map(|token| Self {
            bot_token: SecretString::from(token),
        })
    }
}

impl DeskConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is present but does not parse.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let host = get_env_or_default("DESK_HOST", "127.0.0.1")
            .parse::<IpAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar("DESK_HOST".to_string(), e.to_string()))?;
        let port = get_env_or_default("DESK_PORT", "3002")
            .parse::<u16>()
            .map_err(|e| ConfigError::InvalidEnvVar("DESK_PORT".to_string(), e.to_string()))?;
        let form_profile = get_env_or_default("DESK_FORM_PROFILE", "full")
            .parse::<FormProfile>()
            .map_err(|e| ConfigError::InvalidEnvVar("DESK_FORM_PROFILE".to_string(), e))?;
        let deposit_fee = parse_fee_env("DESK_DEPOSIT_FEE")?;
        let pickup_fee = parse_fee_env("DESK_PICKUP_FEE")?;

        Ok(Self {
            host,
            port,
            store_name: get_env_or_default("DESK_STORE_NAME", DEFAULT_STORE_NAME),
            passwords: RolePasswords::from_env(),
            form_profile,
            deposit_fee,
            pickup_fee,
            qr: QrConfig::from_env()?,
            announce: AnnounceConfig::from_env()?,
            telegram: TelegramConfig::from_env(),
        })
    }

    /// Returns the socket address for binding the server.
    #[must_use]
    pub const fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Returns the Telegram configuration, if available.
    ///
    /// Returns `None` if `TELEGRAM_BOT_TOKEN` was not set, which disables
    /// customer notifications.
    #[must_use]
    pub const fn telegram(&self) -> Option<&TelegramConfig> {
        self.telegram.as_ref()
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a non-negative decimal fee from the environment, defaulting to zero.
fn parse_fee_env(key: &str) -> Result<Decimal, ConfigError> {
    let raw = get_env_or_default(key, "0");
    let value = Decimal::from_str(&raw)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))?;
    if value.is_sign_negative() {
        return Err(ConfigError::InvalidEnvVar(
            key.to_string(),
            "fee cannot be negative".to_string(),
        ));
    }
    Ok(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn form_profile_parses() {
        assert_eq!("full".parse::<FormProfile>().expect("valid"), FormProfile::Full);
        assert_eq!(
            "compact".parse::<FormProfile>().expect("valid"),
            FormProfile::Compact
        );
        assert!("rich".parse::<FormProfile>().is_err());
    }

    #[test]
    fn passwords_are_redacted_in_debug() {
        let passwords = RolePasswords {
            creator: SecretString::from("202505"),
            admin: SecretString::from("2025"),
            cashier: SecretString::from("25"),
        };
        let rendered = format!("{passwords:?}");
        assert!(rendered.contains("[REDACTED]"));
        assert!(!rendered.contains("2025"));
    }
}
