//! Transport config: token, optional Bot API URL, long-poll timeout and restart delay.
//! Loaded from env: BOT_TOKEN, TELEGRAM_API_URL (or TELOXIDE_API_URL), POLL_TIMEOUT_SECS,
//! RESTART_DELAY_SECS.

use anyhow::{Context, Result};
use std::env;
use std::fmt;
use std::time::Duration;
use tracing::error;

/// Telegram connectivity and polling settings.
#[derive(Clone)]
pub struct TelegramConfig {
    pub bot_token: String,
    pub telegram_api_url: Option<String>,
    /// Long-poll timeout for getUpdates.
    pub poll_timeout_secs: u64,
    /// Fixed pause after an update listener error or a dispatcher crash.
    pub restart_delay_secs: u64,
}

impl fmt::Debug for TelegramConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TelegramConfig")
            .field("bot_token", &"***")
            .field("telegram_api_url", &self.telegram_api_url)
            .field("poll_timeout_secs", &self.poll_timeout_secs)
            .field("restart_delay_secs", &self.restart_delay_secs)
            .finish()
    }
}

pub const DEFAULT_POLL_TIMEOUT_SECS: u64 = 25;
pub const DEFAULT_RESTART_DELAY_SECS: u64 = 3;
/// Extra time the HTTP client waits beyond the long-poll timeout before giving up on a request.
pub const CLIENT_TIMEOUT_MARGIN_SECS: u64 = 10;

impl TelegramConfig {
    /// Loads from env. `token` overrides BOT_TOKEN; one of them is required.
    pub fn load(token: Option<String>) -> Result<Self> {
        let bot_token = match token {
            Some(t) => t,
            None => env::var("BOT_TOKEN").map_err(|_| anyhow::anyhow!("BOT_TOKEN not set"))?,
        };
        let telegram_api_url = env::var("TELEGRAM_API_URL")
            .or_else(|_| env::var("TELOXIDE_API_URL"))
            .ok();
        let poll_timeout_secs = env::var("POLL_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_POLL_TIMEOUT_SECS);
        let restart_delay_secs = env::var("RESTART_DELAY_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(DEFAULT_RESTART_DELAY_SECS);

        Ok(Self {
            bot_token,
            telegram_api_url,
            poll_timeout_secs,
            restart_delay_secs,
        })
    }

    /// Builds config with the given token; everything else at defaults.
    pub fn with_token(bot_token: String) -> Self {
        Self {
            bot_token,
            telegram_api_url: None,
            poll_timeout_secs: DEFAULT_POLL_TIMEOUT_SECS,
            restart_delay_secs: DEFAULT_RESTART_DELAY_SECS,
        }
    }

    /// Validates config: non-empty token, telegram_api_url must be a valid URL if set.
    pub fn validate(&self) -> Result<()> {
        if self.bot_token.trim().is_empty() {
            anyhow::bail!("BOT_TOKEN is empty");
        }
        if let Some(ref url_str) = self.telegram_api_url {
            if reqwest::Url::parse(url_str).is_err() {
                anyhow::bail!(
                    "TELEGRAM_API_URL (or TELOXIDE_API_URL) is set but not a valid URL: {}",
                    url_str
                );
            }
        }
        Ok(())
    }

    pub fn poll_timeout(&self) -> Duration {
        Duration::from_secs(self.poll_timeout_secs)
    }

    pub fn restart_delay(&self) -> Duration {
        Duration::from_secs(self.restart_delay_secs)
    }

    /// HTTP request timeout; always longer than the long-poll timeout so an idle getUpdates
    /// returns from the server before the client cuts it off.
    pub fn client_timeout(&self) -> Duration {
        self.poll_timeout() + Duration::from_secs(CLIENT_TIMEOUT_MARGIN_SECS)
    }

    /// Creates the teloxide Bot with a client sized for long polling, pointed at
    /// telegram_api_url when set.
    pub fn build_bot(&self) -> Result<teloxide::Bot> {
        let client = teloxide::net::default_reqwest_settings()
            .timeout(self.client_timeout())
            .build()
            .context("Failed to build HTTP client for the Bot API")?;
        let bot = teloxide::Bot::with_client(self.bot_token.clone(), client);
        let bot = match self.telegram_api_url {
            Some(ref url_str) => match reqwest::Url::parse(url_str) {
                Ok(url) => bot.set_api_url(url),
                Err(e) => {
                    error!(error = %e, url = %url_str, "Invalid TELEGRAM_API_URL, using default");
                    bot
                }
            },
            None => bot,
        };
        Ok(bot)
    }
}
