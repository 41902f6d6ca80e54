//! Application config: Telegram transport settings plus admin recipients and log file.

use anyhow::{Context, Result};
use intake_telegram::TelegramConfig;
use std::env;

pub const DEFAULT_LOG_FILE: &str = "logs/intake-bot.log";

/// Bot config, loaded from env (after `.env`).
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub telegram: TelegramConfig,
    /// Chats that receive every inquiry, in delivery order.
    pub admin_chat_ids: Vec<i64>,
    pub log_file: String,
}

impl BotConfig {
    /// Loads from env. `token` overrides BOT_TOKEN. ADMIN_CHAT_IDS is required and must parse.
    pub fn load(token: Option<String>) -> Result<Self> {
        let telegram = TelegramConfig::load(token)?;
        let raw_admins = env::var("ADMIN_CHAT_IDS").context("ADMIN_CHAT_IDS not set")?;
        let admin_chat_ids = parse_admin_ids(&raw_admins)?;
        let log_file = env::var("LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string());

        Ok(Self {
            telegram,
            admin_chat_ids,
            log_file,
        })
    }

    pub fn validate(&self) -> Result<()> {
        self.telegram.validate()?;
        if self.admin_chat_ids.is_empty() {
            anyhow::bail!("ADMIN_CHAT_IDS must contain at least one chat id");
        }
        if self.log_file.trim().is_empty() {
            anyhow::bail!("LOG_FILE is empty");
        }
        Ok(())
    }
}

/// Parses admin chat ids separated by commas, semicolons or whitespace. Every entry must be an
/// integer (group chats are negative) and at least one is required.
pub fn parse_admin_ids(raw: &str) -> Result<Vec<i64>> {
    let ids = raw
        .split(|c: char| c == ',' || c == ';' || c.is_whitespace())
        .filter(|part| !part.is_empty())
        .map(|part| {
            part.parse::<i64>()
                .with_context(|| format!("ADMIN_CHAT_IDS entry is not a chat id: {:?}", part))
        })
        .collect::<Result<Vec<_>>>()?;

    if ids.is_empty() {
        anyhow::bail!("ADMIN_CHAT_IDS is empty");
    }
    Ok(ids)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    fn clear_env() {
        for key in [
            "BOT_TOKEN",
            "ADMIN_CHAT_IDS",
            "LOG_FILE",
            "TELEGRAM_API_URL",
            "TELOXIDE_API_URL",
            "POLL_TIMEOUT_SECS",
            "RESTART_DELAY_SECS",
        ] {
            env::remove_var(key);
        }
    }

    #[test]
    fn test_parse_admin_ids_separators() {
        assert_eq!(parse_admin_ids("1").unwrap(), vec![1]);
        assert_eq!(
            parse_admin_ids("1, 2;3  -1004\n5").unwrap(),
            vec![1, 2, 3, -1004, 5]
        );
    }

    #[test]
    fn test_parse_admin_ids_rejects_garbage() {
        assert!(parse_admin_ids("").is_err());
        assert!(parse_admin_ids(" , ;").is_err());
        assert!(parse_admin_ids("123,abc").is_err());
        assert!(parse_admin_ids("12.5").is_err());
    }

    #[test]
    #[serial]
    fn test_load_with_defaults() {
        clear_env();
        env::set_var("BOT_TOKEN", "test_token");
        env::set_var("ADMIN_CHAT_IDS", "111,222");

        let config = BotConfig::load(None).unwrap();

        assert_eq!(config.telegram.bot_token, "test_token");
        assert_eq!(config.admin_chat_ids, vec![111, 222]);
        assert_eq!(config.log_file, DEFAULT_LOG_FILE);
        assert!(config.validate().is_ok());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_token_override_and_log_file() {
        clear_env();
        env::set_var("BOT_TOKEN", "env_token");
        env::set_var("ADMIN_CHAT_IDS", "-100123");
        env::set_var("LOG_FILE", "/tmp/intake.log");

        let config = BotConfig::load(Some("cli_token".to_string())).unwrap();

        assert_eq!(config.telegram.bot_token, "cli_token");
        assert_eq!(config.admin_chat_ids, vec![-100123]);
        assert_eq!(config.log_file, "/tmp/intake.log");
        clear_env();
    }

    #[test]
    #[serial]
    fn test_load_requires_admins() {
        clear_env();
        env::set_var("BOT_TOKEN", "test_token");
        assert!(BotConfig::load(None).is_err());

        env::set_var("ADMIN_CHAT_IDS", "not-a-number");
        assert!(BotConfig::load(None).is_err());
        clear_env();
    }

    #[test]
    #[serial]
    fn test_validate_rejects_bad_api_url() {
        clear_env();
        env::set_var("ADMIN_CHAT_IDS", "1");
        env::set_var("TELEGRAM_API_URL", "not a url");

        let config = BotConfig::load(Some("token".to_string())).unwrap();
        assert!(config.validate().is_err());
        clear_env();
    }
}
