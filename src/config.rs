use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::constants::{
    CONFIG_DIR_NAME, CONFIG_FILE_NAME, DEFAULT_REPLY_DELAY_MS, DEFAULT_TYPING_DELAY_MS,
    LOG_FILE_NAME,
};
use crate::content::Locale;

/// Simulated buddy timing
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    pub typing_delay_ms: u64,
    pub reply_delay_ms: u64,
    /// Drop pending replies when leaving the chat tab
    pub cancel_on_leave: bool,
}

impl Default for ChatConfig {
    fn default() -> Self {
        ChatConfig {
            typing_delay_ms: DEFAULT_TYPING_DELAY_MS,
            reply_delay_ms: DEFAULT_REPLY_DELAY_MS,
            cancel_on_leave: true,
        }
    }
}

impl ChatConfig {
    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }

    /// Never earlier than the typing delay
    pub fn reply_delay(&self) -> Duration {
        Duration::from_millis(self.reply_delay_ms.max(self.typing_delay_ms))
    }
}

/// User settings read from `~/.signlearn/config.yaml`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_locale: Locale,
    pub chat: ChatConfig,
    /// Log file path, relative to the working directory unless absolute
    pub log_file: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            default_locale: Locale::default(),
            chat: ChatConfig::default(),
            log_file: PathBuf::from(LOG_FILE_NAME),
        }
    }
}

impl Config {
    pub fn config_dir() -> PathBuf {
        dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(CONFIG_DIR_NAME)
    }

    /// Load from the default location, falling back to defaults
    pub fn load() -> Self {
        Self::load_from(&Self::config_dir().join(CONFIG_FILE_NAME))
    }

    /// A missing file yields defaults; an unreadable or malformed one is
    /// logged and ignored.
    pub fn load_from(path: &Path) -> Self {
        match Self::read(path) {
            Ok(Some(config)) => {
                tracing::info!(path = %path.display(), "loaded config");
                config
            }
            Ok(None) => Config::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring config file");
                Config::default()
            }
        }
    }

    fn read(path: &Path) -> Result<Option<Self>> {
        if !path.exists() {
            return Ok(None);
        }
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading {}", path.display()))?;
        let config = serde_yaml::from_str(&content)
            .with_context(|| format!("parsing {}", path.display()))?;
        Ok(Some(config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.yaml"));
        assert_eq!(config, Config::default());
        assert_eq!(config.chat.typing_delay(), Duration::from_millis(1000));
        assert_eq!(config.chat.reply_delay(), Duration::from_millis(4000));
        assert!(config.chat.cancel_on_leave);
    }

    #[test]
    fn test_partial_file_keeps_other_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "default_locale: mr\nchat:\n  reply_delay_ms: 2500\n").unwrap();

        let config = Config::load_from(&path);
        assert_eq!(config.default_locale, Locale::Mr);
        assert_eq!(config.chat.reply_delay_ms, 2500);
        assert_eq!(config.chat.typing_delay_ms, DEFAULT_TYPING_DELAY_MS);
        assert_eq!(config.log_file, PathBuf::from(LOG_FILE_NAME));
    }

    #[test]
    fn test_malformed_file_is_ignored() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.yaml");
        fs::write(&path, "chat: [not, a, map").unwrap();
        assert_eq!(Config::load_from(&path), Config::default());
    }

    #[test]
    fn test_reply_delay_not_before_typing() {
        let chat = ChatConfig {
            typing_delay_ms: 3000,
            reply_delay_ms: 500,
            cancel_on_leave: false,
        };
        assert_eq!(chat.reply_delay(), Duration::from_millis(3000));
    }
}
