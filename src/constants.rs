//! Application constants
//!
//! Centralized location for file names and timing defaults.

/// Application name
pub const APP_NAME: &str = "SignLearn";

/// Application version
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Directory under $HOME holding user settings
pub const CONFIG_DIR_NAME: &str = ".signlearn";

/// Settings file inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Log file written next to the working directory
pub const LOG_FILE_NAME: &str = "signlearn.log";

/// Delay before a buddy starts "typing"
pub const DEFAULT_TYPING_DELAY_MS: u64 = 1000;

/// Delay before a buddy's simulated reply arrives, measured from send
pub const DEFAULT_REPLY_DELAY_MS: u64 = 4000;
