//! Application configuration
//!
//! The desktop entry point builds an [`AppConfig`] from the command line and
//! environment, validates it and stores it with [`AppConfig::install`] before
//! launching. The web build never installs one and runs on defaults.

use once_cell::sync::OnceCell;

use crate::shared::errors::{AppError, Result};

pub const DEFAULT_TITLE: &str = "AI Chat";
pub const DEFAULT_ASSISTANT_NAME: &str = "Assistant";
pub const DEFAULT_MAX_INPUT_CHARS: usize = 4000;

static CONFIG: OnceCell<AppConfig> = OnceCell::new();

#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Shown in the navbar and on the home page
    pub title: String,
    /// Display name of the chat counterpart
    pub assistant_name: String,
    /// Upper bound on a single chat message, in characters
    pub max_input_chars: usize,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_TITLE.to_string(),
            assistant_name: DEFAULT_ASSISTANT_NAME.to_string(),
            max_input_chars: DEFAULT_MAX_INPUT_CHARS,
        }
    }
}

impl AppConfig {
    pub fn validate(&self) -> Result<()> {
        if self.title.trim().is_empty() {
            return Err(AppError::Config("title must not be empty".to_string()));
        }
        if self.assistant_name.trim().is_empty() {
            return Err(AppError::Config("assistant name must not be empty".to_string()));
        }
        if self.max_input_chars == 0 {
            return Err(AppError::Config("max_input_chars must be greater than 0".to_string()));
        }
        Ok(())
    }

    /// Validate and store the process-wide configuration. Only the first call wins.
    pub fn install(self) -> Result<()> {
        self.validate()?;
        CONFIG
            .set(self)
            .map_err(|_| AppError::Config("configuration already installed".to_string()))
    }

    /// The installed configuration, or defaults when none was installed
    pub fn current() -> AppConfig {
        CONFIG.get().cloned().unwrap_or_default()
    }
}

/// Command line for the desktop build
#[cfg(not(target_arch = "wasm32"))]
#[derive(Debug, clap::Parser)]
#[command(name = "chat-router", about = "AI chat front end")]
pub struct Cli {
    /// Tracing filter directive (e.g. `info`, `chat_router=debug`)
    #[arg(long, env = "CHAT_ROUTER_LOG", default_value = "info")]
    pub log_filter: String,

    /// Application title
    #[arg(long, env = "CHAT_ROUTER_TITLE", default_value = DEFAULT_TITLE)]
    pub title: String,

    /// Assistant display name
    #[arg(long, env = "CHAT_ROUTER_ASSISTANT", default_value = DEFAULT_ASSISTANT_NAME)]
    pub assistant_name: String,

    /// Maximum characters per chat message
    #[arg(long, env = "CHAT_ROUTER_MAX_INPUT_CHARS", default_value_t = DEFAULT_MAX_INPUT_CHARS)]
    pub max_input_chars: usize,
}

#[cfg(not(target_arch = "wasm32"))]
impl From<&Cli> for AppConfig {
    fn from(cli: &Cli) -> Self {
        Self {
            title: cli.title.clone(),
            assistant_name: cli.assistant_name.clone(),
            max_input_chars: cli.max_input_chars,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert!(AppConfig::default().validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_values() {
        let config = AppConfig { title: "  ".to_string(), ..Default::default() };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));

        let config = AppConfig { max_input_chars: 0, ..Default::default() };
        assert!(matches!(config.validate(), Err(AppError::Config(_))));
    }

    #[test]
    fn test_install_rejects_invalid_config() {
        let config = AppConfig { assistant_name: String::new(), ..Default::default() };
        assert!(config.install().is_err());
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_cli_into_config() {
        use clap::Parser;

        let cli = Cli::try_parse_from([
            "chat-router",
            "--title",
            "Support Desk",
            "--max-input-chars",
            "280",
        ])
        .unwrap();
        let config = AppConfig::from(&cli);
        assert_eq!(config.title, "Support Desk");
        assert_eq!(config.max_input_chars, 280);
        assert_eq!(config.assistant_name, DEFAULT_ASSISTANT_NAME);
    }
}
