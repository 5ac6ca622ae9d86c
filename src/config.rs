//! View configuration
//!
//! Every field has a default, so a partial JSON document (or none at all) is
//! enough to build a config.

use chrono::format::{Item, StrftimeItems};
use serde::{Deserialize, Serialize};

use crate::domain::services::part_renderer::DEFAULT_IMAGE_ALT;
use crate::shared::constants::*;
use crate::shared::errors::{AppError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatUiConfig {
    /// chrono format string for message timestamps
    pub timestamp_format: String,
    pub default_image_alt: String,
    pub error_banner_text: String,
    pub loading_text: String,
    pub input_placeholder: String,
    /// DOM id of the sentinel element scrolled into view
    pub messages_end_id: String,
    pub file_input_id: String,
    pub stream_delay_ms: u32,
}

impl Default for ChatUiConfig {
    fn default() -> Self {
        Self {
            timestamp_format: DEFAULT_TIMESTAMP_FORMAT.to_string(),
            default_image_alt: DEFAULT_IMAGE_ALT.to_string(),
            error_banner_text: DEFAULT_ERROR_BANNER_TEXT.to_string(),
            loading_text: DEFAULT_LOADING_TEXT.to_string(),
            input_placeholder: DEFAULT_INPUT_PLACEHOLDER.to_string(),
            messages_end_id: DEFAULT_MESSAGES_END_ID.to_string(),
            file_input_id: DEFAULT_FILE_INPUT_ID.to_string(),
            stream_delay_ms: DEFAULT_STREAM_DELAY_MS,
        }
    }
}

impl ChatUiConfig {
    pub fn from_json_str(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Read the config from `STREAM_CHAT_VIEW_CONFIG`, `None` when unset
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Result<Option<Self>> {
        match std::env::var(CONFIG_ENV_VAR) {
            Ok(raw) => Self::from_json_str(&raw).map(Some),
            Err(std::env::VarError::NotPresent) => Ok(None),
            Err(e) => Err(AppError::Config(format!("{}: {}", CONFIG_ENV_VAR, e))),
        }
    }

    fn validate(&self) -> Result<()> {
        if self.messages_end_id.trim().is_empty() {
            return Err(AppError::Config("messages_end_id must not be empty".to_string()));
        }
        if self.file_input_id.trim().is_empty() {
            return Err(AppError::Config("file_input_id must not be empty".to_string()));
        }
        if self.timestamp_format.trim().is_empty() {
            return Err(AppError::Config("timestamp_format must not be empty".to_string()));
        }
        if StrftimeItems::new(&self.timestamp_format).any(|item| matches!(item, Item::Error)) {
            return Err(AppError::Config(format!(
                "timestamp_format is not a valid strftime string: {}",
                self.timestamp_format
            )));
        }
        Ok(())
    }
}
