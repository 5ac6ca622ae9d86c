// Default values for the chat view configuration

pub const DEFAULT_TIMESTAMP_FORMAT: &str = "%H:%M:%S";
pub const DEFAULT_ERROR_BANNER_TEXT: &str = "An error occurred.";
pub const DEFAULT_LOADING_TEXT: &str = "Loading...";
pub const DEFAULT_INPUT_PLACEHOLDER: &str = "Say something...";
pub const DEFAULT_MESSAGES_END_ID: &str = "messages-end";
pub const DEFAULT_FILE_INPUT_ID: &str = "chat-file-input";

/// Delay between scripted stream events, in milliseconds
pub const DEFAULT_STREAM_DELAY_MS: u32 = 40;

/// Environment variable holding a JSON config (native only)
pub const CONFIG_ENV_VAR: &str = "STREAM_CHAT_VIEW_CONFIG";
