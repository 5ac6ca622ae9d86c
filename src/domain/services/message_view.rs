//! Message composition: parts, timestamp and usage for one displayable block

use std::fmt::Write;

use chrono::{DateTime, Utc};

use crate::domain::models::{Message, Role};
use crate::domain::services::part_renderer::{render_parts, DisplayNode, DEFAULT_IMAGE_ALT};
use crate::shared::constants::DEFAULT_TIMESTAMP_FORMAT;

/// Where a displayed timestamp came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimestampSource {
    Metadata,
    Legacy,
    /// Render time. The displayed value can move between renders until the
    /// session attaches metadata.
    RenderTime,
}

/// Timestamp for a message: metadata, then the legacy field, then `now`
pub fn resolve_timestamp(message: &Message, now: DateTime<Utc>) -> (DateTime<Utc>, TimestampSource) {
    if let Some(created_at) = message.metadata.as_ref().and_then(|m| m.created_at) {
        return (created_at, TimestampSource::Metadata);
    }
    if let Some(created_at) = message.created_at {
        return (created_at, TimestampSource::Legacy);
    }
    (now, TimestampSource::RenderTime)
}

/// Display-ready message
#[derive(Debug, Clone, PartialEq)]
pub struct MessageView {
    pub id: String,
    pub role: Role,
    pub nodes: Vec<DisplayNode>,
    pub timestamp: DateTime<Utc>,
    pub timestamp_source: TimestampSource,
    pub usage_text: Option<String>,
}

impl MessageView {
    pub fn compose(message: &Message, now: DateTime<Utc>) -> Self {
        Self::compose_with_alt(message, now, DEFAULT_IMAGE_ALT)
    }

    pub fn compose_with_alt(message: &Message, now: DateTime<Utc>, default_alt: &str) -> Self {
        let (timestamp, timestamp_source) = resolve_timestamp(message, now);
        Self {
            id: message.id.clone(),
            role: message.role,
            nodes: render_parts(&message.parts, default_alt),
            timestamp,
            timestamp_source,
            usage_text: message
                .token_usage()
                .map(|usage| format!("{} tokens", usage.total_tokens)),
        }
    }

    /// User messages are styled apart from every other role
    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    /// Timestamp rendered with `format`, or with the default format when
    /// `format` is not valid strftime
    pub fn formatted_time(&self, format: &str) -> String {
        let mut out = String::new();
        if write!(out, "{}", self.timestamp.format(format)).is_err() {
            tracing::debug!(format = format, "Invalid timestamp format, using default");
            out.clear();
            let _ = write!(out, "{}", self.timestamp.format(DEFAULT_TIMESTAMP_FORMAT));
        }
        out
    }
}
