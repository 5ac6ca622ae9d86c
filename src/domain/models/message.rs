use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Author of a message
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Assistant,
    System,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
            Role::System => "system",
        }
    }
}

/// One unit of content inside a message.
///
/// Tags follow the chat engine's wire names (`text`, `reasoning`, `file`,
/// `source-url`, `source-document`). Any other tag deserializes to `Unknown`
/// instead of failing, so newer part types coming from the engine never
/// break a whole message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "kebab-case", rename_all_fields = "camelCase")]
pub enum Part {
    Text {
        #[serde(default)]
        text: String,
    },
    Reasoning {
        #[serde(default)]
        text: String,
    },
    File {
        #[serde(default)]
        media_type: Option<String>,
        #[serde(default)]
        url: Option<String>,
        #[serde(default)]
        filename: Option<String>,
    },
    SourceUrl {
        #[serde(default)]
        source_id: Option<String>,
        #[serde(default)]
        url: Option<String>,
        #[serde(default)]
        title: Option<String>,
    },
    SourceDocument {
        #[serde(default)]
        source_id: Option<String>,
        #[serde(default)]
        title: Option<String>,
        #[serde(default)]
        media_type: Option<String>,
    },
    #[serde(other)]
    Unknown,
}

impl Part {
    pub fn text(text: impl Into<String>) -> Self {
        Part::Text { text: text.into() }
    }

    pub fn reasoning(text: impl Into<String>) -> Self {
        Part::Reasoning { text: text.into() }
    }

    pub fn file(media_type: impl Into<String>, url: impl Into<String>, filename: Option<String>) -> Self {
        Part::File {
            media_type: Some(media_type.into()),
            url: Some(url.into()),
            filename,
        }
    }

    pub fn source_url(url: impl Into<String>, title: Option<String>) -> Self {
        Part::SourceUrl {
            source_id: None,
            url: Some(url.into()),
            title,
        }
    }

    /// Wire tag of this part, used in logs
    pub fn kind(&self) -> &'static str {
        match self {
            Part::Text { .. } => "text",
            Part::Reasoning { .. } => "reasoning",
            Part::File { .. } => "file",
            Part::SourceUrl { .. } => "source-url",
            Part::SourceDocument { .. } => "source-document",
            Part::Unknown => "unknown",
        }
    }
}

/// Token usage reported once an assistant turn completes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TokenUsage {
    #[serde(default)]
    pub input_tokens: Option<u64>,
    #[serde(default)]
    pub output_tokens: Option<u64>,
    pub total_tokens: u64,
}

impl TokenUsage {
    pub fn total(total_tokens: u64) -> Self {
        Self {
            input_tokens: None,
            output_tokens: None,
            total_tokens,
        }
    }
}

/// Metadata attached by the chat engine (creation time in epoch millis, usage)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MessageMetadata {
    #[serde(default, with = "chrono::serde::ts_milliseconds_option")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub total_usage: Option<TokenUsage>,
}

/// Message in the session's authoritative list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Message {
    pub id: String,
    pub role: Role,
    #[serde(default)]
    pub parts: Vec<Part>,
    #[serde(default)]
    pub metadata: Option<MessageMetadata>,
    /// Legacy per-message timestamp, older engines set this instead of metadata
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl Message {
    pub fn new(id: impl Into<String>, role: Role, parts: Vec<Part>) -> Self {
        Self {
            id: id.into(),
            role,
            parts,
            metadata: None,
            created_at: None,
        }
    }

    pub fn is_user(&self) -> bool {
        self.role == Role::User
    }

    pub fn token_usage(&self) -> Option<TokenUsage> {
        self.metadata.as_ref().and_then(|m| m.total_usage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_part_tag_deserializes_to_unknown() {
        let json = r#"{"id":"1","role":"assistant","parts":[
            {"type":"step-start"},
            {"type":"text","text":"hi"},
            {"type":"tool-weather","toolCallId":"x","state":"input-available"}
        ]}"#;
        let message: Message = serde_json::from_str(json).unwrap();

        assert_eq!(message.parts.len(), 3);
        assert_eq!(message.parts[0], Part::Unknown);
        assert_eq!(message.parts[1], Part::text("hi"));
        assert_eq!(message.parts[2], Part::Unknown);
    }

    #[test]
    fn test_file_part_without_media_type_still_parses() {
        let json = r#"{"type":"file","url":"https://example.com/a.pdf"}"#;
        let part: Part = serde_json::from_str(json).unwrap();

        assert_eq!(
            part,
            Part::File {
                media_type: None,
                url: Some("https://example.com/a.pdf".to_string()),
                filename: None,
            }
        );
    }

    #[test]
    fn test_metadata_created_at_is_epoch_millis() {
        let json = r#"{"id":"m1","role":"assistant","parts":[],
            "metadata":{"createdAt":1700000000000,"totalUsage":{"totalTokens":42}}}"#;
        let message: Message = serde_json::from_str(json).unwrap();
        let metadata = message.metadata.clone().unwrap();

        assert_eq!(metadata.created_at.unwrap().timestamp(), 1_700_000_000);
        assert_eq!(message.token_usage().unwrap().total_tokens, 42);
    }

    #[test]
    fn test_source_parts_use_camel_case_fields() {
        let json = r#"{"type":"source-document","sourceId":"doc-7","title":"Handbook"}"#;
        let part: Part = serde_json::from_str(json).unwrap();

        assert_eq!(part.kind(), "source-document");
        assert!(matches!(
            part,
            Part::SourceDocument { source_id: Some(ref id), .. } if id == "doc-7"
        ));
    }
}
