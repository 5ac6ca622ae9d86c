//! Structured logging for the chat view
//!
//! Provides consistent, contextual logging across the view controllers.
//! Every event carries an `operation` field so logs can be filtered per concern.

/// Log operations for the chat view
#[derive(Debug, Clone, Copy)]
pub enum LogOperation {
    Render,
    Submit,
    Status,
    Scroll,
    Delete,
    Stream,
}

impl LogOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            LogOperation::Render => "render",
            LogOperation::Submit => "submit",
            LogOperation::Status => "status",
            LogOperation::Scroll => "scroll",
            LogOperation::Delete => "delete",
            LogOperation::Stream => "stream",
        }
    }
}

/// Log a message list render
pub fn log_render(message_count: usize, revision: u64) {
    tracing::trace!(
        operation = LogOperation::Render.as_str(),
        message_count = message_count,
        revision = revision,
        "Rendering message list"
    );
}

/// Log a forwarded submission
pub fn log_submit(text_len: usize, attachment_count: usize) {
    tracing::info!(
        operation = LogOperation::Submit.as_str(),
        text_len = text_len,
        attachment_count = attachment_count,
        "Submitting user turn"
    );
}

/// Log a blank submission that was swallowed
pub fn log_submit_ignored(attachment_count: usize) {
    tracing::debug!(
        operation = LogOperation::Submit.as_str(),
        attachment_count = attachment_count,
        "Ignoring submit with blank text"
    );
}

/// Log a status transition seen by an observer
pub fn log_status(from: &str, to: &str) {
    tracing::debug!(
        operation = LogOperation::Status.as_str(),
        from = from,
        to = to,
        "Session status changed"
    );
}

/// Log a scroll-to-bottom request
pub fn log_scroll(revision: u64) {
    tracing::trace!(
        operation = LogOperation::Scroll.as_str(),
        revision = revision,
        "Scrolling viewport to bottom"
    );
}

/// Log a delete request
pub fn log_delete(message_id: &str, found: bool) {
    if found {
        tracing::info!(
            operation = LogOperation::Delete.as_str(),
            message_id = message_id,
            "Deleted message"
        );
    } else {
        tracing::debug!(
            operation = LogOperation::Delete.as_str(),
            message_id = message_id,
            "Delete ignored, no message with this id"
        );
    }
}

/// Log a streamed part
pub fn log_stream_part(kind: &str) {
    tracing::trace!(
        operation = LogOperation::Stream.as_str(),
        part_type = kind,
        "Received part"
    );
}

/// Log a streamed text delta
pub fn log_stream_delta(len: usize) {
    tracing::trace!(
        operation = LogOperation::Stream.as_str(),
        delta_len = len,
        "Received text delta"
    );
}

/// Log a stream failure reported by the session
pub fn log_stream_error(error: &str) {
    tracing::error!(
        operation = LogOperation::Stream.as_str(),
        error = error,
        "Stream failed"
    );
}

/// Log stream completion
pub fn log_stream_finish(message_id: &str, total_tokens: Option<u64>) {
    tracing::info!(
        operation = LogOperation::Stream.as_str(),
        message_id = message_id,
        total_tokens = total_tokens,
        "Stream finished"
    );
}

/// Macro for creating structured log context
#[macro_export]
macro_rules! log_context {
    ($session:expr) => {
        tracing::info_span!("chat_view", session = $session)
    };
    ($session:expr, $turn:expr) => {
        tracing::info_span!("chat_view", session = $session, turn = $turn)
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_operation_as_str() {
        assert_eq!(LogOperation::Render.as_str(), "render");
        assert_eq!(LogOperation::Submit.as_str(), "submit");
        assert_eq!(LogOperation::Status.as_str(), "status");
        assert_eq!(LogOperation::Scroll.as_str(), "scroll");
        assert_eq!(LogOperation::Delete.as_str(), "delete");
        assert_eq!(LogOperation::Stream.as_str(), "stream");
    }
}
