//! Scripted responder standing in for a model backend
//!
//! Produces a deterministic stream for a turn so the page can be exercised
//! without a server: a reasoning part, a source link for any URL in the
//! prompt, then the prompt echoed back word by word.

use crate::domain::models::{Part, TokenUsage};
use crate::domain::services::memory_session::{StreamEvent, TurnRequest};

/// Prompt word that makes the script fail, to exercise the error path
pub const FAILURE_TRIGGER: &str = "fail";

pub fn script_for(turn: &TurnRequest) -> Vec<StreamEvent> {
    let words: Vec<&str> = turn.prompt.split_whitespace().collect();

    let mut events = vec![StreamEvent::Start];
    if words.iter().any(|w| w.eq_ignore_ascii_case(FAILURE_TRIGGER)) {
        events.push(StreamEvent::Error("network timeout".to_string()));
        return events;
    }

    events.push(StreamEvent::Part(Part::reasoning(format!(
        "Echoing {} word(s), {} message(s) in context.",
        words.len(),
        turn.history.len()
    ))));

    for url in words.iter().filter(|w| w.starts_with("http://") || w.starts_with("https://")) {
        events.push(StreamEvent::Part(Part::source_url(*url, None)));
    }

    for (i, word) in words.iter().enumerate() {
        let delta = if i == 0 {
            word.to_string()
        } else {
            format!(" {}", word)
        };
        events.push(StreamEvent::TextDelta(delta));
    }

    events.push(StreamEvent::Finish {
        usage: Some(TokenUsage::total(words.len() as u64)),
    });
    events
}

/// Feed a whole script into a session without delays
pub fn play_now(
    session: &mut crate::domain::services::MemorySession,
    turn: u64,
    events: Vec<StreamEvent>,
) -> usize {
    let _span = crate::log_context!("echo", turn).entered();
    events
        .into_iter()
        .take_while(|event| session.apply(turn, event.clone()))
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::{OutgoingMessage, SessionStatus};
    use crate::domain::services::{ChatSession, MemorySession};

    fn make_turn(prompt: &str) -> TurnRequest {
        TurnRequest {
            turn: 1,
            prompt: prompt.to_string(),
            history: vec![],
        }
    }

    #[test]
    fn test_script_echoes_words_and_counts_tokens() {
        let events = script_for(&make_turn("hello there"));

        assert_eq!(events.first(), Some(&StreamEvent::Start));
        assert!(events.contains(&StreamEvent::TextDelta("hello".to_string())));
        assert!(events.contains(&StreamEvent::TextDelta(" there".to_string())));
        assert_eq!(
            events.last(),
            Some(&StreamEvent::Finish {
                usage: Some(TokenUsage::total(2))
            })
        );
    }

    #[test]
    fn test_script_links_urls() {
        let events = script_for(&make_turn("see https://www.rust-lang.org now"));
        assert!(events.contains(&StreamEvent::Part(Part::source_url(
            "https://www.rust-lang.org",
            None
        ))));
    }

    #[test]
    fn test_failure_trigger_ends_in_error() {
        let events = script_for(&make_turn("please FAIL"));
        assert_eq!(
            events,
            vec![
                StreamEvent::Start,
                StreamEvent::Error("network timeout".to_string())
            ]
        );
    }

    #[test]
    fn test_play_now_completes_turn() {
        let mut session = MemorySession::default();
        session.send(OutgoingMessage {
            text: "hi there".to_string(),
            attachments: vec![],
        });
        let turn = session.take_pending_turn().unwrap();
        let events = script_for(&turn);
        let total = events.len();

        assert_eq!(play_now(&mut session, turn.turn, events), total);
        assert_eq!(session.status(), SessionStatus::Ready);
        assert_eq!(session.messages()[1].parts.last(), Some(&Part::text("hi there")));
    }

    #[test]
    fn test_play_now_stops_at_stale_turn() {
        let mut session = MemorySession::default();
        session.send(OutgoingMessage {
            text: "hi".to_string(),
            attachments: vec![],
        });
        let turn = session.take_pending_turn().unwrap();
        session.stop();

        assert_eq!(play_now(&mut session, turn.turn, script_for(&turn)), 0);
        assert_eq!(session.messages().len(), 1);
    }
}
