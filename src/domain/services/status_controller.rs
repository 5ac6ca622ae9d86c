//! Control gating over the session status
//!
//! Transitions belong to the session. This controller only derives which
//! controls are usable from the current status and forwards stop/regenerate
//! requests when their gate is open.

use crate::domain::models::{SessionStatus, StatusGates};
use crate::domain::services::session::{ChatSession, SessionChange, SessionObserver};

/// Gate table for a status value
pub fn gates_for(status: SessionStatus) -> StatusGates {
    match status {
        SessionStatus::Ready => StatusGates {
            can_send: true,
            can_stop: false,
            can_regenerate: true,
            show_loading: false,
            show_error: false,
        },
        SessionStatus::Submitted => StatusGates {
            can_send: false,
            can_stop: true,
            can_regenerate: false,
            show_loading: true,
            show_error: false,
        },
        SessionStatus::Streaming => StatusGates {
            can_send: false,
            can_stop: true,
            can_regenerate: false,
            show_loading: false,
            show_error: false,
        },
        SessionStatus::Error => StatusGates {
            can_send: false,
            can_stop: false,
            can_regenerate: true,
            show_loading: false,
            show_error: true,
        },
    }
}

/// Tracks the latest status it was notified of
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StreamStatusController {
    status: SessionStatus,
}

impl StreamStatusController {
    pub fn new(status: SessionStatus) -> Self {
        Self { status }
    }

    pub fn status(&self) -> SessionStatus {
        self.status
    }

    pub fn gates(&self) -> StatusGates {
        gates_for(self.status)
    }

    pub fn can_send(&self) -> bool {
        self.gates().can_send
    }

    pub fn can_stop(&self) -> bool {
        self.gates().can_stop
    }

    pub fn can_regenerate(&self) -> bool {
        self.gates().can_regenerate
    }

    /// Forward a stop request; no-op when nothing is in flight
    pub fn stop<S: ChatSession + ?Sized>(&self, session: &mut S) -> bool {
        if !self.can_stop() {
            tracing::debug!(status = self.status.as_str(), "Ignoring stop outside an in-flight turn");
            return false;
        }
        session.stop();
        true
    }

    /// Forward a regenerate request when the gate allows it
    pub fn regenerate<S: ChatSession + ?Sized>(&self, session: &mut S) -> bool {
        if !self.can_regenerate() {
            tracing::debug!(status = self.status.as_str(), "Ignoring regenerate while a turn is in flight");
            return false;
        }
        session.regenerate();
        true
    }

    /// Forward a retry after an error
    pub fn reload<S: ChatSession + ?Sized>(&self, session: &mut S) -> bool {
        if self.status != SessionStatus::Error {
            return false;
        }
        session.reload();
        true
    }
}

/// Keeps a long-lived controller in step with a session it subscribed to.
/// Components build a fresh controller per render from the session signal instead.
impl SessionObserver for StreamStatusController {
    fn on_change(&mut self, change: &SessionChange) {
        if let SessionChange::Status(status) = change {
            crate::shared::logging::log_status(self.status.as_str(), status.as_str());
            self.status = *status;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::services::session::testing::FakeSession;

    #[test]
    fn test_gate_table() {
        let ready = gates_for(SessionStatus::Ready);
        assert!(ready.can_send && !ready.can_stop && ready.can_regenerate);
        assert!(!ready.show_loading && !ready.show_error);

        let submitted = gates_for(SessionStatus::Submitted);
        assert!(!submitted.can_send && submitted.can_stop && !submitted.can_regenerate);
        assert!(submitted.show_loading);

        let streaming = gates_for(SessionStatus::Streaming);
        assert!(!streaming.can_send && streaming.can_stop && !streaming.can_regenerate);
        assert!(!streaming.show_loading);

        let error = gates_for(SessionStatus::Error);
        assert!(!error.can_send && !error.can_stop && error.can_regenerate);
        assert!(error.show_error);
    }

    #[test]
    fn test_stop_enabled_only_while_in_flight_across_a_turn() {
        let mut controller = StreamStatusController::default();
        let mut seen = Vec::new();

        for status in [
            SessionStatus::Ready,
            SessionStatus::Submitted,
            SessionStatus::Streaming,
            SessionStatus::Ready,
        ] {
            controller.on_change(&SessionChange::Status(status));
            seen.push(controller.can_stop());
        }

        assert_eq!(seen, vec![false, true, true, false]);
    }

    #[test]
    fn test_loading_never_shown_without_stop() {
        for status in [
            SessionStatus::Ready,
            SessionStatus::Submitted,
            SessionStatus::Streaming,
            SessionStatus::Error,
        ] {
            let gates = gates_for(status);
            assert!(!gates.show_loading || gates.can_stop, "{:?}", status);
        }
    }

    #[test]
    fn test_stop_is_noop_when_ready() {
        let controller = StreamStatusController::new(SessionStatus::Ready);
        let mut session = FakeSession::default();

        assert!(!controller.stop(&mut session));
        assert_eq!(session.stop_calls, 0);
    }

    #[test]
    fn test_stop_forwards_while_streaming() {
        let controller = StreamStatusController::new(SessionStatus::Streaming);
        let mut session = FakeSession::default();

        assert!(controller.stop(&mut session));
        assert_eq!(session.stop_calls, 1);
    }

    #[test]
    fn test_error_state_offers_retry_and_regenerate() {
        let controller = StreamStatusController::new(SessionStatus::Error);
        let mut session = FakeSession::default();

        assert!(!controller.can_send());
        assert!(controller.reload(&mut session));
        assert!(controller.regenerate(&mut session));
        assert_eq!(session.reload_calls, 1);
        assert_eq!(session.regenerate_calls, 1);
    }

    #[test]
    fn test_regenerate_blocked_while_submitted() {
        let controller = StreamStatusController::new(SessionStatus::Submitted);
        let mut session = FakeSession::default();

        assert!(!controller.regenerate(&mut session));
        assert!(!controller.reload(&mut session));
        assert_eq!(session.regenerate_calls, 0);
    }

    #[test]
    fn test_message_changes_do_not_touch_status() {
        let mut controller = StreamStatusController::new(SessionStatus::Streaming);
        controller.on_change(&SessionChange::Messages { revision: 9 });
        assert_eq!(controller.status(), SessionStatus::Streaming);
    }
}
