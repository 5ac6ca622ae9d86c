//! Keep the viewport pinned to the newest content
//!
//! Every message-list change results in exactly one scroll-to-bottom request,
//! whatever the number of parts in the update. The controller does not detect
//! a user who scrolled up to read history; it always scrolls.

use crate::domain::services::session::{SessionChange, SessionObserver};

/// How the viewport should move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Smooth,
    Instant,
}

impl ScrollBehavior {
    pub fn as_str(&self) -> &'static str {
        match self {
            ScrollBehavior::Smooth => "smooth",
            ScrollBehavior::Instant => "instant",
        }
    }
}

/// Something that can be scrolled to its bottom edge
pub trait ScrollViewport {
    fn scroll_to_bottom(&self, behavior: ScrollBehavior);
}

/// Fires one smooth scroll per observed message revision
pub struct ScrollController<V: ScrollViewport> {
    viewport: V,
    last_revision: Option<u64>,
}

impl<V: ScrollViewport> ScrollController<V> {
    pub fn new(viewport: V) -> Self {
        Self {
            viewport,
            last_revision: None,
        }
    }

    pub fn viewport(&self) -> &V {
        &self.viewport
    }

    /// Scroll if `revision` was not seen yet. Returns whether a scroll was issued.
    pub fn observe(&mut self, revision: u64) -> bool {
        if self.last_revision == Some(revision) {
            return false;
        }
        self.last_revision = Some(revision);
        crate::shared::logging::log_scroll(revision);
        self.viewport.scroll_to_bottom(ScrollBehavior::Smooth);
        true
    }
}

/// Direct subscription to a session. `ChatMessages` feeds `observe` from an
/// effect on the session signal, so the scroll runs after the DOM update.
impl<V: ScrollViewport> SessionObserver for ScrollController<V> {
    fn on_change(&mut self, change: &SessionChange) {
        if let SessionChange::Messages { revision } = change {
            self.observe(*revision);
        }
    }
}

#[cfg(test)]
pub(crate) mod testing {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    /// Viewport double counting scroll requests
    #[derive(Clone, Default)]
    pub struct CountingViewport {
        pub calls: Rc<RefCell<Vec<ScrollBehavior>>>,
    }

    impl CountingViewport {
        pub fn count(&self) -> usize {
            self.calls.borrow().len()
        }
    }

    impl ScrollViewport for CountingViewport {
        fn scroll_to_bottom(&self, behavior: ScrollBehavior) {
            self.calls.borrow_mut().push(behavior);
        }
    }
}
