/// Focus/interaction state machine.
///
/// Purely symbolic: tracks which body is focused and interprets click
/// sequences. Holds no positional data and is driven only by discrete
/// input events, never by time.

use serde::Serialize;

use crate::bodies::BodyId;

/// Two clicks on the focused body within this window open its detail panel.
pub const DOUBLE_CLICK_WINDOW_SECS: f64 = 0.5;

/// The target exists if and only if the state is focused — encoded by the
/// enum so the invariant cannot be violated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase", tag = "state", content = "target")]
pub enum Focus {
    System,
    Body(BodyId),
}

impl Focus {
    pub fn target(self) -> Option<BodyId> {
        match self {
            Focus::System => None,
            Focus::Body(id) => Some(id),
        }
    }

    pub fn is_focused(self) -> bool {
        matches!(self, Focus::Body(_))
    }
}

/// What a click on a body produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickOutcome {
    /// First focus from the system view — begin a camera transition.
    Focused(BodyId),
    /// Focus moved from one body to another — begin a new transition.
    Refocused(BodyId),
    /// Second click on the focused body inside the window — open its panel.
    OpenDetail(BodyId),
    /// Click on the focused body outside the window — click time recorded.
    Noted,
}

#[derive(Debug, Clone)]
pub struct FocusTracker {
    focus: Focus,
    /// Last click on the currently focused body: (body, session seconds).
    last_click: Option<(BodyId, f64)>,
}

impl FocusTracker {
    pub fn new() -> Self {
        Self {
            focus: Focus::System,
            last_click: None,
        }
    }

    pub fn focus(&self) -> Focus {
        self.focus
    }

    /// Apply a click on `body` at `now_secs` (monotonic session time).
    pub fn click(&mut self, body: BodyId, now_secs: f64) -> ClickOutcome {
        match self.focus {
            Focus::System => {
                self.focus = Focus::Body(body);
                self.last_click = Some((body, now_secs));
                ClickOutcome::Focused(body)
            }
            Focus::Body(current) if current == body => {
                let within_window = matches!(
                    self.last_click,
                    Some((b, t)) if b == body && now_secs - t < DOUBLE_CLICK_WINDOW_SECS
                );
                if within_window {
                    // Disarm so a third click cannot re-trigger the open
                    self.last_click = None;
                    ClickOutcome::OpenDetail(body)
                } else {
                    self.last_click = Some((body, now_secs));
                    ClickOutcome::Noted
                }
            }
            Focus::Body(_) => {
                self.focus = Focus::Body(body);
                self.last_click = Some((body, now_secs));
                ClickOutcome::Refocused(body)
            }
        }
    }

    /// Background or secondary click: back to the system view.
    pub fn reset(&mut self) {
        self.focus = Focus::System;
        self.last_click = None;
    }
}

impl Default for FocusTracker {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn first_click_focuses() {
        let mut tracker = FocusTracker::new();
        assert_eq!(tracker.click(BodyId::Earth, 0.0), ClickOutcome::Focused(BodyId::Earth));
        assert_eq!(tracker.focus(), Focus::Body(BodyId::Earth));
        assert_eq!(tracker.focus().target(), Some(BodyId::Earth));
    }

    #[test]
    fn double_click_opens_exactly_once() {
        let mut tracker = FocusTracker::new();
        tracker.click(BodyId::Earth, 0.0);
        assert_eq!(tracker.click(BodyId::Earth, 0.3), ClickOutcome::OpenDetail(BodyId::Earth));
        // A third click inside the window must not open again
        assert_eq!(tracker.click(BodyId::Earth, 0.4), ClickOutcome::Noted);
    }

    #[test]
    fn slow_second_click_only_records() {
        let mut tracker = FocusTracker::new();
        tracker.click(BodyId::Mars, 0.0);
        assert_eq!(tracker.click(BodyId::Mars, 0.8), ClickOutcome::Noted);
        // ...but arms the window for the next click
        assert_eq!(tracker.click(BodyId::Mars, 1.0), ClickOutcome::OpenDetail(BodyId::Mars));
    }

    #[test]
    fn clicking_other_body_refocuses_without_opening() {
        let mut tracker = FocusTracker::new();
        tracker.click(BodyId::Earth, 0.0);
        assert_eq!(tracker.click(BodyId::Venus, 0.1), ClickOutcome::Refocused(BodyId::Venus));
        assert_eq!(tracker.focus(), Focus::Body(BodyId::Venus));
    }

    #[test]
    fn reset_returns_to_system() {
        let mut tracker = FocusTracker::new();
        tracker.click(BodyId::Jupiter, 0.0);
        tracker.reset();
        assert_eq!(tracker.focus(), Focus::System);
        assert_eq!(tracker.focus().target(), None);
        // Window disarmed: next click focuses, does not open
        assert_eq!(tracker.click(BodyId::Jupiter, 0.1), ClickOutcome::Focused(BodyId::Jupiter));
    }

    #[test]
    fn sun_is_a_valid_target() {
        let mut tracker = FocusTracker::new();
        assert_eq!(tracker.click(BodyId::Sun, 0.0), ClickOutcome::Focused(BodyId::Sun));
    }
}
