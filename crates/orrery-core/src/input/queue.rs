/// Input events the core understands.
///
/// The host's event system captures input asynchronously and pushes it
/// here; the app drains the queue exactly once at the start of each tick,
/// so state transitions apply atomically before anything reads them.

/// Pointer coordinates are normalized device coordinates: x, y ∈ [−1, 1],
/// y up, matching what the host feeds its un-projection.
#[derive(Debug, Clone, Copy)]
pub enum InputEvent {
    /// Primary button / touch began.
    PointerDown { x: f32, y: f32 },
    /// Pointer moved.
    PointerMove { x: f32, y: f32 },
    /// Primary button / touch ended.
    PointerUp { x: f32, y: f32 },
    /// Secondary (right) button — mapped directly to "reset to system view".
    SecondaryDown,
    /// Scroll wheel; positive `dy` zooms out.
    Wheel { dy: f32 },
    /// A structured command from the UI layer (buttons, panels).
    /// `kind` identifies the command; `a`, `b`, `c` carry arbitrary data.
    Custom { kind: u32, a: f32, b: f32, c: f32 },
}

pub struct InputQueue {
    events: Vec<InputEvent>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self {
            events: Vec::with_capacity(32),
        }
    }

    /// Push a new input event (called from the host between frames).
    pub fn push(&mut self, event: InputEvent) {
        self.events.push(event);
    }

    /// Drain all pending events, clearing the queue.
    pub fn drain(&mut self) -> Vec<InputEvent> {
        std::mem::take(&mut self.events)
    }

    pub fn iter(&self) -> impl Iterator<Item = &InputEvent> {
        self.events.iter()
    }

    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

impl Default for InputQueue {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain() {
        let mut q = InputQueue::new();
        q.push(InputEvent::PointerDown { x: 0.1, y: -0.2 });
        q.push(InputEvent::Wheel { dy: 100.0 });
        assert_eq!(q.len(), 2);
        let events = q.drain();
        assert_eq!(events.len(), 2);
        assert!(q.is_empty());
    }

    #[test]
    fn custom_event_carries_data() {
        let mut q = InputQueue::new();
        q.push(InputEvent::Custom { kind: 3, a: 1.0, b: 0.0, c: 0.0 });
        match q.drain()[0] {
            InputEvent::Custom { kind, a, .. } => {
                assert_eq!(kind, 3);
                assert_eq!(a, 1.0);
            }
            _ => panic!("expected Custom event"),
        }
    }
}
