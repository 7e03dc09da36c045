/// View modes, the UI-facing state snapshot, and app events.

use serde::Serialize;

use crate::bodies::BodyId;

/// Top-level view the host is showing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ViewMode {
    /// Assets still loading; camera owned by the host.
    Loading,
    /// Scripted intro sequence; camera owned by the sequence.
    Intro,
    /// Live system view (free orbit, focus, clicks).
    System,
    /// A body's content panel is open; camera parked near the body.
    Detail,
}

impl ViewMode {
    /// Simulated time advances only in live modes.
    pub fn is_live(self) -> bool {
        matches!(self, ViewMode::System | ViewMode::Detail)
    }

    /// Scripted modes own the camera outright.
    pub fn is_scripted(self) -> bool {
        matches!(self, ViewMode::Loading | ViewMode::Intro)
    }
}

/// Read-only state surface for the UI layer, serialized once per frame.
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub view: ViewMode,
    pub focus_target: Option<BodyId>,
    pub hovered: Option<BodyId>,
    pub detail: Option<BodyId>,
    pub time_scale: f64,
    pub days_from_j2000: f64,
    /// (year, month, day) of the simulated date.
    pub date: (i32, u32, u32),
    /// Intro progress in [0, 1]; 1 once the intro has finished.
    pub intro_progress: f32,
}

impl Snapshot {
    pub fn to_json(&self) -> String {
        serde_json::to_string(self).unwrap_or_else(|_| "{}".to_string())
    }
}

/// Discrete notifications for the host, drained once per frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum AppEvent {
    ViewChanged { view: ViewMode },
    FocusChanged { target: Option<BodyId> },
    /// The focused body was clicked again — the host should open its panel.
    OpenDetail { body: BodyId },
    HoverChanged { body: Option<BodyId> },
    TimeScaleChanged { scale: f64 },
}
