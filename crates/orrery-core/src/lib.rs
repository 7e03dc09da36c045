pub mod app;
pub mod bodies;
pub mod camera;
pub mod clock;
pub mod config;
pub mod focus;
pub mod input;
pub mod orbit;
pub mod picking;
pub mod provider;
pub mod state;

// Re-export key types at crate root for convenience
pub use app::{
    Orrery, CMD_BODY_CLICK, CMD_CLOSE_DETAIL, CMD_LOADING_DONE, CMD_RESET_VIEW, CMD_SET_ASPECT,
    CMD_SET_TIME_SCALE,
};
pub use bodies::{BodyId, BodyInfo, ALL_BODIES, BODY_COUNT, PLANETS};
pub use camera::controls::OrbitInput;
pub use camera::rig::{CameraRig, CameraUniform};
pub use clock::{SimClock, DEFAULT_TIME_SCALE, TIME_SCALE_PRESETS};
pub use config::OrreryConfig;
pub use focus::{ClickOutcome, Focus, FocusTracker};
pub use input::queue::{InputEvent, InputQueue};
pub use orbit::elements::{ElementsAt, OrbitalElements};
pub use orbit::path::OrbitPath;
pub use orbit::source::{EphemerisProvider, NoEphemeris, OrbitalSource};
pub use orbit::SCENE_UNITS_PER_AU;
pub use picking::{pick, ray_from_ndc, Ray};
pub use provider::{PositionProvider, PositionTable};
pub use state::{AppEvent, Snapshot, ViewMode};
