use orrery_core::{
    bodies, AppEvent, BodyId, InputEvent, InputQueue, OrbitPath, Orrery, OrreryConfig,
    PositionProvider, ALL_BODIES, BODY_COUNT,
};

/// Floats per body in the shared buffer:
/// `[x, y, z, visual_radius, spin, axial_tilt, body_index, hovered]`.
pub const BODY_FLOATS: usize = 8;

/// Floats in the camera buffer: position xyzw then look-at xyzw.
pub const CAMERA_FLOATS: usize = 8;

/// Owns the app and the flat buffers the JS side reads over the wasm
/// memory. The exported free functions in `lib.rs` delegate here because
/// wasm-bindgen cannot export a struct holding non-`Copy` state ergonomically.
pub struct OrreryRunner {
    app: Orrery,
    input: InputQueue,
    body_buffer: Vec<f32>,
    camera_buffer: [f32; CAMERA_FLOATS],
    events_json: String,
    state_json: String,
}

impl OrreryRunner {
    pub fn new(config: OrreryConfig) -> Self {
        let mut runner = Self {
            app: Orrery::new(config),
            input: InputQueue::new(),
            body_buffer: vec![0.0; BODY_COUNT * BODY_FLOATS],
            camera_buffer: [0.0; CAMERA_FLOATS],
            events_json: String::from("[]"),
            state_json: String::new(),
        };
        runner.rebuild_buffers();
        runner.state_json = runner.app.snapshot().to_json();
        runner
    }

    pub fn push_input(&mut self, event: InputEvent) {
        self.input.push(event);
    }

    /// Run one frame: tick the app, then repack every shared buffer so JS
    /// reads a consistent frame.
    pub fn tick(&mut self, dt: f32) {
        self.app.tick(dt, &mut self.input);
        self.rebuild_buffers();
        self.state_json = self.app.snapshot().to_json();
        let events: Vec<AppEvent> = self.app.drain_events();
        self.events_json =
            serde_json::to_string(&events).unwrap_or_else(|_| String::from("[]"));
    }

    fn rebuild_buffers(&mut self) {
        let hovered = self.app.hovered();
        for id in ALL_BODIES {
            let base = id.index() * BODY_FLOATS;
            let pos = self.app.positions().lookup(id).unwrap_or_default();
            let slot = &mut self.body_buffer[base..base + BODY_FLOATS];
            slot[0] = pos.x;
            slot[1] = pos.y;
            slot[2] = pos.z;
            slot[3] = bodies::visual_radius(id);
            slot[4] = self.app.spins()[id.index()];
            slot[5] = (bodies::info(id).axial_tilt_deg as f32).to_radians();
            slot[6] = id.index() as f32;
            slot[7] = if hovered == Some(id) { 1.0 } else { 0.0 };
        }
        self.camera_buffer = bytemuck::cast(self.app.camera_uniform());
    }

    pub fn app(&self) -> &Orrery {
        &self.app
    }

    pub fn app_mut(&mut self) -> &mut Orrery {
        &mut self.app
    }

    /// Flattened orbit curve for one body: N+1 xyz triples, closed.
    pub fn orbit_path(&self, body: BodyId, segments: usize) -> Vec<f32> {
        let Some(elements) = bodies::elements(body) else {
            return Vec::new();
        };
        let mut out = Vec::with_capacity((segments + 1) * 3);
        for p in OrbitPath::from_elements(elements, segments) {
            let v = p.as_vec3();
            out.extend_from_slice(&[v.x, v.y, v.z]);
        }
        out
    }

    // ---- Pointer accessors for shared-memory reads ----

    pub fn bodies_ptr(&self) -> *const f32 {
        self.body_buffer.as_ptr()
    }

    pub fn body_count(&self) -> u32 {
        BODY_COUNT as u32
    }

    pub fn camera_ptr(&self) -> *const f32 {
        self.camera_buffer.as_ptr()
    }

    pub fn state_json(&self) -> String {
        self.state_json.clone()
    }

    pub fn events_json(&self) -> String {
        self.events_json.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use orrery_core::state::ViewMode;
    use orrery_core::CMD_LOADING_DONE;

    fn live_runner() -> OrreryRunner {
        OrreryRunner::new(OrreryConfig {
            start_view: ViewMode::System,
            ..OrreryConfig::default()
        })
    }

    #[test]
    fn body_buffer_is_packed_per_body() {
        let mut runner = live_runner();
        runner.tick(1.0 / 60.0);
        let base = BodyId::Earth.index() * BODY_FLOATS;
        let slot = &runner.body_buffer[base..base + BODY_FLOATS];
        // Position is nonzero for a planet, radius matches the table
        assert!(slot[0].hypot(slot[2]) > 1.0);
        assert_eq!(slot[3], bodies::visual_radius(BodyId::Earth));
        assert_eq!(slot[6], BodyId::Earth.index() as f32);
    }

    #[test]
    fn sun_sits_at_origin() {
        let mut runner = live_runner();
        runner.tick(1.0 / 60.0);
        let base = BodyId::Sun.index() * BODY_FLOATS;
        assert_eq!(&runner.body_buffer[base..base + 3], &[0.0, 0.0, 0.0]);
    }

    #[test]
    fn camera_buffer_tracks_rig() {
        let mut runner = live_runner();
        runner.tick(1.0 / 60.0);
        let pos = runner.app().camera_position();
        assert_eq!(runner.camera_buffer[0], pos.x);
        assert_eq!(runner.camera_buffer[1], pos.y);
        assert_eq!(runner.camera_buffer[2], pos.z);
    }

    #[test]
    fn orbit_path_is_closed_triples() {
        let runner = live_runner();
        let path = runner.orbit_path(BodyId::Mars, 64);
        assert_eq!(path.len(), 65 * 3);
        assert_eq!(&path[0..3], &path[64 * 3..65 * 3]);
    }

    #[test]
    fn sun_has_no_orbit_path() {
        let runner = live_runner();
        assert!(runner.orbit_path(BodyId::Sun, 64).is_empty());
    }

    #[test]
    fn events_json_drains_each_tick() {
        let mut runner = OrreryRunner::new(OrreryConfig::default());
        runner.push_input(InputEvent::Custom {
            kind: CMD_LOADING_DONE,
            a: 0.0,
            b: 0.0,
            c: 0.0,
        });
        runner.tick(1.0 / 60.0);
        assert!(runner.events_json().contains("view_changed"), "{}", runner.events_json());
        runner.tick(1.0 / 60.0);
        assert_eq!(runner.events_json(), "[]");
    }

    #[test]
    fn state_json_reports_view() {
        let mut runner = live_runner();
        runner.tick(1.0 / 60.0);
        assert!(runner.state_json().contains("\"view\":\"system\""));
    }
}
