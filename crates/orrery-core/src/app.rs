/// The per-frame orchestrator. One tick = drain input, advance the view
/// state machine, advance simulated time, rebuild the position table, and
/// update the camera — in that order, so every subsystem reads a consistent
/// frame.

use glam::{Vec2, Vec3};

use crate::bodies::{self, BodyId, ALL_BODIES, BODY_COUNT, PLANETS};
use crate::camera::controls::OrbitInput;
use crate::camera::rig::{CameraRig, CameraUniform, DEFAULT_POSITION};
use crate::clock::SimClock;
use crate::config::OrreryConfig;
use crate::focus::{ClickOutcome, Focus, FocusTracker};
use crate::input::queue::{InputEvent, InputQueue};
use crate::orbit::rotation::rotation_angle;
use crate::orbit::source::{EphemerisProvider, NoEphemeris, OrbitalSource};
use crate::picking::{self, DRAG_THRESHOLD};
use crate::provider::{PositionProvider, PositionTable};
use crate::state::{AppEvent, Snapshot, ViewMode};

// ── custom command kinds (UI layer → core) ──────────────────────────────

pub const CMD_SET_TIME_SCALE: u32 = 1;
pub const CMD_RESET_VIEW: u32 = 2;
pub const CMD_BODY_CLICK: u32 = 3;
pub const CMD_CLOSE_DETAIL: u32 = 4;
pub const CMD_SET_ASPECT: u32 = 5;
pub const CMD_LOADING_DONE: u32 = 6;

/// Where the intro fly-in starts from.
const INTRO_START: Vec3 = Vec3::new(0.0, 80.0, 160.0);

fn smoothstep(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    t * t * (3.0 - 2.0 * t)
}

pub struct Orrery {
    config: OrreryConfig,
    view: ViewMode,
    clock: SimClock,
    focus: FocusTracker,
    rig: CameraRig,
    orbit_input: OrbitInput,
    sources: Vec<(BodyId, OrbitalSource)>,
    ephemeris: Box<dyn EphemerisProvider>,
    positions: PositionTable,
    spins: [f32; BODY_COUNT],
    hovered: Option<BodyId>,
    detail: Option<BodyId>,
    intro_elapsed: f32,
    /// Wall-clock seconds since construction; drives the double-click window.
    session_secs: f64,
    events: Vec<AppEvent>,
    pointer_down: Option<Vec2>,
    pointer_last: Vec2,
    drag_accum: f32,
}

impl Orrery {
    pub fn new(config: OrreryConfig) -> Self {
        let sources = PLANETS
            .iter()
            .filter_map(|&id| bodies::elements(id).map(|el| (id, OrbitalSource::Elements(*el))))
            .collect();
        let mut app = Self {
            view: config.start_view,
            clock: SimClock::new(config.start_days_from_j2000),
            focus: FocusTracker::new(),
            rig: CameraRig::new(),
            orbit_input: OrbitInput::new(),
            sources,
            ephemeris: Box::new(NoEphemeris),
            positions: PositionTable::new(),
            spins: [0.0; BODY_COUNT],
            hovered: None,
            detail: None,
            intro_elapsed: 0.0,
            session_secs: 0.0,
            events: Vec::new(),
            pointer_down: None,
            pointer_last: Vec2::ZERO,
            drag_accum: 0.0,
            config,
        };
        app.clock.set_time_scale(app.config.time_scale);
        app.orbit_input.sync_from(app.rig.position());
        app.rebuild_positions();
        app
    }

    // ── accessors ───────────────────────────────────────────────────────

    pub fn view(&self) -> ViewMode {
        self.view
    }

    pub fn focus(&self) -> Focus {
        self.focus.focus()
    }

    pub fn clock(&self) -> &SimClock {
        &self.clock
    }

    pub fn positions(&self) -> &PositionTable {
        &self.positions
    }

    /// Absolute rotation angle per body, radians.
    pub fn spins(&self) -> &[f32; BODY_COUNT] {
        &self.spins
    }

    pub fn hovered(&self) -> Option<BodyId> {
        self.hovered
    }

    pub fn detail(&self) -> Option<BodyId> {
        self.detail
    }

    pub fn camera_uniform(&self) -> CameraUniform {
        self.rig.uniform()
    }

    pub fn camera_position(&self) -> Vec3 {
        self.rig.position()
    }

    pub fn camera_look_at(&self) -> Vec3 {
        self.rig.look_at()
    }

    /// Replace the position source for one body, e.g. to switch a planet
    /// from propagated elements to an ephemeris table.
    pub fn set_source(&mut self, id: BodyId, source: OrbitalSource) {
        match self.sources.iter_mut().find(|(b, _)| *b == id) {
            Some(entry) => entry.1 = source,
            None => self.sources.push((id, source)),
        }
    }

    pub fn set_ephemeris(&mut self, eph: Box<dyn EphemerisProvider>) {
        self.ephemeris = eph;
    }

    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            view: self.view,
            focus_target: self.focus.focus().target(),
            hovered: self.hovered,
            detail: self.detail,
            time_scale: self.clock.time_scale(),
            days_from_j2000: self.clock.days_from_j2000(),
            date: self.clock.calendar_date(),
            intro_progress: if self.view == ViewMode::Loading {
                0.0
            } else {
                (self.intro_elapsed / self.config.intro_secs).clamp(0.0, 1.0)
            },
        }
    }

    /// Drain the events produced since the last call.
    pub fn drain_events(&mut self) -> Vec<AppEvent> {
        std::mem::take(&mut self.events)
    }

    // ── the tick ────────────────────────────────────────────────────────

    pub fn tick(&mut self, dt: f32, input: &mut InputQueue) {
        self.session_secs += dt as f64;
        for event in input.drain() {
            self.apply_input(event);
        }
        self.advance_view(dt);
        if self.view.is_live() {
            self.clock.advance(dt as f64);
        }
        self.rebuild_positions();
        self.rig.update(
            dt,
            self.view,
            self.focus.focus(),
            &self.positions,
            &mut self.orbit_input,
        );
    }

    fn advance_view(&mut self, dt: f32) {
        match self.view {
            ViewMode::Loading => {
                // Host owns the screen; park the camera at the intro start.
                self.rig.set_pose(INTRO_START, Vec3::ZERO);
            }
            ViewMode::Intro => {
                self.intro_elapsed += dt;
                let p = smoothstep(self.intro_elapsed / self.config.intro_secs);
                self.rig.set_pose(INTRO_START.lerp(DEFAULT_POSITION, p), Vec3::ZERO);
                if self.intro_elapsed >= self.config.intro_secs {
                    self.rig.set_pose(DEFAULT_POSITION, Vec3::ZERO);
                    self.orbit_input.set_pivot(Vec3::ZERO);
                    self.orbit_input.sync_from(DEFAULT_POSITION);
                    self.set_view(ViewMode::System);
                }
            }
            ViewMode::System | ViewMode::Detail => {}
        }
    }

    fn rebuild_positions(&mut self) {
        self.positions.clear();
        self.positions.set(BodyId::Sun, Vec3::ZERO);
        let days = self.clock.days_from_j2000();
        for (id, source) in &self.sources {
            let pos = source.scene_position(days, self.ephemeris.as_ref());
            self.positions.set(*id, pos.as_vec3());
        }
        let elapsed = self.clock.elapsed_sim_secs();
        for id in ALL_BODIES {
            self.spins[id.index()] =
                rotation_angle(bodies::info(id).sidereal_day_hours, elapsed) as f32;
        }
    }

    // ── input ───────────────────────────────────────────────────────────

    fn apply_input(&mut self, event: InputEvent) {
        match event {
            InputEvent::PointerDown { x, y } => {
                let p = Vec2::new(x, y);
                self.pointer_down = Some(p);
                self.pointer_last = p;
                self.drag_accum = 0.0;
            }
            InputEvent::PointerMove { x, y } => {
                let p = Vec2::new(x, y);
                if self.pointer_down.is_some() {
                    let delta = p - self.pointer_last;
                    self.drag_accum += delta.length();
                    self.orbit_input.rotate(delta.x, delta.y);
                } else if self.view == ViewMode::System {
                    self.update_hover(p);
                }
                self.pointer_last = p;
            }
            InputEvent::PointerUp { x, y } => {
                let was_down = self.pointer_down.take().is_some();
                // A press that moved is a drag, not a click.
                if was_down && self.drag_accum < DRAG_THRESHOLD && self.view == ViewMode::System {
                    match self.pick_at(Vec2::new(x, y)) {
                        Some(body) => self.handle_body_click(body),
                        // Background click drops focus, like a secondary click
                        None => {
                            if self.focus.focus().is_focused() {
                                self.reset_view();
                            }
                        }
                    }
                }
            }
            InputEvent::SecondaryDown => self.reset_view(),
            InputEvent::Wheel { dy } => self.orbit_input.zoom(dy),
            InputEvent::Custom { kind, a, .. } => self.apply_command(kind, a),
        }
    }

    fn apply_command(&mut self, kind: u32, a: f32) {
        match kind {
            CMD_SET_TIME_SCALE => self.set_time_scale(a as f64),
            CMD_RESET_VIEW => self.reset_view(),
            CMD_BODY_CLICK => {
                if self.view == ViewMode::System {
                    if let Some(body) = BodyId::from_index(a as usize) {
                        self.handle_body_click(body);
                    }
                }
            }
            CMD_CLOSE_DETAIL => self.close_detail(),
            CMD_SET_ASPECT => {
                if a.is_finite() && a > 0.0 {
                    self.config.aspect = a;
                }
            }
            CMD_LOADING_DONE => {
                if self.view == ViewMode::Loading {
                    self.intro_elapsed = 0.0;
                    self.set_view(ViewMode::Intro);
                }
            }
            other => log::warn!("unknown command kind {other}"),
        }
    }

    fn pick_at(&self, ndc: Vec2) -> Option<BodyId> {
        let ray = picking::ray_from_ndc(
            self.rig.position(),
            self.rig.look_at(),
            self.config.fov_y,
            self.config.aspect,
            ndc,
        );
        let candidates = ALL_BODIES.iter().filter_map(|&id| {
            self.positions
                .lookup(id)
                .map(|pos| (id, pos, bodies::visual_radius(id)))
        });
        picking::pick(&ray, candidates)
    }

    fn update_hover(&mut self, ndc: Vec2) {
        let hit = self.pick_at(ndc);
        if hit != self.hovered {
            self.hovered = hit;
            self.events.push(AppEvent::HoverChanged { body: hit });
        }
    }

    /// Change the simulated-time multiplier. Invalid values are rejected by
    /// the clock; an event fires only on an actual change.
    pub fn set_time_scale(&mut self, scale: f64) {
        let before = self.clock.time_scale();
        self.clock.set_time_scale(scale);
        let after = self.clock.time_scale();
        if after != before {
            self.events.push(AppEvent::TimeScaleChanged { scale: after });
        }
    }

    /// One click focuses; a second click on the focused body within the
    /// double-click window opens its detail panel.
    pub fn handle_body_click(&mut self, body: BodyId) {
        match self.focus.click(body, self.session_secs) {
            ClickOutcome::Focused(target) | ClickOutcome::Refocused(target) => {
                self.rig.begin_focus_transition();
                self.events.push(AppEvent::FocusChanged {
                    target: Some(target),
                });
            }
            ClickOutcome::OpenDetail(body) => {
                self.detail = Some(body);
                self.events.push(AppEvent::OpenDetail { body });
                self.set_view(ViewMode::Detail);
            }
            ClickOutcome::Noted => {}
        }
    }

    /// Drop focus and glide back to the overview.
    pub fn reset_view(&mut self) {
        if self.view == ViewMode::Detail {
            self.detail = None;
            self.set_view(ViewMode::System);
        }
        if self.focus.focus().is_focused() {
            self.events.push(AppEvent::FocusChanged { target: None });
        }
        self.focus.reset();
        self.rig.begin_return();
    }

    /// Close the detail panel. The camera pulls back to the overview rather
    /// than holding the close-up frame.
    pub fn close_detail(&mut self) {
        if self.view != ViewMode::Detail {
            return;
        }
        self.detail = None;
        self.set_view(ViewMode::System);
        if self.focus.focus().is_focused() {
            self.events.push(AppEvent::FocusChanged { target: None });
        }
        self.focus.reset();
        self.rig.begin_return();
    }

    fn set_view(&mut self, view: ViewMode) {
        if self.view != view {
            self.view = view;
            self.events.push(AppEvent::ViewChanged { view });
        }
    }
}
