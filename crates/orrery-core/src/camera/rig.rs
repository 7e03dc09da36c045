/// Camera pose ownership. Exactly one driver writes the pose each tick:
/// scripted sequences set it directly, focus/return transitions lerp it,
/// and free orbiting delegates to [`OrbitInput`].

use bytemuck::{Pod, Zeroable};
use glam::Vec3;

use crate::bodies;
use crate::camera::controls::OrbitInput;
use crate::focus::Focus;
use crate::provider::PositionProvider;
use crate::state::ViewMode;

/// Resting pose of the system overview.
pub const DEFAULT_POSITION: Vec3 = Vec3::new(0.0, 20.0, 50.0);
/// Frame-rate independent smoothing bases for the `1 − base^dt` law.
pub const TRANSITION_BASE: f32 = 0.05;
pub const FOCUS_APPROACH_BASE: f32 = 0.1;
/// Ideal focused viewing distance, in body radii.
pub const FOCUS_DISTANCE_RADII: f32 = 4.0;
/// Approach counts as arrived within this fraction of the body's radius.
pub const FOCUS_SETTLE_FRACTION: f32 = 0.1;
/// Focused zoom range, in body radii, with an absolute floor for the
/// smallest bodies.
pub const FOCUS_MIN_RADII: f32 = 1.5;
pub const FOCUS_MAX_RADII: f32 = 20.0;
pub const FOCUS_DISTANCE_FLOOR: f32 = 0.5;
/// Unfocused minimum keeps the camera outside the star.
pub const SYSTEM_MIN_DISTANCE: f32 = 3.0;
/// Return-to-overview transition length before control is handed back.
pub const RETURN_SECS: f32 = 1.5;
/// Detail-view framing: radially out from the sun plus a fixed side step.
pub const DETAIL_DISTANCE: f32 = 4.0;
pub const DETAIL_SIDE_OFFSET: Vec3 = Vec3::new(1.0, 2.0, 1.0);

/// Exponential smoothing factor that is independent of frame rate:
/// after one second the remaining error is `base` times the starting error.
pub fn lerp_factor(base: f32, dt: f32) -> f32 {
    1.0 - base.powf(dt)
}

/// GPU-ready camera state, uploaded once per frame.
#[repr(C)]
#[derive(Debug, Clone, Copy, Pod, Zeroable)]
pub struct CameraUniform {
    pub position: [f32; 4],
    pub look_at: [f32; 4],
}

#[derive(Debug, Clone)]
pub struct CameraRig {
    position: Vec3,
    look_at: Vec3,
    returning: bool,
    return_elapsed: f32,
    settled: bool,
    system_max: f32,
}

impl CameraRig {
    pub fn new() -> Self {
        Self {
            position: DEFAULT_POSITION,
            look_at: Vec3::ZERO,
            returning: false,
            return_elapsed: 0.0,
            settled: false,
            system_max: bodies::system_extent(),
        }
    }

    pub fn position(&self) -> Vec3 {
        self.position
    }

    pub fn look_at(&self) -> Vec3 {
        self.look_at
    }

    pub fn uniform(&self) -> CameraUniform {
        CameraUniform {
            position: [self.position.x, self.position.y, self.position.z, 1.0],
            look_at: [self.look_at.x, self.look_at.y, self.look_at.z, 1.0],
        }
    }

    /// Scripted sequences (loading pan, intro fly-in) drive the pose directly.
    pub fn set_pose(&mut self, position: Vec3, look_at: Vec3) {
        self.position = position;
        self.look_at = look_at;
    }

    /// Arm the focus approach. The approach re-runs even when refocusing the
    /// same body, so a second click always re-frames it.
    pub fn begin_focus_transition(&mut self) {
        self.settled = false;
        self.returning = false;
    }

    /// Arm the timed glide back to the overview pose.
    pub fn begin_return(&mut self) {
        self.returning = true;
        self.return_elapsed = 0.0;
        self.settled = false;
    }

    pub fn is_returning(&self) -> bool {
        self.returning
    }

    pub fn is_settled(&self) -> bool {
        self.settled
    }

    pub fn update(
        &mut self,
        dt: f32,
        view: ViewMode,
        focus: Focus,
        positions: &dyn PositionProvider,
        orbit: &mut OrbitInput,
    ) {
        match view {
            ViewMode::Loading | ViewMode::Intro => {
                orbit.set_enabled(false);
            }
            ViewMode::Detail => self.update_detail(dt, focus, positions, orbit),
            ViewMode::System => match focus {
                Focus::Body(target) => self.update_focused(dt, target, positions, orbit),
                Focus::System => self.update_overview(dt, orbit),
            },
        }
    }

    fn update_detail(
        &mut self,
        dt: f32,
        focus: Focus,
        positions: &dyn PositionProvider,
        orbit: &mut OrbitInput,
    ) {
        orbit.set_enabled(false);
        let Some(target) = focus.target() else {
            return;
        };
        // A stale table entry holds the current pose until the next rebuild.
        let Some(body_pos) = positions.lookup(target) else {
            return;
        };
        let radial = body_pos.normalize_or_zero();
        let desired = body_pos + radial * DETAIL_DISTANCE + DETAIL_SIDE_OFFSET;
        let k = lerp_factor(TRANSITION_BASE, dt);
        self.position = self.position.lerp(desired, k);
        self.look_at = self.look_at.lerp(body_pos, k);
    }

    fn update_focused(
        &mut self,
        dt: f32,
        target: crate::bodies::BodyId,
        positions: &dyn PositionProvider,
        orbit: &mut OrbitInput,
    ) {
        self.returning = false;
        let Some(pivot) = positions.lookup(target) else {
            return;
        };
        let radius = bodies::visual_radius(target);
        let min = (radius * FOCUS_MIN_RADII).max(FOCUS_DISTANCE_FLOOR);
        let max = radius * FOCUS_MAX_RADII;
        orbit.set_pivot(pivot);
        orbit.set_distance_limits(min, max);
        // The look-at pins to the body unconditionally so the frame never
        // lags the orbital motion.
        self.look_at = pivot;

        if self.settled {
            orbit.set_enabled(true);
            self.position = orbit.update(dt);
            return;
        }

        orbit.set_enabled(false);
        let ideal = (radius * FOCUS_DISTANCE_RADII).clamp(min, max);
        let offset = self.position - pivot;
        if offset.length_squared() < 1e-8 {
            // Camera exactly on the body: a normalized offset would be NaN,
            // so displace along a fixed axis instead.
            self.position = pivot + Vec3::Z * ideal;
        } else {
            let desired = pivot + offset.normalize() * ideal;
            self.position = self.position.lerp(desired, lerp_factor(FOCUS_APPROACH_BASE, dt));
        }
        if (self.position.distance(pivot) - ideal).abs() <= radius * FOCUS_SETTLE_FRACTION {
            self.settled = true;
            orbit.sync_from(self.position);
            orbit.set_enabled(true);
        }
    }

    fn update_overview(&mut self, dt: f32, orbit: &mut OrbitInput) {
        orbit.set_pivot(Vec3::ZERO);
        orbit.set_distance_limits(SYSTEM_MIN_DISTANCE, self.system_max);
        if self.returning {
            orbit.set_enabled(false);
            let k = lerp_factor(TRANSITION_BASE, dt);
            self.position = self.position.lerp(DEFAULT_POSITION, k);
            self.look_at = self.look_at.lerp(Vec3::ZERO, k);
            self.return_elapsed += dt;
            if self.return_elapsed >= RETURN_SECS {
                self.returning = false;
                orbit.sync_from(self.position);
                orbit.set_enabled(true);
            }
        } else {
            orbit.set_enabled(true);
            self.look_at = Vec3::ZERO;
            self.position = orbit.update(dt);
        }
    }
}

impl Default for CameraRig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::BodyId;
    use crate::provider::PositionTable;

    const DT: f32 = 1.0 / 60.0;

    fn table_with(body: BodyId, pos: Vec3) -> PositionTable {
        let mut table = PositionTable::new();
        table.set(body, pos);
        table
    }

    fn run(
        rig: &mut CameraRig,
        orbit: &mut OrbitInput,
        view: ViewMode,
        focus: Focus,
        table: &PositionTable,
        frames: usize,
    ) {
        for _ in 0..frames {
            rig.update(DT, view, focus, table, orbit);
        }
    }

    #[test]
    fn lerp_factor_is_framerate_independent() {
        // Two 0.5 s steps must land where one 1.0 s step does.
        let one = lerp_factor(0.05, 1.0);
        let half = lerp_factor(0.05, 0.5);
        let two_halves = 1.0 - (1.0 - half) * (1.0 - half);
        assert!((one - two_halves).abs() < 1e-6);
    }

    #[test]
    fn focus_approach_settles_at_ideal_distance() {
        let mut rig = CameraRig::new();
        let mut orbit = OrbitInput::new();
        let body_pos = Vec3::new(24.0, 0.0, 0.0);
        let table = table_with(BodyId::Earth, body_pos);
        rig.begin_focus_transition();
        run(&mut rig, &mut orbit, ViewMode::System, Focus::Body(BodyId::Earth), &table, 600);
        assert!(rig.is_settled());
        let radius = bodies::visual_radius(BodyId::Earth);
        let dist = rig.position().distance(body_pos);
        assert!((dist - radius * FOCUS_DISTANCE_RADII).abs() <= radius * FOCUS_SETTLE_FRACTION * 2.0);
        assert_eq!(rig.look_at(), body_pos);
    }

    #[test]
    fn zero_offset_falls_back_to_fixed_axis() {
        let mut rig = CameraRig::new();
        let mut orbit = OrbitInput::new();
        let body_pos = Vec3::new(10.0, 3.0, -7.0);
        let table = table_with(BodyId::Mars, body_pos);
        rig.set_pose(body_pos, Vec3::ZERO); // camera exactly on the body
        rig.begin_focus_transition();
        rig.update(DT, ViewMode::System, Focus::Body(BodyId::Mars), &table, &mut orbit);
        let pos = rig.position();
        assert!(pos.is_finite());
        let ideal = bodies::visual_radius(BodyId::Mars) * FOCUS_DISTANCE_RADII;
        assert!((pos.distance(body_pos) - ideal).abs() < 1e-4);
    }

    #[test]
    fn focused_zoom_stays_within_radius_based_limits() {
        let mut rig = CameraRig::new();
        let mut orbit = OrbitInput::new();
        let body_pos = Vec3::new(24.0, 0.0, 0.0);
        let table = table_with(BodyId::Earth, body_pos);
        rig.begin_focus_transition();
        run(&mut rig, &mut orbit, ViewMode::System, Focus::Body(BodyId::Earth), &table, 600);
        assert!(rig.is_settled());
        let radius = bodies::visual_radius(BodyId::Earth);
        for _ in 0..120 {
            orbit.zoom(-10_000.0);
            rig.update(DT, ViewMode::System, Focus::Body(BodyId::Earth), &table, &mut orbit);
        }
        let min = (radius * FOCUS_MIN_RADII).max(FOCUS_DISTANCE_FLOOR);
        assert!(rig.position().distance(body_pos) >= min - 1e-3);
        for _ in 0..120 {
            orbit.zoom(10_000.0);
            rig.update(DT, ViewMode::System, Focus::Body(BodyId::Earth), &table, &mut orbit);
        }
        assert!(rig.position().distance(body_pos) <= radius * FOCUS_MAX_RADII + 1e-3);
    }

    #[test]
    fn settled_camera_tracks_moving_body() {
        let mut rig = CameraRig::new();
        let mut orbit = OrbitInput::new();
        let mut body_pos = Vec3::new(24.0, 0.0, 0.0);
        let mut table = table_with(BodyId::Earth, body_pos);
        rig.begin_focus_transition();
        run(&mut rig, &mut orbit, ViewMode::System, Focus::Body(BodyId::Earth), &table, 600);
        assert!(rig.is_settled());
        let offset_before = rig.position() - body_pos;
        body_pos += Vec3::new(0.5, 0.0, 0.5);
        table.set(BodyId::Earth, body_pos);
        rig.update(DT, ViewMode::System, Focus::Body(BodyId::Earth), &table, &mut orbit);
        let offset_after = rig.position() - body_pos;
        assert!((offset_after - offset_before).length() < 0.05);
        assert_eq!(rig.look_at(), body_pos);
    }

    #[test]
    fn missing_position_holds_pose() {
        let mut rig = CameraRig::new();
        let mut orbit = OrbitInput::new();
        let table = PositionTable::new();
        rig.begin_focus_transition();
        let before = rig.position();
        rig.update(DT, ViewMode::System, Focus::Body(BodyId::Venus), &table, &mut orbit);
        assert_eq!(rig.position(), before);
    }

    #[test]
    fn return_glide_reaches_default_and_hands_back_control() {
        let mut rig = CameraRig::new();
        let mut orbit = OrbitInput::new();
        let table = PositionTable::new();
        rig.set_pose(Vec3::new(100.0, 50.0, -30.0), Vec3::new(20.0, 0.0, 0.0));
        rig.begin_return();
        // 1.5 s of frames plus slack
        run(&mut rig, &mut orbit, ViewMode::System, Focus::System, &table, 120);
        assert!(!rig.is_returning());
        assert!(orbit.is_enabled());
        assert!((rig.position() - DEFAULT_POSITION).length() < 5.0);
        assert!(rig.look_at().length() < 2.0);
    }

    #[test]
    fn detail_view_frames_body_from_outside() {
        let mut rig = CameraRig::new();
        let mut orbit = OrbitInput::new();
        let body_pos = Vec3::new(24.0, 0.0, 0.0);
        let table = table_with(BodyId::Earth, body_pos);
        run(&mut rig, &mut orbit, ViewMode::Detail, Focus::Body(BodyId::Earth), &table, 600);
        assert!(!orbit.is_enabled());
        let expected = body_pos + body_pos.normalize() * DETAIL_DISTANCE + DETAIL_SIDE_OFFSET;
        assert!((rig.position() - expected).length() < 0.5);
        assert!((rig.look_at() - body_pos).length() < 0.5);
        // Farther from the sun than the body itself
        assert!(rig.position().length() > body_pos.length());
    }

    #[test]
    fn scripted_views_leave_pose_to_the_script() {
        let mut rig = CameraRig::new();
        let mut orbit = OrbitInput::new();
        orbit.set_enabled(true);
        let table = PositionTable::new();
        let pose = Vec3::new(1.0, 2.0, 3.0);
        rig.set_pose(pose, Vec3::ZERO);
        rig.update(DT, ViewMode::Intro, Focus::System, &table, &mut orbit);
        assert_eq!(rig.position(), pose);
        assert!(!orbit.is_enabled());
    }
}
