/// User-driven orbiting: yaw/pitch/distance around a pivot, with damping.
///
/// The pivot is set by the rig every frame (it tracks a moving body while
/// focused); this module only turns pointer drags and wheel ticks into a
/// damped spherical offset.

use glam::Vec3;

use super::rig::lerp_factor;

/// Radians of rotation per unit of NDC drag.
pub const ROTATE_SPEED: f32 = 2.5;
/// Exponent applied per wheel unit; positive dy zooms out.
pub const WHEEL_SENSITIVITY: f32 = 0.002;
/// Damping base for the `1 − base^dt` law (≈ 0.05 per frame at 60 fps).
pub const DAMPING_BASE: f32 = 0.05;
/// Polar angle limits keep the camera off the poles.
pub const MIN_POLAR: f32 = 0.1 * std::f32::consts::PI;
pub const MAX_POLAR: f32 = 0.9 * std::f32::consts::PI;

#[derive(Debug, Clone)]
pub struct OrbitInput {
    enabled: bool,
    pivot: Vec3,
    // Current (damped) spherical offset; pitch is the polar angle from +Y.
    yaw: f32,
    pitch: f32,
    distance: f32,
    // Where user input wants the offset to be.
    target_yaw: f32,
    target_pitch: f32,
    target_distance: f32,
    min_distance: f32,
    max_distance: f32,
}

impl OrbitInput {
    pub fn new() -> Self {
        Self {
            enabled: false,
            pivot: Vec3::ZERO,
            yaw: 0.0,
            pitch: std::f32::consts::FRAC_PI_2,
            distance: 50.0,
            target_yaw: 0.0,
            target_pitch: std::f32::consts::FRAC_PI_2,
            target_distance: 50.0,
            min_distance: 0.1,
            max_distance: f32::MAX,
        }
    }

    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    pub fn set_pivot(&mut self, pivot: Vec3) {
        self.pivot = pivot;
    }

    pub fn pivot(&self) -> Vec3 {
        self.pivot
    }

    /// Distance limits are dynamic (radius-based while focused); both the
    /// damped value and the input target are re-clamped when they change.
    pub fn set_distance_limits(&mut self, min: f32, max: f32) {
        self.min_distance = min;
        self.max_distance = max;
        self.distance = self.distance.clamp(min, max);
        self.target_distance = self.target_distance.clamp(min, max);
    }

    /// Apply a pointer drag in NDC deltas.
    pub fn rotate(&mut self, dx: f32, dy: f32) {
        if !self.enabled {
            return;
        }
        self.target_yaw -= dx * ROTATE_SPEED;
        self.target_pitch = (self.target_pitch + dy * ROTATE_SPEED).clamp(MIN_POLAR, MAX_POLAR);
    }

    /// Apply a wheel tick; the zoom is multiplicative so it feels uniform
    /// at any distance.
    pub fn zoom(&mut self, dy: f32) {
        if !self.enabled {
            return;
        }
        self.target_distance = (self.target_distance * (dy * WHEEL_SENSITIVITY).exp())
            .clamp(self.min_distance, self.max_distance);
    }

    /// Adopt the spherical offset implied by an existing camera position,
    /// so control hand-off continues from wherever the camera already is.
    pub fn sync_from(&mut self, camera_pos: Vec3) {
        let offset = camera_pos - self.pivot;
        let d = offset.length();
        if d > 1e-4 {
            self.distance = d.clamp(self.min_distance, self.max_distance);
            self.pitch = (offset.y / d).clamp(-1.0, 1.0).acos().clamp(MIN_POLAR, MAX_POLAR);
            self.yaw = offset.x.atan2(offset.z);
        } else {
            self.distance = self.min_distance.max(1.0);
        }
        self.target_yaw = self.yaw;
        self.target_pitch = self.pitch;
        self.target_distance = self.distance;
    }

    /// Damp toward the input targets and return the new camera position.
    pub fn update(&mut self, dt: f32) -> Vec3 {
        let k = lerp_factor(DAMPING_BASE, dt);
        self.yaw += (self.target_yaw - self.yaw) * k;
        self.pitch += (self.target_pitch - self.pitch) * k;
        self.distance += (self.target_distance - self.distance) * k;
        self.distance = self.distance.clamp(self.min_distance, self.max_distance);
        self.position()
    }

    /// Camera position implied by the current spherical offset.
    pub fn position(&self) -> Vec3 {
        let (sin_pitch, cos_pitch) = self.pitch.sin_cos();
        let (sin_yaw, cos_yaw) = self.yaw.sin_cos();
        self.pivot
            + Vec3::new(
                self.distance * sin_pitch * sin_yaw,
                self.distance * cos_pitch,
                self.distance * sin_pitch * cos_yaw,
            )
    }

    pub fn distance(&self) -> f32 {
        self.distance
    }
}

impl Default for OrbitInput {
    fn default() -> Self {
        Self::new()
    }
}
