/// Ray-cast hit testing against body spheres.

use glam::{Vec2, Vec3};

use crate::bodies::BodyId;

/// Pick spheres are slightly larger than the rendered body so small planets
/// remain clickable.
pub const PICK_RADIUS_SCALE: f32 = 1.25;

/// Pointer travel (NDC units) beyond which a press becomes a drag, not a click.
pub const DRAG_THRESHOLD: f32 = 0.01;

#[derive(Debug, Clone, Copy)]
pub struct Ray {
    pub origin: Vec3,
    pub dir: Vec3,
}

/// Build a world-space ray through a screen point, from the camera pose and
/// a perspective projection (vertical fov in radians, width/height aspect).
pub fn ray_from_ndc(eye: Vec3, look_at: Vec3, fov_y: f32, aspect: f32, ndc: Vec2) -> Ray {
    let mut forward = (look_at - eye).normalize_or_zero();
    if forward == Vec3::ZERO {
        forward = Vec3::NEG_Z;
    }
    let mut right = forward.cross(Vec3::Y).normalize_or_zero();
    if right == Vec3::ZERO {
        // Looking straight up or down
        right = Vec3::X;
    }
    let up = right.cross(forward);

    let half_h = (fov_y * 0.5).tan();
    let half_w = half_h * aspect;
    let dir = (forward + right * (ndc.x * half_w) + up * (ndc.y * half_h)).normalize();
    Ray { origin: eye, dir }
}

/// Nearest intersection distance of a ray with a sphere, if any.
pub fn ray_sphere(ray: &Ray, center: Vec3, radius: f32) -> Option<f32> {
    let oc = ray.origin - center;
    let b = oc.dot(ray.dir);
    let c = oc.length_squared() - radius * radius;
    let disc = b * b - c;
    if disc < 0.0 {
        return None;
    }
    let sqrt_disc = disc.sqrt();
    let t_near = -b - sqrt_disc;
    if t_near > 0.0 {
        Some(t_near)
    } else {
        let t_far = -b + sqrt_disc;
        (t_far > 0.0).then_some(t_far)
    }
}

/// Hit-test every candidate sphere; the nearest hit wins. A miss means the
/// background was clicked.
pub fn pick(
    ray: &Ray,
    candidates: impl Iterator<Item = (BodyId, Vec3, f32)>,
) -> Option<BodyId> {
    let mut best: Option<(BodyId, f32)> = None;
    for (id, center, radius) in candidates {
        if let Some(t) = ray_sphere(ray, center, radius * PICK_RADIUS_SCALE) {
            if best.map_or(true, |(_, best_t)| t < best_t) {
                best = Some((id, t));
            }
        }
    }
    best.map(|(id, _)| id)
}
