/// Kepler's-equation solver and the elements → heliocentric position pipeline.

use glam::DVec3;

use super::elements::{ElementsAt, OrbitalElements};
use super::{days_to_centuries, source, SCENE_UNITS_PER_AU};

/// Convergence tolerance for Newton–Raphson iteration.
pub const KEPLER_TOLERANCE: f64 = 1e-10;
/// Iteration cap. Near-parabolic eccentricities converge slowly; if the cap
/// is hit the last iterate is returned as an accepted approximation.
pub const KEPLER_MAX_ITER: usize = 100;

/// Solve Kepler's equation `M = E − e·sin(E)` for the eccentric anomaly `E`.
/// `mean_anomaly` in radians; valid for `0 ≤ e < 1`.
pub fn solve_kepler(mean_anomaly: f64, e: f64) -> f64 {
    let mut ea = mean_anomaly; // initial guess E₀ = M
    for _ in 0..KEPLER_MAX_ITER {
        let d_ea = (ea - e * ea.sin() - mean_anomaly) / (1.0 - e * ea.cos());
        ea -= d_ea;
        if d_ea.abs() < KEPLER_TOLERANCE {
            break;
        }
    }
    ea
}

/// True anomaly ν from the eccentric anomaly, via the half-angle atan2 form
/// (numerically stable for all `e ∈ [0, 1)`).
pub fn true_anomaly(ecc_anomaly: f64, e: f64) -> f64 {
    2.0 * ((1.0 + e).sqrt() * (ecc_anomaly / 2.0).sin())
        .atan2((1.0 - e).sqrt() * (ecc_anomaly / 2.0).cos())
}

/// Rotate an in-plane position through argument of perihelion ω, then
/// inclination i, then ascending-node longitude Ω, into the ecliptic frame.
pub fn to_ecliptic(x_orb: f64, y_orb: f64, arg_peri: f64, incl: f64, long_node: f64) -> DVec3 {
    let (sin_w, cos_w) = arg_peri.sin_cos();
    let x1 = cos_w * x_orb - sin_w * y_orb;
    let y1 = sin_w * x_orb + cos_w * y_orb;

    let (sin_i, cos_i) = incl.sin_cos();
    let y2 = cos_i * y1;
    let z2 = sin_i * y1;

    let (sin_o, cos_o) = long_node.sin_cos();
    DVec3::new(cos_o * x1 - sin_o * y2, sin_o * x1 + cos_o * y2, z2)
}

/// Heliocentric position in AU (ecliptic frame) for propagated elements.
pub fn heliocentric_au(el: &ElementsAt) -> DVec3 {
    let ea = solve_kepler(el.mean_anomaly(), el.e);
    let nu = true_anomaly(ea, el.e);
    let r = el.a * (1.0 - el.e * ea.cos());
    to_ecliptic(r * nu.cos(), r * nu.sin(), el.arg_peri(), el.incl, el.long_node)
}

/// Scene-space position for a body with the given elements at a simulated
/// date. The ecliptic frame is Z-up; the scene is Y-up.
pub fn scene_position(elements: &OrbitalElements, days_from_j2000: f64) -> DVec3 {
    let el = elements.at(days_to_centuries(days_from_j2000));
    source::zup_to_scene(heliocentric_au(&el)) * SCENE_UNITS_PER_AU
}
