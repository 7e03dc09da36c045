/// Orbital mechanics — pure math, no renderer dependencies.
///
/// Uses f64 throughout (centuries × deg/century = large numbers); positions
/// are converted to f32 only at the render boundary in `app.rs`.

pub mod elements;
pub mod kepler;
pub mod path;
pub mod rotation;
pub mod source;

pub use elements::OrbitalElements;
pub use kepler::{scene_position, solve_kepler, true_anomaly};
pub use path::OrbitPath;
pub use rotation::rotation_angle;
pub use source::{EphemerisProvider, OrbitalSource};

pub const DEG_TO_RAD: f64 = std::f64::consts::PI / 180.0;

/// Scene-unit scale: 1 AU = 8 scene units. True-to-scale orbits with
/// visible planets are impossible, so distances and radii scale separately.
pub const SCENE_UNITS_PER_AU: f64 = 8.0;

pub const DAYS_PER_CENTURY: f64 = 36525.0;
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Convert days from the J2000.0 epoch (2000-01-01 12:00 TT) to Julian centuries.
pub fn days_to_centuries(days_from_j2000: f64) -> f64 {
    days_from_j2000 / DAYS_PER_CENTURY
}

/// Orbital period in Earth days from the semi-major axis, via Kepler's third law.
pub fn period_days(a_au: f64) -> f64 {
    365.25 * a_au.powf(1.5)
}

/// Convert days from J2000 to a (year, month, day) calendar date.
/// J2000.0 = January 1, 2000, 12:00 TT (Julian Day 2451545.0).
pub fn days_to_date(days_from_j2000: f64) -> (i32, u32, u32) {
    let jd = days_from_j2000 + 2_451_545.0;
    let z = (jd + 0.5).floor() as i64;
    let a = if z < 2_299_161 {
        z
    } else {
        let alpha = ((z as f64 - 1_867_216.25) / 36_524.25).floor() as i64;
        z + 1 + alpha - alpha / 4
    };
    let b = a + 1524;
    let c = ((b as f64 - 122.1) / 365.25).floor() as i64;
    let d = (365.25 * c as f64).floor() as i64;
    let e = ((b - d) as f64 / 30.6001).floor() as i64;

    let day = (b - d - (30.6001 * e as f64).floor() as i64) as u32;
    let month = if e < 14 { (e - 1) as u32 } else { (e - 13) as u32 };
    let year = if month > 2 { (c - 4716) as i32 } else { (c - 4715) as i32 };

    (year, month, day)
}
