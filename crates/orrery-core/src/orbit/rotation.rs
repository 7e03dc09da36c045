/// Axial spin as a pure function of elapsed simulated time.
///
/// An absolute angle (rather than a per-frame increment) is drift-free over
/// long sessions and path-independent under pause/resume or time-scale
/// changes: any call pattern reaching the same total elapsed time yields
/// the same angle.

use std::f64::consts::TAU;

pub const SECONDS_PER_HOUR: f64 = 3600.0;

/// Rotation angle in radians for a body with the given sidereal day,
/// after `elapsed_sim_secs` of simulated time (already time-scaled).
pub fn rotation_angle(sidereal_day_hours: f64, elapsed_sim_secs: f64) -> f64 {
    let period_secs = sidereal_day_hours * SECONDS_PER_HOUR;
    if period_secs <= 0.0 {
        return 0.0;
    }
    (elapsed_sim_secs / period_secs).rem_euclid(1.0) * TAU
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    #[test]
    fn quarter_turn() {
        // 1-hour day, 900 s elapsed → quarter turn
        let angle = rotation_angle(1.0, 900.0);
        assert!((angle - PI / 2.0).abs() < 1e-12);
    }

    #[test]
    fn full_turn_wraps_to_zero() {
        let angle = rotation_angle(1.0, 3600.0);
        assert!(angle.abs() < 1e-9, "angle = {angle}");
    }

    #[test]
    fn path_independent() {
        // Reading at 10 s then at 20 s must match a single read at 20 s —
        // there is no internal accumulator to diverge.
        let _ = rotation_angle(5.0, 10.0);
        let two_reads = rotation_angle(5.0, 20.0);
        let one_read = rotation_angle(5.0, 20.0);
        assert_eq!(two_reads, one_read);
    }

    #[test]
    fn negative_elapsed_stays_in_range() {
        // Rewound time still yields an angle in [0, 2π)
        let angle = rotation_angle(2.0, -1800.0);
        assert!((0.0..TAU).contains(&angle), "angle = {angle}");
    }

    #[test]
    fn degenerate_period_is_guarded() {
        assert_eq!(rotation_angle(0.0, 1000.0), 0.0);
        assert_eq!(rotation_angle(-5.0, 1000.0), 0.0);
    }
}
