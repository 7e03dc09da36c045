/// Configuration for the app, provided by the host.

use crate::clock::DEFAULT_TIME_SCALE;
use crate::state::ViewMode;

#[derive(Debug, Clone)]
pub struct OrreryConfig {
    /// Simulated start date, days from J2000. The web host usually passes
    /// the real current date; the default is ~late August 2026.
    pub start_days_from_j2000: f64,
    /// Initial time-scale multiplier.
    pub time_scale: f64,
    /// View the session starts in.
    pub start_view: ViewMode,
    /// Length of the scripted intro sequence, in seconds.
    pub intro_secs: f32,
    /// Vertical field of view in radians (for picking rays).
    pub fov_y: f32,
    /// Viewport aspect ratio; updated by the host on resize.
    pub aspect: f32,
}

impl Default for OrreryConfig {
    fn default() -> Self {
        Self {
            start_days_from_j2000: 9737.0,
            time_scale: DEFAULT_TIME_SCALE,
            start_view: ViewMode::Loading,
            intro_secs: 4.0,
            fov_y: std::f32::consts::FRAC_PI_3, // 60°
            aspect: 16.0 / 9.0,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::orbit::days_to_date;

    #[test]
    fn default_start_date_is_plausible() {
        let config = OrreryConfig::default();
        let (year, _, _) = days_to_date(config.start_days_from_j2000);
        assert_eq!(year, 2026);
        assert!(config.time_scale > 0.0);
    }
}
