/// Simulated-time progression.
///
/// One mutable "current simulated date" (days from J2000) advanced once per
/// frame by `real dt × time scale`. The caller gates advancement on the view
/// mode; the clock itself is a pure accumulator.

use crate::orbit::{self, SECONDS_PER_DAY};

/// Enumerated time-scale presets exposed to the UI.
pub const TIME_SCALE_PRESETS: [f64; 6] = [1.0, 1_000.0, 10_000.0, 100_000.0, 500_000.0, 1_000_000.0];

/// Default multiplier — fast enough that orbital motion is visible.
pub const DEFAULT_TIME_SCALE: f64 = 500_000.0;

#[derive(Debug, Clone)]
pub struct SimClock {
    /// Current simulated date, days from J2000 (high-precision accumulator).
    days: f64,
    /// Session start date, for elapsed-simulated-time readouts.
    start_days: f64,
    /// Simulated seconds per real second.
    time_scale: f64,
}

impl SimClock {
    pub fn new(start_days_from_j2000: f64) -> Self {
        Self {
            days: start_days_from_j2000,
            start_days: start_days_from_j2000,
            time_scale: DEFAULT_TIME_SCALE,
        }
    }

    /// Advance by one frame of real time.
    pub fn advance(&mut self, dt_secs: f64) {
        self.days += dt_secs * self.time_scale / SECONDS_PER_DAY;
    }

    pub fn days_from_j2000(&self) -> f64 {
        self.days
    }

    /// Simulated seconds elapsed since session start (already time-scaled).
    pub fn elapsed_sim_secs(&self) -> f64 {
        (self.days - self.start_days) * SECONDS_PER_DAY
    }

    pub fn time_scale(&self) -> f64 {
        self.time_scale
    }

    /// Set the multiplier. Values below 1 are valid (slow motion); negative
    /// values (rewind) are unsupported and rejected.
    pub fn set_time_scale(&mut self, scale: f64) {
        if scale < 0.0 || !scale.is_finite() {
            log::warn!("rejecting time scale {scale}");
            return;
        }
        self.time_scale = scale;
    }

    /// Jump to an absolute simulated date.
    pub fn set_days_from_j2000(&mut self, days: f64) {
        self.days = days;
    }

    pub fn calendar_date(&self) -> (i32, u32, u32) {
        orbit::days_to_date(self.days)
    }
}
