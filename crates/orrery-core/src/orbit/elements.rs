/// Keplerian orbital elements at the J2000 epoch with secular rates.
/// Source: Standish (1992) / JPL approximate planetary positions.

use super::DEG_TO_RAD;

/// The six classical elements plus their linear change per Julian century.
/// Angles are stored in degrees, as published.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrbitalElements {
    /// Semi-major axis (AU) and rate (AU per century).
    pub a: f64,
    pub a_rate: f64,
    /// Eccentricity (dimensionless), `0 ≤ e < 1`.
    pub e: f64,
    pub e_rate: f64,
    /// Inclination to the ecliptic (degrees).
    pub i: f64,
    pub i_rate: f64,
    /// Mean longitude (degrees).
    pub l: f64,
    pub l_rate: f64,
    /// Longitude of perihelion ϖ (degrees).
    pub long_peri: f64,
    pub long_peri_rate: f64,
    /// Longitude of the ascending node Ω (degrees).
    pub long_node: f64,
    pub long_node_rate: f64,
}

/// Elements propagated to a specific epoch, converted to radians/AU.
#[derive(Debug, Clone, Copy)]
pub struct ElementsAt {
    pub a: f64,
    pub e: f64,
    pub incl: f64,
    pub mean_long: f64,
    pub long_peri: f64,
    pub long_node: f64,
}

impl OrbitalElements {
    /// Propagate each element linearly: `value(T) = value₀ + rate·T`,
    /// with `T` in Julian centuries from J2000.
    pub fn at(&self, t_centuries: f64) -> ElementsAt {
        ElementsAt {
            a: self.a + self.a_rate * t_centuries,
            e: self.e + self.e_rate * t_centuries,
            incl: (self.i + self.i_rate * t_centuries) * DEG_TO_RAD,
            mean_long: (self.l + self.l_rate * t_centuries) * DEG_TO_RAD,
            long_peri: (self.long_peri + self.long_peri_rate * t_centuries) * DEG_TO_RAD,
            long_node: (self.long_node + self.long_node_rate * t_centuries) * DEG_TO_RAD,
        }
    }
}

impl ElementsAt {
    /// Argument of perihelion ω = ϖ − Ω (radians).
    pub fn arg_peri(&self) -> f64 {
        self.long_peri - self.long_node
    }

    /// Mean anomaly M = L − ϖ, normalized into [−π, π).
    pub fn mean_anomaly(&self) -> f64 {
        normalize_angle(self.mean_long - self.long_peri)
    }
}

/// Wrap an angle (radians) into [−π, π).
pub fn normalize_angle(angle: f64) -> f64 {
    use std::f64::consts::{PI, TAU};
    ((angle % TAU) + TAU + PI) % TAU - PI
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    fn earth() -> OrbitalElements {
        OrbitalElements {
            a: 1.000_002_61,
            a_rate: 0.000_005_62,
            e: 0.016_711_23,
            e_rate: -0.000_043_92,
            i: -0.000_015_31,
            i_rate: -0.012_946_68,
            l: 100.464_571_66,
            l_rate: 35_999.372_449_81,
            long_peri: 102.937_681_93,
            long_peri_rate: 0.323_273_64,
            long_node: 0.0,
            long_node_rate: 0.0,
        }
    }

    #[test]
    fn propagation_at_epoch_is_identity() {
        let el = earth().at(0.0);
        assert!((el.a - 1.000_002_61).abs() < 1e-12);
        assert!((el.e - 0.016_711_23).abs() < 1e-12);
        assert!((el.mean_long - 100.464_571_66_f64.to_radians()).abs() < 1e-12);
    }

    #[test]
    fn propagation_applies_rates() {
        let el = earth().at(1.0);
        assert!((el.a - (1.000_002_61 + 0.000_005_62)).abs() < 1e-12);
    }

    #[test]
    fn mean_anomaly_is_normalized() {
        // After a century, Earth's mean longitude has wrapped ~100 times.
        let el = earth().at(1.0);
        let m = el.mean_anomaly();
        assert!((-PI..PI).contains(&m), "M = {m}");
    }

    #[test]
    fn normalize_angle_range() {
        for raw in [-100.0, -PI, -0.5, 0.0, 0.5, PI, 100.0, 12345.678] {
            let n = normalize_angle(raw);
            assert!((-PI..PI).contains(&n), "normalize({raw}) = {n}");
            // Differs from the input by a whole number of turns
            let turns = ((n - raw) / std::f64::consts::TAU).round();
            assert!((n - raw - turns * std::f64::consts::TAU).abs() < 1e-9);
        }
    }
}
