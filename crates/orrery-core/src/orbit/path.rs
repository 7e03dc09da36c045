/// Closed orbit curves for path rendering.
///
/// A path is a finite, restartable iterator of N+1 scene-space points (the
/// last point repeats the first so the loop closes). It must trace the same
/// curve the live position follows.

use glam::DVec3;

use super::elements::OrbitalElements;
use super::source::EphemerisProvider;
use super::{kepler, source, SCENE_UNITS_PER_AU};
use crate::bodies::BodyId;

/// Default sample count per orbit.
pub const DEFAULT_SEGMENTS: usize = 256;

enum Sampler<'a> {
    /// Sample true anomaly uniformly over [0, 2π] using the conic equation.
    Anomaly {
        a: f64,
        e: f64,
        arg_peri: f64,
        incl: f64,
        long_node: f64,
    },
    /// Sample simulated dates uniformly over one orbital period.
    Dates {
        body: BodyId,
        start_days: f64,
        period_days: f64,
        eph: &'a dyn EphemerisProvider,
    },
}

pub struct OrbitPath<'a> {
    sampler: Sampler<'a>,
    segments: usize,
    index: usize,
}

impl<'a> OrbitPath<'a> {
    /// Path for an elements-driven body. Uses the J2000 element values;
    /// secular drift over one orbit is below line-width at render scale.
    pub fn from_elements(elements: &OrbitalElements, segments: usize) -> Self {
        let el = elements.at(0.0);
        Self {
            sampler: Sampler::Anomaly {
                a: el.a,
                e: el.e,
                arg_peri: el.arg_peri(),
                incl: el.incl,
                long_node: el.long_node,
            },
            segments,
            index: 0,
        }
    }

    /// Path for an ephemeris-driven body, sampled over one period starting
    /// at `start_days`.
    pub fn from_ephemeris(
        body: BodyId,
        start_days: f64,
        period_days: f64,
        eph: &'a dyn EphemerisProvider,
        segments: usize,
    ) -> Self {
        Self {
            sampler: Sampler::Dates {
                body,
                start_days,
                period_days,
                eph,
            },
            segments,
            index: 0,
        }
    }

    /// Rewind to the first point without recomputing the sampler.
    pub fn restart(&mut self) {
        self.index = 0;
    }

    /// Total number of points the iterator yields (segments + 1).
    pub fn len(&self) -> usize {
        self.segments + 1
    }

    pub fn is_empty(&self) -> bool {
        self.segments == 0
    }

    fn point_at(&self, index: usize) -> DVec3 {
        let f = index as f64 / self.segments as f64;
        match &self.sampler {
            Sampler::Anomaly {
                a,
                e,
                arg_peri,
                incl,
                long_node,
            } => {
                let nu = f * std::f64::consts::TAU;
                let r = a * (1.0 - e * e) / (1.0 + e * nu.cos());
                let ecl =
                    kepler::to_ecliptic(r * nu.cos(), r * nu.sin(), *arg_peri, *incl, *long_node);
                source::zup_to_scene(ecl) * SCENE_UNITS_PER_AU
            }
            Sampler::Dates {
                body,
                start_days,
                period_days,
                eph,
            } => {
                let days = start_days + f * period_days;
                match eph.heliocentric_au(*body, days) {
                    Some(v) => source::zup_to_scene(v) * SCENE_UNITS_PER_AU,
                    None => {
                        log::warn!("ephemeris miss while sampling path for {:?}", body);
                        DVec3::ZERO
                    }
                }
            }
        }
    }
}

impl<'a> Iterator for OrbitPath<'a> {
    type Item = DVec3;

    fn next(&mut self) -> Option<DVec3> {
        if self.index > self.segments {
            return None;
        }
        let point = self.point_at(self.index);
        self.index += 1;
        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.segments + 1 - self.index.min(self.segments + 1);
        (remaining, Some(remaining))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bodies::{self, BodyId};
    use crate::orbit::source::tests::CircularEphemeris;
    use crate::orbit::{period_days, scene_position};

    #[test]
    fn path_is_closed_and_restartable() {
        let el = bodies::elements(BodyId::Earth).unwrap();
        let mut path = OrbitPath::from_elements(el, 64);
        let points: Vec<_> = path.by_ref().collect();
        assert_eq!(points.len(), 65);
        assert!((points[0] - points[64]).length() < 1e-9);

        path.restart();
        let again: Vec<_> = path.collect();
        assert_eq!(again.len(), 65);
        assert_eq!(again[0], points[0]);
    }

    #[test]
    fn path_matches_live_position() {
        // The live position at any date must lie on the sampled curve
        // (within half a segment's spacing).
        for &id in &[BodyId::Mercury, BodyId::Earth, BodyId::Saturn] {
            let el = bodies::elements(id).unwrap();
            let points: Vec<_> = OrbitPath::from_elements(el, DEFAULT_SEGMENTS).collect();
            for &days in &[0.0, 40.0, 333.0] {
                let live = scene_position(el, days);
                let nearest = points
                    .iter()
                    .map(|p| (*p - live).length())
                    .fold(f64::INFINITY, f64::min);
                let circumference =
                    std::f64::consts::TAU * el.a * SCENE_UNITS_PER_AU;
                let spacing = circumference / DEFAULT_SEGMENTS as f64;
                assert!(
                    nearest < spacing,
                    "{id:?} live point {nearest} units off its path (spacing {spacing})"
                );
            }
        }
    }

    #[test]
    fn ephemeris_path_indices_match_dates() {
        // Path point at index round(f·segments) equals the provider's
        // position at the corresponding date.
        let eph = CircularEphemeris { period_days: 100.0 };
        let segments = 50;
        let points: Vec<_> =
            OrbitPath::from_ephemeris(BodyId::Earth, 0.0, 100.0, &eph, segments).collect();
        for (i, point) in points.iter().enumerate() {
            let days = 100.0 * i as f64 / segments as f64;
            let expected = source::zup_to_scene(
                eph.heliocentric_au(BodyId::Earth, days).unwrap(),
            ) * SCENE_UNITS_PER_AU;
            assert!((*point - expected).length() < 1e-9, "index {i}");
        }
    }

    #[test]
    fn period_and_path_are_consistent() {
        // One period of dates closes the ephemeris path
        let eph = CircularEphemeris { period_days: 365.25 };
        let period = period_days(1.0);
        let points: Vec<_> =
            OrbitPath::from_ephemeris(BodyId::Earth, 10.0, period, &eph, 32).collect();
        assert!((points[0] - points[32]).length() < 1e-9);
    }
}
