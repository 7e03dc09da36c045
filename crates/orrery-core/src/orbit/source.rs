/// Two interchangeable orbital-data representations: explicit Keplerian
/// elements, or a lookup against an external ephemeris provider.

use glam::DVec3;

use super::elements::OrbitalElements;
use super::{kepler, SCENE_UNITS_PER_AU};
use crate::bodies::BodyId;

/// External ephemeris lookup, keyed by body and simulated date.
///
/// Implementations return a heliocentric vector in AU in the ecliptic
/// frame with the Z axis up (the convention astronomical providers use).
pub trait EphemerisProvider {
    fn heliocentric_au(&self, body: BodyId, days_from_j2000: f64) -> Option<DVec3>;
}

/// Map the provider's Z-up ecliptic convention onto the renderer's Y-up
/// frame: `scene.y = source.z`, `scene.z = −source.y`.
pub fn zup_to_scene(v: DVec3) -> DVec3 {
    DVec3::new(v.x, v.z, -v.y)
}

/// Where a body's geometry comes from.
#[derive(Debug, Clone, Copy)]
pub enum OrbitalSource {
    Elements(OrbitalElements),
    Ephemeris(BodyId),
}

impl OrbitalSource {
    /// Scene-space heliocentric position at a simulated date.
    ///
    /// A provider miss is recoverable: the body holds the origin for this
    /// frame and the miss is logged, never propagated into the render path.
    pub fn scene_position(&self, days_from_j2000: f64, eph: &dyn EphemerisProvider) -> DVec3 {
        match self {
            OrbitalSource::Elements(el) => kepler::scene_position(el, days_from_j2000),
            OrbitalSource::Ephemeris(id) => match eph.heliocentric_au(*id, days_from_j2000) {
                Some(v) => zup_to_scene(v) * SCENE_UNITS_PER_AU,
                None => {
                    log::warn!("ephemeris lookup miss for {:?}; holding origin", id);
                    DVec3::ZERO
                }
            },
        }
    }
}

/// Provider with no data; every lookup misses. Used when a body catalog is
/// driven purely by elements.
pub struct NoEphemeris;

impl EphemerisProvider for NoEphemeris {
    fn heliocentric_au(&self, _body: BodyId, _days_from_j2000: f64) -> Option<DVec3> {
        None
    }
}
