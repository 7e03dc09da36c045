/// Body catalog — J2000 orbital elements, secular rates, and physical data.
///
/// Elements from the JPL approximate planetary positions table
/// (Standish 1992). Visual radii derive from real radii via a visibility
/// multiplier; true-to-scale planets would be sub-pixel at these orbital
/// distances.

use serde::{Deserialize, Serialize};

use crate::orbit::{OrbitalElements, SCENE_UNITS_PER_AU};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BodyId {
    Sun,
    Mercury,
    Venus,
    Earth,
    Mars,
    Jupiter,
    Saturn,
    Uranus,
    Neptune,
}

pub const BODY_COUNT: usize = 9;

pub const ALL_BODIES: [BodyId; BODY_COUNT] = [
    BodyId::Sun,
    BodyId::Mercury,
    BodyId::Venus,
    BodyId::Earth,
    BodyId::Mars,
    BodyId::Jupiter,
    BodyId::Saturn,
    BodyId::Uranus,
    BodyId::Neptune,
];

pub const PLANETS: [BodyId; 8] = [
    BodyId::Mercury,
    BodyId::Venus,
    BodyId::Earth,
    BodyId::Mars,
    BodyId::Jupiter,
    BodyId::Saturn,
    BodyId::Uranus,
    BodyId::Neptune,
];

impl BodyId {
    pub fn index(self) -> usize {
        match self {
            BodyId::Sun => 0,
            BodyId::Mercury => 1,
            BodyId::Venus => 2,
            BodyId::Earth => 3,
            BodyId::Mars => 4,
            BodyId::Jupiter => 5,
            BodyId::Saturn => 6,
            BodyId::Uranus => 7,
            BodyId::Neptune => 8,
        }
    }

    pub fn from_index(index: usize) -> Option<BodyId> {
        ALL_BODIES.get(index).copied()
    }

    pub fn name(self) -> &'static str {
        match self {
            BodyId::Sun => "Sun",
            BodyId::Mercury => "Mercury",
            BodyId::Venus => "Venus",
            BodyId::Earth => "Earth",
            BodyId::Mars => "Mars",
            BodyId::Jupiter => "Jupiter",
            BodyId::Saturn => "Saturn",
            BodyId::Uranus => "Uranus",
            BodyId::Neptune => "Neptune",
        }
    }

    pub fn is_planet(self) -> bool {
        self != BodyId::Sun
    }
}

/// Physical data for one body.
#[derive(Debug, Clone, Copy)]
pub struct BodyInfo {
    /// Mean radius in kilometers.
    pub radius_km: f64,
    /// Sidereal day in Earth hours.
    pub sidereal_day_hours: f64,
    /// Axial tilt in degrees (retrograde rotation encoded as tilt > 90°).
    pub axial_tilt_deg: f64,
    /// Orbital period in Earth days (zero for the Sun).
    pub period_days: f64,
}

// ── Scaling constants ────────────────────────────────────────────────

pub const KM_PER_AU: f64 = 1.495_978_707e8;

/// Visibility multiplier applied to real planet radii. Tunable without
/// touching the position math.
pub const PLANET_RADIUS_MULT: f64 = 1200.0;
/// The Sun uses its own, much smaller multiplier; at the planet multiplier
/// it would swallow Mercury's orbit.
pub const SUN_RADIUS_MULT: f64 = 40.0;

/// Visual radius in scene units: radius_km × km→scene × multiplier.
pub fn visual_radius(id: BodyId) -> f32 {
    let mult = if id == BodyId::Sun {
        SUN_RADIUS_MULT
    } else {
        PLANET_RADIUS_MULT
    };
    (info(id).radius_km * (SCENE_UNITS_PER_AU / KM_PER_AU) * mult) as f32
}

/// Fallback radius for unresolvable identifiers: Earth-sized.
pub fn fallback_radius() -> f32 {
    visual_radius(BodyId::Earth)
}

// ── Physical data ────────────────────────────────────────────────────

pub fn info(id: BodyId) -> &'static BodyInfo {
    const TABLE: [BodyInfo; BODY_COUNT] = [
        // Sun — sidereal rotation ~25 Earth days at the equator
        BodyInfo { radius_km: 695_700.0, sidereal_day_hours: 609.12, axial_tilt_deg: 7.25, period_days: 0.0 },
        BodyInfo { radius_km: 2_439.7, sidereal_day_hours: 1407.6, axial_tilt_deg: 0.034, period_days: 87.97 },
        // Venus rotates retrograde (tilt ≈ 177°)
        BodyInfo { radius_km: 6_051.8, sidereal_day_hours: 5832.5, axial_tilt_deg: 177.4, period_days: 224.70 },
        BodyInfo { radius_km: 6_371.0, sidereal_day_hours: 23.9345, axial_tilt_deg: 23.44, period_days: 365.26 },
        BodyInfo { radius_km: 3_389.5, sidereal_day_hours: 24.6229, axial_tilt_deg: 25.19, period_days: 686.98 },
        BodyInfo { radius_km: 69_911.0, sidereal_day_hours: 9.925, axial_tilt_deg: 3.13, period_days: 4_332.59 },
        BodyInfo { radius_km: 58_232.0, sidereal_day_hours: 10.656, axial_tilt_deg: 26.73, period_days: 10_759.22 },
        BodyInfo { radius_km: 25_362.0, sidereal_day_hours: 17.24, axial_tilt_deg: 97.77, period_days: 30_688.5 },
        BodyInfo { radius_km: 24_622.0, sidereal_day_hours: 16.11, axial_tilt_deg: 28.32, period_days: 60_182.0 },
    ];
    &TABLE[id.index()]
}

// ── Orbital elements ─────────────────────────────────────────────────

/// J2000 elements and per-century rates. `None` for the Sun, which sits at
/// the heliocentric origin.
pub fn elements(id: BodyId) -> Option<&'static OrbitalElements> {
    const MERCURY: OrbitalElements = OrbitalElements {
        a: 0.387_099_27, a_rate: 0.000_000_37,
        e: 0.205_635_93, e_rate: 0.000_019_06,
        i: 7.004_979_02, i_rate: -0.005_947_49,
        l: 252.250_323_50, l_rate: 149_472.674_111_75,
        long_peri: 77.457_796_28, long_peri_rate: 0.160_476_89,
        long_node: 48.330_765_93, long_node_rate: -0.125_340_81,
    };
    const VENUS: OrbitalElements = OrbitalElements {
        a: 0.723_335_66, a_rate: 0.000_003_90,
        e: 0.006_776_72, e_rate: -0.000_041_07,
        i: 3.394_676_05, i_rate: -0.000_788_90,
        l: 181.979_099_50, l_rate: 58_517.815_387_29,
        long_peri: 131.602_467_18, long_peri_rate: 0.002_683_29,
        long_node: 76.679_842_55, long_node_rate: -0.277_694_18,
    };
    const EARTH: OrbitalElements = OrbitalElements {
        a: 1.000_002_61, a_rate: 0.000_005_62,
        e: 0.016_711_23, e_rate: -0.000_043_92,
        i: -0.000_015_31, i_rate: -0.012_946_68,
        l: 100.464_571_66, l_rate: 35_999.372_449_81,
        long_peri: 102.937_681_93, long_peri_rate: 0.323_273_64,
        long_node: 0.0, long_node_rate: 0.0,
    };
    const MARS: OrbitalElements = OrbitalElements {
        a: 1.523_710_34, a_rate: 0.000_018_47,
        e: 0.093_394_10, e_rate: 0.000_078_82,
        i: 1.849_691_42, i_rate: -0.008_131_31,
        l: -4.553_432_05, l_rate: 19_140.302_684_99,
        long_peri: -23.943_629_59, long_peri_rate: 0.444_410_88,
        long_node: 49.559_538_91, long_node_rate: -0.292_573_43,
    };
    const JUPITER: OrbitalElements = OrbitalElements {
        a: 5.202_887_00, a_rate: -0.000_116_07,
        e: 0.048_386_24, e_rate: -0.000_132_53,
        i: 1.304_396_95, i_rate: -0.001_837_14,
        l: 34.396_440_51, l_rate: 3_034.746_127_75,
        long_peri: 14.728_479_83, long_peri_rate: 0.212_526_68,
        long_node: 100.473_909_09, long_node_rate: 0.204_691_06,
    };
    const SATURN: OrbitalElements = OrbitalElements {
        a: 9.536_675_94, a_rate: -0.001_250_60,
        e: 0.053_861_79, e_rate: -0.000_509_91,
        i: 2.485_991_87, i_rate: 0.001_936_09,
        l: 49.954_244_23, l_rate: 1_222.493_622_01,
        long_peri: 92.598_878_31, long_peri_rate: -0.418_972_16,
        long_node: 113.662_424_48, long_node_rate: -0.288_677_94,
    };
    const URANUS: OrbitalElements = OrbitalElements {
        a: 19.189_164_64, a_rate: -0.001_961_76,
        e: 0.047_257_44, e_rate: -0.000_043_97,
        i: 0.772_637_83, i_rate: -0.002_429_39,
        l: 313.238_104_51, l_rate: 428.482_027_85,
        long_peri: 170.954_276_30, long_peri_rate: 0.408_052_81,
        long_node: 74.016_925_03, long_node_rate: 0.042_405_89,
    };
    const NEPTUNE: OrbitalElements = OrbitalElements {
        a: 30.069_922_76, a_rate: 0.000_262_91,
        e: 0.008_590_48, e_rate: 0.000_051_05,
        i: 1.770_043_47, i_rate: -0.005_086_64,
        l: -55.120_029_69, l_rate: 786.543_600_60,
        long_peri: 44.964_762_27, long_peri_rate: -0.322_414_64,
        long_node: 131.784_225_74, long_node_rate: -0.005_086_64,
    };

    match id {
        BodyId::Sun => None,
        BodyId::Mercury => Some(&MERCURY),
        BodyId::Venus => Some(&VENUS),
        BodyId::Earth => Some(&EARTH),
        BodyId::Mars => Some(&MARS),
        BodyId::Jupiter => Some(&JUPITER),
        BodyId::Saturn => Some(&SATURN),
        BodyId::Uranus => Some(&URANUS),
        BodyId::Neptune => Some(&NEPTUNE),
    }
}

/// Outermost aphelion distance in scene units — the system-view camera may
/// never travel past it.
pub fn system_extent() -> f32 {
    PLANETS
        .iter()
        .filter_map(|&id| elements(id))
        .map(|el| el.a * (1.0 + el.e) * SCENE_UNITS_PER_AU)
        .fold(0.0_f64, f64::max) as f32
}
