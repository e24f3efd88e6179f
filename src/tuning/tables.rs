//! Static interval and scale-degree tables. Initialized once, never mutated.

use super::{Scale, TuningSystem};

/// 12-tone equal temperament steps (2^(i/12)).
pub const EQUAL_TEMPERAMENT: [f32; 12] = [
    1.0, 1.059463, 1.122462, 1.189207, 1.259921, 1.334840, 1.414214, 1.498307, 1.587401, 1.681793,
    1.781797, 1.887749,
];

/// 12-tone just intonation (5-limit with a 7/5 tritone).
pub const JUST_INTONATION: [f32; 12] = [
    1.0,
    16.0 / 15.0,
    9.0 / 8.0,
    6.0 / 5.0,
    5.0 / 4.0,
    4.0 / 3.0,
    7.0 / 5.0,
    3.0 / 2.0,
    8.0 / 5.0,
    5.0 / 3.0,
    16.0 / 9.0,
    15.0 / 8.0,
];

pub const PENTATONIC_MINOR: [f32; 5] = [1.0, 36.0 / 30.0, 40.0 / 30.0, 45.0 / 30.0, 54.0 / 30.0];

pub const PENTATONIC_MAJOR: [f32; 5] = [1.0, 27.0 / 24.0, 30.0 / 24.0, 36.0 / 24.0, 40.0 / 24.0];

pub const PENTATONIC_PYTHAGOREAN: [f32; 5] = [1.0, 32.0 / 27.0, 4.0 / 3.0, 3.0 / 2.0, 16.0 / 9.0];

/// Concrete systems eligible for the `Random` sentinel.
pub const CONCRETE_SYSTEMS: [TuningSystem; 5] = [
    TuningSystem::EqualTemperament,
    TuningSystem::JustIntonation,
    TuningSystem::PentatonicMinor,
    TuningSystem::PentatonicMajor,
    TuningSystem::PentatonicPythagorean,
];

/// Named scales eligible for the `Random` sentinel.
pub const CONCRETE_SCALES: [Scale; 14] = [
    Scale::Bbm,
    Scale::Fm,
    Scale::Cm,
    Scale::Gm,
    Scale::Dm,
    Scale::Am,
    Scale::Em,
    Scale::Bm,
    Scale::Fsm,
    Scale::Csm,
    Scale::Gsm,
    Scale::Dsm,
    Scale::PentatonicMinor,
    Scale::PentatonicMajor,
];

/// Interval table for a concrete system; `None` for the `Random` sentinel.
pub fn intervals(system: TuningSystem) -> Option<&'static [f32]> {
    match system {
        TuningSystem::Random => None,
        TuningSystem::EqualTemperament => Some(&EQUAL_TEMPERAMENT),
        TuningSystem::JustIntonation => Some(&JUST_INTONATION),
        TuningSystem::PentatonicMinor => Some(&PENTATONIC_MINOR),
        TuningSystem::PentatonicMajor => Some(&PENTATONIC_MAJOR),
        TuningSystem::PentatonicPythagorean => Some(&PENTATONIC_PYTHAGOREAN),
    }
}

/// Degree indices a named scale picks from its interval table, lowest key
/// first. Entries below 0 or at/above the table length reach into the
/// neighboring octaves. `None` for the `None` and `Random` sentinels.
pub fn degrees(scale: Scale) -> Option<&'static [i32]> {
    match scale {
        Scale::None | Scale::Random => None,
        Scale::Am => Some(&[-3, -1, 0, 2, 4, 5, 7]),
        Scale::Bbm => Some(&[-2, 0, 1, 3, 5, 6, 8]),
        Scale::Bm => Some(&[-1, 1, 2, 4, 6, 7, 9]),
        Scale::Cm => Some(&[0, 2, 3, 5, 7, 8, 10]),
        Scale::Csm => Some(&[1, 3, 4, 6, 8, 9, 11]),
        Scale::Dm => Some(&[2, 4, 5, 7, 9, 10, 12]),
        Scale::Dsm => Some(&[3, 5, 6, 8, 10, 11, 13]),
        Scale::Em => Some(&[4, 6, 7, 9, 11, 12, 14]),
        Scale::Fm => Some(&[5, 7, 8, 10, 12, 13, 15]),
        Scale::Fsm => Some(&[-6, -4, -5, -1, 1, 2, 4]),
        Scale::Gm => Some(&[-5, -3, -2, 0, 2, 3, 5]),
        Scale::Gsm => Some(&[1, 3, 4, 6, 8, 9, 11]),
        Scale::PentatonicMajor => Some(&[0, 2, 4, 5, 7]),
        Scale::PentatonicMinor => Some(&[0, 2, 4, 6, 7]),
    }
}
