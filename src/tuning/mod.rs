//! Music tuning resolver: maps a tuning system, an optional scale, and a
//! signed note offset to a table of frequency multipliers, folding
//! out-of-range scale degrees across octaves.

pub mod tables;

use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::TuningConfig;

/// Positive frequency multipliers, one per resolved scale degree.
pub type PitchTable = Vec<f32>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TuningSystem {
    /// Pick one of the concrete systems at random.
    Random,
    EqualTemperament,
    JustIntonation,
    PentatonicMinor,
    PentatonicMajor,
    PentatonicPythagorean,
}

/// Note selection applied on top of a tuning system. The minor keys pick 7
/// notes per octave, the pentatonic selections 5.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub enum Scale {
    /// Use every step of the tuning system directly.
    #[default]
    None,
    /// Pick one of the named scales at random.
    Random,
    Bbm,
    Fm,
    Cm,
    Gm,
    Dm,
    Am,
    Em,
    Bm,
    Fsm,
    Csm,
    Gsm,
    Dsm,
    PentatonicMinor,
    PentatonicMajor,
}

/// Resolve a pitch table for a fixed set of emitters.
///
/// The `Random` sentinels draw a concrete system/scale from `rng`; everything
/// after that is deterministic.
pub fn resolve(config: &TuningConfig, rng: &mut impl Rng) -> PitchTable {
    let system = match config.system {
        TuningSystem::Random => {
            let pick = tables::CONCRETE_SYSTEMS[rng.random_range(0..tables::CONCRETE_SYSTEMS.len())];
            debug!(system = ?pick, "random tuning system");
            pick
        }
        other => other,
    };
    // Concrete systems always carry a table.
    let table = tables::intervals(system).unwrap_or(&[]);

    let scale = match config.scale {
        Scale::Random => {
            let pick = tables::CONCRETE_SCALES[rng.random_range(0..tables::CONCRETE_SCALES.len())];
            debug!(scale = ?pick, "random scale");
            pick
        }
        other => other,
    };

    let pitches: PitchTable = match tables::degrees(scale) {
        None => (0..table.len() as i32)
            .map(|i| pitch_at(i + config.note_offset, table))
            .collect(),
        Some(degrees) => degrees
            .iter()
            .map(|&d| pitch_at(d + config.note_offset, table))
            .collect(),
    };
    debug!(?system, ?scale, len = pitches.len(), "pitch table resolved");
    pitches
}

/// Frequency multiplier for a step offset, folding whole table lengths into
/// octave halvings (below 0) or doublings (at or above the table length).
/// An empty table yields 1.0.
pub fn pitch_at(offset: i32, table: &[f32]) -> f32 {
    if table.is_empty() {
        return 1.0;
    }
    let len = table.len() as i32;
    let mut offset = offset;
    let mut octave = 1.0f32;
    while offset < 0 {
        offset += len;
        octave *= 0.5;
    }
    while offset >= len {
        offset -= len;
        octave *= 2.0;
    }
    table[offset as usize] * octave
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_table_yields_unity() {
        assert_eq!(pitch_at(0, &[]), 1.0);
        assert_eq!(pitch_at(-7, &[]), 1.0);
        assert_eq!(pitch_at(42, &[]), 1.0);
    }

    #[test]
    fn folding_walks_octaves() {
        let table = [1.0, 1.5];
        assert_eq!(pitch_at(0, &table), 1.0);
        assert_eq!(pitch_at(1, &table), 1.5);
        assert_eq!(pitch_at(2, &table), 2.0);
        assert_eq!(pitch_at(3, &table), 3.0);
        assert_eq!(pitch_at(-1, &table), 0.75);
        assert_eq!(pitch_at(-2, &table), 0.5);
    }
}
