use beatloom::config::TuningConfig;
use beatloom::tuning::{self, tables, Scale, TuningSystem};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn config(system: TuningSystem, scale: Scale, note_offset: i32) -> TuningConfig {
    TuningConfig {
        system,
        scale,
        note_offset,
    }
}

#[test]
fn no_scale_uses_every_step() {
    let mut rng = StdRng::seed_from_u64(1);
    let pitches = tuning::resolve(
        &config(TuningSystem::EqualTemperament, Scale::None, 0),
        &mut rng,
    );
    assert_eq!(pitches.len(), 12);
    assert_eq!(pitches[0], 1.0);
    assert!((pitches[7] - 1.498307).abs() < 1e-6);
}

#[test]
fn named_scale_picks_its_degree_rows() {
    let mut rng = StdRng::seed_from_u64(2);
    let pitches = tuning::resolve(&config(TuningSystem::JustIntonation, Scale::Cm, 0), &mut rng);
    let degrees = tables::degrees(Scale::Cm).expect("degree row");
    assert_eq!(pitches.len(), 7);
    for (pitch, &degree) in pitches.iter().zip(degrees.iter()) {
        assert_eq!(*pitch, tables::JUST_INTONATION[degree as usize]);
    }
}

#[test]
fn negative_degrees_fold_into_the_lower_octave() {
    let mut rng = StdRng::seed_from_u64(3);
    let pitches = tuning::resolve(&config(TuningSystem::JustIntonation, Scale::Am, 0), &mut rng);
    // Am opens at degree -3: index 9 one octave down.
    assert!((pitches[0] - tables::JUST_INTONATION[9] * 0.5).abs() < 1e-6);
}

#[test]
fn note_offset_of_a_full_table_doubles_everything() {
    let mut rng = StdRng::seed_from_u64(4);
    let base = tuning::resolve(
        &config(TuningSystem::EqualTemperament, Scale::None, 0),
        &mut rng,
    );
    let shifted = tuning::resolve(
        &config(TuningSystem::EqualTemperament, Scale::None, 12),
        &mut rng,
    );
    for (b, s) in base.iter().zip(shifted.iter()) {
        assert!((s - 2.0 * b).abs() < 1e-6);
    }
}

#[test]
fn pentatonic_scales_resolve_five_pitches() {
    let mut rng = StdRng::seed_from_u64(5);
    let pitches = tuning::resolve(
        &config(TuningSystem::EqualTemperament, Scale::PentatonicMinor, 0),
        &mut rng,
    );
    assert_eq!(pitches.len(), 5);
}

#[test]
fn random_sentinels_resolve_to_concrete_choices() {
    for seed in 0..200 {
        let mut rng = StdRng::seed_from_u64(seed);
        let pitches = tuning::resolve(&config(TuningSystem::Random, Scale::Random, 0), &mut rng);
        assert!(
            pitches.len() == 5 || pitches.len() == 7,
            "seed={seed} len={}",
            pitches.len()
        );
        assert!(pitches.iter().all(|p| *p > 0.0 && p.is_finite()));
    }
}

#[test]
fn random_system_reaches_every_table_size() {
    let mut seen_five = false;
    let mut seen_twelve = false;
    for seed in 0..100 {
        let mut rng = StdRng::seed_from_u64(seed);
        let pitches = tuning::resolve(&config(TuningSystem::Random, Scale::None, 0), &mut rng);
        match pitches.len() {
            5 => seen_five = true,
            12 => seen_twelve = true,
            other => panic!("unexpected table size {other}"),
        }
    }
    assert!(seen_five && seen_twelve);
}
