//! Benchmarks for tune generation across modes.
//!
//! Run:
//! - cargo bench

use beatloom::config::{GenerationMode, GeneratorConfig};
use beatloom::gen::TuneGenerator;
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};

const TRACK_COUNTS: [usize; 3] = [8, 14, 32];
const TICKS: i32 = 64;

fn config(mode: GenerationMode, track_count: usize) -> GeneratorConfig {
    GeneratorConfig {
        track_count,
        track_length: TICKS,
        density: 0.5,
        mode,
        source_text: None,
    }
}

fn bench_generate(c: &mut Criterion) {
    let mut group = c.benchmark_group("generate_tune");
    let modes = [
        GenerationMode::UniformNoise,
        GenerationMode::AutomatonFixed,
        GenerationMode::AutomatonRandom,
    ];
    for mode in modes {
        for track_count in TRACK_COUNTS {
            group.bench_with_input(
                BenchmarkId::new(format!("{mode:?}"), track_count),
                &track_count,
                |b, &track_count| {
                    b.iter(|| {
                        let mut generator =
                            TuneGenerator::from_seed(config(mode, track_count), 7)
                                .expect("valid config");
                        black_box(generator.generate().expect("tune"))
                    })
                },
            );
        }
    }
    group.finish();
}

criterion_group!(benches, bench_generate);
criterion_main!(benches);
