// Entry point: resolves a tune and a pitch table from config plus CLI
// overrides and prints them as a text grid or JSON.

mod cli;

use std::process::ExitCode;

use clap::Parser;
use rand::SeedableRng;
use serde::Serialize;
use tracing::warn;
use tracing_subscriber::EnvFilter;

use beatloom::config::{AppConfig, GeneratorConfig};
use beatloom::gen::{GenerateError, Tune, TuneGenerator};
use beatloom::tuning;

#[derive(Serialize)]
struct Output<'a> {
    tune: &'a Tune,
    pitches: &'a [f32],
}

fn generate(config: GeneratorConfig, seed: u64) -> Result<Tune, GenerateError> {
    let mut generator = TuneGenerator::from_seed(config, seed)?;
    generator.generate()
}

fn print_grid(tune: &Tune, pitches: &[f32]) {
    for tick in 0..tune.len() {
        let row: String = (0..tune.track_count)
            .map(|track| if tune.velocity_at(tick, track) > 0 { 'x' } else { '.' })
            .collect();
        println!("{row}");
    }
    let formatted: Vec<String> = pitches.iter().map(|p| format!("{p:.6}")).collect();
    println!("pitches: {}", formatted.join(" "));
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let args = cli::Args::parse();
    let mut config = AppConfig::load_or_default(&args.config);

    if let Some(ticks) = args.ticks {
        config.generator.track_length = ticks;
    }
    if let Some(tracks) = args.tracks {
        config.generator.track_count = tracks;
    }
    if let Some(density) = args.density {
        config.generator.density = density;
    }
    if let Some(mode) = args.mode {
        config.generator.mode = mode;
    }
    if let Some(offset) = args.offset {
        config.tuning.note_offset = offset;
    }
    if let Some(path) = &args.score {
        match std::fs::read_to_string(path) {
            Ok(text) => config.generator.source_text = Some(text),
            Err(err) => {
                eprintln!("cannot read score {path}: {err}");
                return ExitCode::FAILURE;
            }
        }
    }

    let seed = args.seed.unwrap_or_else(rand::random);

    let tune = match generate(config.generator.clone(), seed) {
        Ok(tune) => tune,
        Err(GenerateError::Score(err)) => {
            // Empty scores are recoverable: drop the score and generate.
            warn!("{err}; falling back to procedural generation");
            let fallback = GeneratorConfig {
                source_text: None,
                ..config.generator.clone()
            };
            match generate(fallback, seed) {
                Ok(tune) => tune,
                Err(err) => {
                    eprintln!("generation failed: {err}");
                    return ExitCode::FAILURE;
                }
            }
        }
        Err(err) => {
            eprintln!("generation failed: {err}");
            return ExitCode::FAILURE;
        }
    };

    let mut rng = rand::rngs::SmallRng::seed_from_u64(seed);
    let pitches = tuning::resolve(&config.tuning, &mut rng);

    if args.json {
        let output = Output {
            tune: &tune,
            pitches: &pitches,
        };
        match serde_json::to_string_pretty(&output) {
            Ok(json) => println!("{json}"),
            Err(err) => {
                eprintln!("cannot serialize output: {err}");
                return ExitCode::FAILURE;
            }
        }
    } else {
        print_grid(&tune, &pitches);
    }
    ExitCode::SUCCESS
}
