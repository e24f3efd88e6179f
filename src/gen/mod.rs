//! Tune generation: precomputed tunes and the per-tick streaming pull API.

pub mod automaton;
pub mod score;

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use serde::Serialize;
use thiserror::Error;
use tracing::debug;

use crate::config::{ConfigError, GenerationMode, GeneratorConfig};
use crate::gen::automaton::{synthesize, Rule, SynthesisError, RULE_110};
use crate::gen::score::ScoreError;

/// Per-track activation value. Generated material is 0/1; score files may
/// carry any integer and the parser preserves it.
pub type Velocity = i32;

/// One time slice: one velocity per track.
pub type Tick = Vec<Velocity>;

/// An ordered sequence of ticks. `track_count` is the resolved width; rows
/// decoded from score files may be shorter and are not padded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Tune {
    pub ticks: Vec<Tick>,
    pub track_count: usize,
}

impl Tune {
    /// Velocity at (tick, track), reading 0 past the end of a short row.
    pub fn velocity_at(&self, tick: usize, track: usize) -> Velocity {
        self.ticks
            .get(tick)
            .and_then(|row| row.get(track))
            .copied()
            .unwrap_or(0)
    }

    pub fn len(&self) -> usize {
        self.ticks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ticks.is_empty()
    }
}

#[derive(Debug, Error)]
pub enum GenerateError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Score(#[from] ScoreError),
    #[error(transparent)]
    Synthesis(#[from] SynthesisError),
}

/// Tune generator and streaming session.
///
/// Construction validates the config and pins the automaton rule, so every
/// tick of one session evolves under the same rule. A generator owns its RNG;
/// callers needing concurrency use one generator per thread.
#[derive(Debug)]
pub struct TuneGenerator {
    config: GeneratorConfig,
    rule: Option<Rule>,
    rng: SmallRng,
}

impl TuneGenerator {
    pub fn new(config: GeneratorConfig, mut rng: SmallRng) -> Result<Self, GenerateError> {
        config.validate()?;
        let rule = match config.effective_mode() {
            GenerationMode::AutomatonFixed => Some(RULE_110),
            GenerationMode::AutomatonRandom => Some(synthesize(config.density, &mut rng)?),
            GenerationMode::FromFile | GenerationMode::UniformNoise => None,
        };
        if let Some(rule) = &rule {
            debug!(bits = ?rule.bits(), "session rule pinned");
        }
        Ok(Self { config, rule, rng })
    }

    pub fn from_seed(config: GeneratorConfig, seed: u64) -> Result<Self, GenerateError> {
        Self::new(config, SmallRng::seed_from_u64(seed))
    }

    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// The rule pinned for this session, if the mode uses one.
    pub fn rule(&self) -> Option<Rule> {
        self.rule
    }

    /// Build a full tune. Present score text wins over the generation mode;
    /// an unbounded `track_length` yields an empty tune (stream those configs
    /// through [`Self::next_tick`] instead).
    pub fn generate(&mut self) -> Result<Tune, GenerateError> {
        if let Some(text) = self.config.source_text.as_deref() {
            let parsed = score::parse(text)?;
            debug!(
                ticks = parsed.ticks.len(),
                tracks = parsed.track_count,
                "score resolved"
            );
            return Ok(Tune {
                ticks: parsed.ticks,
                track_count: parsed.track_count,
            });
        }

        let len = self.config.track_length.max(0) as usize;
        let mut ticks: Vec<Tick> = Vec::with_capacity(len);
        for _ in 0..len {
            let tick = self.next_tick(ticks.last().map(Vec::as_slice));
            ticks.push(tick);
        }
        Ok(Tune {
            ticks,
            track_count: self.config.track_count,
        })
    }

    /// Produce the next tick from the previous one. `None` (or an empty
    /// previous tick) seeds the stream with exactly one active track.
    pub fn next_tick(&mut self, previous: Option<&[Velocity]>) -> Tick {
        let previous = match previous {
            Some(prev) if !prev.is_empty() => prev,
            _ => return self.seed_tick(),
        };
        (0..previous.len())
            .map(|track| self.next_cell(previous, track))
            .collect()
    }

    fn seed_tick(&mut self) -> Tick {
        let mut tick = vec![0; self.config.track_count];
        let active = self.rng.random_range(0..tick.len());
        tick[active] = 1;
        tick
    }

    fn next_cell(&mut self, previous: &[Velocity], track: usize) -> Velocity {
        // Automaton evolution needs a pinned rule and a full neighborhood;
        // everything else is an independent Bernoulli draw.
        let rule = match self.rule {
            Some(rule) if previous.len() >= 3 => rule,
            _ => return self.noise_cell(),
        };
        let last = previous.len() - 1;
        let left = if track == 0 {
            previous[last]
        } else {
            previous[track - 1]
        };
        let right = if track >= last {
            previous[0]
        } else {
            previous[track + 1]
        };
        Velocity::from(rule.eval(left as f32, previous[track] as f32, right as f32))
    }

    /// Expected `density` active tracks per tick.
    fn noise_cell(&mut self) -> Velocity {
        let p = self.config.density / self.config.track_count as f32;
        if self.rng.random::<f32>() < p {
            1
        } else {
            0
        }
    }
}
