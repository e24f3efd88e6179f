// src/gen/automaton.rs

use rand::Rng;
use thiserror::Error;
use tracing::debug;

/// Elementary cellular automaton rule table.
///
/// Eight entries indexed by the 3-cell neighborhood pattern with the left
/// neighbor as the most significant bit: pattern 7 (1,1,1) selects entry 0,
/// pattern 0 (0,0,0) selects entry 7.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rule {
    bits: [u8; 8],
}

pub const RULE_30: Rule = Rule {
    bits: [0, 0, 0, 1, 1, 1, 1, 0],
};
pub const RULE_110: Rule = Rule {
    bits: [0, 1, 1, 0, 1, 1, 1, 0],
};
pub const RULE_90: Rule = Rule {
    bits: [0, 1, 0, 1, 1, 0, 1, 0],
};

/// Attempts before rule synthesis gives up.
pub const SYNTH_MAX_ATTEMPTS: u32 = 64;

const MIN_ACTIVE: u32 = 2;
const MAX_ACTIVE: u32 = 5;

/// Clamp a possibly-noisy cell value to a binary cell. Non-finite reads as 0.
fn binary(cell: f32) -> u8 {
    if !cell.is_finite() {
        return 0;
    }
    cell.clamp(0.0, 1.0).round() as u8
}

impl Rule {
    /// Build a rule from raw entries, clamping each to {0, 1}.
    pub fn new(bits: [u8; 8]) -> Self {
        let mut clamped = [0u8; 8];
        for (dst, src) in clamped.iter_mut().zip(bits.iter()) {
            *dst = (*src).min(1);
        }
        Self { bits: clamped }
    }

    pub fn bits(&self) -> [u8; 8] {
        self.bits
    }

    pub fn active_count(&self) -> u32 {
        self.bits.iter().map(|&b| u32::from(b)).sum()
    }

    /// Next state of the center cell given its 3-cell neighborhood.
    pub fn eval(&self, left: f32, center: f32, right: f32) -> u8 {
        let pattern = (binary(left) << 2) | (binary(center) << 1) | binary(right);
        self.bits[7 - pattern as usize]
    }
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("no acceptable automaton rule after {attempts} attempts")]
pub struct SynthesisError {
    pub attempts: u32,
}

/// Sample a rule with an active-entry count inside [2, 5].
///
/// `density` is clamped into [0.25, 0.75] before sampling; rules outside the
/// active band are rejected and resampled from scratch, up to
/// [`SYNTH_MAX_ATTEMPTS`] times.
pub fn synthesize(density: f32, rng: &mut impl Rng) -> Result<Rule, SynthesisError> {
    let density = if density.is_finite() {
        density.clamp(0.25, 0.75)
    } else {
        0.5
    };
    for attempt in 0..SYNTH_MAX_ATTEMPTS {
        let mut bits = [0u8; 8];
        for bit in bits.iter_mut() {
            if rng.random::<f32>() < density {
                *bit = 1;
            }
        }
        let rule = Rule { bits };
        let active = rule.active_count();
        if (MIN_ACTIVE..=MAX_ACTIVE).contains(&active) {
            debug!(?bits, attempt, "synthesized automaton rule");
            return Ok(rule);
        }
    }
    Err(SynthesisError {
        attempts: SYNTH_MAX_ATTEMPTS,
    })
}
