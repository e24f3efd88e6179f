use thiserror::Error;

use super::{Tick, Velocity};

/// Result of decoding a textual score: kept ticks plus the widest row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedScore {
    pub ticks: Vec<Tick>,
    pub track_count: usize,
}

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum ScoreError {
    #[error("score contains no playable ticks")]
    Empty,
}

/// Decode a score: one tick per line, whitespace-separated integer
/// velocities. `//` starts a comment running to the end of the line.
/// Non-numeric tokens are dropped; lines left with no velocities contribute
/// no tick. Short rows are kept as-is, the consumer reads 0 past their end.
pub fn parse(text: &str) -> Result<ParsedScore, ScoreError> {
    let mut ticks: Vec<Tick> = Vec::new();
    let mut track_count = 0;

    for line in text.lines() {
        let line = match line.find("//") {
            Some(idx) => &line[..idx],
            None => line,
        };
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let tick: Tick = line
            .split_whitespace()
            .filter_map(|token| token.parse::<Velocity>().ok())
            .collect();
        if tick.is_empty() {
            continue;
        }

        track_count = track_count.max(tick.len());
        ticks.push(tick);
    }

    if ticks.is_empty() {
        return Err(ScoreError::Empty);
    }
    Ok(ParsedScore { ticks, track_count })
}
