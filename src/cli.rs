use clap::Parser;

use beatloom::config::GenerationMode;

#[derive(Parser, Debug, Clone)]
#[command(author, version, about)]
pub struct Args {
    /// Path to config TOML
    #[arg(long, default_value = "config.toml")]
    pub config: String,

    /// Score file to decode instead of generating
    #[arg(long)]
    pub score: Option<String>,

    /// RNG seed (random when omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Ticks to generate (overrides config; 0 or less streams nothing)
    #[arg(long)]
    pub ticks: Option<i32>,

    /// Number of tracks (overrides config)
    #[arg(long)]
    pub tracks: Option<usize>,

    /// Note density (overrides config)
    #[arg(long)]
    pub density: Option<f32>,

    /// Generation mode (overrides config)
    #[arg(long, value_enum)]
    pub mode: Option<GenerationMode>,

    /// Note offset in scale steps (overrides config)
    #[arg(long)]
    pub offset: Option<i32>,

    /// Emit the tune and pitch table as JSON
    #[arg(long, default_value_t = false)]
    pub json: bool,
}
