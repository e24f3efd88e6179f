use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;
use tracing::warn;

use crate::tuning::{Scale, TuningSystem};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default, clap::ValueEnum)]
#[serde(rename_all = "kebab-case")]
pub enum GenerationMode {
    /// Decode score text instead of generating.
    FromFile,
    /// Independent random draw per cell.
    #[default]
    UniformNoise,
    /// Elementary cellular automaton under the default rule.
    AutomatonFixed,
    /// Elementary cellular automaton under a freshly synthesized rule.
    AutomatonRandom,
}

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum ConfigError {
    #[error("track count must be positive")]
    ZeroTracks,
    #[error("density must be a positive finite number, got {0}")]
    BadDensity(f32),
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneratorConfig {
    /// Number of tracks (distinct notes) per tick.
    #[serde(default = "GeneratorConfig::default_track_count")]
    pub track_count: usize,
    /// Ticks to precompute; zero or less means unbounded streaming.
    #[serde(default = "GeneratorConfig::default_track_length")]
    pub track_length: i32,
    /// Expected active cells per tick in noise mode.
    #[serde(default = "GeneratorConfig::default_density")]
    pub density: f32,
    #[serde(default)]
    pub mode: GenerationMode,
    /// Raw score text; wins over `mode` when present.
    #[serde(default)]
    pub source_text: Option<String>,
}

impl GeneratorConfig {
    fn default_track_count() -> usize {
        14
    }
    fn default_track_length() -> i32 {
        16
    }
    fn default_density() -> f32 {
        0.25
    }

    /// The mode generation actually runs under: score text forces `FromFile`.
    pub fn effective_mode(&self) -> GenerationMode {
        if self.source_text.is_some() {
            GenerationMode::FromFile
        } else {
            self.mode
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.track_count == 0 {
            return Err(ConfigError::ZeroTracks);
        }
        if !self.density.is_finite() || self.density <= 0.0 {
            return Err(ConfigError::BadDensity(self.density));
        }
        Ok(())
    }
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            track_count: Self::default_track_count(),
            track_length: Self::default_track_length(),
            density: Self::default_density(),
            mode: GenerationMode::default(),
            source_text: None,
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
pub struct TuningConfig {
    #[serde(default = "TuningConfig::default_system")]
    pub system: TuningSystem,
    #[serde(default)]
    pub scale: Scale,
    /// Signed shift, in scale steps, applied to every resolved degree.
    #[serde(default)]
    pub note_offset: i32,
}

impl TuningConfig {
    fn default_system() -> TuningSystem {
        TuningSystem::PentatonicPythagorean
    }
}

impl Default for TuningConfig {
    fn default() -> Self {
        Self {
            system: Self::default_system(),
            scale: Scale::default(),
            note_offset: 0,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
pub struct AppConfig {
    #[serde(default)]
    pub generator: GeneratorConfig,
    #[serde(default)]
    pub tuning: TuningConfig,
}

impl AppConfig {
    /// Read a TOML config, falling back to defaults when the file is absent
    /// or malformed. A missing file is silent; malformed content warns.
    pub fn load_or_default(path: &str) -> Self {
        let path_obj = Path::new(path);
        if !path_obj.exists() {
            return Self::default();
        }
        match fs::read_to_string(path_obj) {
            Ok(contents) => match toml::from_str(&contents) {
                Ok(cfg) => cfg,
                Err(err) => {
                    warn!("failed to parse config {path}: {err}; using defaults");
                    Self::default()
                }
            },
            Err(err) => {
                warn!("failed to read config {path}: {err}; using defaults");
                Self::default()
            }
        }
    }
}
