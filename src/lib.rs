//! Procedural tune and tuning generation.
//!
//! Two independent generators share a configuration surface:
//! [`gen::TuneGenerator`] turns a [`config::GeneratorConfig`] into a
//! [`gen::Tune`] (or streams ticks on demand through its pull API), and
//! [`tuning::resolve`] turns a [`config::TuningConfig`] into a table of
//! frequency multipliers for a fixed set of sound emitters.

pub mod config;
pub mod gen;
pub mod tuning;

pub use config::{AppConfig, ConfigError, GenerationMode, GeneratorConfig, TuningConfig};
pub use gen::{GenerateError, Tick, Tune, TuneGenerator, Velocity};
pub use tuning::{pitch_at, resolve, PitchTable, Scale, TuningSystem};
