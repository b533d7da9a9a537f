//! Configuration for the relic terrain demo.
//!
//! Settings persist to disk as RON files and can be overridden per run via
//! clap CLI flags. Unknown fields are ignored and missing fields fall back
//! to defaults, so old config files keep loading across versions.

mod cli;
mod config;
mod error;

pub use cli::CliArgs;
pub use config::{Config, DebugConfig, NoiseKind, ScatterConfig, WorldConfig};
pub use error::ConfigError;
