//! Command-line argument parsing.

use std::path::PathBuf;

use clap::Parser;

use crate::Config;

/// Relic demo command-line arguments.
///
/// CLI values override settings loaded from `config.ron`.
#[derive(Parser, Debug)]
#[command(name = "relic", about = "Procedural relic terrain")]
pub struct CliArgs {
    /// Terrain grid side length in cells.
    #[arg(long)]
    pub grid_size: Option<u32>,

    /// Height multiplier applied to noise values.
    #[arg(long)]
    pub vertical_scale: Option<f32>,

    /// Noise sampling frequency.
    #[arg(long)]
    pub frequency: Option<f32>,

    /// World seed.
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of relic instances to scatter.
    #[arg(long)]
    pub count: Option<u32>,

    /// Number of relic asset variants.
    #[arg(long)]
    pub variants: Option<u32>,

    /// Log level (error, warn, info, debug, trace).
    #[arg(long)]
    pub log_level: Option<String>,

    /// Path to config directory (overrides default location).
    #[arg(long)]
    pub config: Option<PathBuf>,
}

impl Config {
    /// Apply CLI overrides to a loaded config.
    pub fn apply_cli_overrides(&mut self, args: &CliArgs) {
        if let Some(size) = args.grid_size {
            self.world.grid_size = size;
        }
        if let Some(scale) = args.vertical_scale {
            self.world.vertical_scale = scale;
        }
        if let Some(freq) = args.frequency {
            self.world.noise_frequency = freq;
        }
        if let Some(seed) = args.seed {
            self.world.seed = seed;
        }
        if let Some(count) = args.count {
            self.scatter.count = count;
        }
        if let Some(variants) = args.variants {
            self.scatter.variant_count = variants;
        }
        if let Some(ref level) = args.log_level {
            self.debug.log_level = level.clone();
        }
    }
}
