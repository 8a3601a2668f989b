use std::path::PathBuf;

use clap::Parser;
use log::{LevelFilter, info};

use crate::config::GTFConfig;

/// Packs the items of an instance file onto its surface with Greedy Tangent Fill
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// JSON instance to pack
    #[arg(short, long, value_name = "FILE")]
    pub input_file: PathBuf,
    /// Folder in which the JSON and SVG solutions are written
    #[arg(short, long, value_name = "FOLDER")]
    pub solution_folder: PathBuf,
    /// JSON configuration, defaults are used for missing fields
    #[arg(short, long, value_name = "FILE")]
    pub config_file: Option<PathBuf>,
    /// Overrides the `random_seed` of the configuration, 0 for a non-deterministic run
    #[arg(long, value_name = "SEED")]
    pub seed: Option<u64>,
    #[arg(
        short,
        long,
        value_name = "[off, error, warn, info, debug, trace]",
        default_value = "info"
    )]
    pub log_level: LevelFilter,
}

impl Cli {
    /// Applies the configuration overrides given on the command line
    pub fn override_config(&self, config: GTFConfig) -> GTFConfig {
        match self.seed {
            Some(random_seed) => {
                info!("[CLI] seed overridden: {random_seed}");
                GTFConfig {
                    random_seed,
                    ..config
                }
            }
            None => config,
        }
    }
}
