// cli.rs - Command-line interface configuration
use std::path::PathBuf;

use clap::Parser;

use crate::config::SceneConfig;

/// Environment variable holding the log filter.
pub const LOG_FILTER_ENV: &str = "RUST_LOG";

/// Filter used when the log environment variable is unset.
pub const DEFAULT_LOG_FILTER: &str = "info";

/// env_logger builder reading `filter_env`, defaulting to `info`.
pub fn logger_builder(filter_env: &str) -> env_logger::Builder {
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(filter_env, DEFAULT_LOG_FILTER))
}

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "scroll-room")]
#[command(about = "Scroll-driven camera walk through a ray traced room", long_about = None)]
pub struct Cli {
    /// Scene configuration file (JSON); defaults are used for missing fields
    #[arg(long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Seed for waypoints and decoration sizes
    #[arg(long)]
    pub seed: Option<u64>,

    /// Floor texture image
    #[arg(long, value_name = "FILE", conflicts_with = "no_texture")]
    pub texture: Option<PathBuf>,

    /// Render the floor without a texture
    #[arg(long = "no-texture", default_value = "false")]
    pub no_texture: bool,

    /// Disable UI elements
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,

    /// Print N+1 evenly spaced camera poses as JSON lines and exit
    #[arg(long = "sample-path", value_name = "N")]
    pub sample_path: Option<usize>,
}

impl Cli {
    /// Applies command-line overrides on top of a loaded configuration.
    pub fn apply(&self, config: &mut SceneConfig) {
        if let Some(seed) = self.seed {
            config.path.seed = Some(seed);
        }
        if let Some(texture) = &self.texture {
            config.floor.texture = Some(texture.clone());
        }
        if self.no_texture {
            config.floor.texture = None;
        }
    }
}
