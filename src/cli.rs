// cli.rs - Command-line interface configuration
use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use crate::config::SceneConfig;

#[derive(Parser, Debug, Clone, Default)]
#[command(name = "stress-scene")]
#[command(about = "Real-time mesh and point light stress scene", long_about = None)]
pub struct Cli {
    /// JSON scene configuration; flags below override its values
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Number of meshes
    #[arg(long)]
    pub objects: Option<usize>,

    /// Number of point lights
    #[arg(long)]
    pub lights: Option<usize>,

    /// Tessellation level: 1 (low) to 3 (high)
    #[arg(long)]
    pub complexity: Option<u8>,

    /// Seed for reproducible scenes
    #[arg(long)]
    pub seed: Option<u64>,

    /// Initial window width
    #[arg(long)]
    pub width: Option<u32>,

    /// Initial window height
    #[arg(long)]
    pub height: Option<u32>,

    /// Hide the egui control panel; logging is unaffected
    #[arg(long = "no-ui", default_value = "false")]
    pub no_ui: bool,
}

impl Cli {
    /// Load the config file if given, then apply flag overrides
    pub fn resolve(&self) -> Result<SceneConfig> {
        let base = match &self.config {
            Some(path) => SceneConfig::load(path)?,
            None => SceneConfig::default(),
        };
        let config = self.apply_to(base);
        config.validate()?;
        Ok(config)
    }

    fn apply_to(&self, mut config: SceneConfig) -> SceneConfig {
        if let Some(objects) = self.objects {
            config.objects = objects;
        }
        if let Some(lights) = self.lights {
            config.lights = lights;
        }
        if let Some(complexity) = self.complexity {
            config.complexity = complexity;
        }
        if let Some(seed) = self.seed {
            config.seed = Some(seed);
        }
        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if self.no_ui {
            config.show_ui = false;
        }
        config
    }
}
