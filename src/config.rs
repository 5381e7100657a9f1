use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::camera::Viewport;
use crate::geometry::Complexity;
use crate::ui::{Controls, MAX_LIGHTS, MAX_OBJECTS};

/// Startup scene parameters, loadable from JSON
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub objects: usize,
    pub lights: usize,
    pub complexity: u8,
    pub width: u32,
    pub height: u32,
    pub seed: Option<u64>,
    pub show_ui: bool,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            objects: 1000,
            lights: 3,
            complexity: 2,
            width: 1280,
            height: 720,
            seed: None,
            show_ui: true,
        }
    }
}

impl SceneConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn validate(&self) -> Result<()> {
        if Complexity::new(self.complexity).is_none() {
            bail!(
                "complexity must be between {} and {}, got {}",
                Complexity::MIN,
                Complexity::MAX,
                self.complexity
            );
        }
        if self.objects > MAX_OBJECTS {
            bail!("at most {} objects supported, got {}", MAX_OBJECTS, self.objects);
        }
        if self.lights > MAX_LIGHTS {
            bail!("at most {} lights supported, got {}", MAX_LIGHTS, self.lights);
        }
        if self.width == 0 || self.height == 0 {
            bail!("window size must be non-zero, got {}x{}", self.width, self.height);
        }
        Ok(())
    }

    /// Slider values this config starts with
    pub fn controls(&self) -> Controls {
        Controls::new(
            self.objects,
            self.lights,
            Complexity::new(self.complexity).unwrap_or_default(),
        )
    }

    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }
}
