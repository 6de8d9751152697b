use crate::error::ConfigError;
use crate::rendering::{ColorMode, PngOptions};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tile_grid::TileGrid;

/// Render configuration, loaded from YAML and/or command line flags
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderConfig {
    /// Image width in pixels
    #[serde(default = "default_side")]
    pub width: u32,

    /// Image height in pixels
    #[serde(default = "default_side")]
    pub height: u32,

    /// Edge length of the square tiles; must divide width and height
    #[serde(default = "default_tile_size")]
    pub tile_size: u32,

    /// Worker pool size (default: one worker per tile column)
    #[serde(default)]
    pub workers: Option<usize>,

    /// Capacity of the work and result queues
    #[serde(default = "default_queue_capacity")]
    pub queue_capacity: usize,

    /// Which dimension the gradient is measured against
    #[serde(default)]
    pub color_mode: ColorMode,

    /// Output PNG path
    #[serde(default = "default_output")]
    pub output: PathBuf,

    /// Re-compress the PNG with oxipng
    #[serde(default)]
    pub optimize: bool,
}

fn default_side() -> u32 {
    1000
}

fn default_tile_size() -> u32 {
    100
}

fn default_queue_capacity() -> usize {
    1000
}

fn default_output() -> PathBuf {
    PathBuf::from("example.png")
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: default_side(),
            height: default_side(),
            tile_size: default_tile_size(),
            workers: None,
            queue_capacity: default_queue_capacity(),
            color_mode: ColorMode::default(),
            output: default_output(),
            optimize: false,
        }
    }
}

impl RenderConfig {
    /// Load configuration from a YAML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        let config = Self::from_yaml(&content)?;
        tracing::info!(
            path = %path.display(),
            width = config.width,
            height = config.height,
            tile_size = config.tile_size,
            "Loaded configuration"
        );
        Ok(config)
    }

    pub fn from_yaml(content: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(content)?)
    }

    pub fn to_yaml(&self) -> Result<String, ConfigError> {
        Ok(serde_yaml::to_string(self)?)
    }

    /// Validate the image/tile dimensions and build the tile grid
    pub fn grid(&self) -> Result<TileGrid, ConfigError> {
        Ok(TileGrid::new(self.width, self.height, self.tile_size)?)
    }

    /// Resolve the worker pool size
    pub fn worker_count(&self) -> Result<usize, ConfigError> {
        match self.workers {
            Some(0) => Err(ConfigError::NoWorkers),
            Some(n) => Ok(n),
            None => Ok((self.width / self.tile_size.max(1)).max(1) as usize),
        }
    }

    pub fn png_options(&self) -> PngOptions {
        PngOptions {
            optimize: self.optimize,
        }
    }
}
