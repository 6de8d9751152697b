use std::path::PathBuf;
use thiserror::Error;
use tile_grid::GridError;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Config parse error: {0}")]
    Parse(#[from] serde_yaml::Error),

    #[error("Invalid tiling: {0}")]
    Grid(#[from] GridError),

    #[error("Worker count must be at least 1")]
    NoWorkers,
}

#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Pipeline task failed: {0}")]
    Task(#[from] tokio::task::JoinError),

    #[error("Failed to spawn pipeline thread: {0}")]
    Spawn(#[from] std::io::Error),

    #[error("Pipeline {stage} thread panicked")]
    Panicked { stage: String },

    #[error("Compositing error: {0}")]
    Composite(#[from] GridError),

    #[error("Render incomplete: {composited} of {expected} tiles composited")]
    Incomplete { composited: usize, expected: usize },

    #[error("Render cancelled after {composited} of {expected} tiles")]
    Cancelled {
        composited: usize,
        rendered: usize,
        expected: usize,
    },
}

#[derive(Debug, Error)]
pub enum PersistError {
    #[error("PNG encode error: {0}")]
    PngEncode(String),

    #[error("Failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
