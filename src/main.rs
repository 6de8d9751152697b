use anyhow::Context;
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use tilepaint::models::RenderConfig;
use tilepaint::pipeline::Pipeline;
use tilepaint::rendering::{save_png, ColorMode};

#[derive(Parser)]
#[command(name = "tilepaint")]
#[command(about = "Render an image tile by tile on a worker pool and save it as PNG")]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the image and write the PNG file (default)
    Render(RenderArgs),
    /// Print the effective configuration as YAML
    Config(RenderArgs),
}

#[derive(Args, Default)]
struct RenderArgs {
    /// YAML configuration file; flags override its values
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long)]
    width: Option<u32>,

    /// Image height in pixels
    #[arg(long)]
    height: Option<u32>,

    /// Tile edge length; must evenly divide width and height
    #[arg(short, long)]
    tile_size: Option<u32>,

    /// Number of worker threads (default: one per tile column)
    #[arg(short, long)]
    workers: Option<usize>,

    /// Capacity of the work and result queues
    #[arg(long)]
    queue_capacity: Option<usize>,

    /// Gradient reference: whole image or each tile
    #[arg(short, long, value_enum)]
    mode: Option<ColorMode>,

    /// Output PNG file path
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Re-compress the PNG with oxipng
    #[arg(long)]
    optimize: bool,
}

impl RenderArgs {
    /// Merge flags over the config file (or the built-in defaults).
    fn resolve(self) -> anyhow::Result<RenderConfig> {
        let mut config = match &self.config {
            Some(path) => RenderConfig::load(path)?,
            None => RenderConfig::default(),
        };

        if let Some(width) = self.width {
            config.width = width;
        }
        if let Some(height) = self.height {
            config.height = height;
        }
        if let Some(tile_size) = self.tile_size {
            config.tile_size = tile_size;
        }
        if self.workers.is_some() {
            config.workers = self.workers;
        }
        if let Some(capacity) = self.queue_capacity {
            config.queue_capacity = capacity;
        }
        if let Some(mode) = self.mode {
            config.color_mode = mode;
        }
        if let Some(output) = self.output {
            config.output = output;
        }
        config.optimize |= self.optimize;

        Ok(config)
    }
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tilepaint=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();

    match cli.command {
        Some(Commands::Render(args)) => run_render_command(args).await,
        Some(Commands::Config(args)) => run_config_command(args),
        None => run_render_command(RenderArgs::default()).await,
    }
}

/// Render the image and save it; any failure is fatal
async fn run_render_command(args: RenderArgs) -> anyhow::Result<()> {
    let config = args.resolve()?;
    let pipeline = Pipeline::new(&config)?;

    let cancel = pipeline.cancel_flag();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            tracing::warn!("Interrupt received, cancelling render");
            cancel.cancel();
        }
    });

    let color = config.color_mode.color_function(&pipeline.grid());
    let output = pipeline.run(color).await?;

    let path = config.output.clone();
    let options = config.png_options();
    let canvas = output.canvas;
    let bytes = tokio::task::spawn_blocking(move || save_png(&canvas, &path, &options))
        .await?
        .with_context(|| format!("Failed to save {}", config.output.display()))?;

    println!(
        "Rendered {} ({} bytes, {} tiles in {:.1?})",
        config.output.display(),
        bytes,
        output.stats.tiles,
        output.stats.elapsed
    );

    Ok(())
}

/// Print the effective configuration
fn run_config_command(args: RenderArgs) -> anyhow::Result<()> {
    let config = args.resolve()?;
    let grid = config.grid()?;
    print!("{}", config.to_yaml()?);
    println!(
        "# {} tiles ({}x{}), {} workers",
        grid.tile_count(),
        grid.columns(),
        grid.rows(),
        config.worker_count()?
    );
    Ok(())
}
