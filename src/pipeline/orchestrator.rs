use super::{dispatch, run_reducer, run_worker, CancelFlag, Dispatched, ReduceStats, WorkerStats};
use crate::error::{ConfigError, PipelineError};
use crate::models::RenderConfig;
use crate::rendering::ColorFunction;
use crossbeam_channel::bounded;
use std::sync::Arc;
use std::thread;
use std::time::{Duration, Instant};
use tile_grid::{PixelBuffer, TileGrid};

/// Summary of a finished render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderStats {
    pub tiles: usize,
    pub workers: Vec<WorkerStats>,
    pub elapsed: Duration,
}

/// The composited canvas plus run statistics.
#[derive(Debug)]
pub struct RenderOutput {
    pub canvas: PixelBuffer,
    pub stats: RenderStats,
}

/// Orchestrates one render: canvas, queues, worker pool, reducer, shutdown.
///
/// Workers and the reducer each get a dedicated OS thread, scoped to the
/// run, so the pool size is not limited by tokio's blocking pool. The whole
/// run is driven from a single `spawn_blocking` task, which also hosts the
/// dispatcher.
pub struct Pipeline {
    grid: TileGrid,
    workers: usize,
    queue_capacity: usize,
    cancel: CancelFlag,
}

/// Everything the stage threads hand back once joined.
struct StageResults {
    dispatched: Dispatched,
    workers: Vec<WorkerStats>,
    canvas: PixelBuffer,
    reduced: ReduceStats,
}

impl Pipeline {
    /// Validate `config` and prepare a pipeline. Fails before any work is
    /// dispatched if the tiling or pool size is invalid.
    pub fn new(config: &RenderConfig) -> Result<Self, ConfigError> {
        Ok(Self {
            grid: config.grid()?,
            workers: config.worker_count()?,
            queue_capacity: config.queue_capacity,
            cancel: CancelFlag::new(),
        })
    }

    pub fn grid(&self) -> TileGrid {
        self.grid
    }

    pub fn workers(&self) -> usize {
        self.workers
    }

    /// Handle that cancels this pipeline when raised.
    pub fn cancel_flag(&self) -> CancelFlag {
        self.cancel.clone()
    }

    /// Render the full grid with `color` and return the composited canvas.
    pub async fn run(&self, color: Arc<dyn ColorFunction>) -> Result<RenderOutput, PipelineError> {
        let started = Instant::now();
        let expected = self.grid.tile_count();

        tracing::info!(
            width = self.grid.width(),
            height = self.grid.height(),
            tile_size = self.grid.tile_size(),
            tiles = expected,
            workers = self.workers,
            "Starting render"
        );

        let grid = self.grid;
        let workers = self.workers;
        let capacity = self.queue_capacity;
        let cancel = self.cancel.clone();
        let stages = tokio::task::spawn_blocking(move || {
            run_stages(grid, workers, capacity, color, cancel)
        })
        .await??;
        let elapsed = started.elapsed();

        let StageResults {
            dispatched,
            workers,
            canvas,
            reduced,
        } = stages;

        if reduced.tiles != expected {
            return Err(if self.cancel.is_cancelled() {
                let rendered = workers.iter().map(|w| w.tiles).sum();
                tracing::warn!(
                    composited = reduced.tiles,
                    rendered,
                    expected,
                    "Render cancelled"
                );
                PipelineError::Cancelled {
                    composited: reduced.tiles,
                    rendered,
                    expected,
                }
            } else {
                PipelineError::Incomplete {
                    composited: reduced.tiles,
                    expected,
                }
            });
        }

        tracing::info!(
            tiles = reduced.tiles,
            submitted = dispatched.submitted,
            elapsed_ms = elapsed.as_millis() as u64,
            "Render complete"
        );

        Ok(RenderOutput {
            canvas,
            stats: RenderStats {
                tiles: reduced.tiles,
                workers,
                elapsed,
            },
        })
    }
}

/// Run dispatcher, workers and reducer to completion.
///
/// Shutdown order: the dispatcher closes the work queue when it returns,
/// all workers are joined, then the result queue is closed and the reducer
/// is joined. If a thread fails to spawn, returning drops the queue ends
/// held here, which lets every thread already started run out.
fn run_stages(
    grid: TileGrid,
    workers: usize,
    capacity: usize,
    color: Arc<dyn ColorFunction>,
    cancel: CancelFlag,
) -> Result<StageResults, PipelineError> {
    let canvas = PixelBuffer::new(grid.bounds());
    let (work_tx, work_rx) = bounded(capacity);
    let (result_tx, result_rx) = bounded(capacity);

    thread::scope(|scope| -> Result<StageResults, PipelineError> {
        let reducer = thread::Builder::new()
            .name("tile-reducer".to_string())
            .spawn_scoped(scope, move || run_reducer(canvas, result_rx))?;

        let mut worker_handles = Vec::with_capacity(workers);
        for id in 0..workers {
            let work_rx = work_rx.clone();
            let result_tx = result_tx.clone();
            let cancel = cancel.clone();
            let handle = thread::Builder::new()
                .name(format!("tile-worker-{id}"))
                .spawn_scoped(scope, move || run_worker(id, work_rx, result_tx, cancel))?;
            worker_handles.push(handle);
        }
        // Only workers may hold the receiving end, so the dispatcher notices
        // if they all exit early.
        drop(work_rx);

        let dispatched = dispatch(&grid, &color, work_tx, &cancel);

        let joined: Vec<_> = worker_handles.into_iter().map(|h| h.join()).collect();

        // No worker is left to produce tiles; close the result queue.
        drop(result_tx);

        let reduced = reducer.join().map_err(|_| PipelineError::Panicked {
            stage: "reducer".to_string(),
        })?;

        let mut worker_stats = Vec::with_capacity(joined.len());
        for (id, result) in joined.into_iter().enumerate() {
            worker_stats.push(result.map_err(|_| PipelineError::Panicked {
                stage: format!("worker {id}"),
            })?);
        }

        let (canvas, reduced) = reduced?;
        Ok(StageResults {
            dispatched,
            workers: worker_stats,
            canvas,
            reduced,
        })
    })
}


/// Validate `config` and render it with `color` in one call.
pub async fn render(
    config: &RenderConfig,
    color: Arc<dyn ColorFunction>,
) -> Result<RenderOutput, PipelineError> {
    Pipeline::new(config)?.run(color).await
}
