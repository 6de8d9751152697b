use super::{CancelFlag, WorkItem};
use crossbeam_channel::{Receiver, Sender};
use tile_grid::PixelBuffer;

/// Per-worker counters, returned when the worker exits.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WorkerStats {
    pub id: usize,
    pub tiles: usize,
}

/// Render one work item into a fresh tile buffer.
///
/// Every pixel of `item.rect` is evaluated in canvas coordinates; the
/// returned buffer carries the same bounds so the reducer knows where it
/// goes. Rendering the same item twice gives identical buffers.
pub fn render_tile(item: &WorkItem) -> PixelBuffer {
    PixelBuffer::from_fn(item.rect, |x, y| item.color.color_at(x, y))
}

/// Worker loop: pull items until the work queue is empty and closed.
///
/// Completed tiles are sent to the reducer. The worker leaves early when
/// `cancel` is raised or the result queue has no receiver left.
pub fn run_worker(
    id: usize,
    work_rx: Receiver<WorkItem>,
    result_tx: Sender<PixelBuffer>,
    cancel: CancelFlag,
) -> WorkerStats {
    let mut tiles = 0;

    for item in work_rx.iter() {
        if cancel.is_cancelled() {
            tracing::debug!(worker = id, "Worker cancelled");
            break;
        }
        let tile = render_tile(&item);
        tracing::trace!(worker = id, tile = %item.rect, "Rendered tile");
        if result_tx.send(tile).is_err() {
            tracing::warn!(worker = id, "Result queue closed, worker exiting");
            break;
        }
        tiles += 1;
    }

    tracing::debug!(worker = id, tiles, "Worker finished");
    WorkerStats { id, tiles }
}
