use super::{CancelFlag, WorkItem};
use crate::rendering::ColorFunction;
use crossbeam_channel::Sender;
use std::sync::Arc;
use tile_grid::TileGrid;

/// Outcome of a dispatch run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Dispatched {
    /// Work items accepted by the queue
    pub submitted: usize,
    /// Whether every tile of the grid was submitted
    pub complete: bool,
}

/// Submit one [`WorkItem`] per tile of `grid` to the work queue.
///
/// Blocks while the queue is full. Takes ownership of the sender so the
/// queue is closed as soon as dispatch returns; workers treat that as the
/// signal that no more work is coming. Stops early if `cancel` is raised or
/// every worker has disconnected.
pub fn dispatch(
    grid: &TileGrid,
    color: &Arc<dyn ColorFunction>,
    work_tx: Sender<WorkItem>,
    cancel: &CancelFlag,
) -> Dispatched {
    let total = grid.tile_count();
    let mut submitted = 0;

    for rect in grid.tiles() {
        if cancel.is_cancelled() {
            tracing::warn!(submitted, total, "Dispatch cancelled");
            break;
        }
        if work_tx.send(WorkItem::new(rect, color.clone())).is_err() {
            tracing::warn!(submitted, total, "All workers gone, stopping dispatch");
            break;
        }
        submitted += 1;
    }

    drop(work_tx);
    tracing::debug!(submitted, total, "Work queue closed");

    Dispatched {
        submitted,
        complete: submitted == total,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rendering::Gradient;
    use crossbeam_channel::{bounded, unbounded};
    use std::collections::HashSet;

    fn gradient() -> Arc<dyn ColorFunction> {
        Arc::new(Gradient::spanning(60, 40))
    }

    #[test]
    fn test_dispatch_submits_every_tile_once() {
        let grid = TileGrid::new(60, 40, 20).unwrap();
        let (tx, rx) = unbounded();

        let result = dispatch(&grid, &gradient(), tx, &CancelFlag::new());

        assert_eq!(
            result,
            Dispatched {
                submitted: 6,
                complete: true
            }
        );
        let rects: HashSet<_> = rx.iter().map(|item| item.rect).collect();
        let expected: HashSet<_> = grid.tiles().collect();
        assert_eq!(rects, expected);
    }

    #[test]
    fn test_dispatch_closes_queue() {
        let grid = TileGrid::new(20, 20, 10).unwrap();
        let (tx, rx) = unbounded();

        dispatch(&grid, &gradient(), tx, &CancelFlag::new());

        assert_eq!(rx.iter().count(), 4);
        assert!(rx.recv().is_err(), "queue should be disconnected");
    }

    #[test]
    fn test_dispatch_blocks_on_full_queue() {
        let grid = TileGrid::new(100, 100, 10).unwrap();
        let (tx, rx) = bounded(2);
        let color = gradient();

        let handle = std::thread::spawn(move || dispatch(&grid, &color, tx, &CancelFlag::new()));

        let mut received = 0;
        for _ in rx.iter() {
            assert!(rx.len() <= 2);
            received += 1;
        }
        assert_eq!(received, 100);
        assert!(handle.join().unwrap().complete);
    }

    #[test]
    fn test_dispatch_stops_when_cancelled() {
        let grid = TileGrid::new(20, 20, 10).unwrap();
        let (tx, rx) = unbounded();
        let cancel = CancelFlag::new();
        cancel.cancel();

        let result = dispatch(&grid, &gradient(), tx, &cancel);

        assert_eq!(result.submitted, 0);
        assert!(!result.complete);
        assert_eq!(rx.iter().count(), 0);
    }

    #[test]
    fn test_dispatch_stops_when_receivers_dropped() {
        let grid = TileGrid::new(20, 20, 10).unwrap();
        let (tx, rx) = bounded(1);
        drop(rx);

        let result = dispatch(&grid, &gradient(), tx, &CancelFlag::new());

        assert_eq!(result.submitted, 0);
        assert!(!result.complete);
    }
}
