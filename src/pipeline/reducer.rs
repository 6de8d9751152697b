use crossbeam_channel::Receiver;
use tile_grid::{GridError, PixelBuffer};

/// Reducer counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReduceStats {
    pub tiles: usize,
    pub pixels: u64,
}

/// Composite incoming tiles onto `canvas` until the result queue is empty
/// and closed, then hand the canvas back.
///
/// This is the only writer of the canvas, so no locking is involved. Tiles
/// are applied in arrival order with source-replace semantics. A tile that
/// does not fit the canvas aborts the reduction; dropping the receiver then
/// unblocks any worker waiting to send.
pub fn run_reducer(
    mut canvas: PixelBuffer,
    result_rx: Receiver<PixelBuffer>,
) -> Result<(PixelBuffer, ReduceStats), GridError> {
    let mut stats = ReduceStats::default();

    for tile in result_rx.iter() {
        canvas.composite(&tile)?;
        stats.tiles += 1;
        stats.pixels += tile.bounds().area();
        tracing::trace!(tile = %tile.bounds(), composited = stats.tiles, "Composited tile");
    }

    tracing::debug!(tiles = stats.tiles, pixels = stats.pixels, "Reducer drained");
    Ok((canvas, stats))
}
