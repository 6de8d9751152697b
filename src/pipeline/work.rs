use crate::rendering::ColorFunction;
use std::fmt;
use std::sync::Arc;
use tile_grid::TileRect;

/// One unit of work: a tile rectangle and the color function to fill it with.
#[derive(Clone)]
pub struct WorkItem {
    pub rect: TileRect,
    pub color: Arc<dyn ColorFunction>,
}

impl WorkItem {
    pub fn new(rect: TileRect, color: Arc<dyn ColorFunction>) -> Self {
        Self { rect, color }
    }
}

impl fmt::Debug for WorkItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WorkItem")
            .field("rect", &self.rect)
            .finish_non_exhaustive()
    }
}
