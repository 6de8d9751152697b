//! Tile geometry: rectangles and the grid that enumerates them.
//!
//! [`TileGrid`] validates an image/tile configuration and yields the
//! [`TileRect`]s that cover the image. The rectangles are disjoint and
//! their union is exactly the image, which is what lets tiles be rendered
//! and composited in any order.

mod grid;
mod rect;

pub use grid::{TileGrid, Tiles};
pub use rect::TileRect;
