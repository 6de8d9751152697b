//! tile-grid: geometry and pixel storage for tiled rendering
//!
//! This library describes how a rectangular image is cut into equally sized
//! tiles and provides the RGBA buffers those tiles are rendered into. It has
//! no dependencies and knows nothing about threads or file formats; the
//! `tilepaint` application builds its worker pipeline on top of it.
//!
//! # Quick Start
//!
//! ```
//! use tile_grid::{PixelBuffer, Rgba, TileGrid};
//!
//! let grid = TileGrid::new(4, 4, 2).unwrap();
//! assert_eq!(grid.tile_count(), 4);
//!
//! let mut canvas = PixelBuffer::new(grid.bounds());
//! for rect in grid.tiles() {
//!     let mut tile = PixelBuffer::new(rect);
//!     for (x, y) in rect.pixels() {
//!         tile.set(x, y, Rgba::new(x as u8, y as u8, 0, 255));
//!     }
//!     canvas.composite(&tile).unwrap();
//! }
//!
//! assert_eq!(canvas.get(3, 1), Some(Rgba::new(3, 1, 0, 255)));
//! ```
//!
//! # Coordinates
//!
//! Every buffer carries its own bounds in canvas coordinates. A tile
//! rendered for the rectangle at `(200, 300)` is addressed with canvas
//! coordinates `(200..300, 300..400)`, and [`PixelBuffer::composite`] uses
//! those bounds to place it. Local offsets never leak out of the buffer.

mod buffer;
mod color;
mod error;
mod geometry;

pub use buffer::PixelBuffer;
pub use color::Rgba;
pub use error::{Axis, GridError};
pub use geometry::{TileGrid, TileRect, Tiles};
