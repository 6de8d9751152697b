use super::TileRect;
use crate::error::{Axis, GridError};
use std::iter::FusedIterator;

/// A validated partition of a `width` x `height` image into square tiles.
///
/// Construction fails unless the tile size evenly divides both image
/// dimensions, so every grid enumerates only whole tiles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TileGrid {
    width: u32,
    height: u32,
    tile_size: u32,
}

impl TileGrid {
    pub fn new(width: u32, height: u32, tile_size: u32) -> Result<Self, GridError> {
        if width == 0 || height == 0 {
            return Err(GridError::ZeroDimension { width, height });
        }
        if tile_size == 0 {
            return Err(GridError::ZeroTileSize);
        }
        for (axis, extent) in [(Axis::Horizontal, width), (Axis::Vertical, height)] {
            if extent % tile_size != 0 {
                return Err(GridError::UnevenTiling {
                    axis,
                    extent,
                    tile_size,
                });
            }
        }
        Ok(Self {
            width,
            height,
            tile_size,
        })
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.height
    }

    #[inline]
    pub fn tile_size(&self) -> u32 {
        self.tile_size
    }

    /// The full image rectangle, anchored at the origin.
    #[inline]
    pub fn bounds(&self) -> TileRect {
        TileRect::new(0, 0, self.width, self.height)
    }

    /// Number of tiles per row.
    #[inline]
    pub fn columns(&self) -> u32 {
        self.width / self.tile_size
    }

    /// Number of tile rows.
    #[inline]
    pub fn rows(&self) -> u32 {
        self.height / self.tile_size
    }

    #[inline]
    pub fn tile_count(&self) -> usize {
        self.columns() as usize * self.rows() as usize
    }

    /// Enumerate every tile rectangle in row-major order.
    pub fn tiles(&self) -> Tiles {
        Tiles {
            grid: *self,
            next: 0,
        }
    }
}

/// Iterator over the tiles of a [`TileGrid`].
#[derive(Debug, Clone)]
pub struct Tiles {
    grid: TileGrid,
    next: usize,
}

impl Iterator for Tiles {
    type Item = TileRect;

    fn next(&mut self) -> Option<TileRect> {
        if self.next >= self.grid.tile_count() {
            return None;
        }
        let columns = self.grid.columns() as usize;
        let size = self.grid.tile_size;
        let col = (self.next % columns) as u32;
        let row = (self.next / columns) as u32;
        self.next += 1;
        Some(TileRect::new(col * size, row * size, size, size))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.grid.tile_count().saturating_sub(self.next);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Tiles {}
impl FusedIterator for Tiles {}
