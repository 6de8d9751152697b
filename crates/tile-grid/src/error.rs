//! Error type for grid construction and compositing.

use crate::geometry::TileRect;
use std::fmt;

/// Image axis, used to report which dimension failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => write!(f, "width"),
            Axis::Vertical => write!(f, "height"),
        }
    }
}

/// Error type for tile grid validation and buffer compositing.
///
/// Grid errors are precondition violations: they are reported before any
/// tile is dispatched so that a bad configuration never produces a canvas
/// with gaps or out-of-bounds tiles.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Image width or height is zero
    ZeroDimension { width: u32, height: u32 },
    /// Tile size is zero
    ZeroTileSize,
    /// Tile size does not evenly divide an image dimension
    UnevenTiling {
        axis: Axis,
        extent: u32,
        tile_size: u32,
    },
    /// A source buffer does not lie fully inside the destination
    OutOfBounds { source: TileRect, target: TileRect },
}

impl fmt::Display for GridError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GridError::ZeroDimension { width, height } => {
                write!(f, "image dimensions must be non-zero (got {}x{})", width, height)
            }
            GridError::ZeroTileSize => write!(f, "tile size must be non-zero"),
            GridError::UnevenTiling {
                axis,
                extent,
                tile_size,
            } => write!(
                f,
                "tile size {} does not evenly divide image {} {}",
                tile_size, axis, extent
            ),
            GridError::OutOfBounds { source, target } => {
                write!(f, "tile {} lies outside of {}", source, target)
            }
        }
    }
}

impl std::error::Error for GridError {}
