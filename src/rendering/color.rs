//! Per-pixel color strategies.
//!
//! Workers never decide colors themselves: every [`WorkItem`] carries a
//! shared [`ColorFunction`], and the worker evaluates it for each pixel of
//! its tile. Swapping the strategy changes the picture without touching the
//! pipeline.
//!
//! [`WorkItem`]: crate::pipeline::WorkItem

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use tile_grid::{Rgba, TileGrid};

/// Maps a canvas coordinate to a color.
///
/// Implementations must be pure: the same `(x, y)` always yields the same
/// color, regardless of which worker asks or when.
pub trait ColorFunction: Send + Sync {
    fn color_at(&self, x: u32, y: u32) -> Rgba;
}

impl<F> ColorFunction for F
where
    F: Fn(u32, u32) -> Rgba + Send + Sync,
{
    #[inline]
    fn color_at(&self, x: u32, y: u32) -> Rgba {
        self(x, y)
    }
}

/// Red/green ramp with a constant blue channel.
///
/// Red grows with `x` and green with `y`, each reaching almost 255 at the
/// far edge of its span: `r = x * 255 / span_x`, `g = y * 255 / span_y`,
/// both rounded down. A repeating gradient restarts at every multiple of
/// its span.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Gradient {
    span_x: u32,
    span_y: u32,
    repeat: bool,
    blue: u8,
    alpha: u8,
}

impl Gradient {
    pub const DEFAULT_BLUE: u8 = 100;

    /// One gradient stretched over a `width` x `height` area.
    pub fn spanning(width: u32, height: u32) -> Self {
        Self {
            span_x: width.max(1),
            span_y: height.max(1),
            repeat: false,
            blue: Self::DEFAULT_BLUE,
            alpha: u8::MAX,
        }
    }

    /// A `period` x `period` gradient tiled across the plane.
    pub fn repeating(period: u32) -> Self {
        Self {
            repeat: true,
            ..Self::spanning(period, period)
        }
    }

    pub fn with_blue(mut self, blue: u8) -> Self {
        self.blue = blue;
        self
    }

    pub fn with_alpha(mut self, alpha: u8) -> Self {
        self.alpha = alpha;
        self
    }

    #[inline]
    fn ramp(pos: u32, span: u32) -> u8 {
        // Truncating cast; only reachable past the span of a non-repeating ramp.
        (pos as u64 * 255 / span as u64) as u8
    }
}

impl ColorFunction for Gradient {
    fn color_at(&self, x: u32, y: u32) -> Rgba {
        let (x, y) = if self.repeat {
            (x % self.span_x, y % self.span_y)
        } else {
            (x, y)
        };
        Rgba::new(
            Self::ramp(x, self.span_x),
            Self::ramp(y, self.span_y),
            self.blue,
            self.alpha,
        )
    }
}

/// Which dimension the gradient is measured against.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// One smooth gradient across the whole image
    #[default]
    Image,
    /// The same gradient repeated inside every tile
    Tile,
}

impl ColorMode {
    /// Build the color function for this mode on the given grid.
    pub fn color_function(self, grid: &TileGrid) -> Arc<dyn ColorFunction> {
        match self {
            ColorMode::Image => Arc::new(Gradient::spanning(grid.width(), grid.height())),
            ColorMode::Tile => Arc::new(Gradient::repeating(grid.tile_size())),
        }
    }
}
