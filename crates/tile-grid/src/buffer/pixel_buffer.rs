use crate::color::Rgba;
use crate::error::GridError;
use crate::geometry::TileRect;

const CHANNELS: usize = 4;

/// A row-major RGBA8 buffer positioned in canvas coordinates.
///
/// All accessors take absolute canvas coordinates; the buffer translates
/// them into local offsets using its [`bounds`](PixelBuffer::bounds).
///
/// # Example
///
/// ```
/// use tile_grid::{PixelBuffer, Rgba, TileRect};
///
/// let mut tile = PixelBuffer::new(TileRect::new(10, 20, 2, 2));
/// assert!(tile.set(11, 21, Rgba::new(255, 0, 0, 255)));
/// assert_eq!(tile.get(11, 21), Some(Rgba::new(255, 0, 0, 255)));
///
/// // Outside of the tile's rectangle
/// assert!(!tile.set(0, 0, Rgba::new(255, 0, 0, 255)));
/// assert_eq!(tile.get(12, 21), None);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    bounds: TileRect,
    /// RGBA bytes, `bounds.width * bounds.height * 4` long.
    data: Vec<u8>,
}

impl PixelBuffer {
    /// Allocate a buffer covering `bounds`, filled with [`Rgba::TRANSPARENT`].
    pub fn new(bounds: TileRect) -> Self {
        let len = bounds.area() as usize * CHANNELS;
        Self {
            bounds,
            data: vec![0; len],
        }
    }

    /// Build a buffer by evaluating `f` for every pixel of `bounds`.
    pub fn from_fn(bounds: TileRect, mut f: impl FnMut(u32, u32) -> Rgba) -> Self {
        let mut data = Vec::with_capacity(bounds.area() as usize * CHANNELS);
        for (x, y) in bounds.pixels() {
            data.extend_from_slice(&f(x, y).to_array());
        }
        Self { bounds, data }
    }

    #[inline]
    pub fn bounds(&self) -> TileRect {
        self.bounds
    }

    #[inline]
    pub fn width(&self) -> u32 {
        self.bounds.width
    }

    #[inline]
    pub fn height(&self) -> u32 {
        self.bounds.height
    }

    #[inline]
    fn offset(&self, x: u32, y: u32) -> Option<usize> {
        if !self.bounds.contains(x, y) {
            return None;
        }
        let local_x = (x - self.bounds.x) as usize;
        let local_y = (y - self.bounds.y) as usize;
        Some((local_y * self.bounds.width as usize + local_x) * CHANNELS)
    }

    pub fn get(&self, x: u32, y: u32) -> Option<Rgba> {
        let i = self.offset(x, y)?;
        let mut px = [0u8; CHANNELS];
        px.copy_from_slice(&self.data[i..i + CHANNELS]);
        Some(Rgba::from_array(px))
    }

    /// Write one pixel. Returns `false` (and writes nothing) when `(x, y)`
    /// is outside the buffer.
    pub fn set(&mut self, x: u32, y: u32, color: Rgba) -> bool {
        match self.offset(x, y) {
            Some(i) => {
                self.data[i..i + CHANNELS].copy_from_slice(&color.to_array());
                true
            }
            None => false,
        }
    }

    /// Copy `src` onto this buffer at `src`'s own bounds.
    ///
    /// Destination pixels are replaced unconditionally, alpha included; no
    /// blending takes place. `src` must lie entirely within this buffer.
    pub fn composite(&mut self, src: &PixelBuffer) -> Result<(), GridError> {
        let source = src.bounds;
        if !self.bounds.contains_rect(&source) {
            return Err(GridError::OutOfBounds {
                source,
                target: self.bounds,
            });
        }
        if source.is_empty() {
            return Ok(());
        }

        let row_len = source.width as usize * CHANNELS;
        let dst_stride = self.bounds.width as usize * CHANNELS;
        let dst_x = (source.x - self.bounds.x) as usize * CHANNELS;

        for (row, src_row) in src.data.chunks_exact(row_len).enumerate() {
            let dst_y = (source.y - self.bounds.y) as usize + row;
            let start = dst_y * dst_stride + dst_x;
            self.data[start..start + row_len].copy_from_slice(src_row);
        }
        Ok(())
    }

    /// Raw RGBA8 bytes in row-major order.
    #[inline]
    pub fn as_raw(&self) -> &[u8] {
        &self.data
    }

    #[inline]
    pub fn into_raw(self) -> Vec<u8> {
        self.data
    }
}
