//! RGBA pixel storage.
//!
//! [`PixelBuffer`] is used for both sides of compositing: each worker
//! renders into a buffer bounded by its tile rectangle, and the canvas is a
//! buffer bounded by the whole image.

mod pixel_buffer;

pub use pixel_buffer::PixelBuffer;
