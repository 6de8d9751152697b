pub mod color;
pub mod png_writer;

pub use color::{ColorFunction, ColorMode, Gradient};
pub use png_writer::{encode_png, save_png, PngOptions};
