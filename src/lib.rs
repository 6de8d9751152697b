//! Tilepaint - parallel tile renderer
//!
//! Cuts an image into tiles, renders them on a worker pool, composites the
//! finished tiles into one canvas and writes it out as PNG.
//! This library exposes modules for integration testing.

pub mod error;
pub mod models;
pub mod pipeline;
pub mod rendering;
