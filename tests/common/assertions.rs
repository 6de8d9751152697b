//! Assertion helpers for tests.

use pretty_assertions::assert_eq;
use tile_grid::{PixelBuffer, Rgba};

/// Expected color of the reference gradient at `(x, y)`
pub fn reference_gradient(x: u32, y: u32, span: u32) -> Rgba {
    Rgba::new(
        (x * 255 / span) as u8,
        (y * 255 / span) as u8,
        100,
        255,
    )
}

/// Assert every canvas pixel matches `expected`
pub fn assert_canvas(canvas: &PixelBuffer, expected: impl Fn(u32, u32) -> Rgba) {
    for (x, y) in canvas.bounds().pixels() {
        let actual = canvas.get(x, y).unwrap();
        if actual != expected(x, y) {
            assert_eq!(actual, expected(x, y), "pixel ({x}, {y}) differs");
        }
    }
}

/// Assert the directory contains exactly the given file names
pub fn assert_dir_entries(dir: &std::path::Path, expected: &[&str]) {
    let mut names: Vec<String> = std::fs::read_dir(dir)
        .unwrap()
        .map(|e| e.unwrap().file_name().to_string_lossy().into_owned())
        .collect();
    names.sort();
    let mut expected: Vec<String> = expected.iter().map(|s| s.to_string()).collect();
    expected.sort();
    assert_eq!(names, expected, "unexpected files in {}", dir.display());
}
