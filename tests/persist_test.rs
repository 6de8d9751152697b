//! Persistence tests: PNG output from the library and the binary.

mod common;

use common::*;
use pretty_assertions::assert_eq;
use std::process::Command;
use tilepaint::pipeline::render;
use tilepaint::rendering::{save_png, ColorMode, PngOptions};

fn tilepaint() -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_tilepaint"));
    cmd.env("RUST_LOG", "tilepaint=warn");
    cmd
}

#[tokio::test]
async fn test_saved_png_matches_canvas() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("example.png");
    let config = reference_config(ColorMode::Image);
    let grid = config.grid().unwrap();

    let output = render(&config, config.color_mode.color_function(&grid))
        .await
        .unwrap();
    let bytes = save_png(&output.canvas, &path, &PngOptions::default()).unwrap();

    assert_eq!(std::fs::metadata(&path).unwrap().len(), bytes);
    let png = decode_png(&path);
    assert_eq!((png.width, png.height), (IMAGE_SIZE, IMAGE_SIZE));
    assert_eq!(png.data, output.canvas.as_raw());
    assert_eq!(png.pixel(999, 0), [254, 0, 100, 255]);
    assert_eq!(png.pixel(400, 600), [102, 153, 100, 255]);
    assert_dir_entries(dir.path(), &["example.png"]);
}

#[tokio::test]
async fn test_optimized_png_decodes_to_same_pixels() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("small.png");
    let config = small_config(64, 32, 16, 2);
    let grid = config.grid().unwrap();

    let output = render(&config, ColorMode::Tile.color_function(&grid))
        .await
        .unwrap();
    save_png(&output.canvas, &path, &PngOptions { optimize: true }).unwrap();

    let png = decode_png(&path);
    assert_eq!(png.data, output.canvas.as_raw());
}

#[test]
fn test_binary_writes_png() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("out.png");

    let output = tilepaint()
        .args(["render", "--width", "200", "--height", "100", "--tile-size", "50"])
        .arg("--output")
        .arg(&path)
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    assert!(String::from_utf8_lossy(&output.stdout).starts_with("Rendered"));
    let png = decode_png(&path);
    assert_eq!((png.width, png.height), (200, 100));
    assert_eq!(png.pixel(100, 50), [127, 127, 100, 255]);
}

#[test]
fn test_binary_reads_config_file() {
    let dir = tempfile::tempdir().unwrap();
    let config_path = dir.path().join("tilepaint.yaml");
    let out_path = dir.path().join("tiles.png");
    std::fs::write(
        &config_path,
        format!(
            "width: 40\nheight: 40\ntile_size: 20\ncolor_mode: tile\noutput: {}\n",
            out_path.display()
        ),
    )
    .unwrap();

    let output = tilepaint()
        .arg("render")
        .arg("--config")
        .arg(&config_path)
        .output()
        .unwrap();

    assert!(output.status.success(), "stderr: {}", String::from_utf8_lossy(&output.stderr));
    let png = decode_png(&out_path);
    assert_eq!(png.pixel(20, 20), png.pixel(0, 0));
}

#[test]
fn test_binary_unwritable_output_fails() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no-such-dir").join("example.png");

    let output = tilepaint()
        .args(["render", "--width", "20", "--height", "20", "--tile-size", "10"])
        .arg("--output")
        .arg(&path)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Failed to save"), "stderr: {stderr}");
    assert!(!path.exists());
    assert_dir_entries(dir.path(), &[]);
}

#[test]
fn test_binary_rejects_uneven_tiles() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("example.png");

    let output = tilepaint()
        .args(["render", "--tile-size", "300"])
        .arg("--output")
        .arg(&path)
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does not evenly divide"), "stderr: {stderr}");
    assert!(!path.exists());
}

#[test]
fn test_binary_config_command_prints_yaml() {
    let output = tilepaint()
        .args(["config", "--tile-size", "250", "--mode", "tile"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("tile_size: 250"), "stdout: {stdout}");
    assert!(stdout.contains("color_mode: tile"), "stdout: {stdout}");
    assert!(stdout.contains("# 16 tiles (4x4), 4 workers"), "stdout: {stdout}");
}
