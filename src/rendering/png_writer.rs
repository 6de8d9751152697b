use crate::error::PersistError;
use std::fs::{self, File};
use std::io::{Cursor, Write};
use std::path::{Path, PathBuf};
use tile_grid::PixelBuffer;

/// Output settings for PNG persistence.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PngOptions {
    /// Re-compress with oxipng after encoding (slower, smaller files)
    pub optimize: bool,
}

/// Encode the canvas as an 8-bit RGBA PNG.
pub fn encode_png(canvas: &PixelBuffer, options: &PngOptions) -> Result<Vec<u8>, PersistError> {
    let mut buf = Cursor::new(Vec::new());
    {
        let mut encoder = png::Encoder::new(&mut buf, canvas.width(), canvas.height());
        encoder.set_color(png::ColorType::Rgba);
        encoder.set_depth(png::BitDepth::Eight);
        if options.optimize {
            // Fast settings, oxipng re-compresses afterwards
            encoder.set_compression(png::Compression::Fast);
            encoder.set_filter(png::FilterType::NoFilter);
        }
        let mut writer = encoder
            .write_header()
            .map_err(|e| PersistError::PngEncode(e.to_string()))?;
        writer
            .write_image_data(canvas.as_raw())
            .map_err(|e| PersistError::PngEncode(e.to_string()))?;
    }
    let png_bytes = buf.into_inner();

    if !options.optimize {
        return Ok(png_bytes);
    }

    match oxipng::optimize_from_memory(
        &png_bytes,
        &oxipng::Options {
            strip: oxipng::StripChunks::Safe,
            optimize_alpha: false,
            ..Default::default()
        },
    ) {
        Ok(optimized) => {
            tracing::debug!(
                before = png_bytes.len(),
                after = optimized.len(),
                "Optimized PNG"
            );
            Ok(optimized)
        }
        Err(e) => {
            tracing::warn!(%e, "PNG optimization failed, keeping unoptimized output");
            Ok(png_bytes)
        }
    }
}

/// Encode the canvas and write it to `path`, replacing any existing file.
///
/// The image is encoded completely in memory and written to a temporary
/// file next to `path`, which is then renamed into place. If anything
/// fails, the temporary file is removed and `path` is left untouched.
///
/// Returns the number of bytes written.
pub fn save_png(
    canvas: &PixelBuffer,
    path: impl AsRef<Path>,
    options: &PngOptions,
) -> Result<u64, PersistError> {
    let path = path.as_ref();
    let png_bytes = encode_png(canvas, options)?;
    let tmp_path = temp_path_for(path);

    let write_err = |source| PersistError::Write {
        path: path.to_path_buf(),
        source,
    };

    if let Err(e) = write_and_sync(&tmp_path, &png_bytes) {
        let _ = fs::remove_file(&tmp_path);
        return Err(write_err(e));
    }
    if let Err(e) = fs::rename(&tmp_path, path) {
        let _ = fs::remove_file(&tmp_path);
        return Err(write_err(e));
    }

    tracing::debug!(path = %path.display(), bytes = png_bytes.len(), "Wrote PNG");
    Ok(png_bytes.len() as u64)
}

fn write_and_sync(path: &Path, bytes: &[u8]) -> std::io::Result<()> {
    let mut file = File::create(path)?;
    file.write_all(bytes)?;
    file.sync_all()
}

/// Sibling path used while writing, e.g. `out/.example.png.tmp`.
fn temp_path_for(path: &Path) -> PathBuf {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "output.png".to_string());
    path.with_file_name(format!(".{name}.{}.tmp", std::process::id()))
}
