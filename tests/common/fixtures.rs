//! Test fixtures and constants.

use std::path::Path;
use tilepaint::models::RenderConfig;
use tilepaint::rendering::ColorMode;

/// Image and tile size of the reference scenario
pub const IMAGE_SIZE: u32 = 1000;
pub const TILE_SIZE: u32 = 100;

/// Reference configuration: 1000x1000 image, 100px tiles
pub fn reference_config(mode: ColorMode) -> RenderConfig {
    RenderConfig {
        width: IMAGE_SIZE,
        height: IMAGE_SIZE,
        tile_size: TILE_SIZE,
        color_mode: mode,
        ..Default::default()
    }
}

/// Small configuration for fast tests
pub fn small_config(width: u32, height: u32, tile_size: u32, workers: usize) -> RenderConfig {
    RenderConfig {
        width,
        height,
        tile_size,
        workers: Some(workers),
        queue_capacity: 8,
        ..Default::default()
    }
}

/// Decoded RGBA8 PNG
pub struct DecodedPng {
    pub width: u32,
    pub height: u32,
    pub data: Vec<u8>,
}

impl DecodedPng {
    pub fn pixel(&self, x: u32, y: u32) -> [u8; 4] {
        let i = ((y * self.width + x) * 4) as usize;
        [self.data[i], self.data[i + 1], self.data[i + 2], self.data[i + 3]]
    }
}

/// Decode an RGBA8 PNG file from disk
pub fn decode_png(path: &Path) -> DecodedPng {
    let file = std::fs::File::open(path).unwrap();
    let decoder = png::Decoder::new(std::io::BufReader::new(file));
    let mut reader = decoder.read_info().unwrap();
    let mut data = vec![0; reader.output_buffer_size()];
    let info = reader.next_frame(&mut data).unwrap();
    data.truncate(info.buffer_size());
    assert_eq!(info.color_type, png::ColorType::Rgba);
    assert_eq!(info.bit_depth, png::BitDepth::Eight);
    DecodedPng {
        width: info.width,
        height: info.height,
        data,
    }
}
