//! Shared test utilities for the letterbox test suite.
//!
//! Synthetic image factories used by the backend and pipeline tests. Tests
//! write into `tempfile` tempdirs so nothing touches the working tree.

use image::{ImageEncoder, Rgb, RgbImage};
use std::path::Path;

/// Create a small valid JPEG file with the given dimensions (gradient fill).
pub fn create_test_jpeg(path: &Path, width: u32, height: u32) {
    let img = RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, 128])
    });
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

/// Create a solid-color JPEG. Solid fills survive lossy encoding well, so
/// content-versus-padding checks stay reliable.
pub fn create_solid_jpeg(path: &Path, width: u32, height: u32, color: [u8; 3]) {
    let img = RgbImage::from_pixel(width, height, Rgb(color));
    let file = std::fs::File::create(path).unwrap();
    let writer = std::io::BufWriter::new(file);
    image::codecs::jpeg::JpegEncoder::new(writer)
        .write_image(img.as_raw(), width, height, image::ExtendedColorType::Rgb8)
        .unwrap();
}

/// Create a solid-color PNG for pixel-exact assertions (lossless).
pub fn create_solid_png(path: &Path, width: u32, height: u32, color: [u8; 3]) {
    let img = RgbImage::from_pixel(width, height, Rgb(color));
    img.save(path).unwrap();
}
