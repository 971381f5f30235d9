//! Shared test fixtures: synthetic rasters written into temp dirs.
//!
//! Tests never depend on checked-in binary assets; every avatar/logo input
//! is generated here on the fly.

use image::{Rgb, RgbImage, Rgba, RgbaImage};
use std::path::{Path, PathBuf};

/// Write a two-color checkerboard PNG and return its path.
///
/// The colors are chosen so no resampling of the pattern can average out
/// to pure black or pure white — tests can tell "some avatar pixel" from
/// background and frame.
pub fn write_checker_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let img = RgbImage::from_fn(width, height, |x, y| {
        if (x / 8 + y / 8) % 2 == 0 {
            Rgb([200, 60, 60])
        } else {
            Rgb([60, 60, 200])
        }
    });
    let path = dir.join(name);
    img.save(&path).unwrap();
    path
}

/// Write a solid-color PNG and return its path.
pub fn write_solid_png(dir: &Path, name: &str, width: u32, height: u32, color: Rgb<u8>) -> PathBuf {
    let img = RgbImage::from_pixel(width, height, color);
    let path = dir.join(name);
    img.save(&path).unwrap();
    path
}

/// Write an RGBA logo PNG: opaque colored disc on a transparent field.
pub fn write_logo_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
    let (cx, cy) = (width as f32 / 2.0, height as f32 / 2.0);
    let r = width.min(height) as f32 / 2.0 - 1.0;
    let img = RgbaImage::from_fn(width, height, |x, y| {
        let dx = x as f32 - cx;
        let dy = y as f32 - cy;
        if dx * dx + dy * dy <= r * r {
            Rgba([240, 240, 240, 255])
        } else {
            Rgba([0, 0, 0, 0])
        }
    });
    let path = dir.join(name);
    img.save(&path).unwrap();
    path
}
