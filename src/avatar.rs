//! Circular avatar compositing.
//!
//! Produces the bordered circular avatar pasted into the template canvas.
//! Antialiasing comes from supersampling: all circle geometry is drawn at
//! 4× linear scale with hard edges, then both the color image and its
//! alpha mask are downscaled to the final size with Lanczos3. The Lanczos
//! downscale is what smooths the circular edge — nothing here draws a soft
//! circle directly.

use image::imageops::FilterType;
use image::{DynamicImage, GrayImage, Rgb, RgbImage};
use std::path::Path;

use crate::raster;

/// Linear supersampling factor for the circular edges.
const SUPERSAMPLE: u32 = 4;

/// A composited avatar disc and its matching alpha mask.
///
/// Invariant: `image` and `mask` share pixel dimensions, both
/// `(diameter + 2 * border)` square. The mask is opaque across the whole
/// disc (ring border included) and transparent outside it, so pasting
/// `image` through `mask` copies exactly the disc-shaped pixels.
pub struct AvatarDisc {
    pub image: RgbImage,
    pub mask: GrayImage,
}

impl AvatarDisc {
    /// Side length of the disc (and of the mask).
    pub fn size(&self) -> u32 {
        self.image.width()
    }
}

/// Build a circular avatar with a solid ring border from a source image.
///
/// The source is center-cropped to a square ("fit", no letterboxing) and
/// scaled to fill the inner circle; the ring around it is `border` pixels
/// of `ring_color` in the final output. Unreadable or undecodable sources
/// propagate as errors — the whole batch shares one avatar, so there is
/// nothing sensible to recover to.
pub fn circular_avatar(
    path: &Path,
    diameter: u32,
    border: u32,
    ring_color: Rgb<u8>,
) -> image::ImageResult<AvatarDisc> {
    let inner = diameter * SUPERSAMPLE;
    let full = (diameter + 2 * border) * SUPERSAMPLE;

    let source = DynamicImage::ImageRgb8(image::open(path)?.to_rgb8());
    let fitted = source.resize_to_fill(inner, inner, FilterType::Lanczos3).to_rgb8();

    // High-res compose: ring-color circle over black, avatar pasted through
    // the inner circle, centered inside the border.
    let mut base = RgbImage::from_pixel(full, full, Rgb([0, 0, 0]));
    raster::fill_circle(&mut base, ring_color);

    let offset = border * SUPERSAMPLE;
    for y in 0..inner {
        for x in 0..inner {
            if raster::in_inscribed_circle(x, y, inner, inner) {
                base.put_pixel(x + offset, y + offset, *fitted.get_pixel(x, y));
            }
        }
    }

    // The final alpha shape is the full disc, border included.
    let mut mask = GrayImage::new(full, full);
    raster::fill_circle_mask(&mut mask);

    let final_size = diameter + 2 * border;
    Ok(AvatarDisc {
        image: image::imageops::resize(&base, final_size, final_size, FilterType::Lanczos3),
        mask: image::imageops::resize(&mask, final_size, final_size, FilterType::Lanczos3),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::{write_checker_png, write_solid_png};
    use image::Luma;

    #[test]
    fn disc_and_mask_dimensions_match_diameter_plus_borders() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = write_checker_png(tmp.path(), "avatar.png", 64, 64);

        for (diameter, border) in [(96, 2), (40, 0), (33, 5)] {
            let disc = circular_avatar(&source, diameter, border, Rgb([255, 255, 255])).unwrap();
            let expected = diameter + 2 * border;
            assert_eq!(disc.image.dimensions(), (expected, expected));
            assert_eq!(disc.mask.dimensions(), (expected, expected));
            assert_eq!(disc.size(), expected);
        }
    }

    #[test]
    fn mask_is_opaque_at_center_transparent_at_corners() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = write_checker_png(tmp.path(), "avatar.png", 64, 64);

        let disc = circular_avatar(&source, 96, 2, Rgb([255, 255, 255])).unwrap();
        let size = disc.size();
        assert_eq!(*disc.mask.get_pixel(size / 2, size / 2), Luma([255]));
        assert_eq!(*disc.mask.get_pixel(0, 0), Luma([0]));
        assert_eq!(*disc.mask.get_pixel(size - 1, size - 1), Luma([0]));
    }

    #[test]
    fn ring_color_shows_at_the_disc_edge() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = write_solid_png(tmp.path(), "avatar.png", 64, 64, Rgb([0, 200, 0]));

        let disc = circular_avatar(&source, 96, 8, Rgb([255, 0, 0])).unwrap();
        // Horizontal midline inside the ring band: outside the inner avatar
        // circle, inside the full disc.
        let Rgb([r, g, _]) = *disc.image.get_pixel(4, disc.size() / 2);
        assert!(r > 180, "expected ring red channel, got {r}");
        assert!(g < 100, "expected ring to stay red, got green {g}");
    }

    #[test]
    fn avatar_pixels_show_inside_the_inner_circle() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = write_solid_png(tmp.path(), "avatar.png", 64, 64, Rgb([0, 200, 0]));

        let disc = circular_avatar(&source, 96, 8, Rgb([255, 0, 0])).unwrap();
        let center = disc.size() / 2;
        let Rgb([r, g, _]) = *disc.image.get_pixel(center, center);
        assert!(g > 180, "expected avatar green at center, got {g}");
        assert!(r < 60, "expected no ring bleed at center, got {r}");
    }

    #[test]
    fn non_square_source_is_center_cropped_not_letterboxed() {
        let tmp = tempfile::TempDir::new().unwrap();
        // Wide source; fit must crop the sides, never squash
        let source = write_checker_png(tmp.path(), "avatar.png", 128, 32);

        let disc = circular_avatar(&source, 48, 2, Rgb([255, 255, 255])).unwrap();
        assert_eq!(disc.image.dimensions(), (52, 52));
    }

    #[test]
    fn identical_inputs_produce_identical_output() {
        let tmp = tempfile::TempDir::new().unwrap();
        let source = write_checker_png(tmp.path(), "avatar.png", 64, 64);

        let a = circular_avatar(&source, 96, 2, Rgb([255, 255, 255])).unwrap();
        let b = circular_avatar(&source, 96, 2, Rgb([255, 255, 255])).unwrap();
        assert_eq!(a.image.as_raw(), b.image.as_raw());
        assert_eq!(a.mask.as_raw(), b.mask.as_raw());
    }

    #[test]
    fn unreadable_source_propagates_error() {
        let result = circular_avatar(
            Path::new("/nonexistent/avatar.png"),
            96,
            2,
            Rgb([255, 255, 255]),
        );
        assert!(result.is_err());
    }

    #[test]
    fn non_image_source_propagates_decode_error() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("avatar.png");
        std::fs::write(&path, b"not an image").unwrap();
        assert!(circular_avatar(&path, 96, 2, Rgb([255, 255, 255])).is_err());
    }
}
