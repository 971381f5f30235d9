//! Low-level pixel operations shared by the avatar compositor and the
//! canvas composer.

use image::{GrayImage, Luma, Rgb, RgbImage, Rgba, RgbaImage};

/// Draw a rectangular frame of `thickness` pixels along all four edges.
pub fn draw_frame(img: &mut RgbImage, thickness: u32, color: Rgb<u8>) {
    let (width, height) = img.dimensions();
    let thickness = thickness.min(width).min(height);
    for y in 0..height {
        for x in 0..width {
            let on_edge = x < thickness
                || y < thickness
                || x >= width - thickness
                || y >= height - thickness;
            if on_edge {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Fill the circle inscribed in the whole image with `color`.
pub fn fill_circle(img: &mut RgbImage, color: Rgb<u8>) {
    let (width, height) = img.dimensions();
    for y in 0..height {
        for x in 0..width {
            if in_inscribed_circle(x, y, width, height) {
                img.put_pixel(x, y, color);
            }
        }
    }
}

/// Fill the circle inscribed in the whole mask with full opacity.
pub fn fill_circle_mask(mask: &mut GrayImage) {
    let (width, height) = mask.dimensions();
    for y in 0..height {
        for x in 0..width {
            if in_inscribed_circle(x, y, width, height) {
                mask.put_pixel(x, y, Luma([255]));
            }
        }
    }
}

/// Whether pixel `(x, y)` lies inside the circle inscribed in a
/// `width`×`height` image.
pub fn in_inscribed_circle(x: u32, y: u32, width: u32, height: u32) -> bool {
    let cx = (width as f32 - 1.0) / 2.0;
    let cy = (height as f32 - 1.0) / 2.0;
    let r = (width.min(height) as f32 - 1.0) / 2.0;
    let dx = x as f32 - cx;
    let dy = y as f32 - cy;
    dx * dx + dy * dy <= r * r
}

/// Paste an RGBA overlay onto an RGB canvas at `(x, y)`, blending by the
/// overlay's own alpha channel. Pixels past the canvas edge are clipped.
pub fn paste_rgba(canvas: &mut RgbImage, overlay: &RgbaImage, x: u32, y: u32) {
    for (ox, oy, &Rgba([r, g, b, a])) in overlay.enumerate_pixels() {
        if a == 0 {
            continue;
        }
        let (cx, cy) = (x + ox, y + oy);
        if cx >= canvas.width() || cy >= canvas.height() {
            continue;
        }
        let alpha = a as f32 / 255.0;
        let inv = 1.0 - alpha;
        let dst = canvas.get_pixel_mut(cx, cy);
        dst.0[0] = (r as f32 * alpha + dst.0[0] as f32 * inv).round() as u8;
        dst.0[1] = (g as f32 * alpha + dst.0[1] as f32 * inv).round() as u8;
        dst.0[2] = (b as f32 * alpha + dst.0[2] as f32 * inv).round() as u8;
    }
}

/// Paste an RGB image onto the canvas at `(x, y)` through a separate alpha
/// mask of identical dimensions.
pub fn paste_masked(canvas: &mut RgbImage, src: &RgbImage, mask: &GrayImage, x: u32, y: u32) {
    debug_assert_eq!(src.dimensions(), mask.dimensions());
    for (ox, oy, &pixel) in src.enumerate_pixels() {
        let Luma([a]) = *mask.get_pixel(ox, oy);
        if a == 0 {
            continue;
        }
        let (cx, cy) = (x + ox, y + oy);
        if cx >= canvas.width() || cy >= canvas.height() {
            continue;
        }
        let alpha = a as f32 / 255.0;
        let inv = 1.0 - alpha;
        let dst = canvas.get_pixel_mut(cx, cy);
        for c in 0..3 {
            dst.0[c] = (pixel.0[c] as f32 * alpha + dst.0[c] as f32 * inv).round() as u8;
        }
    }
}

/// Scale the RGB channels of an RGBA image by `factor`, leaving alpha
/// untouched. `factor` 0.2 gives the watermark darkening.
pub fn scale_brightness(img: &mut RgbaImage, factor: f32) {
    for pixel in img.pixels_mut() {
        for c in 0..3 {
            pixel.0[c] = (pixel.0[c] as f32 * factor).round().clamp(0.0, 255.0) as u8;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn frame_covers_edges_not_interior() {
        let mut img = RgbImage::from_pixel(20, 10, Rgb([0, 0, 0]));
        draw_frame(&mut img, 2, Rgb([255, 255, 255]));

        assert_eq!(*img.get_pixel(0, 0), Rgb([255, 255, 255]));
        assert_eq!(*img.get_pixel(19, 9), Rgb([255, 255, 255]));
        assert_eq!(*img.get_pixel(1, 5), Rgb([255, 255, 255]));
        assert_eq!(*img.get_pixel(10, 5), Rgb([0, 0, 0]));
        assert_eq!(*img.get_pixel(2, 2), Rgb([0, 0, 0]));
    }

    #[test]
    fn inscribed_circle_center_in_corners_out() {
        assert!(in_inscribed_circle(50, 50, 100, 100));
        assert!(!in_inscribed_circle(0, 0, 100, 100));
        assert!(!in_inscribed_circle(99, 99, 100, 100));
        // Odd-sized image: edge midpoint lies exactly on the circle
        assert!(in_inscribed_circle(0, 50, 101, 101));
    }

    #[test]
    fn fill_circle_mask_is_opaque_inside_transparent_outside() {
        let mut mask = GrayImage::new(100, 100);
        fill_circle_mask(&mut mask);
        assert_eq!(*mask.get_pixel(50, 50), Luma([255]));
        assert_eq!(*mask.get_pixel(0, 0), Luma([0]));
    }

    #[test]
    fn paste_rgba_respects_alpha() {
        let mut canvas = RgbImage::from_pixel(4, 4, Rgb([0, 0, 0]));
        let mut overlay = RgbaImage::from_pixel(2, 2, Rgba([200, 100, 50, 255]));
        overlay.put_pixel(1, 1, Rgba([200, 100, 50, 0]));

        paste_rgba(&mut canvas, &overlay, 1, 1);
        assert_eq!(*canvas.get_pixel(1, 1), Rgb([200, 100, 50]));
        // Fully transparent overlay pixel leaves the canvas untouched
        assert_eq!(*canvas.get_pixel(2, 2), Rgb([0, 0, 0]));
        // Outside the overlay footprint
        assert_eq!(*canvas.get_pixel(0, 0), Rgb([0, 0, 0]));
    }

    #[test]
    fn paste_rgba_clips_at_canvas_edge() {
        let mut canvas = RgbImage::from_pixel(4, 4, Rgb([0, 0, 0]));
        let overlay = RgbaImage::from_pixel(3, 3, Rgba([255, 255, 255, 255]));
        // Hangs over the bottom-right corner; must not panic
        paste_rgba(&mut canvas, &overlay, 2, 2);
        assert_eq!(*canvas.get_pixel(3, 3), Rgb([255, 255, 255]));
    }

    #[test]
    fn paste_masked_copies_only_where_mask_is_opaque() {
        let mut canvas = RgbImage::from_pixel(4, 4, Rgb([0, 0, 0]));
        let src = RgbImage::from_pixel(2, 2, Rgb([9, 9, 9]));
        let mut mask = GrayImage::new(2, 2);
        mask.put_pixel(0, 0, Luma([255]));

        paste_masked(&mut canvas, &src, &mask, 0, 0);
        assert_eq!(*canvas.get_pixel(0, 0), Rgb([9, 9, 9]));
        assert_eq!(*canvas.get_pixel(1, 0), Rgb([0, 0, 0]));
        assert_eq!(*canvas.get_pixel(1, 1), Rgb([0, 0, 0]));
    }

    #[test]
    fn paste_masked_blends_partial_alpha() {
        let mut canvas = RgbImage::from_pixel(1, 1, Rgb([0, 0, 0]));
        let src = RgbImage::from_pixel(1, 1, Rgb([255, 255, 255]));
        let mask = GrayImage::from_pixel(1, 1, Luma([128]));

        paste_masked(&mut canvas, &src, &mask, 0, 0);
        let Rgb([r, ..]) = *canvas.get_pixel(0, 0);
        assert!((127..=129).contains(&r));
    }

    #[test]
    fn brightness_scaling_darkens_rgb_keeps_alpha() {
        let mut img = RgbaImage::from_pixel(1, 1, Rgba([200, 100, 50, 180]));
        scale_brightness(&mut img, 0.2);
        assert_eq!(*img.get_pixel(0, 0), Rgba([40, 20, 10, 180]));
    }
}
