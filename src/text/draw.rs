//! Glyph rasterization onto an RGB canvas.
//!
//! Glyphs are positioned on a baseline at `y + ascent`, kerned, and drawn
//! by blending `ab_glyph` coverage values over the destination pixels.
//! Anything falling outside the canvas is clipped, not an error — extremely
//! long single lines are allowed to run off the edge.

use ab_glyph::{Font, GlyphId, ScaleFont, point};
use image::{Rgb, RgbImage};

use super::font::{FontHandle, TextMeasure};

/// Draw one line of text with its top-left corner at `(x, y)`.
pub fn draw_line(img: &mut RgbImage, font: &FontHandle, x: i32, y: i32, color: Rgb<u8>, text: &str) {
    let scaled = font.font().as_scaled(font.scale());
    let baseline = y as f32 + scaled.ascent();
    let mut caret = x as f32;
    let mut prev: Option<GlyphId> = None;

    for ch in text.chars() {
        let id = scaled.glyph_id(ch);
        if let Some(prev) = prev {
            caret += scaled.kern(prev, id);
        }
        let glyph = id.with_scale_and_position(font.scale(), point(caret, baseline));
        if let Some(outline) = font.font().outline_glyph(glyph) {
            let bounds = outline.px_bounds();
            outline.draw(|gx, gy, coverage| {
                let px = gx as i32 + bounds.min.x as i32;
                let py = gy as i32 + bounds.min.y as i32;
                if px < 0 || py < 0 {
                    return;
                }
                let (px, py) = (px as u32, py as u32);
                if px >= img.width() || py >= img.height() {
                    return;
                }
                blend(img.get_pixel_mut(px, py), color, coverage);
            });
        }
        caret += scaled.h_advance(id);
        prev = Some(id);
    }
}

/// Draw wrapped lines top-to-bottom and return the total vertical extent
/// consumed.
///
/// After every line except the last, the cursor advances by that line's ink
/// height plus `spacing`. The returned extent excludes any spacing after
/// the final line, so the caller can advance its own layout cursor without
/// re-measuring.
pub fn draw_multiline(
    img: &mut RgbImage,
    font: &FontHandle,
    x: u32,
    y: u32,
    color: Rgb<u8>,
    lines: &[String],
    spacing: u32,
) -> u32 {
    let mut cursor = y;
    let mut consumed = 0;
    for (i, line) in lines.iter().enumerate() {
        draw_line(img, font, x as i32, cursor as i32, color, line);
        let height = font.line_height(line);
        consumed += height;
        if i + 1 < lines.len() {
            cursor += height + spacing;
            consumed += spacing;
        }
    }
    consumed
}

/// Vertical extent a line sequence will consume, without drawing it.
///
/// Mirrors [`draw_multiline`]'s return value so text planning can advance
/// the layout cursor before any canvas exists.
pub fn multiline_height<F: TextMeasure>(lines: &[String], font: &F, spacing: u32) -> u32 {
    let mut consumed = 0;
    for (i, line) in lines.iter().enumerate() {
        consumed += font.line_height(line);
        if i + 1 < lines.len() {
            consumed += spacing;
        }
    }
    consumed
}

/// Source-over blend of `color` at `coverage` onto an opaque pixel.
fn blend(dst: &mut Rgb<u8>, color: Rgb<u8>, coverage: f32) {
    let coverage = coverage.clamp(0.0, 1.0);
    if coverage <= 0.0 {
        return;
    }
    let inv = 1.0 - coverage;
    for c in 0..3 {
        dst.0[c] = (color.0[c] as f32 * coverage + dst.0[c] as f32 * inv).round() as u8;
    }
}
