//! Font handles and text metrics.
//!
//! Fonts are loaded eagerly, fail-fast, and shared read-only for the
//! lifetime of a render batch. Measurement is exposed behind the
//! [`TextMeasure`] trait so layout logic (wrapping, text planning) can be
//! unit-tested against a fixed-advance mock instead of real font files.

use ab_glyph::{Font, FontArc, GlyphId, PxScale, ScaleFont, point};
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::config::RenderConfig;

#[derive(Error, Debug)]
pub enum FontError {
    #[error("failed to read font {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("not a usable font file: {0}")]
    Invalid(PathBuf),
}

/// Width and height measurement for a single line of text.
///
/// Implemented by [`FontHandle`] over real glyph data, and by test mocks
/// with fixed advances.
pub trait TextMeasure {
    /// Advance width of `text` in pixels, kerning applied.
    fn line_width(&self, text: &str) -> u32;

    /// Ink height of `text`: the bottom of the rendered glyph bounding box,
    /// measured from the line's top anchor. Zero for text with no outlines
    /// (empty strings, spaces).
    fn line_height(&self, text: &str) -> u32;
}

/// A parsed font bound to a fixed pixel size.
#[derive(Clone, Debug)]
pub struct FontHandle {
    font: FontArc,
    scale: PxScale,
}

impl FontHandle {
    /// Read and parse a font file. Fails fast on missing or corrupt files.
    pub fn from_file(path: &Path, size: f32) -> Result<Self, FontError> {
        let data = std::fs::read(path).map_err(|source| FontError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let font = FontArc::try_from_vec(data)
            .map_err(|_| FontError::Invalid(path.to_path_buf()))?;
        Ok(Self {
            font,
            scale: PxScale::from(size),
        })
    }

    pub(crate) fn font(&self) -> &FontArc {
        &self.font
    }

    pub(crate) fn scale(&self) -> PxScale {
        self.scale
    }
}

impl TextMeasure for FontHandle {
    fn line_width(&self, text: &str) -> u32 {
        let scaled = self.font.as_scaled(self.scale);
        let mut width = 0.0f32;
        let mut prev: Option<GlyphId> = None;
        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = prev {
                width += scaled.kern(prev, id);
            }
            width += scaled.h_advance(id);
            prev = Some(id);
        }
        width.ceil() as u32
    }

    fn line_height(&self, text: &str) -> u32 {
        let scaled = self.font.as_scaled(self.scale);
        let ascent = scaled.ascent();
        let mut caret = 0.0f32;
        let mut bottom = 0.0f32;
        let mut prev: Option<GlyphId> = None;
        for ch in text.chars() {
            let id = scaled.glyph_id(ch);
            if let Some(prev) = prev {
                caret += scaled.kern(prev, id);
            }
            let glyph = id.with_scale_and_position(self.scale, point(caret, ascent));
            if let Some(outline) = self.font.outline_glyph(glyph) {
                bottom = bottom.max(outline.px_bounds().max.y);
            }
            caret += scaled.h_advance(id);
            prev = Some(id);
        }
        bottom.max(0.0).ceil() as u32
    }
}

/// The four text roles on the canvas, generic over measurement so tests can
/// substitute mocks for the whole set at once.
pub struct Fonts<F> {
    pub title: F,
    pub description: F,
    pub author: F,
    pub url: F,
}

/// Production font set: real handles for all four roles.
pub type FontSet = Fonts<FontHandle>;

impl FontSet {
    /// Load all four configured fonts at their configured sizes.
    ///
    /// Any missing or unparsable file aborts here, before a single pixel is
    /// drawn.
    pub fn load(config: &RenderConfig) -> Result<Self, FontError> {
        Ok(Self {
            title: FontHandle::from_file(&config.fonts.title_path(), config.text.title_size)?,
            description: FontHandle::from_file(
                &config.fonts.description_path(),
                config.text.description_size,
            )?,
            author: FontHandle::from_file(&config.fonts.author_path(), config.text.author_size)?,
            url: FontHandle::from_file(&config.fonts.url_path(), config.text.url_size)?,
        })
    }
}
