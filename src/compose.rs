//! Canvas composition — the rendering orchestrator.
//!
//! A render batch works in two phases:
//!
//! 1. **Template build** (once): background fill, frame, darkened logo,
//!    avatar disc. The template is immutable after construction.
//! 2. **Per-article render**: the template is *cloned* before any article
//!    text touches it, so records in a batch never see each other's text.
//!
//! Text placement is computed by [`plan_text`], a pure function over the
//! [`TextMeasure`] trait, and only then executed against real fonts. The
//! split keeps every cursor rule (title gap, description skip, byline
//! anchoring) unit-testable without font files.

use image::imageops::FilterType;
use image::RgbImage;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::avatar::circular_avatar;
use crate::config::{ConfigError, RenderConfig};
use crate::layout;
use crate::raster;
use crate::text::{FontError, FontSet, Fonts, TextMeasure, draw, wrap};
use crate::types::ArticleInfo;

#[derive(Error, Debug)]
pub enum ComposeError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("image error: {0}")]
    Image(#[from] image::ImageError),
    #[error("font error: {0}")]
    Font(#[from] FontError),
    #[error("config error: {0}")]
    Config(#[from] ConfigError),
}

/// The shared canvas with everything except per-article text drawn in.
pub struct Template {
    pub canvas: RgbImage,
    /// Top-left of the avatar disc, the anchor for the byline.
    pub avatar_pos: (u32, u32),
    /// Side length of the avatar disc.
    pub avatar_disc: u32,
}

impl Template {
    /// Build the shared template: background, frame, darkened logo, avatar.
    ///
    /// Loads the avatar and logo from disk; either failing aborts the whole
    /// batch since both are shared across all records.
    pub fn build(
        config: &RenderConfig,
        avatar_path: &Path,
        logo_path: &Path,
    ) -> Result<Self, ComposeError> {
        let (width, height) = (config.canvas.width, config.canvas.height);
        let mut canvas = RgbImage::from_pixel(width, height, config.canvas.background_rgb()?);
        raster::draw_frame(&mut canvas, config.canvas.frame_width, config.canvas.frame_rgb()?);

        // Logo: resized, darkened to a watermark, pasted through its own
        // alpha against the right edge.
        let logo = image::open(logo_path)?.to_rgba8();
        let mut logo =
            image::imageops::resize(&logo, config.logo.size, config.logo.size, FilterType::Lanczos3);
        raster::scale_brightness(&mut logo, config.logo.brightness);
        let (logo_x, logo_y) = layout::logo_position((width, height), config.logo.size, config.logo.margin);
        raster::paste_rgba(&mut canvas, &logo, logo_x, logo_y);

        // Avatar disc: composited once, pasted bottom-left through its mask.
        let disc = circular_avatar(
            avatar_path,
            config.avatar.size,
            config.avatar.border,
            config.avatar.border_rgb()?,
        )?;
        let disc_size = layout::disc_size(config.avatar.size, config.avatar.border);
        let avatar_pos = layout::avatar_position((width, height), disc_size, config.canvas.padding);
        raster::paste_masked(&mut canvas, &disc.image, &disc.mask, avatar_pos.0, avatar_pos.1);

        Ok(Self {
            canvas,
            avatar_pos,
            avatar_disc: disc_size,
        })
    }
}

/// A positioned block of one or more text lines.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextBlock {
    pub x: u32,
    pub y: u32,
    pub lines: Vec<String>,
}

/// Computed text layout for one article.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextPlan {
    /// Title, always a single line regardless of width.
    pub title: TextBlock,
    /// Wrapped description, absent when the description has no words.
    pub description: Option<TextBlock>,
    /// Author line, anchored to the avatar.
    pub author: TextBlock,
    /// URL line, directly below the author.
    pub url: TextBlock,
    /// Final top-flow cursor position after title and description. The
    /// byline does not consume it (it anchors to the avatar), but tests
    /// and future layout additions do.
    pub cursor: u32,
}

/// Compute where every text block of an article lands on the canvas.
///
/// Pure: measurement comes in through [`TextMeasure`], so tests drive this
/// with fixed-advance mocks. The avatar geometry is passed in from the
/// template because the byline anchors to the disc, not to the text flow.
pub fn plan_text<F: TextMeasure>(
    article: &ArticleInfo,
    fonts: &Fonts<F>,
    config: &RenderConfig,
    avatar_pos: (u32, u32),
    avatar_disc: u32,
) -> TextPlan {
    let padding = config.canvas.padding;
    let mut cursor = padding;

    let title = TextBlock {
        x: padding,
        y: cursor,
        lines: vec![article.title.clone()],
    };
    cursor += fonts.title.line_height(&article.title) + config.text.title_gap;

    let (logo_x, _) = layout::logo_position(
        (config.canvas.width, config.canvas.height),
        config.logo.size,
        config.logo.margin,
    );
    let max_width = layout::wrap_width(logo_x, padding, config.text.wrap_margin);
    let lines = wrap(&article.description, max_width, |s| {
        fonts.description.line_width(s)
    });
    let description = if lines.is_empty() {
        // Empty description: skip entirely, no blank line reserved.
        None
    } else {
        let height = draw::multiline_height(&lines, &fonts.description, config.text.line_spacing);
        let block = TextBlock {
            x: padding,
            y: cursor,
            lines,
        };
        cursor += height + config.text.description_gap;
        Some(block)
    };

    let (byline_x, byline_y) = layout::byline_anchor(avatar_pos, avatar_disc);
    let author = TextBlock {
        x: byline_x,
        y: byline_y,
        lines: vec![article.author.clone()],
    };
    let url = TextBlock {
        x: byline_x,
        y: byline_y + fonts.author.line_height(&article.author) + layout::URL_GAP_Y,
        lines: vec![article.url.clone()],
    };

    TextPlan {
        title,
        description,
        author,
        url,
        cursor,
    }
}

/// What one successful render produced, for CLI reporting.
#[derive(Debug, Clone)]
pub struct Rendered {
    pub output: PathBuf,
    /// Number of wrapped description lines (zero when skipped).
    pub description_lines: usize,
}

/// The batch renderer: shared template, shared fonts, per-article clones.
pub struct Composer {
    template: Template,
    fonts: FontSet,
    config: RenderConfig,
    text_color: image::Rgb<u8>,
}

impl Composer {
    /// Validate config, load fonts (fail-fast) and build the template.
    pub fn new(
        config: RenderConfig,
        avatar_path: &Path,
        logo_path: &Path,
    ) -> Result<Self, ComposeError> {
        config.validate()?;
        let fonts = FontSet::load(&config)?;
        let template = Template::build(&config, avatar_path, logo_path)?;
        let text_color = config.text.color_rgb()?;
        Ok(Self {
            template,
            fonts,
            config,
            text_color,
        })
    }

    /// Compose one article onto a fresh clone of the template.
    pub fn compose(&self, article: &ArticleInfo) -> (RgbImage, TextPlan) {
        let mut canvas = self.template.canvas.clone();
        let plan = plan_text(
            article,
            &self.fonts,
            &self.config,
            self.template.avatar_pos,
            self.template.avatar_disc,
        );

        draw::draw_line(
            &mut canvas,
            &self.fonts.title,
            plan.title.x as i32,
            plan.title.y as i32,
            self.text_color,
            &plan.title.lines[0],
        );
        if let Some(block) = &plan.description {
            draw::draw_multiline(
                &mut canvas,
                &self.fonts.description,
                block.x,
                block.y,
                self.text_color,
                &block.lines,
                self.config.text.line_spacing,
            );
        }
        draw::draw_line(
            &mut canvas,
            &self.fonts.author,
            plan.author.x as i32,
            plan.author.y as i32,
            self.text_color,
            &plan.author.lines[0],
        );
        draw::draw_line(
            &mut canvas,
            &self.fonts.url,
            plan.url.x as i32,
            plan.url.y as i32,
            self.text_color,
            &plan.url.lines[0],
        );

        (canvas, plan)
    }

    /// Render one article and persist it to its output path. The output
    /// format follows the path's extension.
    pub fn render(&self, article: &ArticleInfo) -> Result<Rendered, ComposeError> {
        let (canvas, plan) = self.compose(article);
        canvas.save(&article.output_path)?;
        Ok(Rendered {
            output: article.output_path.clone(),
            description_lines: plan.description.as_ref().map_or(0, |b| b.lines.len()),
        })
    }
}
