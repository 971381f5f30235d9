//! Render configuration.
//!
//! Every layout constant of the composed image lives here: canvas geometry,
//! colors, avatar and logo placement, font sizes and spacing. All values
//! have the stock defaults documented below; a user config file (passed via
//! `--config`) is sparse and overrides only the keys it names. Unknown keys
//! are rejected to catch typos early.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [canvas]
//! width = 1200              # Output raster width (Open Graph standard)
//! height = 630              # Output raster height
//! padding = 80              # Inset for text and the avatar, all edges
//! background = "#000000"
//! frame_color = "#ffffff"
//! frame_width = 8           # Rectangular frame along all four edges
//!
//! [avatar]
//! size = 96                 # Visible diameter of the circular crop
//! border = 2                # Ring border thickness around it
//! border_color = "#ffffff"
//!
//! [logo]
//! size = 300                # Square footprint after resize
//! margin = 60               # Gap to the right canvas edge
//! brightness = 0.2          # Watermark darkening (1.0 = unchanged)
//!
//! [text]
//! color = "#ffffff"
//! title_size = 76.0         # Font sizes in pixels
//! description_size = 40.0
//! author_size = 36.0
//! url_size = 30.0
//! title_gap = 40            # Vertical gap after the title block
//! description_gap = 60      # Vertical gap after the description block
//! line_spacing = 10         # Between wrapped description lines
//! wrap_margin = 40          # Kept clear between text and the logo's left edge
//!
//! [fonts]
//! dir = "fonts"             # Resolved relative to the working directory
//! title = "Poppins-SemiBold.ttf"
//! description = "Poppins-Regular.ttf"
//! author = "Roboto-Bold.ttf"
//! url = "PTMono-Regular.ttf"
//! ```
//!
//! ## Partial Configuration
//!
//! ```toml
//! # Only override the frame color
//! [canvas]
//! frame_color = "#e0e0e0"
//! ```

use image::Rgb;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Full render configuration.
///
/// All fields have the stock defaults; user config files need only specify
/// the values they want to override. Unknown keys are rejected.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Canvas geometry, background and frame.
    pub canvas: CanvasConfig,
    /// Circular avatar crop settings.
    pub avatar: AvatarConfig,
    /// Logo watermark settings.
    pub logo: LogoConfig,
    /// Text colors, sizes and vertical spacing.
    pub text: TextConfig,
    /// Font file locations.
    pub fonts: FontsConfig,
}

impl RenderConfig {
    /// Load a config file and validate it.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path)?;
        let config: RenderConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(ConfigError::Validation(
                "canvas.width and canvas.height must be non-zero".into(),
            ));
        }
        if self.avatar.size == 0 {
            return Err(ConfigError::Validation("avatar.size must be non-zero".into()));
        }
        if self.logo.size == 0 {
            return Err(ConfigError::Validation("logo.size must be non-zero".into()));
        }
        if !(0.0..=1.0).contains(&self.logo.brightness) {
            return Err(ConfigError::Validation(
                "logo.brightness must be between 0.0 and 1.0".into(),
            ));
        }
        for size in [
            self.text.title_size,
            self.text.description_size,
            self.text.author_size,
            self.text.url_size,
        ] {
            if size <= 0.0 {
                return Err(ConfigError::Validation("font sizes must be positive".into()));
            }
        }
        // Colors are parsed eagerly so a bad hex string fails at startup,
        // not halfway through a batch.
        self.canvas.background_rgb()?;
        self.canvas.frame_rgb()?;
        self.avatar.border_rgb()?;
        self.text.color_rgb()?;
        Ok(())
    }
}

/// Canvas geometry, background and frame.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CanvasConfig {
    /// Output raster width in pixels.
    pub width: u32,
    /// Output raster height in pixels.
    pub height: u32,
    /// Inset from the canvas edges for text and the avatar.
    pub padding: u32,
    /// Background fill color.
    pub background: String,
    /// Frame (border rectangle) color.
    pub frame_color: String,
    /// Frame thickness along all four edges.
    pub frame_width: u32,
}

impl Default for CanvasConfig {
    fn default() -> Self {
        Self {
            width: 1200,
            height: 630,
            padding: 80,
            background: "#000000".to_string(),
            frame_color: "#ffffff".to_string(),
            frame_width: 8,
        }
    }
}

impl CanvasConfig {
    pub fn background_rgb(&self) -> Result<Rgb<u8>, ConfigError> {
        parse_hex_color(&self.background)
    }

    pub fn frame_rgb(&self) -> Result<Rgb<u8>, ConfigError> {
        parse_hex_color(&self.frame_color)
    }
}

/// Circular avatar crop settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AvatarConfig {
    /// Visible diameter of the circular crop, border excluded.
    pub size: u32,
    /// Ring border thickness.
    pub border: u32,
    /// Ring border color.
    pub border_color: String,
}

impl Default for AvatarConfig {
    fn default() -> Self {
        Self {
            size: 96,
            border: 2,
            border_color: "#ffffff".to_string(),
        }
    }
}

impl AvatarConfig {
    pub fn border_rgb(&self) -> Result<Rgb<u8>, ConfigError> {
        parse_hex_color(&self.border_color)
    }
}

/// Logo watermark settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogoConfig {
    /// Square footprint the logo is resized to.
    pub size: u32,
    /// Gap between the logo and the right canvas edge.
    pub margin: u32,
    /// Brightness factor applied for the watermark effect (1.0 = unchanged).
    pub brightness: f32,
}

impl Default for LogoConfig {
    fn default() -> Self {
        Self {
            size: 300,
            margin: 60,
            brightness: 0.2,
        }
    }
}

/// Text colors, sizes and vertical spacing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TextConfig {
    /// Fill color for all text.
    pub color: String,
    /// Title font size in pixels.
    pub title_size: f32,
    /// Description font size in pixels.
    pub description_size: f32,
    /// Author font size in pixels.
    pub author_size: f32,
    /// URL font size in pixels.
    pub url_size: f32,
    /// Vertical gap between the title and the description block.
    pub title_gap: u32,
    /// Vertical gap after the description block.
    pub description_gap: u32,
    /// Spacing between wrapped description lines.
    pub line_spacing: u32,
    /// Horizontal margin kept clear between wrapped text and the logo's
    /// left edge.
    pub wrap_margin: u32,
}

impl Default for TextConfig {
    fn default() -> Self {
        Self {
            color: "#ffffff".to_string(),
            title_size: 76.0,
            description_size: 40.0,
            author_size: 36.0,
            url_size: 30.0,
            title_gap: 40,
            description_gap: 60,
            line_spacing: 10,
            wrap_margin: 40,
        }
    }
}

impl TextConfig {
    pub fn color_rgb(&self) -> Result<Rgb<u8>, ConfigError> {
        parse_hex_color(&self.color)
    }
}

/// Font file locations. All four are loaded eagerly at composer
/// construction; a missing file aborts before any rendering.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FontsConfig {
    /// Directory the font file names below are resolved against.
    pub dir: PathBuf,
    /// Title font file name.
    pub title: String,
    /// Description font file name.
    pub description: String,
    /// Author font file name.
    pub author: String,
    /// URL font file name (monospace in the stock set).
    pub url: String,
}

impl Default for FontsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("fonts"),
            title: "Poppins-SemiBold.ttf".to_string(),
            description: "Poppins-Regular.ttf".to_string(),
            author: "Roboto-Bold.ttf".to_string(),
            url: "PTMono-Regular.ttf".to_string(),
        }
    }
}

impl FontsConfig {
    pub fn title_path(&self) -> PathBuf {
        self.dir.join(&self.title)
    }

    pub fn description_path(&self) -> PathBuf {
        self.dir.join(&self.description)
    }

    pub fn author_path(&self) -> PathBuf {
        self.dir.join(&self.author)
    }

    pub fn url_path(&self) -> PathBuf {
        self.dir.join(&self.url)
    }
}

/// Parse a `#rrggbb` hex color string.
pub fn parse_hex_color(s: &str) -> Result<Rgb<u8>, ConfigError> {
    let hex = s.trim().trim_start_matches('#');
    if hex.len() != 6 || !hex.is_ascii() {
        return Err(ConfigError::Validation(format!("invalid color: {s}")));
    }
    let channel = |range: std::ops::Range<usize>| {
        u8::from_str_radix(&hex[range], 16)
            .map_err(|_| ConfigError::Validation(format!("invalid color: {s}")))
    };
    Ok(Rgb([channel(0..2)?, channel(2..4)?, channel(4..6)?]))
}

/// Return a stock config.toml with all options documented.
///
/// Printed by the `gen-config` subcommand so users start from a complete,
/// commented file instead of reverse-engineering the defaults.
pub fn stock_config_toml() -> String {
    let defaults = RenderConfig::default();
    format!(
        r##"# simple-og configuration
# All options are optional - the values below are the stock defaults.

[canvas]
width = {width}               # Output raster width (Open Graph standard)
height = {height}              # Output raster height
padding = {padding}              # Inset for text and the avatar, all edges
background = "{background}"
frame_color = "{frame_color}"
frame_width = {frame_width}            # Rectangular frame along all four edges

[avatar]
size = {avatar_size}                # Visible diameter of the circular crop
border = {avatar_border}                # Ring border thickness around it
border_color = "{avatar_border_color}"

[logo]
size = {logo_size}                # Square footprint after resize
margin = {logo_margin}               # Gap to the right canvas edge
brightness = {brightness}          # Watermark darkening (1.0 = unchanged)

[text]
color = "{text_color}"
title_size = {title_size:.1}        # Font sizes in pixels
description_size = {description_size:.1}
author_size = {author_size:.1}
url_size = {url_size:.1}
title_gap = {title_gap}            # Vertical gap after the title block
description_gap = {description_gap}      # Vertical gap after the description block
line_spacing = {line_spacing}         # Between wrapped description lines
wrap_margin = {wrap_margin}          # Kept clear between text and the logo's left edge

[fonts]
dir = "{fonts_dir}"             # Resolved relative to the working directory
title = "{font_title}"
description = "{font_description}"
author = "{font_author}"
url = "{font_url}"
"##,
        width = defaults.canvas.width,
        height = defaults.canvas.height,
        padding = defaults.canvas.padding,
        background = defaults.canvas.background,
        frame_color = defaults.canvas.frame_color,
        frame_width = defaults.canvas.frame_width,
        avatar_size = defaults.avatar.size,
        avatar_border = defaults.avatar.border,
        avatar_border_color = defaults.avatar.border_color,
        logo_size = defaults.logo.size,
        logo_margin = defaults.logo.margin,
        brightness = defaults.logo.brightness,
        text_color = defaults.text.color,
        title_size = defaults.text.title_size,
        description_size = defaults.text.description_size,
        author_size = defaults.text.author_size,
        url_size = defaults.text.url_size,
        title_gap = defaults.text.title_gap,
        description_gap = defaults.text.description_gap,
        line_spacing = defaults.text.line_spacing,
        wrap_margin = defaults.text.wrap_margin,
        fonts_dir = defaults.fonts.dir.display(),
        font_title = defaults.fonts.title,
        font_description = defaults.fonts.description,
        font_author = defaults.fonts.author,
        font_url = defaults.fonts.url,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_layout() {
        let config = RenderConfig::default();
        assert_eq!((config.canvas.width, config.canvas.height), (1200, 630));
        assert_eq!(config.canvas.padding, 80);
        assert_eq!(config.canvas.frame_width, 8);
        assert_eq!(config.avatar.size, 96);
        assert_eq!(config.avatar.border, 2);
        assert_eq!(config.logo.size, 300);
        assert_eq!(config.logo.margin, 60);
        assert_eq!(config.text.title_size, 76.0);
        assert_eq!(config.text.url_size, 30.0);
    }

    #[test]
    fn defaults_validate() {
        RenderConfig::default().validate().unwrap();
    }

    #[test]
    fn partial_config_overrides_single_value() {
        let config: RenderConfig = toml::from_str(
            r##"
            [canvas]
            frame_color = "#e0e0e0"
            "##,
        )
        .unwrap();
        assert_eq!(config.canvas.frame_color, "#e0e0e0");
        // Everything else stays stock
        assert_eq!(config.canvas.width, 1200);
        assert_eq!(config.avatar.size, 96);
    }

    #[test]
    fn unknown_keys_are_rejected() {
        let result = toml::from_str::<RenderConfig>(
            r#"
            [canvas]
            widht = 800
            "#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn validation_rejects_zero_canvas() {
        let mut config = RenderConfig::default();
        config.canvas.width = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_out_of_range_brightness() {
        let mut config = RenderConfig::default();
        config.logo.brightness = 1.5;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validation_rejects_bad_color() {
        let mut config = RenderConfig::default();
        config.text.color = "#fffffg".to_string();
        assert!(config.validate().is_err());
    }

    #[test]
    fn hex_colors_parse() {
        assert_eq!(parse_hex_color("#000000").unwrap(), Rgb([0, 0, 0]));
        assert_eq!(parse_hex_color("#ffffff").unwrap(), Rgb([255, 255, 255]));
        assert_eq!(parse_hex_color("#cf2c2d").unwrap(), Rgb([0xcf, 0x2c, 0x2d]));
        // Leading '#' is optional
        assert_eq!(parse_hex_color("102030").unwrap(), Rgb([0x10, 0x20, 0x30]));
    }

    #[test]
    fn hex_color_rejects_short_and_garbage() {
        assert!(parse_hex_color("#fff").is_err());
        assert!(parse_hex_color("not-a-color").is_err());
        assert!(parse_hex_color("").is_err());
    }

    #[test]
    fn stock_config_round_trips() {
        let config: RenderConfig = toml::from_str(&stock_config_toml()).unwrap();
        config.validate().unwrap();
        assert_eq!(config.canvas.width, RenderConfig::default().canvas.width);
        assert_eq!(config.fonts.title, RenderConfig::default().fonts.title);
    }

    #[test]
    fn load_reads_and_validates_file() {
        let tmp = tempfile::TempDir::new().unwrap();
        let path = tmp.path().join("config.toml");
        std::fs::write(&path, "[logo]\nbrightness = 0.5\n").unwrap();

        let config = RenderConfig::load(&path).unwrap();
        assert_eq!(config.logo.brightness, 0.5);

        std::fs::write(&path, "[logo]\nbrightness = 7.0\n").unwrap();
        assert!(RenderConfig::load(&path).is_err());
    }
}
