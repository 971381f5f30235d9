//! Text measurement, wrapping and rasterization.
//!
//! | Concern | Module |
//! |---|---|
//! | **Greedy word wrapping** | [`wrap`] — pure, measurement passed as a closure |
//! | **Font loading + metrics** | [`font`] — `ab_glyph` handles behind [`TextMeasure`] |
//! | **Glyph rasterization** | [`draw`] — kerned, baseline-positioned, alpha-blended |
//!
//! Layout logic only ever sees the [`TextMeasure`] trait, so wrapping and
//! text-plan tests run without any font file on disk.

pub mod draw;
pub mod font;
pub mod wrap;

pub use draw::{draw_line, draw_multiline, multiline_height};
pub use font::{FontError, FontHandle, FontSet, Fonts, TextMeasure};
pub use wrap::wrap;
