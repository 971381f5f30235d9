//! # Simple OG
//!
//! A minimal Open Graph preview image generator for articles. One template,
//! one pass per article: a 1200×630 canvas with a frame, a darkened logo
//! watermark, a circular bordered avatar, and the article's title, wrapped
//! description, author and URL.
//!
//! # Architecture: Template + Per-Article Clone
//!
//! Everything shared across a batch — background, frame, logo, avatar,
//! fonts — is built exactly once. Each article then gets a *clone* of that
//! template before its text is drawn:
//!
//! ```text
//! 1. Template   avatar + logo  →  shared 1200×630 canvas (built once)
//! 2. Plan       article text   →  TextPlan (pure, measured positions)
//! 3. Render     clone + plan   →  one raster file per article
//! ```
//!
//! The clone-before-mutate step is what makes batches safe: records never
//! see each other's text, and a failed record leaves earlier outputs on
//! disk untouched.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`compose`] | Orchestrator — template build, text planning, per-article render |
//! | [`avatar`] | Supersampled circular avatar crop with ring border and alpha mask |
//! | [`text`] | Greedy wrapping, font metrics, glyph rasterization |
//! | [`layout`] | Pure layout arithmetic (logo/avatar/byline positions, wrap width) |
//! | [`raster`] | Low-level pixel primitives (frame, circles, alpha pastes) |
//! | [`config`] | `RenderConfig` — every layout constant, TOML-overridable |
//! | [`types`] | `ArticleInfo`, the per-article input record |
//! | [`output`] | CLI output formatting — per-article render reports |
//!
//! # Design Decisions
//!
//! ## Pure-Rust Imaging and Text
//!
//! Pixel work uses the `image` crate (Lanczos3 resampling); text metrics
//! and glyph coverage come from `ab_glyph`. No system libraries, no
//! font-config discovery: the four fonts are explicit file paths, loaded
//! eagerly and shared read-only across the batch. A missing font fails the
//! run before a single pixel is drawn.
//!
//! ## Supersampled Avatar Edges
//!
//! The circular avatar is composed at 4× scale with hard-edged circles and
//! downscaled with Lanczos3 together with its alpha mask. Antialiasing
//! falls out of the downscale; no direct soft-circle rasterization to get
//! subtly wrong.
//!
//! ## Plan Before Paint
//!
//! Text placement is a pure function ([`compose::plan_text`]) over a
//! measurement trait. Every layout rule — the title that never wraps, the
//! description that vanishes without reserving space, the byline anchored
//! to the avatar rather than the text flow — is unit-tested against a
//! fixed-advance mock, with no font files on disk.
//!
//! ## Single-Threaded on Purpose
//!
//! A render is one template build plus a text pass per article; the text
//! pass is far cheaper than the template build. A thread pool would add
//! ordering and error-reporting complexity for no visible win at these
//! image counts.

pub mod avatar;
pub mod compose;
pub mod config;
pub mod layout;
pub mod output;
pub mod raster;
pub mod text;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
