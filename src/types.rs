//! Shared types for the rendering pipeline.
//!
//! [`ArticleInfo`] is deserialized from JSON batch manifests and must stay
//! in sync with the manifest format documented in the CLI help.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// One article to render a preview image for.
///
/// Immutable input record: created once per output image and consumed
/// exactly once by the composer. In `batch` mode a manifest is a JSON array
/// of these records, all sharing one avatar and logo.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ArticleInfo {
    /// Article title. Drawn as a single line, never wrapped.
    pub title: String,
    /// Article description. May be empty — an empty description is skipped
    /// entirely (no blank line is reserved for it).
    #[serde(default)]
    pub description: String,
    /// Author display name, drawn next to the avatar.
    pub author: String,
    /// Article URL, drawn below the author name.
    pub url: String,
    /// Where to write the rendered raster. Output format is implied by the
    /// file extension.
    pub output_path: PathBuf,
}
