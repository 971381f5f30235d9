//! CLI output formatting.
//!
//! Output is information-centric: the primary display for every rendered
//! article is its semantic identity — positional index + title — with the
//! output path and layout details as indented context lines.
//!
//! ```text
//! 001 Hello World → out/hello.png
//!     Author: Jane Doe (example.com/article)
//!     Description: 3 lines
//! ```
//!
//! Each report has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure — no I/O, no side effects.

use crate::compose::Rendered;
use crate::types::ArticleInfo;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Format the report for one rendered article.
pub fn format_render_report(index: usize, article: &ArticleInfo, rendered: &Rendered) -> Vec<String> {
    let mut lines = vec![format!(
        "{} {} → {}",
        format_index(index),
        article.title,
        rendered.output.display()
    )];
    lines.push(format!(
        "{}Author: {} ({})",
        indent(1),
        article.author,
        article.url
    ));
    lines.push(match rendered.description_lines {
        0 => format!("{}Description: skipped (empty)", indent(1)),
        1 => format!("{}Description: 1 line", indent(1)),
        n => format!("{}Description: {} lines", indent(1), n),
    });
    lines
}

/// Format the batch summary line.
pub fn format_batch_summary(count: usize) -> String {
    match count {
        1 => "Rendered 1 image".to_string(),
        n => format!("Rendered {} images", n),
    }
}

/// Print the report for one rendered article.
pub fn print_render_report(index: usize, article: &ArticleInfo, rendered: &Rendered) {
    for line in format_render_report(index, article, rendered) {
        println!("{}", line);
    }
}
