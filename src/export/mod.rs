//! Export formats for parsed documents
//!
//! Markdown/MDX is the primary output; JSON dumps the raw document tree for
//! debugging or downstream tooling. The index page links every generated
//! document for a conversion run.

pub mod markdown;

pub use markdown::{export_to_markdown, export_to_markdown_with_options, MarkdownOptions};

use anyhow::Result;
use std::fmt::Write;

use crate::document::Node;

/// Serialize the parsed tree as pretty-printed JSON.
pub fn export_to_json(root: &Node) -> Result<String> {
    Ok(serde_json::to_string_pretty(root)?)
}

/// Render the `index.mdx` page: project title plus one link per generated
/// file, in generation order.
pub fn render_index(project_name: &str, files: &[String]) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "# {project_name}\n");
    for file in files {
        let _ = writeln!(out, "- [{file}](./{file})");
    }
    out
}
