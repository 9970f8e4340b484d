//! Batch conversion driver
//!
//! Orchestrates one run: scan the input directory, parse and render each XML
//! file, write the output next to its mirrored base name, then write the
//! index page. Files are processed one at a time; a malformed document
//! aborts the run with an error naming the file, and nothing is written for
//! that document.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::config::Config;
use crate::document::{collect_xml_files, load_xml_file};
use crate::export::{
    export_to_json, export_to_markdown_with_options, render_index, MarkdownOptions,
};
use crate::ExportFormat;

/// Convert every `.xml` file under `config.input_dir`.
///
/// Returns the generated file names in generation order. The index page is
/// only written for Markdown output and only when at least one file was
/// converted.
pub fn convert_directory(config: &Config, format: &ExportFormat) -> Result<Vec<String>> {
    let files = collect_xml_files(&config.input_dir)?;

    fs::create_dir_all(&config.output_dir).with_context(|| {
        format!(
            "Unable to create output directory {}",
            config.output_dir.display()
        )
    })?;

    let options = MarkdownOptions {
        heading_offset: config.heading_offset,
    };

    let mut generated = Vec::new();
    for path in &files {
        let file_name = convert_file(path, &config.output_dir, &options, format)?;
        generated.push(file_name);
    }

    if config.emit_index && !generated.is_empty() && matches!(format, ExportFormat::Mdx) {
        let index = render_index(&config.project_name, &generated);
        let index_path = config.output_dir.join("index.mdx");
        fs::write(&index_path, index)
            .with_context(|| format!("Unable to write {}", index_path.display()))?;
    }

    Ok(generated)
}

/// Parse and render a single document, writing `<stem>.mdx` (or `.json`)
/// into the output directory. Returns the output file name.
fn convert_file(
    path: &Path,
    output_dir: &Path,
    options: &MarkdownOptions,
    format: &ExportFormat,
) -> Result<String> {
    let root = load_xml_file(path)?;

    let (content, extension) = match format {
        ExportFormat::Mdx => (export_to_markdown_with_options(&root, options), "mdx"),
        ExportFormat::Json => (export_to_json(&root)?, "json"),
    };

    let stem = path
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("document");
    let file_name = format!("{stem}.{extension}");

    let out_path = output_dir.join(&file_name);
    fs::write(&out_path, content)
        .with_context(|| format!("Unable to write {}", out_path.display()))?;

    Ok(file_name)
}
