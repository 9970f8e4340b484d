//! File I/O operations and validation
//!
//! Thin plumbing around the parser: input validation, file reading, and the
//! recursive scan that finds the Doxygen XML files to convert.

use anyhow::{bail, Context, Result};
use std::fs;
use std::path::{Path, PathBuf};

use super::models::Node;
use super::parser;

/// Validates that the path looks like a Doxygen XML file.
pub(crate) fn validate_xml_file(file_path: &Path) -> Result<()> {
    let extension = file_path
        .extension()
        .and_then(|ext| ext.to_str())
        .unwrap_or("");

    if extension != "xml" {
        bail!(
            "Invalid file format. Expected .xml file, got .{}\n\
            Note: doxmd only reads the XML output of Doxygen (GENERATE_XML = YES)",
            extension
        );
    }

    Ok(())
}

/// Read and parse one XML document from disk.
///
/// Fails on unreadable files and on malformed XML; a failed parse leaves no
/// partial tree behind.
pub fn load_xml_file(file_path: &Path) -> Result<Node> {
    validate_xml_file(file_path)?;

    let content = fs::read_to_string(file_path)
        .with_context(|| format!("Unable to read {}", file_path.display()))?;

    parser::parse(&content)
        .with_context(|| format!("Failed to parse {}", file_path.display()))
}

/// Collect every `.xml` file under `dir`, recursively, sorted by path so
/// conversion (and the generated index) is deterministic.
pub fn collect_xml_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    walk_dir(dir, &mut files)
        .with_context(|| format!("Unable to scan input directory {}", dir.display()))?;
    files.sort();
    Ok(files)
}

fn walk_dir(dir: &Path, files: &mut Vec<PathBuf>) -> Result<()> {
    for entry in fs::read_dir(dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.is_dir() {
            walk_dir(&path, files)?;
        } else if path.extension().and_then(|e| e.to_str()) == Some("xml") {
            files.push(path);
        }
    }
    Ok(())
}
