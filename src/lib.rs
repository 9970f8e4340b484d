//! doxmd: Convert Doxygen XML API references to Markdown/MDX
//!
//! This library parses the XML output of Doxygen (`GENERATE_XML = YES`) into
//! a simple labeled tree and renders it as Markdown/MDX documents suitable
//! for static-site generators, plus an index page linking the results.

pub mod config;
pub mod convert;
pub mod document;
pub mod export;

/// Export format options
#[derive(clap::ValueEnum, Clone, Debug, PartialEq, Eq)]
pub enum ExportFormat {
    /// Markdown/MDX documents plus an index page
    Mdx,
    /// The raw parsed tree as pretty-printed JSON
    Json,
}

// Re-export commonly used types
pub use config::Config;
pub use convert::convert_directory;
pub use document::{Node, ParseError};
