//! XML document parsing and data structures module
//!
//! This module turns the raw text of one Doxygen XML file into a labeled
//! tree of [`Node`] values. The tree is the contract between the parser and
//! the Markdown renderer: the renderer never re-enters the parser.

pub(crate) mod io;
pub mod models;
pub mod parser;
pub mod query;

// Re-export the model types and the parser entry points
pub use io::{collect_xml_files, load_xml_file};
pub use models::{Attribute, Node, TEXT_NODE};
pub use parser::{parse, ParseError};
pub use query::flatten_text;
