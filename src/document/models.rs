//! Core data structures for the parsed XML document tree
//!
//! This module defines the labeled-tree representation produced by the parser
//! and consumed by the Markdown renderer. The tree is built once per input
//! file and never mutated afterwards.

use serde::{Deserialize, Serialize};

/// Sentinel node name for character-data runs.
pub const TEXT_NODE: &str = "#text";

/// A single `name="value"` attribute on an element.
///
/// Attributes are kept as an ordered sequence rather than a map: Doxygen's
/// emitter can repeat attribute names, and lookup by name returns the first
/// match (see [`Node::attr`]).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Attribute {
    pub name: String,
    pub value: String,
}

/// One node in the document tree.
///
/// An element node has a tag `name` and owns its `attributes` and `children`
/// in document order. A text run uses the sentinel name `#text` and stores
/// its entity-decoded content in `text`; text nodes never carry attributes
/// or children. Consecutive character data between markup is coalesced into
/// a single text node by the parser.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Node {
    pub name: String,
    pub text: String,
    pub attributes: Vec<Attribute>,
    pub children: Vec<Node>,
}

impl Node {
    /// Create an empty element node with the given tag name.
    pub fn element(name: impl Into<String>) -> Self {
        Node {
            name: name.into(),
            text: String::new(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Create a `#text` node holding the given character data.
    pub fn text_run(text: impl Into<String>) -> Self {
        Node {
            name: TEXT_NODE.to_string(),
            text: text.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Whether this node is a `#text` run.
    pub fn is_text(&self) -> bool {
        self.name == TEXT_NODE
    }
}
