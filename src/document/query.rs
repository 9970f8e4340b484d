//! Read-only queries over the document tree
//!
//! Lookup helpers used by the renderer to navigate compound/section/member
//! structure, plus text flattening for inline markup that strips nested tags.

use super::models::Node;

impl Node {
    /// First attribute value with the given name, if any.
    ///
    /// Duplicate attribute names are legal in the tree; the first occurrence
    /// in document order wins.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|a| a.name == name)
            .map(|a| a.value.as_str())
    }

    /// First child element with the given tag name, if any.
    pub fn child(&self, name: &str) -> Option<&Node> {
        self.children.iter().find(|c| c.name == name)
    }

    /// All children with the given tag name, in document order.
    pub fn children_named<'a>(&'a self, name: &'a str) -> impl Iterator<Item = &'a Node> {
        self.children.iter().filter(move |c| c.name == name)
    }
}

/// Concatenate every descendant text run of `node`, in document order.
///
/// This is the "strip all markup" view used for headings, signatures, and
/// the bold/emphasis/code inline wrappers.
pub fn flatten_text(node: &Node) -> String {
    let mut out = String::new();
    collect_text(node, &mut out);
    out
}

fn collect_text(node: &Node, out: &mut String) {
    if node.is_text() {
        out.push_str(&node.text);
        return;
    }
    for child in &node.children {
        collect_text(child, out);
    }
}
