//! Recursive-descent parser for the Doxygen XML subset
//!
//! This is not a conforming XML parser and does not try to be one: Doxygen's
//! emitter produces a narrow, predictable dialect, so the grammar here covers
//! elements, attributes, character data, CDATA sections, comments, and the
//! five named entities, nothing more. Processing instructions and DOCTYPE
//! declarations are skipped without validation, and unrecognized `&...;`
//! sequences pass through literally. A malformed document fails the whole
//! parse; no partial tree is ever returned.

use thiserror::Error;

use super::models::{Attribute, Node};

/// Failure modes of the parser, each carrying the byte offset where the
/// problem was detected.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("unexpected end of input at byte {offset}")]
    UnexpectedEof { offset: usize },

    #[error("closing tag </{found}> does not match opening tag <{expected}> at byte {offset}")]
    TagMismatch {
        expected: String,
        found: String,
        offset: usize,
    },

    #[error("malformed attribute at byte {offset}: {reason}")]
    MalformedAttribute {
        offset: usize,
        reason: &'static str,
    },

    #[error("expected {expected:?} at byte {offset}")]
    ExpectedToken {
        expected: &'static str,
        offset: usize,
    },
}

/// Parse one XML document into its tree.
///
/// Leading whitespace, an optional `<?...?>` processing instruction, and an
/// optional `<!DOCTYPE ...>` declaration are consumed before the root
/// element. Comments never appear in the tree.
pub fn parse(input: &str) -> Result<Node, ParseError> {
    let mut parser = Parser { input, pos: 0 };
    parser.parse_document()
}

/// Cursor over the raw input. One parser instance handles one document;
/// the position is never shared across parses.
struct Parser<'a> {
    input: &'a str,
    pos: usize,
}

impl<'a> Parser<'a> {
    fn parse_document(&mut self) -> Result<Node, ParseError> {
        self.skip_whitespace();
        if self.starts_with("<?") {
            self.take_until("?>")?;
            self.bump(2);
            self.skip_whitespace();
        }
        if self.starts_with("<!DOCTYPE") {
            self.take_until(">")?;
            self.bump(1);
            self.skip_whitespace();
        }
        self.parse_node()
    }

    fn parse_node(&mut self) -> Result<Node, ParseError> {
        if !self.starts_with("<") {
            return Err(ParseError::ExpectedToken {
                expected: "<",
                offset: self.pos,
            });
        }
        self.bump(1);

        // Comments are transparent: skip and parse the next real node.
        if self.starts_with("!--") {
            self.bump(3);
            self.take_until("-->")?;
            self.bump(3);
            self.skip_whitespace();
            return self.parse_node();
        }

        // A CDATA section becomes a text run with no entity decoding.
        if self.starts_with("![CDATA[") {
            self.bump(8);
            let raw = self.take_until("]]>")?;
            self.bump(3);
            return Ok(Node::text_run(raw));
        }

        let name = self.parse_name().to_string();
        let mut node = Node::element(&name);

        self.skip_whitespace();
        while !self.eof() && !self.starts_with(">") && !self.starts_with("/>") {
            let attribute = self.parse_attribute()?;
            node.attributes.push(attribute);
            self.skip_whitespace();
        }

        if self.starts_with("/>") {
            self.bump(2);
            return Ok(node);
        }
        if !self.starts_with(">") {
            return Err(ParseError::ExpectedToken {
                expected: ">",
                offset: self.pos,
            });
        }
        self.bump(1);

        let mut text_buffer = String::new();
        loop {
            if self.eof() {
                return Err(ParseError::UnexpectedEof { offset: self.pos });
            }
            if self.starts_with("</") {
                let close_offset = self.pos;
                self.bump(2);
                let end_name = self.parse_name();
                if end_name != name {
                    return Err(ParseError::TagMismatch {
                        expected: name,
                        found: end_name.to_string(),
                        offset: close_offset,
                    });
                }
                self.skip_whitespace();
                if !self.starts_with(">") {
                    return Err(ParseError::ExpectedToken {
                        expected: ">",
                        offset: self.pos,
                    });
                }
                self.bump(1);
                break;
            }
            if self.starts_with("<![CDATA[") {
                flush_text(&mut node, &mut text_buffer);
                self.bump(9);
                let raw = self.take_until("]]>")?.to_string();
                self.bump(3);
                node.children.push(Node::text_run(raw));
                continue;
            }
            if self.starts_with("<!--") {
                self.bump(4);
                self.take_until("-->")?;
                self.bump(3);
                continue;
            }
            if self.starts_with("<") {
                flush_text(&mut node, &mut text_buffer);
                let child = self.parse_node()?;
                node.children.push(child);
                continue;
            }
            // Character data runs to the next markup in one slice, so
            // sibling text between tags always coalesces into one node.
            match self.rest().find('<') {
                Some(offset) => {
                    text_buffer.push_str(&self.rest()[..offset]);
                    self.bump(offset);
                }
                None => {
                    text_buffer.push_str(self.rest());
                    self.pos = self.input.len();
                }
            }
        }
        flush_text(&mut node, &mut text_buffer);

        Ok(node)
    }

    fn parse_attribute(&mut self) -> Result<Attribute, ParseError> {
        let name_offset = self.pos;
        let name = self.parse_name();
        if name.is_empty() {
            return Err(ParseError::MalformedAttribute {
                offset: name_offset,
                reason: "expected attribute name",
            });
        }
        let name = name.to_string();

        self.skip_whitespace();
        if !self.starts_with("=") {
            return Err(ParseError::MalformedAttribute {
                offset: self.pos,
                reason: "missing '=' after attribute name",
            });
        }
        self.bump(1);
        self.skip_whitespace();

        let quote = match self.rest().chars().next() {
            Some(q @ ('"' | '\'')) => q,
            _ => {
                return Err(ParseError::MalformedAttribute {
                    offset: self.pos,
                    reason: "attribute value must be quoted",
                });
            }
        };
        self.bump(1);

        let value = match self.rest().find(quote) {
            Some(end) => {
                let raw = &self.rest()[..end];
                let value = decode_entities(raw);
                self.bump(end + 1);
                value
            }
            None => {
                return Err(ParseError::MalformedAttribute {
                    offset: self.pos,
                    reason: "unterminated attribute value",
                });
            }
        };

        Ok(Attribute { name, value })
    }

    /// Tag and attribute names: alphanumerics plus `_`, `-`, `:`.
    fn parse_name(&mut self) -> &'a str {
        let start = self.pos;
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() {
            let b = bytes[self.pos];
            if b.is_ascii_alphanumeric() || b == b'_' || b == b'-' || b == b':' {
                self.pos += 1;
            } else {
                break;
            }
        }
        &self.input[start..self.pos]
    }

    /// Slice up to (not including) `marker`, leaving the cursor on the
    /// marker. Fails with `UnexpectedEof` if the marker never appears.
    fn take_until(&mut self, marker: &str) -> Result<&'a str, ParseError> {
        match self.rest().find(marker) {
            Some(offset) => {
                let slice = &self.rest()[..offset];
                self.pos += offset;
                Ok(slice)
            }
            None => Err(ParseError::UnexpectedEof { offset: self.pos }),
        }
    }

    fn skip_whitespace(&mut self) {
        let bytes = self.input.as_bytes();
        while self.pos < bytes.len() && bytes[self.pos].is_ascii_whitespace() {
            self.pos += 1;
        }
    }

    fn rest(&self) -> &'a str {
        &self.input[self.pos..]
    }

    fn starts_with(&self, s: &str) -> bool {
        self.rest().starts_with(s)
    }

    fn bump(&mut self, n: usize) {
        self.pos += n;
    }

    fn eof(&self) -> bool {
        self.pos >= self.input.len()
    }
}

fn flush_text(node: &mut Node, buffer: &mut String) {
    if !buffer.is_empty() {
        node.children.push(Node::text_run(decode_entities(buffer)));
        buffer.clear();
    }
}

/// Decode the five named XML entities. Anything else after `&` passes
/// through literally; Doxygen's emitter never produces numeric references,
/// and rejecting unknown entities would refuse inputs the tool has always
/// accepted.
pub(crate) fn decode_entities(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    let mut rest = text;
    while let Some(idx) = rest.find('&') {
        out.push_str(&rest[..idx]);
        rest = &rest[idx..];

        let decoded = [
            ("&lt;", '<'),
            ("&gt;", '>'),
            ("&amp;", '&'),
            ("&quot;", '"'),
            ("&apos;", '\''),
        ]
        .iter()
        .find(|(entity, _)| rest.starts_with(entity));

        match decoded {
            Some((entity, ch)) => {
                out.push(*ch);
                rest = &rest[entity.len()..];
            }
            None => {
                out.push('&');
                rest = &rest[1..];
            }
        }
    }
    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_entity_decoding() {
        assert_eq!(decode_entities("a &lt; b &gt; c"), "a < b > c");
        assert_eq!(decode_entities("&amp;&quot;&apos;"), "&\"'");
        // Unknown entities pass through untouched.
        assert_eq!(decode_entities("&nbsp; &unknown;"), "&nbsp; &unknown;");
        assert_eq!(decode_entities("lone & ampersand"), "lone & ampersand");
    }

    #[test]
    fn test_self_closing_tag() {
        let node = parse("<ref refid='abc'/>").unwrap();
        assert_eq!(node.name, "ref");
        assert_eq!(node.attr("refid"), Some("abc"));
        assert!(node.children.is_empty());
    }

    #[test]
    fn test_sibling_text_is_coalesced() {
        // The comment splits the character data; it must still come out
        // as a single text node.
        let node = parse("<para>one <!-- gone --> two</para>").unwrap();
        assert_eq!(node.children.len(), 1);
        assert_eq!(node.children[0].text, "one  two");
    }

    #[test]
    fn test_prolog_and_doctype_are_skipped() {
        let input = "<?xml version=\"1.0\"?>\n<!DOCTYPE doxygen>\n<doxygen></doxygen>";
        let node = parse(input).unwrap();
        assert_eq!(node.name, "doxygen");
    }

    #[test]
    fn test_cdata_skips_decoding() {
        let node = parse("<codeline><![CDATA[a < b && c]]></codeline>").unwrap();
        assert_eq!(node.children[0].text, "a < b && c");
    }

    #[test]
    fn test_unterminated_attribute() {
        let err = parse("<node kind=\"broken></node>").unwrap_err();
        assert!(matches!(err, ParseError::MalformedAttribute { .. }));

        let err = parse("<node kind></node>").unwrap_err();
        assert!(matches!(
            err,
            ParseError::MalformedAttribute {
                reason: "missing '=' after attribute name",
                ..
            }
        ));
    }
}
