use doxmd::document::{parse, ParseError};

#[test]
fn test_entity_round_trip_in_text() {
    let root = parse("<para>&lt;tag&gt; &amp; &quot;quoted&quot; &apos;x&apos;</para>").unwrap();
    assert_eq!(root.children.len(), 1);
    assert_eq!(root.children[0].text, "<tag> & \"quoted\" 'x'");
}

#[test]
fn test_unknown_entities_pass_through() {
    let root = parse("<para>a&nbsp;b &copy; c</para>").unwrap();
    assert_eq!(root.children[0].text, "a&nbsp;b &copy; c");
}

#[test]
fn test_nested_elements_preserve_document_order() {
    let root = parse("<a><b/>middle<c><d>deep</d></c>end</a>").unwrap();
    let names: Vec<&str> = root.children.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["b", "#text", "c", "#text"]);
    assert_eq!(root.children[1].text, "middle");
    assert_eq!(root.children[3].text, "end");
    assert_eq!(root.children[2].children[0].children[0].text, "deep");
}

#[test]
fn test_attributes_keep_order_and_duplicates() {
    let root = parse("<memberdef kind=\"function\" id='m1' kind=\"shadowed\"/>").unwrap();
    assert_eq!(root.attributes.len(), 3);
    assert_eq!(root.attributes[0].value, "function");
    assert_eq!(root.attributes[2].value, "shadowed");
    // First match wins on lookup
    assert_eq!(root.attr("kind"), Some("function"));
    assert_eq!(root.attr("id"), Some("m1"));
}

#[test]
fn test_attribute_values_are_entity_decoded() {
    let root = parse("<ref refid=\"a&amp;b\"/>").unwrap();
    assert_eq!(root.attr("refid"), Some("a&b"));
}

#[test]
fn test_mismatched_tags_fail_instead_of_misnesting() {
    let err = parse("<a><b></a></b>").unwrap_err();
    match err {
        ParseError::TagMismatch {
            expected, found, ..
        } => {
            assert_eq!(expected, "b");
            assert_eq!(found, "a");
        }
        other => panic!("expected TagMismatch, got {other:?}"),
    }
}

#[test]
fn test_unclosed_tag_is_unexpected_eof() {
    assert!(matches!(
        parse("<doxygen><compounddef>"),
        Err(ParseError::UnexpectedEof { .. })
    ));
    // Same for an unterminated comment and an unterminated CDATA section
    assert!(matches!(
        parse("<a><!-- never closed</a>"),
        Err(ParseError::UnexpectedEof { .. })
    ));
    assert!(matches!(
        parse("<a><![CDATA[never closed</a>"),
        Err(ParseError::UnexpectedEof { .. })
    ));
}

#[test]
fn test_errors_carry_byte_offsets() {
    let err = parse("<abc><def></wrong></abc>").unwrap_err();
    match err {
        ParseError::TagMismatch { offset, .. } => assert_eq!(offset, 10),
        other => panic!("expected TagMismatch, got {other:?}"),
    }
}

#[test]
fn test_comments_never_appear_in_tree() {
    let root = parse("<!-- leading --><a><!-- inner --><b/><!-- trailing --></a>").unwrap();
    assert_eq!(root.name, "a");
    assert_eq!(root.children.len(), 1);
    assert_eq!(root.children[0].name, "b");
}

#[test]
fn test_cdata_becomes_undecoded_text_child() {
    let root = parse("<codeline>before<![CDATA[a &lt; b]]>after</codeline>").unwrap();
    // CDATA flushes the pending buffer, so three text children result
    assert_eq!(root.children.len(), 3);
    assert_eq!(root.children[0].text, "before");
    assert_eq!(root.children[1].text, "a &lt; b");
    assert_eq!(root.children[2].text, "after");
}

#[test]
fn test_prolog_doctype_and_whitespace() {
    let input = "\n  <?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
                 <!DOCTYPE doxygen SYSTEM \"compound.dtd\">\n\
                 <doxygen version=\"1.9.8\"></doxygen>";
    let root = parse(input).unwrap();
    assert_eq!(root.name, "doxygen");
    assert_eq!(root.attr("version"), Some("1.9.8"));
}

#[test]
fn test_text_node_invariant_holds() {
    let root = parse("<p>some text</p>").unwrap();
    let text = &root.children[0];
    assert!(text.is_text());
    assert!(text.attributes.is_empty());
    assert!(text.children.is_empty());
}

#[test]
fn test_missing_close_angle_is_expected_token() {
    assert!(matches!(
        parse("<a></a junk"),
        Err(ParseError::ExpectedToken { .. })
    ));
}
