//! Markdown/MDX rendering of the parsed document tree
//!
//! The renderer walks the compound/section/member/description structure of a
//! Doxygen XML tree and emits nested Markdown. It works in two mutually
//! recursive modes: block mode for structural elements, inline mode for the
//! markup inside a paragraph. Every tag renders *something*: anything the
//! dispatch does not recognize falls through to a generic `<div>` wrapper
//! that preserves the descendant text, so rendering is total and never fails
//! on a well-formed tree.

use std::fmt::Write;

use crate::document::{flatten_text, Node};

/// Options for Markdown export.
pub struct MarkdownOptions {
    /// Added to every structural heading level before clamping to 1..=6.
    /// May be negative.
    pub heading_offset: i32,
}

impl Default for MarkdownOptions {
    fn default() -> Self {
        Self { heading_offset: 0 }
    }
}

/// Inline-mode dispatch set. Everything else is `Other` and takes the
/// generic wrapper path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum InlineTag {
    Text,
    Bold,
    Emphasis,
    ComputerOutput,
    Ref,
    ItemizedList,
    OrderedList,
    Table,
    ProgramListing,
    Para,
    Other,
}

impl InlineTag {
    fn from_name(name: &str) -> Self {
        match name {
            "#text" => InlineTag::Text,
            "bold" => InlineTag::Bold,
            "emphasis" => InlineTag::Emphasis,
            "computeroutput" => InlineTag::ComputerOutput,
            "ref" => InlineTag::Ref,
            "itemizedlist" => InlineTag::ItemizedList,
            "orderedlist" => InlineTag::OrderedList,
            "table" => InlineTag::Table,
            "programlisting" => InlineTag::ProgramListing,
            "para" => InlineTag::Para,
            _ => InlineTag::Other,
        }
    }
}

/// Render a whole parsed document with default options.
pub fn export_to_markdown(root: &Node) -> String {
    export_to_markdown_with_options(root, &MarkdownOptions::default())
}

/// Render a whole parsed document.
///
/// A `doxygen` root renders each `compounddef` child in document order,
/// separated by blank lines; a bare `compounddef` root renders directly;
/// any other root takes the generic wrapper path.
pub fn export_to_markdown_with_options(root: &Node, options: &MarkdownOptions) -> String {
    let mut output = String::new();
    match root.name.as_str() {
        "doxygen" => {
            for compound in root.children_named("compounddef") {
                write_compound(&mut output, compound, options);
                output.push('\n');
            }
        }
        "compounddef" => write_compound(&mut output, root, options),
        _ => output.push_str(&render_unknown(root)),
    }
    output
}

/// Compound = class/file/namespace page: title, descriptions, then one
/// subsection per `sectiondef` with its members.
fn write_compound(output: &mut String, compound: &Node, options: &MarkdownOptions) {
    let name = compound
        .child("compoundname")
        .map(flatten_text)
        .unwrap_or_else(|| "Unknown".to_string());
    let kind = compound.attr("kind").unwrap_or("compound");

    let _ = writeln!(output, "{} {} ({})\n", heading(1, options.heading_offset), name, kind);

    if let Some(brief) = compound.child("briefdescription") {
        write_description(output, brief);
    }
    if let Some(detailed) = compound.child("detaileddescription") {
        write_description(output, detailed);
    }

    for section in compound.children_named("sectiondef") {
        let title = section.attr("kind").unwrap_or("Members");
        let _ = writeln!(output, "\n{} {}\n", heading(2, options.heading_offset), title);
        for member in section.children_named("memberdef") {
            write_member(output, member, 3, options);
        }
    }
}

/// Member heading uses the full signature (`definition` + `argsstring`)
/// when a definition exists, falling back to the bare name.
fn write_member(output: &mut String, member: &Node, level: i32, options: &MarkdownOptions) {
    let name = member
        .child("name")
        .map(flatten_text)
        .unwrap_or_else(|| "member".to_string());
    let definition = member.child("definition").map(flatten_text);
    let args = member
        .child("argsstring")
        .map(flatten_text)
        .unwrap_or_default();
    let signature = match definition {
        Some(def) => format!("{def}{args}"),
        None => name,
    };

    let _ = writeln!(
        output,
        "{} {}\n",
        heading(level, options.heading_offset),
        signature
    );

    if let Some(brief) = member.child("briefdescription") {
        write_description(output, brief);
    }
    if let Some(detailed) = member.child("detaileddescription") {
        write_description(output, detailed);
    }
}

/// Block-mode walk of a description: paragraphs, stray text runs, and a
/// generic wrapper for anything else, each followed by a blank line.
fn write_description(output: &mut String, description: &Node) {
    for child in &description.children {
        if child.name == "para" {
            output.push_str(&render_para(child));
            output.push_str("\n\n");
        } else if child.is_text() {
            if !child.text.is_empty() {
                output.push_str(&child.text);
                output.push_str("\n\n");
            }
        } else {
            output.push_str(&render_unknown(child));
            output.push_str("\n\n");
        }
    }
}

fn render_para(node: &Node) -> String {
    let mut out = String::new();
    for child in &node.children {
        out.push_str(&render_inline(child));
    }
    out
}

/// Inline-mode dispatch for content inside a paragraph.
fn render_inline(node: &Node) -> String {
    match InlineTag::from_name(&node.name) {
        InlineTag::Text => node.text.clone(),
        // Text-level wrappers flatten their content: nested markup is
        // stripped rather than rendered.
        InlineTag::Bold => format!("**{}**", flatten_text(node)),
        InlineTag::Emphasis => format!("*{}*", flatten_text(node)),
        InlineTag::ComputerOutput => format!("`{}`", flatten_text(node)),
        InlineTag::Ref => {
            let label = flatten_text(node);
            let target = node.attr("refid").unwrap_or(label.as_str());
            format!("[{label}](#{target})")
        }
        InlineTag::ItemizedList => format!("\n{}\n", render_list(node, "-")),
        InlineTag::OrderedList => format!("\n{}\n", render_list(node, "1.")),
        InlineTag::Table => format!("\n{}\n", render_table(node)),
        InlineTag::ProgramListing => format!("\n{}\n", render_code(node)),
        InlineTag::Para => render_para(node),
        InlineTag::Other => render_unknown(node),
    }
}

/// One line per `listitem`; other children of the list are ignored.
fn render_list(node: &Node, bullet: &str) -> String {
    let mut out = String::new();
    for item in node.children_named("listitem") {
        out.push_str(bullet);
        out.push(' ');
        for child in &item.children {
            if child.name == "para" {
                out.push_str(&render_para(child));
            } else {
                out.push_str(&render_inline(child));
            }
        }
        out.push('\n');
    }
    out
}

/// HTML table with the first retained row as the header row. Rows without
/// any `entry` cells are dropped; a table with no rows renders as nothing.
fn render_table(node: &Node) -> String {
    let mut rows: Vec<Vec<String>> = Vec::new();
    for row in node.children_named("row") {
        let cells: Vec<String> = row
            .children_named("entry")
            .map(|entry| entry.children.iter().map(render_inline).collect())
            .collect();
        if !cells.is_empty() {
            rows.push(cells);
        }
    }
    if rows.is_empty() {
        return String::new();
    }

    let mut out = String::from("<table class=\"doxygen-table\">\n");
    for (index, cells) in rows.iter().enumerate() {
        out.push_str("<tr>");
        let (open, close) = if index == 0 {
            ("<th>", "</th>")
        } else {
            ("<td>", "</td>")
        };
        for cell in cells {
            out.push_str(open);
            out.push_str(cell);
            out.push_str(close);
        }
        out.push_str("</tr>\n");
    }
    out.push_str("</table>\n");
    out
}

/// Fenced code block, one line per `codeline`. Doxygen does not record the
/// source language in the listing, so the fence label is fixed.
fn render_code(node: &Node) -> String {
    let mut out = String::from("```cpp\n");
    for line in node.children_named("codeline") {
        for child in &line.children {
            out.push_str(&render_inline(child));
        }
        out.push('\n');
    }
    out.push_str("```\n");
    out
}

/// Universal fallback: an unrecognized tag becomes a `<div>` whose class is
/// derived from the tag name, with its children rendered inline. Unknown
/// tags are never errors and never lose their text content.
fn render_unknown(node: &Node) -> String {
    let mut out = format!("<div class=\"doxygen-{}\">", node.name);
    for child in &node.children {
        out.push_str(&render_inline(child));
    }
    out.push_str("</div>");
    out
}

/// `#` run for a structural heading. Levels are assigned by caller context
/// (compound 1, section 2, member 3) and clamped to Markdown's 1..=6 after
/// the configured offset is applied.
fn heading(level: i32, offset: i32) -> String {
    let clamped = level.saturating_add(offset).clamp(1, 6);
    "#".repeat(clamped as usize)
}
