//! HTML text extraction helpers
//!
//! The source blog marks recipes up as formatted prose rather than structured
//! data: titles carry inline markup and a "Category: Name – Subtitle" prefix
//! convention, and ingredient lists are a single paragraph with `<br>`
//! separated lines. These helpers flatten that markup into plain text.

use scraper::{ElementRef, Node};

/// Collapses every run of whitespace to a single space and trims the ends
pub fn collapse_whitespace(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Returns all descendant text of an element as collapsed plain text
pub fn element_text(element: ElementRef) -> String {
    collapse_whitespace(&element.text().collect::<String>())
}

/// Splits an element's content into plain-text lines at `<br>` elements
///
/// `<br>` tags are treated as line separators at any nesting depth; text in
/// other inline elements is flattened into the surrounding line. Lines that
/// are empty after whitespace collapsing are dropped.
pub fn split_at_breaks(element: ElementRef) -> Vec<String> {
    let mut lines = Vec::new();
    let mut buf = String::new();

    // Depth-first walk in document order
    let mut stack: Vec<_> = element.children().rev().collect();
    while let Some(node) = stack.pop() {
        match node.value() {
            Node::Text(text) => buf.push_str(text),
            Node::Element(el) if el.name() == "br" => flush_line(&mut buf, &mut lines),
            Node::Element(_) => stack.extend(node.children().rev()),
            _ => {}
        }
    }
    flush_line(&mut buf, &mut lines);

    lines
}

fn flush_line(buf: &mut String, lines: &mut Vec<String>) {
    let line = collapse_whitespace(buf);
    buf.clear();
    if !line.is_empty() {
        lines.push(line);
    }
}

/// Keeps only the final segment of a conventional title
///
/// The site titles posts as "Category: Name – Subtitle"; the recipe name is
/// whatever follows the last colon and the last en-dash (U+2013).
pub fn final_title_segment(title: &str) -> String {
    let after_colon = title.rsplit(':').next().unwrap_or(title);
    let after_dash = after_colon.rsplit('\u{2013}').next().unwrap_or(after_colon);
    after_dash.trim().to_string()
}
