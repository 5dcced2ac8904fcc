//! HTML serialization of a [`Markup`] tree.
//!
//! Text content escapes `&`, `<` and `>`; attribute values additionally
//! escape `"`. Presence-only attributes are written as the bare name.

use std::fmt::Write;

use super::node::{ElementData, NodeData, NodeId};
use super::tree::Markup;

/// Elements that never have content and are written without a closing tag.
const VOID_ELEMENTS: &[&str] = &[
    "area", "base", "br", "col", "embed", "hr", "img", "input", "link", "meta", "source",
    "track", "wbr",
];

/// How void elements such as `<input>` are terminated.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum VoidStyle {
    /// `<input type="radio" />`
    #[default]
    SelfClosing,
    /// `<input type="radio">`
    Html,
}

/// Options controlling serialization.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SerializeOptions {
    /// Prefix the output with `<!DOCTYPE html>`.
    pub doctype: bool,
    /// Void element termination.
    pub void_style: VoidStyle,
}

impl SerializeOptions {
    /// Create default options.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether a doctype is emitted (builder).
    pub fn with_doctype(mut self, doctype: bool) -> Self {
        self.doctype = doctype;
        self
    }

    /// Set the void element style (builder).
    pub fn with_void_style(mut self, void_style: VoidStyle) -> Self {
        self.void_style = void_style;
        self
    }
}

impl Markup {
    /// Serialize the whole document with default options.
    pub fn to_html(&self) -> String {
        self.to_html_with(&SerializeOptions::default())
    }

    /// Serialize the whole document.
    pub fn to_html_with(&self, options: &SerializeOptions) -> String {
        let mut out = String::new();
        if options.doctype {
            out.push_str("<!DOCTYPE html>");
        }
        self.write_node(&mut out, self.root(), options);
        out
    }

    /// Serialize a single node and its subtree. Unknown ids yield an empty string.
    pub fn node_to_html(&self, id: NodeId, options: &SerializeOptions) -> String {
        let mut out = String::new();
        self.write_node(&mut out, id, options);
        out
    }

    fn write_node(&self, out: &mut String, id: NodeId, options: &SerializeOptions) {
        match self.get(id) {
            None => {}
            Some(NodeData::Document) => {
                for &child in self.children(id) {
                    self.write_node(out, child, options);
                }
            }
            Some(NodeData::Text(text)) => escape_text(out, text),
            Some(NodeData::Element(element)) => {
                write_start_tag(out, element);
                if is_void(&element.tag) {
                    match options.void_style {
                        VoidStyle::SelfClosing => out.push_str(" />"),
                        VoidStyle::Html => out.push('>'),
                    }
                    return;
                }
                out.push('>');
                for &child in self.children(id) {
                    self.write_node(out, child, options);
                }
                // Writing to a String cannot fail.
                let _ = write!(out, "</{}>", element.tag);
            }
        }
    }
}

fn write_start_tag(out: &mut String, element: &ElementData) {
    out.push('<');
    out.push_str(&element.tag);
    for attr in &element.attributes {
        out.push(' ');
        out.push_str(&attr.name);
        if let Some(value) = &attr.value {
            out.push_str("=\"");
            escape_attribute(out, value);
            out.push('"');
        }
    }
}

/// Whether `tag` is an HTML void element.
pub fn is_void(tag: &str) -> bool {
    VOID_ELEMENTS.iter().any(|v| v.eq_ignore_ascii_case(tag))
}

fn escape_text(out: &mut String, text: &str) {
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
}

fn escape_attribute(out: &mut String, value: &str) {
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
}
