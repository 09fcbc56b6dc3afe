//! Structured XML writer
//!
//! Every part of the package is produced through [`XmlBuilder`]. Text nodes
//! and attribute values are escaped on the way in, and characters XML 1.0
//! does not allow are dropped, so caller-provided strings (paragraph text,
//! URLs, colors, style ids) can never break the markup. The only way to splice pre-rendered content is a [`Fragment`],
//! which can only be obtained from a finished builder.
//!
//! ```
//! use zdocx_ooxml::markup::XmlBuilder;
//!
//! let mut xml = XmlBuilder::new();
//! xml.start("w:p").open();
//! xml.start("w:r").open();
//! xml.text_element("w:t", "a < b", false);
//! xml.end();
//! xml.end();
//!
//! assert_eq!(
//!     xml.finish().as_str(),
//!     "<w:p><w:r><w:t>a &lt; b</w:t></w:r></w:p>"
//! );
//! ```

use std::fmt::{self, Display, Write as _};

use std::borrow::Cow;

use quick_xml::escape::escape;

/// XML declaration used by every generated part
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#;

/// XML 1.0 `Char` production
fn is_xml_char(c: char) -> bool {
    matches!(c,
        '\t' | '\n' | '\r'
        | '\u{20}'..='\u{D7FF}'
        | '\u{E000}'..='\u{FFFD}'
        | '\u{10000}'..='\u{10FFFF}')
}

/// Drop characters that cannot appear in an XML document, then escape
fn escape_xml(raw: &str) -> Cow<'_, str> {
    if raw.chars().all(is_xml_char) {
        escape(raw)
    } else {
        let cleaned: String = raw.chars().filter(|c| is_xml_char(*c)).collect();
        Cow::Owned(escape(cleaned.as_str()).into_owned())
    }
}

/// Rendered, well-formed markup
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn into_string(self) -> String {
        self.0
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.0.into_bytes()
    }
}

impl Display for Fragment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Incremental XML writer with an element stack
#[derive(Debug, Default)]
pub struct XmlBuilder {
    buf: String,
    open: Vec<&'static str>,
}

impl XmlBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder for a standalone part, starting with the XML declaration
    pub fn document() -> Self {
        let mut builder = Self::new();
        builder.buf.push_str(XML_DECLARATION);
        builder
    }

    /// Begin an element; finish it with [`ElementBuilder::open`] or
    /// [`ElementBuilder::empty`]
    #[must_use = "an element must be opened or closed as empty"]
    pub fn start(&mut self, name: &'static str) -> ElementBuilder<'_> {
        self.buf.push('<');
        self.buf.push_str(name);
        ElementBuilder {
            builder: self,
            name,
        }
    }

    /// Shorthand for an attribute-less empty element
    pub fn empty(&mut self, name: &'static str) {
        self.start(name).empty();
    }

    /// Shorthand for an empty element with a single `w:val`
    pub fn val(&mut self, name: &'static str, value: impl Display) {
        self.start(name).attr("w:val", value).empty();
    }

    /// Close the innermost open element
    pub fn end(&mut self) {
        if let Some(name) = self.open.pop() {
            self.buf.push_str("</");
            self.buf.push_str(name);
            self.buf.push('>');
        }
    }

    /// Escaped character data
    pub fn text(&mut self, text: &str) {
        self.buf.push_str(&escape_xml(text));
    }

    /// `<name>text</name>`, with `xml:space="preserve"` when asked
    pub fn text_element(&mut self, name: &'static str, text: &str, preserve: bool) {
        let element = self.start(name);
        let element = if preserve {
            element.attr("xml:space", "preserve")
        } else {
            element
        };
        element.open();
        self.text(text);
        self.end();
    }

    /// Splice previously rendered markup
    pub fn append(&mut self, fragment: &Fragment) {
        self.buf.push_str(&fragment.0);
    }

    /// Close any element still open and return the markup
    pub fn finish(mut self) -> Fragment {
        while !self.open.is_empty() {
            self.end();
        }
        Fragment(self.buf)
    }
}

/// An element whose start tag is still being written
pub struct ElementBuilder<'a> {
    builder: &'a mut XmlBuilder,
    name: &'static str,
}

impl<'a> ElementBuilder<'a> {
    /// Append an attribute; the value is escaped
    pub fn attr(self, key: &str, value: impl Display) -> Self {
        let buf = &mut self.builder.buf;
        buf.push(' ');
        buf.push_str(key);
        buf.push_str("=\"");
        let mut raw = String::new();
        // Writing into a String cannot fail
        let _ = write!(raw, "{}", value);
        buf.push_str(&escape_xml(&raw));
        buf.push('"');
        self
    }

    /// Append an attribute only when a value is present
    pub fn attr_opt<V: Display>(self, key: &str, value: Option<V>) -> Self {
        match value {
            Some(value) => self.attr(key, value),
            None => self,
        }
    }

    /// Write `>` and push the element on the stack
    pub fn open(self) {
        self.builder.buf.push('>');
        self.builder.open.push(self.name);
    }

    /// Write `/>`
    pub fn empty(self) {
        self.builder.buf.push_str("/>");
    }
}
