//! Paragraphs

use serde::{Deserialize, Serialize};

use crate::list::ListKind;
use crate::style::ParagraphStyle;
use crate::text::Text;

/// A paragraph of text runs
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Paragraph {
    pub texts: Vec<Text>,
    /// Numbering reference; set by the list renderer or by the caller
    pub list: Option<ListPlacement>,
    /// Paragraph style id, `Normal` when unset
    pub style_class: Option<String>,
    pub style: ParagraphStyle,
}

impl Paragraph {
    pub fn new(texts: Vec<Text>) -> Self {
        Self {
            texts,
            ..Default::default()
        }
    }

    /// Paragraph holding a single plain text run
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(vec![Text::new(text)])
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.style_class = Some(class.into());
        self
    }

    pub fn with_style(mut self, style: ParagraphStyle) -> Self {
        self.style = style;
        self
    }
}

/// Position of a paragraph inside a numbered list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListPlacement {
    /// Nesting level, 0 for top level
    pub level: u32,
    pub kind: ListKind,
}
