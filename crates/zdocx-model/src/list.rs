//! Lists
//!
//! A list item holds a sequence of entries that are either paragraphs or
//! nested lists.

use serde::{Deserialize, Serialize};

use crate::paragraph::Paragraph;
use crate::style::ParagraphStyle;

/// Numbering kind of a list
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ListKind {
    Decimal,
    #[default]
    Bullet,
    None,
}

impl ListKind {
    /// Numbering definition id in `word/numbering.xml`
    pub fn numbering_id(&self) -> u32 {
        match self {
            Self::Decimal => 1,
            Self::Bullet => 2,
            Self::None => 3,
        }
    }
}

/// An ordered sequence of list items
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct List {
    pub items: Vec<ListItem>,
    pub kind: ListKind,
    /// Color and font size cascade into the list's paragraphs
    pub style: ParagraphStyle,
}

impl List {
    pub fn new(kind: ListKind, items: Vec<ListItem>) -> Self {
        Self {
            items,
            kind,
            ..Default::default()
        }
    }
}

/// A single list item
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ListItem {
    pub entries: Vec<ListEntry>,
}

impl ListItem {
    pub fn new(entries: Vec<ListEntry>) -> Self {
        Self { entries }
    }

    /// Item made of one paragraph
    pub fn paragraph(paragraph: Paragraph) -> Self {
        Self::new(vec![ListEntry::Paragraph(paragraph)])
    }
}

/// Content allowed inside a list item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ListEntry {
    Paragraph(Paragraph),
    List(List),
}

impl From<Paragraph> for ListEntry {
    fn from(paragraph: Paragraph) -> Self {
        Self::Paragraph(paragraph)
    }
}

impl From<List> for ListEntry {
    fn from(list: List) -> Self {
        Self::List(list)
    }
}
