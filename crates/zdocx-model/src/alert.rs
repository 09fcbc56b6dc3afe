//! Callout boxes

use serde::{Deserialize, Serialize};

use crate::paragraph::Paragraph;

/// A bordered callout holding paragraphs
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Alert {
    pub paragraphs: Vec<Paragraph>,
    /// Box width; defaults to the inner page width
    pub width: Option<u32>,
    /// Title run placed before the first paragraph, `Attention!` when unset
    pub title: Option<String>,
}

impl Alert {
    pub fn new(paragraphs: Vec<Paragraph>) -> Self {
        Self {
            paragraphs,
            ..Default::default()
        }
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }
}
