//! Embedded images
//!
//! Sizes are in document units. When only one of width and height is given,
//! the other is derived from the decoded pixel aspect ratio at render time.

use serde::{Deserialize, Serialize};

use crate::style::{HorizontalAlign, Margins};

/// How an image sits in the text flow
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageDisplay {
    #[default]
    Inline,
    Float,
}

/// Horizontal frame a floating image is positioned against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum HorizontalAnchor {
    Character,
    #[default]
    Column,
    InsideMargin,
    LeftMargin,
    Margin,
    OutsideMargin,
    Page,
    RightMargin,
}

impl HorizontalAnchor {
    /// Value of `wp:positionH/@relativeFrom`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Character => "character",
            Self::Column => "column",
            Self::InsideMargin => "insideMargin",
            Self::LeftMargin => "leftMargin",
            Self::Margin => "margin",
            Self::OutsideMargin => "outsideMargin",
            Self::Page => "page",
            Self::RightMargin => "rightMargin",
        }
    }
}

/// Vertical frame a floating image is positioned against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum VerticalAnchor {
    BottomMargin,
    InsideMargin,
    Line,
    Margin,
    OutsideMargin,
    Page,
    #[default]
    Paragraph,
    TopMargin,
}

impl VerticalAnchor {
    /// Value of `wp:positionV/@relativeFrom`
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::BottomMargin => "bottomMargin",
            Self::InsideMargin => "insideMargin",
            Self::Line => "line",
            Self::Margin => "margin",
            Self::OutsideMargin => "outsideMargin",
            Self::Page => "page",
            Self::Paragraph => "paragraph",
            Self::TopMargin => "topMargin",
        }
    }
}

/// Vertical alignment of a floating image inside its anchor frame
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VerticalAlign {
    Top,
    Center,
    Bottom,
}

impl VerticalAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Top => "top",
            Self::Center => "center",
            Self::Bottom => "bottom",
        }
    }
}

/// An image to embed in the package
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Image {
    /// Original file name; the directory part is ignored
    pub file_name: String,
    /// Encoded PNG or JPEG bytes
    pub bytes: Vec<u8>,
    pub width: Option<i64>,
    pub height: Option<i64>,
    pub display: ImageDisplay,
    pub horizontal_anchor: HorizontalAnchor,
    pub vertical_anchor: VerticalAnchor,
    /// Alignment within the horizontal frame; offset 0 when unset
    pub horizontal_align: Option<HorizontalAlign>,
    /// Alignment within the vertical frame; offset 0 when unset
    pub vertical_align: Option<VerticalAlign>,
    pub z_index: u32,
    pub behind_text: bool,
    /// Background images are floated without text wrapping
    pub is_background: bool,
    /// Distance from surrounding text
    pub margins: Margins,
    /// Alternative text
    pub description: Option<String>,
}

impl Image {
    pub fn from_bytes(file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        Self {
            file_name: file_name.into(),
            bytes,
            ..Default::default()
        }
    }

    pub fn with_width(mut self, width: i64) -> Self {
        self.width = Some(width);
        self
    }

    pub fn with_height(mut self, height: i64) -> Self {
        self.height = Some(height);
        self
    }

    /// Float the image instead of placing it inline
    pub fn floating(mut self) -> Self {
        self.display = ImageDisplay::Float;
        self
    }

    pub fn is_floating(&self) -> bool {
        self.display == ImageDisplay::Float || self.is_background
    }
}
