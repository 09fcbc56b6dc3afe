//! Style value records
//!
//! All fields are optional in the sense that an unset value means "use the
//! default or inherit from the container". Lengths are expressed in document
//! units (twentieths of a point), font sizes in half-points and border widths
//! in eighths of a point, as the word-processing format expects.

use serde::{Deserialize, Serialize};

/// Four optional side lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: Option<i32>,
    pub left: Option<i32>,
    pub bottom: Option<i32>,
    pub right: Option<i32>,
}

impl Margins {
    /// All four sides set to the same value
    pub fn uniform(value: i32) -> Self {
        Self {
            top: Some(value),
            left: Some(value),
            bottom: Some(value),
            right: Some(value),
        }
    }

    /// True when no side is set
    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.left.is_none() && self.bottom.is_none() && self.right.is_none()
    }

    /// Fill every unset side from `fallback`, keeping the sides already set
    pub fn or(&self, fallback: &Margins) -> Margins {
        Margins {
            top: self.top.or(fallback.top),
            left: self.left.or(fallback.left),
            bottom: self.bottom.or(fallback.bottom),
            right: self.right.or(fallback.right),
        }
    }

    /// Fill every unset side with `value`
    pub fn or_value(&self, value: i32) -> Margins {
        self.or(&Margins::uniform(value))
    }
}

/// Line style of a border
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BorderKind {
    #[default]
    Single,
    Dotted,
    Dashed,
    DashSmallGap,
    None,
}

impl BorderKind {
    /// Value of the `w:val` attribute
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Single => "single",
            Self::Dotted => "dotted",
            Self::Dashed => "dashed",
            Self::DashSmallGap => "dashSmallGap",
            Self::None => "none",
        }
    }
}

/// A single border edge
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Border {
    /// Width in eighths of a point
    pub width: u32,
    /// Hex color without `#`; defaults to a light grey when unset
    pub color: Option<String>,
    pub kind: BorderKind,
}

impl Border {
    /// A single-line border of the given width and color
    pub fn single(width: u32, color: impl Into<String>) -> Self {
        Self {
            width,
            color: Some(color.into()),
            kind: BorderKind::Single,
        }
    }
}

/// Optional border per edge
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Borders {
    pub top: Option<Border>,
    pub left: Option<Border>,
    pub bottom: Option<Border>,
    pub right: Option<Border>,
}

impl Borders {
    /// The same border on all four edges
    pub fn all(border: Border) -> Self {
        Self {
            top: Some(border.clone()),
            left: Some(border.clone()),
            bottom: Some(border.clone()),
            right: Some(border),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.top.is_none() && self.left.is_none() && self.bottom.is_none() && self.right.is_none()
    }
}

/// Horizontal alignment of paragraphs, tables and floating images
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HorizontalAlign {
    Left,
    Center,
    Right,
}

impl HorizontalAlign {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Left => "left",
            Self::Center => "center",
            Self::Right => "right",
        }
    }
}

/// Paragraph-level style
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ParagraphStyle {
    /// Start the paragraph on a new page
    pub page_break_before: bool,
    pub align: Option<HorizontalAlign>,
    /// Top/bottom map to spacing before/after, left/right to indentation
    pub margins: Margins,
    pub borders: Borders,
    /// Shading fill color
    pub background: Option<String>,
    /// Text color inherited by runs that set none
    pub color: Option<String>,
    /// Font size inherited by runs that set none
    pub font_size: Option<u32>,
    /// Line height in 240ths of a line
    pub line_height: Option<u32>,
}

/// Run-level style
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TextStyle {
    pub bold: bool,
    pub italic: bool,
    pub suppress_line_numbers: bool,
    /// Keep leading and trailing whitespace
    pub space_preserve: bool,
    pub color: Option<String>,
    pub font_family: Option<String>,
    pub font_size: Option<u32>,
    pub border: Option<Border>,
}

/// Table cell style
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CellStyle {
    pub margins: Margins,
    /// Explicit borders; unset outer edges inherit the table's borders
    pub borders: Borders,
    pub background: Option<String>,
    pub color: Option<String>,
    pub font_size: Option<u32>,
    pub hide_mark: bool,
    pub width: Option<u32>,
}

/// Table-level style
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableStyle {
    /// Outer borders, applied to the cells on each outer edge
    pub borders: Borders,
    pub background: Option<String>,
    /// Defaults to centered
    pub align: Option<HorizontalAlign>,
    pub color: Option<String>,
    pub font_size: Option<u32>,
}
