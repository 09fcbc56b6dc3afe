//! Text runs
//!
//! A run carries literal text, an embedded image or a field, optionally
//! wrapped in a hyperlink.

use serde::{Deserialize, Serialize};

use crate::image::Image;
use crate::style::TextStyle;

/// A run of content inside a paragraph
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Text {
    /// Literal text; escaped when rendered
    pub text: String,
    /// Wrap the run in a hyperlink
    pub link: Option<Link>,
    /// Image drawn before the text, if any
    pub image: Option<Image>,
    /// Field drawn instead of literal text
    pub field: Option<Field>,
    /// Character style id
    pub style_class: Option<String>,
    pub style: TextStyle,
}

impl Text {
    /// Plain text run
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..Default::default()
        }
    }

    /// Run containing only an image
    pub fn image(image: Image) -> Self {
        Self {
            image: Some(image),
            ..Default::default()
        }
    }

    /// Hyperlinked text run
    pub fn link(text: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            link: Some(Link::new(url)),
            ..Default::default()
        }
    }

    /// Current page number field
    pub fn page_number() -> Self {
        Self {
            field: Some(Field::PageNumber),
            ..Default::default()
        }
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }

    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.style_class = Some(class.into());
        self
    }

    /// True when the run would render nothing
    pub fn is_empty(&self) -> bool {
        self.text.is_empty() && self.image.is_none() && self.field.is_none()
    }
}

/// External hyperlink target
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Link {
    pub url: String,
}

impl Link {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Computed fields
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Field {
    /// `PAGE`
    PageNumber,
}

impl Field {
    /// Field instruction text
    pub fn instruction(&self) -> &'static str {
        match self {
            Self::PageNumber => " PAGE ",
        }
    }
}
