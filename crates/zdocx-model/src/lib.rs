//! zdocx-model - content model definitions
//!
//! This crate provides the value types callers assemble into a document:
//! paragraphs and text runs, lists, tables, images, sections and callouts,
//! plus the style records they carry. Every optional style field means
//! "unset, inherit the default"; resolution happens when the content is
//! rendered, never here.

pub mod alert;
pub mod image;
pub mod list;
pub mod paragraph;
pub mod section;
pub mod style;
pub mod table;
pub mod text;

pub use alert::Alert;
pub use image::{HorizontalAnchor, Image, ImageDisplay, VerticalAlign, VerticalAnchor};
pub use list::{List, ListEntry, ListItem, ListKind};
pub use paragraph::{ListPlacement, Paragraph};
pub use section::{Orientation, Section, SectionKind};
pub use style::{
    Border, BorderKind, Borders, CellStyle, HorizontalAlign, Margins, ParagraphStyle, TableStyle,
    TextStyle,
};
pub use table::{Block, Table, TableCell, TableLayout, TableRow};
pub use text::{Field, Link, Text};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
