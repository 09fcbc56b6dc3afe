//! # zdocx-ooxml
//!
//! DOCX (Office Open XML) package generation for zdocx.
//!
//! This crate provides functionality to:
//! - Render paragraphs, lists, tables, images and callouts to WordprocessingML
//! - Track images and hyperlinks with collision-free relationship ids
//! - Assemble headers, footers, settings and metadata into a DOCX archive
//!
//! ## Example: Writing a Document
//!
//! ```no_run
//! use zdocx_model::{List, ListItem, ListKind, Paragraph};
//! use zdocx_ooxml::Document;
//!
//! let mut doc = Document::new();
//! doc.set_footer(vec![Paragraph::text("ACME Corp.")]);
//! doc.set_paragraph(&Paragraph::text("Release notes").with_class("h1"))?;
//! doc.set_list(&List::new(
//!     ListKind::Decimal,
//!     vec![
//!         ListItem::paragraph(Paragraph::text("Faster startup")),
//!         ListItem::paragraph(Paragraph::text("Smaller archives")),
//!     ],
//! ))?;
//! doc.save("release-notes.docx")?;
//! # Ok::<(), zdocx_ooxml::DocxError>(())
//! ```

pub mod config;
pub mod document;
pub mod error;
pub mod image;
pub mod markup;
pub mod package;
pub mod parts;
pub mod registry;
pub mod relationships;
pub mod render;
pub mod style;
pub mod template;
pub mod units;

#[cfg(test)]
mod test_utils;

pub use config::DocumentConfig;
pub use document::Document;
pub use error::{DocxError, Result, ResultExt, StructuralError};
pub use self::image::ImageKind;
pub use markup::{Fragment, XmlBuilder};
pub use package::Package;
pub use registry::{Placement, Registry};
pub use relationships::Relationships;
pub use render::RecursionBudget;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
