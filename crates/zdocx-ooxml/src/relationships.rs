//! Relationship parts
//!
//! OOXML uses relationship files (`_rels/*.rels`) to map ids to targets.
//! Ids here are chosen by the caller (see [`crate::registry`]) rather than
//! numbered sequentially, so parts can reference them before the file is
//! written.
//!
//! # Example
//!
//! ```
//! use zdocx_ooxml::relationships::Relationships;
//!
//! let mut rels = Relationships::new();
//! rels.add("rIdStyles", Relationships::TYPE_STYLES, "styles.xml").unwrap();
//! rels.add_external("rIdLink0", Relationships::TYPE_HYPERLINK, "https://example.com/?a=1&b=2")
//!     .unwrap();
//!
//! let xml = rels.to_xml();
//! assert!(xml.as_str().contains("a=1&amp;b=2"));
//! ```

use std::collections::HashMap;

use crate::error::{DocxError, Result};
use crate::markup::{Fragment, XmlBuilder};

/// OOXML namespace for relationships
pub const RELATIONSHIPS_NS: &str = "http://schemas.openxmlformats.org/package/2006/relationships";

/// Common relationship type URIs
impl Relationships {
    /// Hyperlink relationship type
    pub const TYPE_HYPERLINK: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/hyperlink";
    /// Image relationship type
    pub const TYPE_IMAGE: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/image";
    /// Styles relationship type
    pub const TYPE_STYLES: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles";
    /// Numbering relationship type
    pub const TYPE_NUMBERING: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/numbering";
    /// Font table relationship type
    pub const TYPE_FONT_TABLE: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/fontTable";
    /// Settings relationship type
    pub const TYPE_SETTINGS: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/settings";
    /// Theme relationship type
    pub const TYPE_THEME: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/theme";
    /// Header relationship type
    pub const TYPE_HEADER: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/header";
    /// Footer relationship type
    pub const TYPE_FOOTER: &'static str =
        "http://schemas.openxmlformats.org/officeDocument/2006/relationships/footer";
}

/// Relationships of a single part
///
/// Maintains insertion order for deterministic XML serialization.
#[derive(Debug, Clone, Default)]
pub struct Relationships {
    /// Ordered list of relationship IDs (maintains insertion order)
    order: Vec<String>,
    /// Map of relationship ID to target (for fast lookups)
    map: HashMap<String, RelationshipTarget>,
}

/// A relationship target with its type and mode
#[derive(Debug, Clone)]
pub struct RelationshipTarget {
    /// The target URL or path
    pub target: String,
    /// The relationship type URI (e.g., hyperlink, image, styles)
    pub rel_type: String,
    /// Target mode: "External" for URLs, None for internal paths
    pub target_mode: Option<String>,
}

impl Relationships {
    /// Create an empty relationships map
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an internal relationship under an explicit id
    pub fn add(&mut self, id: &str, rel_type: &str, target: &str) -> Result<()> {
        self.insert(id, rel_type, target, None)
    }

    /// Add an external relationship (`TargetMode="External"`)
    pub fn add_external(&mut self, id: &str, rel_type: &str, target: &str) -> Result<()> {
        self.insert(id, rel_type, target, Some("External".to_string()))
    }

    fn insert(
        &mut self,
        id: &str,
        rel_type: &str,
        target: &str,
        target_mode: Option<String>,
    ) -> Result<()> {
        if self.map.contains_key(id) {
            return Err(DocxError::Validation(format!(
                "duplicate relationship id {}",
                id
            )));
        }

        self.order.push(id.to_string());
        self.map.insert(
            id.to_string(),
            RelationshipTarget {
                target: target.to_string(),
                rel_type: rel_type.to_string(),
                target_mode,
            },
        );
        Ok(())
    }

    /// Serialize relationships to OOXML format
    pub fn to_xml(&self) -> Fragment {
        let mut xml = XmlBuilder::document();
        xml.start("Relationships")
            .attr("xmlns", RELATIONSHIPS_NS)
            .open();

        // Iterate in insertion order for deterministic output
        for (id, rel) in self.iter() {
            xml.start("Relationship")
                .attr("Id", id)
                .attr("Type", &rel.rel_type)
                .attr("Target", &rel.target)
                .attr_opt("TargetMode", rel.target_mode.as_deref())
                .empty();
        }

        xml.end();
        xml.finish()
    }

    /// Iterate over relationships in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &RelationshipTarget)> {
        self.order
            .iter()
            .filter_map(|id| self.map.get(id).map(|rel| (id.as_str(), rel)))
    }
}
