//! Static package parts
//!
//! Styles, numbering definitions, fonts, theme, the package relationships and
//! the extended properties never depend on the content. They are compiled
//! into the crate and written byte for byte.

/// A part copied into every package unchanged
#[derive(Debug, Clone, Copy)]
pub struct StaticPart {
    /// Path inside the archive
    pub path: &'static str,
    /// Content type override, `None` for parts covered by a default
    pub content_type: Option<&'static str>,
    pub bytes: &'static [u8],
}

pub const STYLES: StaticPart = StaticPart {
    path: "word/styles.xml",
    content_type: Some("application/vnd.openxmlformats-officedocument.wordprocessingml.styles+xml"),
    bytes: include_bytes!("templates/styles.xml"),
};

/// Numbering ids 1 (decimal), 2 (bullet) and 3 (none), nine levels each
pub const NUMBERING: StaticPart = StaticPart {
    path: "word/numbering.xml",
    content_type: Some(
        "application/vnd.openxmlformats-officedocument.wordprocessingml.numbering+xml",
    ),
    bytes: include_bytes!("templates/numbering.xml"),
};

pub const FONT_TABLE: StaticPart = StaticPart {
    path: "word/fontTable.xml",
    content_type: Some(
        "application/vnd.openxmlformats-officedocument.wordprocessingml.fontTable+xml",
    ),
    bytes: include_bytes!("templates/fontTable.xml"),
};

pub const THEME: StaticPart = StaticPart {
    path: "word/theme/theme1.xml",
    content_type: Some("application/vnd.openxmlformats-officedocument.theme+xml"),
    bytes: include_bytes!("templates/theme1.xml"),
};

pub const PACKAGE_RELS: StaticPart = StaticPart {
    path: "_rels/.rels",
    content_type: None,
    bytes: include_bytes!("templates/rels.xml"),
};

pub const APP_PROPERTIES: StaticPart = StaticPart {
    path: "docProps/app.xml",
    content_type: Some("application/vnd.openxmlformats-officedocument.extended-properties+xml"),
    bytes: include_bytes!("templates/app.xml"),
};

/// Every static part, in archive order
pub fn static_parts() -> [StaticPart; 6] {
    [
        PACKAGE_RELS,
        APP_PROPERTIES,
        STYLES,
        NUMBERING,
        FONT_TABLE,
        THEME,
    ]
}
