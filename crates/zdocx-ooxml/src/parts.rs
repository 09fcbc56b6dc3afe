//! Generated package parts
//!
//! Everything here depends on what the document ended up containing: which
//! header and footer slots are filled, which images and hyperlinks were
//! registered, and the document configuration.

use chrono::{DateTime, SecondsFormat, Utc};
use zdocx_model::{
    Block, CellStyle, HorizontalAlign, Margins, Paragraph, Table, TableCell, TableRow, Text,
};

use crate::config::DocumentConfig;
use crate::error::{Result, ResultExt};
use crate::markup::{Fragment, XmlBuilder};
use crate::registry::{Placement, Registry};
use crate::relationships::Relationships;
use crate::render::{self, RenderContext};
use crate::style::Inherited;
use crate::template;

pub const WORDPROCESSING_NS: &str = "http://schemas.openxmlformats.org/wordprocessingml/2006/main";
pub const OFFICE_RELATIONSHIPS_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";
pub const DRAWING_NS: &str =
    "http://schemas.openxmlformats.org/drawingml/2006/wordprocessingDrawing";
const CONTENT_TYPES_NS: &str = "http://schemas.openxmlformats.org/package/2006/content-types";

pub const CONTENT_TYPES_PART: &str = "[Content_Types].xml";
pub const SETTINGS_PART: &str = "word/settings.xml";
pub const CORE_PROPERTIES_PART: &str = "docProps/core.xml";

const MAIN_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.document.main+xml";
const HEADER_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.header+xml";
const FOOTER_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.footer+xml";
const SETTINGS_CONTENT_TYPE: &str =
    "application/vnd.openxmlformats-officedocument.wordprocessingml.settings+xml";
const CORE_CONTENT_TYPE: &str = "application/vnd.openxmlformats-package.core-properties+xml";
const RELS_CONTENT_TYPE: &str = "application/vnd.openxmlformats-package.relationships+xml";

/// Open the root element of a content part (`w:document`, `w:hdr`, `w:ftr`)
pub fn open_content_root(xml: &mut XmlBuilder, name: &'static str) {
    xml.start(name)
        .attr("xmlns:w", WORDPROCESSING_NS)
        .attr("xmlns:r", OFFICE_RELATIONSHIPS_NS)
        .attr("xmlns:wp", DRAWING_NS)
        .open();
}

/// `[Content_Types].xml`
///
/// `sections` lists the header and footer parts present in the package.
pub fn content_types(sections: &[Placement], registry: &Registry) -> Fragment {
    let mut xml = XmlBuilder::document();
    xml.start("Types").attr("xmlns", CONTENT_TYPES_NS).open();

    for (extension, content_type) in [
        ("xml", "application/xml"),
        ("rels", RELS_CONTENT_TYPE),
        ("png", "image/png"),
        ("jpeg", "image/jpeg"),
    ] {
        xml.start("Default")
            .attr("Extension", extension)
            .attr("ContentType", content_type)
            .empty();
    }

    let mut overrides: Vec<(String, &str)> = vec![
        (Placement::Body.part_name(), MAIN_CONTENT_TYPE),
        (CORE_PROPERTIES_PART.to_string(), CORE_CONTENT_TYPE),
        (SETTINGS_PART.to_string(), SETTINGS_CONTENT_TYPE),
    ];
    for part in template::static_parts() {
        if let Some(content_type) = part.content_type {
            overrides.push((part.path.to_string(), content_type));
        }
    }
    for placement in sections {
        let content_type = if placement.is_header() {
            HEADER_CONTENT_TYPE
        } else {
            FOOTER_CONTENT_TYPE
        };
        overrides.push((placement.part_name(), content_type));
    }
    for image in registry.images() {
        overrides.push((image.part_name(), image.kind.content_type()));
    }

    for (part, content_type) in overrides {
        xml.start("Override")
            .attr("PartName", format_args!("/{}", part))
            .attr("ContentType", content_type)
            .empty();
    }

    xml.end();
    xml.finish()
}

/// `word/settings.xml`
pub fn settings(language: &str) -> Fragment {
    const WORD_URI: &str = "http://schemas.microsoft.com/office/word";

    let mut xml = XmlBuilder::document();
    xml.start("w:settings").attr("xmlns:w", WORDPROCESSING_NS).open();
    xml.start("w:zoom").attr("w:percent", 100).empty();
    xml.val("w:defaultTabStop", 708);
    xml.val("w:autoHyphenation", "true");

    xml.start("w:compat").open();
    for (name, value) in [
        ("compatibilityMode", 15),
        ("overrideTableStyleFontSizeAndJustification", 1),
        ("enableOpenTypeFeatures", 1),
        ("doNotFlipMirrorIndents", 1),
    ] {
        xml.start("w:compatSetting")
            .attr("w:name", name)
            .attr("w:uri", WORD_URI)
            .attr("w:val", value)
            .empty();
    }
    xml.end();

    xml.start("w:themeFontLang")
        .attr("w:val", language)
        .attr("w:eastAsia", "")
        .attr("w:bidi", "")
        .empty();
    xml.end();
    xml.finish()
}

/// `docProps/core.xml`
pub fn core_properties(config: &DocumentConfig, created: DateTime<Utc>) -> Fragment {
    let timestamp = created.to_rfc3339_opts(SecondsFormat::Secs, true);

    let mut xml = XmlBuilder::document();
    xml.start("cp:coreProperties")
        .attr(
            "xmlns:cp",
            "http://schemas.openxmlformats.org/package/2006/metadata/core-properties",
        )
        .attr("xmlns:dc", "http://purl.org/dc/elements/1.1/")
        .attr("xmlns:dcterms", "http://purl.org/dc/terms/")
        .attr("xmlns:dcmitype", "http://purl.org/dc/dcmitype/")
        .attr("xmlns:xsi", "http://www.w3.org/2001/XMLSchema-instance")
        .open();

    xml.text_element("dc:title", config.title.as_deref().unwrap_or(""), false);
    xml.text_element("dc:creator", &config.creator, false);
    xml.text_element("dc:language", &config.language, false);
    xml.text_element("cp:lastModifiedBy", &config.creator, false);
    xml.text_element("cp:revision", "1", false);
    for name in ["dcterms:created", "dcterms:modified"] {
        xml.start(name).attr("xsi:type", "dcterms:W3CDTF").open();
        xml.text(&timestamp);
        xml.end();
    }

    xml.end();
    xml.finish()
}

/// `word/_rels/document.xml.rels`
pub fn document_relationships(sections: &[Placement], registry: &Registry) -> Result<Fragment> {
    let mut rels = Relationships::new();
    rels.add("rIdStyles", Relationships::TYPE_STYLES, "styles.xml")?;
    rels.add("rIdNumbering", Relationships::TYPE_NUMBERING, "numbering.xml")?;
    rels.add("rIdFontTable", Relationships::TYPE_FONT_TABLE, "fontTable.xml")?;
    rels.add("rIdSettings", Relationships::TYPE_SETTINGS, "settings.xml")?;
    rels.add("rIdTheme", Relationships::TYPE_THEME, "theme/theme1.xml")?;

    for placement in sections {
        if let Some(id) = placement.relationship_id() {
            let rel_type = if placement.is_header() {
                Relationships::TYPE_HEADER
            } else {
                Relationships::TYPE_FOOTER
            };
            rels.add(id, rel_type, placement.file_name())?;
        }
    }

    add_media_and_links(&mut rels, registry, Placement::Body)?;
    Ok(rels.to_xml())
}

/// Relationships of a header or footer part; `None` when it has none
pub fn part_relationships(placement: Placement, registry: &Registry) -> Result<Option<Fragment>> {
    if !registry.has_relationships(placement) {
        return Ok(None);
    }
    let mut rels = Relationships::new();
    add_media_and_links(&mut rels, registry, placement)?;
    Ok(Some(rels.to_xml()))
}

fn add_media_and_links(
    rels: &mut Relationships,
    registry: &Registry,
    placement: Placement,
) -> Result<()> {
    for image in registry.images_in(placement) {
        rels.add(&image.rel_id, Relationships::TYPE_IMAGE, &image.target())?;
    }
    for link in registry.links_in(placement) {
        rels.add_external(&link.rel_id, Relationships::TYPE_HYPERLINK, &link.url)?;
    }
    Ok(())
}

/// Options for rendering a header or footer part
#[derive(Debug, Clone, Copy)]
pub struct SectionPartOptions {
    /// Put the page number beside the content of the default footer
    pub page_numbers: bool,
    /// Width available between the page margins
    pub inner_width: i32,
}

/// Render `word/header*.xml` or `word/footer*.xml`
pub fn header_footer(
    registry: &mut Registry,
    placement: Placement,
    paragraphs: &[Paragraph],
    options: SectionPartOptions,
) -> Result<Fragment> {
    let paragraphs: Vec<Paragraph> = paragraphs
        .iter()
        .cloned()
        .map(|mut paragraph| {
            paragraph.style.margins.top = Some(0);
            paragraph.style.margins.bottom = Some(0);
            paragraph
        })
        .collect();

    let mut xml = XmlBuilder::document();
    open_content_root(&mut xml, if placement.is_header() { "w:hdr" } else { "w:ftr" });

    let mut ctx = RenderContext::new(registry, placement);
    let inherited = Inherited::default();
    if placement == Placement::Footer && options.page_numbers {
        let table = pagination_table(paragraphs, options.inner_width);
        render::render_table(&mut ctx, &mut xml, &table, &inherited)
            .context("render footer pagination")?;
    } else {
        for paragraph in &paragraphs {
            render::render_paragraph(&mut ctx, &mut xml, paragraph, &inherited)
                .context("render header or footer paragraph")?;
        }
    }

    xml.end();
    Ok(xml.finish())
}

/// Two equal columns: footer content left, page number right
fn pagination_table(paragraphs: Vec<Paragraph>, inner_width: i32) -> Table {
    let half = (inner_width.max(0) / 2) as u32;
    let no_margins = CellStyle {
        margins: Margins::uniform(0),
        ..Default::default()
    };

    let mut page_number = Paragraph::new(vec![Text::page_number()]);
    page_number.style.align = Some(HorizontalAlign::Right);
    page_number.style.margins.top = Some(0);
    page_number.style.margins.bottom = Some(0);

    let content = paragraphs.into_iter().map(Block::Paragraph).collect();
    let row = TableRow::new(vec![
        TableCell::new(content).with_style(no_margins.clone()),
        TableCell::new(vec![page_number.into()]).with_style(no_margins),
    ]);

    Table {
        cell_margins: Some(Margins::uniform(0)),
        ..Table::fixed(vec![half, half], vec![row])
    }
}
