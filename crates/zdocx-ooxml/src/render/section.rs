//! Section properties

use zdocx_model::{Margins, Orientation, Section, SectionKind};

use crate::markup::XmlBuilder;
use crate::registry::Placement;
use crate::units::{self, page_size};

/// Everything a `w:sectPr` needs
#[derive(Debug, Clone)]
pub struct SectionProperties {
    pub kind: SectionKind,
    pub orientation: Orientation,
    /// Unset sides fall back to the default page margin
    pub margins: Margins,
    /// Header and footer parts referenced by the section
    pub references: Vec<Placement>,
    /// The body's closing section also carries page numbering and grid
    pub is_final: bool,
}

impl SectionProperties {
    /// Closing section of the document
    pub fn final_section(orientation: Orientation, margins: Margins, references: Vec<Placement>) -> Self {
        Self {
            kind: SectionKind::NextPage,
            orientation,
            margins,
            references,
            is_final: true,
        }
    }

    fn has_title_page(&self) -> bool {
        self.references
            .iter()
            .any(|placement| matches!(placement, Placement::FirstHeader | Placement::FirstFooter))
    }
}

/// Write `<w:sectPr>`
pub fn write_section_properties(xml: &mut XmlBuilder, props: &SectionProperties) {
    xml.start("w:sectPr").open();

    // headers before footers, default before first page
    let order = [
        Placement::Header,
        Placement::FirstHeader,
        Placement::Footer,
        Placement::FirstFooter,
    ];
    for placement in order {
        if !props.references.contains(&placement) {
            continue;
        }
        let (element, kind) = match placement {
            Placement::Header => ("w:headerReference", "default"),
            Placement::FirstHeader => ("w:headerReference", "first"),
            Placement::Footer => ("w:footerReference", "default"),
            _ => ("w:footerReference", "first"),
        };
        if let Some(rel_id) = placement.relationship_id() {
            xml.start(element)
                .attr("w:type", kind)
                .attr("r:id", rel_id)
                .empty();
        }
    }

    xml.val("w:type", props.kind.as_str());

    let (width, height) = page_size(props.orientation);
    let page = xml.start("w:pgSz").attr("w:w", width).attr("w:h", height);
    match props.orientation {
        Orientation::Landscape => page.attr("w:orient", "landscape").empty(),
        Orientation::Portrait => page.empty(),
    }

    let margins = units::resolve_page_margins(&props.margins);
    let side = |value: Option<i32>| value.unwrap_or(units::DEFAULT_MARGIN);
    xml.start("w:pgMar")
        .attr("w:top", side(margins.top))
        .attr("w:right", side(margins.right))
        .attr("w:bottom", side(margins.bottom))
        .attr("w:left", side(margins.left))
        .attr("w:header", side(margins.top))
        .attr("w:footer", side(margins.bottom))
        .attr("w:gutter", 0)
        .empty();

    if props.is_final {
        xml.start("w:pgNumType").attr("w:fmt", "decimal").empty();
        xml.val("w:formProt", "false");
        if props.has_title_page() {
            xml.empty("w:titlePg");
        }
        xml.val("w:textDirection", "lrTb");
        xml.start("w:docGrid")
            .attr("w:type", "default")
            .attr("w:linePitch", 100)
            .attr("w:charSpace", 0)
            .empty();
    }

    xml.end();
}

/// A paragraph ending a section; unset values, margins side by side,
/// come from the document
pub fn render_section_break(
    xml: &mut XmlBuilder,
    section: &Section,
    orientation: Orientation,
    margins: &Margins,
) {
    let props = SectionProperties {
        kind: section.kind,
        orientation: section.orientation.unwrap_or(orientation),
        margins: section.margins.map_or(*margins, |own| own.or(margins)),
        references: Vec::new(),
        is_final: false,
    };

    xml.start("w:p").open();
    xml.start("w:pPr").open();
    write_section_properties(xml, &props);
    xml.end();
    xml.end();
}
