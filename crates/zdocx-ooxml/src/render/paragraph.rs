//! Paragraphs and text runs

use zdocx_model::{Field, Image, Paragraph, Text, TextStyle};

use crate::error::Result;
use crate::image::{self, DrawingRef};
use crate::markup::XmlBuilder;
use crate::style::{self, Inherited};

use super::RenderContext;

/// Render a `<w:p>`.
///
/// The paragraph's own color and font size override `inherited`; each run
/// then cascades from the result.
pub fn render_paragraph(
    ctx: &mut RenderContext<'_>,
    xml: &mut XmlBuilder,
    paragraph: &Paragraph,
    inherited: &Inherited,
) -> Result<()> {
    let resolved = inherited.cascade(paragraph.style.color.as_ref(), paragraph.style.font_size);

    xml.start("w:p").open();
    write_paragraph_properties(xml, paragraph);
    for (index, text) in paragraph.texts.iter().enumerate() {
        if index > 0 {
            write_space_run(xml);
        }
        render_text(ctx, xml, text, &resolved)?;
    }
    xml.end();
    Ok(())
}

fn write_paragraph_properties(xml: &mut XmlBuilder, paragraph: &Paragraph) {
    let style = &paragraph.style;
    let margins = &style.margins;

    xml.start("w:pPr").open();

    let class = match paragraph.list {
        Some(_) => "ListParagraph",
        None => paragraph.style_class.as_deref().unwrap_or("Normal"),
    };
    xml.val("w:pStyle", class);

    if style.page_break_before {
        xml.empty("w:pageBreakBefore");
    }

    if let Some(list) = paragraph.list {
        xml.start("w:numPr").open();
        xml.val("w:ilvl", list.level);
        xml.val("w:numId", list.kind.numbering_id());
        xml.end();
    }

    if paragraph
        .texts
        .iter()
        .any(|text| text.style.suppress_line_numbers)
    {
        xml.empty("w:suppressLineNumbers");
    }

    if !style.borders.is_empty() {
        xml.start("w:pBdr").open();
        for (name, border) in style::edges(&style.borders) {
            if let Some(border) = border {
                style::write_paragraph_border(xml, name, border);
            }
        }
        xml.end();
    }

    if let Some(background) = &style.background {
        style::write_shading(xml, background);
    }

    if margins.top.is_some() || margins.bottom.is_some() {
        xml.start("w:spacing")
            .attr("w:before", margins.top.unwrap_or(0))
            .attr("w:after", margins.bottom.unwrap_or(0))
            .attr("w:line", style.line_height.unwrap_or(crate::units::DEFAULT_LINE_HEIGHT))
            .attr("w:lineRule", "auto")
            .empty();
    } else if let Some(line) = style.line_height {
        xml.start("w:spacing")
            .attr("w:line", line)
            .attr("w:lineRule", "auto")
            .empty();
    }

    if paragraph.list.is_none() && !margins.is_empty() {
        xml.start("w:ind")
            .attr("w:left", margins.left.unwrap_or(0))
            .attr("w:right", margins.right.unwrap_or(0))
            .empty();
    }

    if let Some(align) = style.align {
        xml.val("w:jc", align.as_str());
    }

    xml.end();
}

/// Render one run: hyperlink wrapper, image, then text or field
pub fn render_text(
    ctx: &mut RenderContext<'_>,
    xml: &mut XmlBuilder,
    text: &Text,
    inherited: &Inherited,
) -> Result<()> {
    if text.is_empty() {
        return Ok(());
    }

    let resolved = inherited.cascade(text.style.color.as_ref(), text.style.font_size);
    let run_class = match text.link {
        Some(_) => Some("hyperlink"),
        None => text.style_class.as_deref(),
    };

    if let Some(link) = &text.link {
        let rel_id = ctx.registry.register_link(ctx.placement, &link.url);
        xml.start("w:hyperlink")
            .attr("r:id", rel_id)
            .attr("w:history", 1)
            .open();
    }

    if let Some(image) = &text.image {
        render_image_run(ctx, xml, image)?;
    }

    let props = RunProperties {
        class: run_class,
        style: &text.style,
        resolved: &resolved,
    };
    if let Some(field) = text.field {
        write_field(xml, field, &props);
    } else if !text.text.is_empty() {
        let preserve = text.style.space_preserve
            || text.text.starts_with(char::is_whitespace)
            || text.text.ends_with(char::is_whitespace);
        xml.start("w:r").open();
        props.write(xml);
        xml.text_element("w:t", &text.text, preserve);
        xml.end();
    }

    if text.link.is_some() {
        xml.end();
    }
    Ok(())
}

fn render_image_run(ctx: &mut RenderContext<'_>, xml: &mut XmlBuilder, picture: &Image) -> Result<()> {
    image::check_size_declared(picture)?;
    let decoded = image::decode(&picture.bytes)?;
    let size = image::resolve_size(picture.width, picture.height, &decoded)?;

    let rel_id = ctx.registry.register_image(
        ctx.placement,
        &picture.file_name,
        decoded.kind,
        picture.bytes.clone(),
    );
    let drawing_id = ctx.registry.next_drawing_id();

    xml.start("w:r").open();
    image::write_drawing(
        xml,
        picture,
        &DrawingRef {
            rel_id: &rel_id,
            drawing_id,
            size,
        },
    );
    xml.end();
    Ok(())
}

struct RunProperties<'a> {
    class: Option<&'a str>,
    style: &'a TextStyle,
    resolved: &'a Inherited,
}

impl RunProperties<'_> {
    fn is_empty(&self) -> bool {
        self.class.is_none()
            && self.style.font_family.is_none()
            && !self.style.bold
            && !self.style.italic
            && self.resolved.color.is_none()
            && self.resolved.font_size.is_none()
            && self.style.border.is_none()
    }

    fn write(&self, xml: &mut XmlBuilder) {
        if self.is_empty() {
            return;
        }

        xml.start("w:rPr").open();
        if let Some(class) = self.class {
            xml.val("w:rStyle", class);
        }
        if let Some(family) = &self.style.font_family {
            xml.start("w:rFonts")
                .attr("w:ascii", family)
                .attr("w:hAnsi", family)
                .attr("w:cs", family)
                .empty();
        }
        if self.style.bold {
            xml.empty("w:b");
        }
        if self.style.italic {
            xml.empty("w:i");
        }
        if let Some(color) = &self.resolved.color {
            xml.val("w:color", color);
        }
        if let Some(size) = self.resolved.font_size {
            xml.val("w:sz", size);
            xml.val("w:szCs", size);
        }
        if let Some(border) = &self.style.border {
            style::write_run_border(xml, border);
        }
        xml.end();
    }
}

fn write_field(xml: &mut XmlBuilder, field: Field, props: &RunProperties<'_>) {
    let field_char = |xml: &mut XmlBuilder, kind: &str| {
        xml.start("w:r").open();
        props.write(xml);
        xml.start("w:fldChar").attr("w:fldCharType", kind).empty();
        xml.end();
    };

    field_char(xml, "begin");
    xml.start("w:r").open();
    props.write(xml);
    xml.text_element("w:instrText", field.instruction(), true);
    xml.end();
    field_char(xml, "separate");
    xml.start("w:r").open();
    props.write(xml);
    xml.text_element("w:t", "1", false);
    xml.end();
    field_char(xml, "end");
}

fn write_space_run(xml: &mut XmlBuilder) {
    xml.start("w:r").open();
    xml.text_element("w:t", " ", true);
    xml.end();
}

/// A paragraph holding a single preserved space
pub fn render_space(xml: &mut XmlBuilder) {
    xml.start("w:p").open();
    xml.start("w:pPr").open();
    xml.val("w:pStyle", "Normal");
    xml.end();
    write_space_run(xml);
    xml.end();
}

/// A paragraph holding a page break
pub fn render_page_break(xml: &mut XmlBuilder) {
    xml.start("w:p").open();
    xml.start("w:pPr").open();
    xml.val("w:pStyle", "Normal");
    xml.end();
    xml.start("w:r").open();
    xml.start("w:br").attr("w:type", "page").empty();
    xml.end();
    xml.end();
}
