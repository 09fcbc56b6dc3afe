//! Image embedding
//!
//! Images are decoded only far enough to learn their format and pixel size.
//! The pixel size supplies the aspect ratio when the caller gives only one
//! of width and height.
//!
//! # OOXML drawing structure
//!
//! ```xml
//! <w:drawing>
//!   <wp:inline|wp:anchor>
//!     <wp:extent cx="..." cy="..."/>               <!-- EMUs -->
//!     <wp:docPr id="..." name="..." descr="..."/>
//!     <a:graphic>
//!       <a:graphicData uri="...picture">
//!         <pic:pic>
//!           <pic:blipFill><a:blip r:embed="rIdImage1"/></pic:blipFill>
//!         </pic:pic>
//!       </a:graphicData>
//!     </a:graphic>
//!   </wp:inline|wp:anchor>
//! </w:drawing>
//! ```

use std::io::Cursor;

use image::{ImageFormat, ImageReader};
use zdocx_model::{Image, Margins};

use crate::error::{DocxError, Result};
use crate::markup::XmlBuilder;
use crate::units::dxa_to_emu;

const DRAWINGML_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
const PICTURE_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/picture";

/// Supported image encodings
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageKind {
    Png,
    Jpeg,
}

impl ImageKind {
    pub fn extension(self) -> &'static str {
        match self {
            Self::Png => "png",
            Self::Jpeg => "jpeg",
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            Self::Png => "image/png",
            Self::Jpeg => "image/jpeg",
        }
    }
}

/// Format and pixel size read from the image header
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DecodedImage {
    pub kind: ImageKind,
    pub width: u32,
    pub height: u32,
}

/// Detect the format from the leading bytes and read the pixel size
pub fn decode(bytes: &[u8]) -> Result<DecodedImage> {
    if bytes.is_empty() {
        return Err(DocxError::Validation("image has no bytes".to_string()));
    }

    let format = image::guess_format(bytes)
        .map_err(|_| DocxError::UnsupportedImage("unrecognized image signature".to_string()))?;
    let kind = match format {
        ImageFormat::Png => ImageKind::Png,
        ImageFormat::Jpeg => ImageKind::Jpeg,
        other => return Err(DocxError::UnsupportedImage(format!("{:?}", other))),
    };

    let (width, height) = ImageReader::with_format(Cursor::new(bytes), format).into_dimensions()?;
    if width == 0 || height == 0 {
        return Err(DocxError::ImageDecode(format!(
            "image reports an empty size of {}x{}",
            width, height
        )));
    }

    Ok(DecodedImage {
        kind,
        width,
        height,
    })
}

/// Final width and height in document units.
///
/// A missing dimension is derived from the present one and the pixel aspect
/// ratio, truncated toward zero.
pub fn resolve_size(
    width: Option<i64>,
    height: Option<i64>,
    decoded: &DecodedImage,
) -> Result<(i64, i64)> {
    let pixel_width = f64::from(decoded.width);
    let pixel_height = f64::from(decoded.height);
    let size = match (width, height) {
        (Some(width), Some(height)) => (width, height),
        (Some(width), None) => (width, (width as f64 * pixel_height / pixel_width) as i64),
        (None, Some(height)) => ((height as f64 * pixel_width / pixel_height) as i64, height),
        (None, None) => {
            return Err(DocxError::Validation(
                "image needs a width or a height".to_string(),
            ))
        }
    };
    if size.0 <= 0 || size.1 <= 0 {
        return Err(DocxError::Validation(format!(
            "image size {}x{} is not positive",
            size.0, size.1
        )));
    }
    Ok(size)
}

/// Fails early when neither dimension is set or a set one is not positive
pub fn check_size_declared(image: &Image) -> Result<()> {
    if image.width.is_none() && image.height.is_none() {
        return Err(DocxError::Validation(format!(
            "image {} needs a width or a height",
            image.file_name
        )));
    }
    let non_positive = |side: Option<i64>| side.is_some_and(|value| value <= 0);
    if non_positive(image.width) || non_positive(image.height) {
        return Err(DocxError::Validation(format!(
            "image {} has a width or height that is not positive",
            image.file_name
        )));
    }
    Ok(())
}

/// Ids and size of a drawing being written
#[derive(Debug, Clone)]
pub struct DrawingRef<'a> {
    pub rel_id: &'a str,
    pub drawing_id: u32,
    /// Width and height in document units
    pub size: (i64, i64),
}

/// Write `<w:drawing>` for an embedded image
pub fn write_drawing(xml: &mut XmlBuilder, image: &Image, drawing: &DrawingRef<'_>) {
    let cx = dxa_to_emu(drawing.size.0);
    let cy = dxa_to_emu(drawing.size.1);
    let dist = distances(&image.margins);

    xml.start("w:drawing").open();
    if image.is_floating() {
        xml.start("wp:anchor")
            .attr("distT", dist.top)
            .attr("distB", dist.bottom)
            .attr("distL", dist.left)
            .attr("distR", dist.right)
            .attr("simplePos", 0)
            .attr("relativeHeight", image.z_index)
            .attr("behindDoc", u8::from(image.behind_text || image.is_background))
            .attr("locked", 0)
            .attr("layoutInCell", 1)
            .attr("allowOverlap", 1)
            .open();
        xml.start("wp:simplePos").attr("x", 0).attr("y", 0).empty();

        xml.start("wp:positionH")
            .attr("relativeFrom", image.horizontal_anchor.as_str())
            .open();
        match image.horizontal_align {
            Some(align) => xml.text_element("wp:align", align.as_str(), false),
            None => xml.text_element("wp:posOffset", "0", false),
        }
        xml.end();

        xml.start("wp:positionV")
            .attr("relativeFrom", image.vertical_anchor.as_str())
            .open();
        match image.vertical_align {
            Some(align) => xml.text_element("wp:align", align.as_str(), false),
            None => xml.text_element("wp:posOffset", "0", false),
        }
        xml.end();

        write_extent(xml, cx, cy);
        if image.is_background {
            xml.empty("wp:wrapNone");
        } else {
            xml.start("wp:wrapSquare").attr("wrapText", "largest").empty();
        }
    } else {
        xml.start("wp:inline")
            .attr("distT", dist.top)
            .attr("distB", dist.bottom)
            .attr("distL", dist.left)
            .attr("distR", dist.right)
            .open();
        write_extent(xml, cx, cy);
    }

    write_graphic(xml, image, drawing, cx, cy);
    // wp:inline | wp:anchor
    xml.end();
    xml.end();
}

struct Distances {
    top: i64,
    left: i64,
    bottom: i64,
    right: i64,
}

fn distances(margins: &Margins) -> Distances {
    let emu = |side: Option<i32>| dxa_to_emu(i64::from(side.unwrap_or(0)));
    Distances {
        top: emu(margins.top),
        left: emu(margins.left),
        bottom: emu(margins.bottom),
        right: emu(margins.right),
    }
}

fn write_extent(xml: &mut XmlBuilder, cx: i64, cy: i64) {
    xml.start("wp:extent").attr("cx", cx).attr("cy", cy).empty();
    xml.start("wp:effectExtent")
        .attr("l", 0)
        .attr("t", 0)
        .attr("r", 0)
        .attr("b", 0)
        .empty();
}

fn write_graphic(xml: &mut XmlBuilder, image: &Image, drawing: &DrawingRef<'_>, cx: i64, cy: i64) {
    let name = picture_name(&image.file_name, drawing.drawing_id);
    let description = image.description.as_deref().unwrap_or("");

    xml.start("wp:docPr")
        .attr("id", drawing.drawing_id)
        .attr("name", &name)
        .attr("descr", description)
        .empty();
    xml.start("wp:cNvGraphicFramePr").open();
    xml.start("a:graphicFrameLocks")
        .attr("xmlns:a", DRAWINGML_NS)
        .attr("noChangeAspect", 1)
        .empty();
    xml.end();

    xml.start("a:graphic").attr("xmlns:a", DRAWINGML_NS).open();
    xml.start("a:graphicData").attr("uri", PICTURE_NS).open();
    xml.start("pic:pic").attr("xmlns:pic", PICTURE_NS).open();

    xml.start("pic:nvPicPr").open();
    xml.start("pic:cNvPr")
        .attr("id", drawing.drawing_id)
        .attr("name", &name)
        .attr("descr", description)
        .empty();
    xml.start("pic:cNvPicPr").open();
    xml.start("a:picLocks")
        .attr("noChangeAspect", 1)
        .attr("noChangeArrowheads", 1)
        .empty();
    xml.end();
    xml.end();

    xml.start("pic:blipFill").open();
    xml.start("a:blip").attr("r:embed", drawing.rel_id).empty();
    xml.start("a:stretch").open();
    xml.empty("a:fillRect");
    xml.end();
    xml.end();

    xml.start("pic:spPr").attr("bwMode", "auto").open();
    xml.start("a:xfrm").open();
    xml.start("a:off").attr("x", 0).attr("y", 0).empty();
    xml.start("a:ext").attr("cx", cx).attr("cy", cy).empty();
    xml.end();
    xml.start("a:prstGeom").attr("prst", "rect").open();
    xml.empty("a:avLst");
    xml.end();
    xml.end();

    // pic:pic, a:graphicData, a:graphic
    xml.end();
    xml.end();
    xml.end();
}

/// File stem used as the drawing name
fn picture_name(file_name: &str, drawing_id: u32) -> String {
    let base = file_name.rsplit(&['/', '\\'][..]).next().unwrap_or_default();
    let stem = match base.rfind('.') {
        Some(dot) if dot > 0 => &base[..dot],
        _ => base,
    };
    if stem.is_empty() {
        format!("Picture {}", drawing_id)
    } else {
        stem.to_string()
    }
}
