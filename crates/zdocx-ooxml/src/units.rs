//! Document units and page geometry
//!
//! Lengths are twentieths of a point (dxa, 1440 per inch). Drawing sizes use
//! English Metric Units (914400 per inch), so one dxa is 635 EMU.

use zdocx_model::{Margins, Orientation};

/// EMUs per dxa
pub const DXA_TO_EMU: i64 = 635;

/// Portrait page width in dxa (US Letter)
pub const PAGE_WIDTH: i32 = 12240;

/// Portrait page height in dxa (US Letter)
pub const PAGE_HEIGHT: i32 = 15840;

/// Page margin applied to every unset side
pub const DEFAULT_MARGIN: i32 = 1440;

/// Indentation step per list level
pub const LIST_INDENT_STEP: i32 = 720;

/// Cell margin applied to every unset side
pub const TABLE_CELL_DEFAULT_MARGIN: i32 = 100;

/// Line height of a single-spaced line, in 240ths
pub const DEFAULT_LINE_HEIGHT: u32 = 240;

pub fn dxa_to_emu(dxa: i64) -> i64 {
    dxa * DXA_TO_EMU
}

/// Page width and height for an orientation
pub fn page_size(orientation: Orientation) -> (i32, i32) {
    match orientation {
        Orientation::Portrait => (PAGE_WIDTH, PAGE_HEIGHT),
        Orientation::Landscape => (PAGE_HEIGHT, PAGE_WIDTH),
    }
}

/// Page margins with every unset side defaulted
pub fn resolve_page_margins(margins: &Margins) -> Margins {
    margins.or_value(DEFAULT_MARGIN)
}

/// Width between the left and right page margins
pub fn inner_width(orientation: Orientation, margins: &Margins) -> i32 {
    let margins = resolve_page_margins(margins);
    let (width, _) = page_size(orientation);
    width - margins.left.unwrap_or(DEFAULT_MARGIN) - margins.right.unwrap_or(DEFAULT_MARGIN)
}

/// Height between the top and bottom page margins
pub fn inner_height(orientation: Orientation, margins: &Margins) -> i32 {
    let margins = resolve_page_margins(margins);
    let (_, height) = page_size(orientation);
    height - margins.top.unwrap_or(DEFAULT_MARGIN) - margins.bottom.unwrap_or(DEFAULT_MARGIN)
}
