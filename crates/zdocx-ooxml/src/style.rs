//! Style resolution
//!
//! Optional style values are resolved here at render time: color and font
//! size cascade from a container to its children, cells pick up the table's
//! outer borders, and unset border attributes get their defaults.

use zdocx_model::{Border, BorderKind, Borders};

use crate::markup::XmlBuilder;

/// Border color used when none is given
pub const DEFAULT_BORDER_COLOR: &str = "C0C0C0";

/// Values a container passes down to its content
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Inherited {
    pub color: Option<String>,
    pub font_size: Option<u32>,
}

impl Inherited {
    /// Child values win; unset ones fall back to the container's
    pub fn cascade(&self, color: Option<&String>, font_size: Option<u32>) -> Inherited {
        Inherited {
            color: color.or(self.color.as_ref()).cloned(),
            font_size: font_size.or(self.font_size),
        }
    }
}

/// Which outer table edges a cell lies on
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CellEdges {
    pub top: bool,
    pub left: bool,
    pub bottom: bool,
    pub right: bool,
}

impl CellEdges {
    pub fn new(row: usize, row_count: usize, column: usize, column_count: usize) -> Self {
        Self {
            top: row == 0,
            left: column == 0,
            bottom: row + 1 == row_count,
            right: column + 1 == column_count,
        }
    }
}

/// A cell's borders after taking the table's outer borders into account.
///
/// An edge is inherited only when the cell lies on that outer edge and has
/// no explicit border of its own there.
pub fn cell_borders(cell: &Borders, table: &Borders, edges: CellEdges) -> Borders {
    let pick = |own: &Option<Border>, outer: &Option<Border>, on_edge: bool| {
        if own.is_none() && on_edge {
            outer.clone()
        } else {
            own.clone()
        }
    };
    Borders {
        top: pick(&cell.top, &table.top, edges.top),
        left: pick(&cell.left, &table.left, edges.left),
        bottom: pick(&cell.bottom, &table.bottom, edges.bottom),
        right: pick(&cell.right, &table.right, edges.right),
    }
}

fn border_color(border: &Border) -> &str {
    border.color.as_deref().unwrap_or(DEFAULT_BORDER_COLOR)
}

/// `w:pBdr` children; a zero width renders as `none`
pub fn write_paragraph_border(xml: &mut XmlBuilder, name: &'static str, border: &Border) {
    let kind = if border.width == 0 {
        BorderKind::None
    } else {
        border.kind
    };
    xml.start(name)
        .attr("w:val", kind.as_str())
        .attr("w:sz", border.width)
        .attr("w:space", 0)
        .attr("w:color", border_color(border))
        .empty();
}

/// `w:tcBorders` children; a zero width border is omitted
pub fn write_cell_border(xml: &mut XmlBuilder, name: &'static str, border: &Border) {
    if border.width == 0 {
        return;
    }
    xml.start(name)
        .attr("w:val", border.kind.as_str())
        .attr("w:sz", border.width)
        .attr("w:space", 0)
        .attr("w:color", border_color(border))
        .empty();
}

/// Run border (`w:bdr`)
pub fn write_run_border(xml: &mut XmlBuilder, border: &Border) {
    xml.start("w:bdr")
        .attr("w:val", border.kind.as_str())
        .attr("w:sz", border.width)
        .attr("w:space", 0)
        .attr("w:color", border_color(border))
        .empty();
}

/// Solid background shading
pub fn write_shading(xml: &mut XmlBuilder, fill: &str) {
    xml.start("w:shd")
        .attr("w:val", "clear")
        .attr("w:color", "auto")
        .attr("w:fill", fill)
        .empty();
}

/// Iterate the four edges in schema order
pub fn edges(borders: &Borders) -> [(&'static str, Option<&Border>); 4] {
    [
        ("w:top", borders.top.as_ref()),
        ("w:left", borders.left.as_ref()),
        ("w:bottom", borders.bottom.as_ref()),
        ("w:right", borders.right.as_ref()),
    ]
}
