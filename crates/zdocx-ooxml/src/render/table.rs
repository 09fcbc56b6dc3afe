//! Tables
//!
//! Color and font size cascade table → cell → content. Cells on the outer
//! edge of the table take the table's border for that edge unless they set
//! their own. Every table is followed by a spacer paragraph.

use zdocx_model::{Margins, Table, TableCell, TableLayout, TableRow};

use crate::error::{Result, StructuralError};
use crate::markup::XmlBuilder;
use crate::style::{self, CellEdges, Inherited};
use crate::units::TABLE_CELL_DEFAULT_MARGIN;

use super::{render_block, RenderContext};

/// Render a `<w:tbl>` followed by its spacer paragraph
pub fn render_table(
    ctx: &mut RenderContext<'_>,
    xml: &mut XmlBuilder,
    table: &Table,
    inherited: &Inherited,
) -> Result<()> {
    ctx.budget.consume()?;
    check_grid(table)?;

    let rows: Vec<&TableRow> = table.rows.iter().filter(|row| !row.cells.is_empty()).collect();
    if rows.is_empty() {
        return Ok(());
    }

    let resolved = inherited.cascade(table.style.color.as_ref(), table.style.font_size);

    xml.start("w:tbl").open();
    write_table_properties(xml, table);

    xml.start("w:tblGrid").open();
    for width in &table.grid {
        xml.start("w:gridCol").attr("w:w", width).empty();
    }
    xml.end();

    for (row_index, row) in rows.iter().enumerate() {
        xml.start("w:tr").open();
        write_row_properties(xml, row);
        for (column, cell) in row.cells.iter().enumerate() {
            let edges = CellEdges::new(row_index, rows.len(), column, row.cells.len());
            render_cell(ctx, xml, table, cell, edges, &resolved)?;
        }
        xml.end();
    }

    xml.end();
    render_spacer(xml, table.no_margin_bottom);
    Ok(())
}

/// A fixed layout grid must cover every row
fn check_grid(table: &Table) -> Result<()> {
    if table.layout() != Some(TableLayout::Fixed) {
        return Ok(());
    }
    for (row, cells) in table.rows.iter().enumerate() {
        let required = cells.span();
        if required > table.grid.len() {
            return Err(StructuralError::GridTooNarrow {
                grid: table.grid.len(),
                required,
                row,
            }
            .into());
        }
    }
    Ok(())
}

fn write_table_properties(xml: &mut XmlBuilder, table: &Table) {
    xml.start("w:tblPr").open();
    xml.val("w:tblStyle", table.style_class.as_deref().unwrap_or("normalTable"));

    let width = table.width.unwrap_or_else(|| table.grid_width());
    if width == 0 {
        xml.start("w:tblW").attr("w:w", 0).attr("w:type", "auto").empty();
    } else {
        xml.start("w:tblW").attr("w:w", width).attr("w:type", "dxa").empty();
    }

    let align = table.style.align.map_or("center", |align| align.as_str());
    xml.val("w:jc", align);
    xml.start("w:tblInd").attr("w:w", 0).attr("w:type", "dxa").empty();

    if let Some(background) = &table.style.background {
        style::write_shading(xml, background);
    }

    let layout = table.layout().unwrap_or(TableLayout::Autofit);
    xml.start("w:tblLayout").attr("w:type", layout.as_str()).empty();

    if let Some(margins) = &table.cell_margins {
        xml.start("w:tblCellMar").open();
        write_margin_sides(xml, &margins.or_value(TABLE_CELL_DEFAULT_MARGIN));
        xml.end();
    }

    xml.end();
}

fn write_row_properties(xml: &mut XmlBuilder, row: &TableRow) {
    if !row.cant_split && !row.is_header && row.height.is_none() {
        return;
    }
    xml.start("w:trPr").open();
    if row.cant_split {
        xml.empty("w:cantSplit");
    }
    if let Some(height) = row.height {
        xml.start("w:trHeight")
            .attr("w:val", height)
            .attr("w:hRule", "exact")
            .empty();
    }
    if row.is_header {
        xml.empty("w:tblHeader");
    }
    xml.end();
}

fn render_cell(
    ctx: &mut RenderContext<'_>,
    xml: &mut XmlBuilder,
    table: &Table,
    cell: &TableCell,
    edges: CellEdges,
    inherited: &Inherited,
) -> Result<()> {
    let cell_style = &cell.style;
    let borders = style::cell_borders(&cell_style.borders, &table.style.borders, edges);

    xml.start("w:tc").open();
    xml.start("w:tcPr").open();
    if let Some(width) = cell_style.width {
        xml.start("w:tcW").attr("w:w", width).attr("w:type", "dxa").empty();
    }
    if let Some(span) = cell.grid_span.filter(|span| *span > 1) {
        xml.val("w:gridSpan", span);
    }
    if !borders.is_empty() {
        xml.start("w:tcBorders").open();
        for (name, border) in style::edges(&borders) {
            if let Some(border) = border {
                style::write_cell_border(xml, name, border);
            }
        }
        xml.end();
    }
    if let Some(background) = &cell_style.background {
        style::write_shading(xml, background);
    }
    if !cell_style.margins.is_empty() {
        xml.start("w:tcMar").open();
        write_margin_sides(xml, &cell_style.margins);
        xml.end();
    }
    if cell_style.hide_mark {
        xml.empty("w:hideMark");
    }
    xml.end();

    let content_inherited = inherited.cascade(cell_style.color.as_ref(), cell_style.font_size);
    if cell.content.is_empty() {
        xml.empty("w:p");
    }
    for block in &cell.content {
        render_block(ctx, xml, block, &content_inherited)?;
    }

    xml.end();
    Ok(())
}

/// Set sides only, in schema order
fn write_margin_sides(xml: &mut XmlBuilder, margins: &Margins) {
    let sides = [
        ("w:top", margins.top),
        ("w:left", margins.left),
        ("w:bottom", margins.bottom),
        ("w:right", margins.right),
    ];
    for (name, value) in sides {
        if let Some(value) = value {
            xml.start(name).attr("w:w", value).attr("w:type", "dxa").empty();
        }
    }
}

/// Paragraph placed after a table. The hidden variant is a 3pt line that
/// keeps the following content close.
pub fn render_spacer(xml: &mut XmlBuilder, hidden: bool) {
    xml.start("w:p").open();
    xml.start("w:pPr").open();
    if hidden {
        xml.start("w:widowControl").attr("w:val", "false").empty();
        xml.empty("w:suppressLineNumbers");
        style::write_shading(xml, "ffffff");
        xml.start("w:spacing")
            .attr("w:before", 0)
            .attr("w:after", 0)
            .attr("w:line", 6)
            .attr("w:lineRule", "auto")
            .empty();
        xml.start("w:rPr").open();
        xml.val("w:sz", 12);
        xml.val("w:szCs", 12);
        xml.end();
    } else {
        xml.start("w:spacing").attr("w:before", 0).attr("w:after", 100).empty();
        xml.start("w:ind").attr("w:hanging", 0).empty();
        xml.empty("w:contextualSpacing");
    }
    xml.end();
    xml.end();
}
