//! Tables and block content
//!
//! Column widths live on the table as a grid; a cell may span several grid
//! columns. Cells hold block content of any kind, including nested tables.

use serde::{Deserialize, Serialize};

use crate::list::List;
use crate::paragraph::Paragraph;
use crate::style::{CellStyle, Margins, TableStyle};

/// Content that can appear in a table cell
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Block {
    Paragraph(Paragraph),
    List(List),
    Table(Table),
}

impl From<Paragraph> for Block {
    fn from(paragraph: Paragraph) -> Self {
        Self::Paragraph(paragraph)
    }
}

impl From<List> for Block {
    fn from(list: List) -> Self {
        Self::List(list)
    }
}

impl From<Table> for Block {
    fn from(table: Table) -> Self {
        Self::Table(table)
    }
}

/// Table layout algorithm
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TableLayout {
    Fixed,
    Autofit,
}

impl TableLayout {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Fixed => "fixed",
            Self::Autofit => "autofit",
        }
    }
}

/// A table
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Table {
    pub rows: Vec<TableRow>,
    /// Column widths in document units
    pub grid: Vec<u32>,
    /// Explicit layout; a non-empty grid implies fixed
    pub layout: Option<TableLayout>,
    pub style_class: Option<String>,
    /// Overrides the total width computed from the grid
    pub width: Option<u32>,
    /// Default cell margins; unset sides fall back to 100
    pub cell_margins: Option<Margins>,
    pub style: TableStyle,
    /// Use the compact spacer paragraph after the table
    pub no_margin_bottom: bool,
}

impl Table {
    pub fn new(rows: Vec<TableRow>) -> Self {
        Self {
            rows,
            ..Default::default()
        }
    }

    /// Fixed layout table over the given column widths
    pub fn fixed(grid: Vec<u32>, rows: Vec<TableRow>) -> Self {
        Self {
            rows,
            grid,
            layout: Some(TableLayout::Fixed),
            ..Default::default()
        }
    }

    /// Effective layout
    pub fn layout(&self) -> Option<TableLayout> {
        if !self.grid.is_empty() {
            return Some(TableLayout::Fixed);
        }
        self.layout
    }

    /// Sum of the grid column widths
    pub fn grid_width(&self) -> u32 {
        self.grid.iter().sum()
    }
}

/// A table row
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableRow {
    pub cells: Vec<TableCell>,
    /// Repeat the row at the top of each page
    pub is_header: bool,
    pub cant_split: bool,
    /// Exact row height
    pub height: Option<u32>,
}

impl TableRow {
    pub fn new(cells: Vec<TableCell>) -> Self {
        Self {
            cells,
            ..Default::default()
        }
    }

    pub fn header(mut self) -> Self {
        self.is_header = true;
        self
    }

    /// Grid columns occupied by the row
    pub fn span(&self) -> usize {
        self.cells.iter().map(TableCell::span).sum()
    }
}

/// A table cell
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TableCell {
    pub content: Vec<Block>,
    /// Number of grid columns the cell covers
    pub grid_span: Option<u32>,
    pub style: CellStyle,
}

impl TableCell {
    pub fn new(content: Vec<Block>) -> Self {
        Self {
            content,
            ..Default::default()
        }
    }

    pub fn with_span(mut self, span: u32) -> Self {
        self.grid_span = Some(span);
        self
    }

    pub fn with_style(mut self, style: CellStyle) -> Self {
        self.style = style;
        self
    }

    /// Grid columns covered; a cell without span counts as one
    pub fn span(&self) -> usize {
        self.grid_span.map_or(1, |span| span.max(1) as usize)
    }
}
