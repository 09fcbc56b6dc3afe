//! Recursive content renderer
//!
//! Walks the content model and writes WordprocessingML into an
//! [`XmlBuilder`]. Images and hyperlinks met on the way are registered in the
//! [`Registry`] under the placement being rendered. Nested lists and tables
//! draw on a shared [`RecursionBudget`]; running out fails the whole render.

mod alert;
mod list;
mod paragraph;
mod section;
mod table;

pub use alert::render_alert;
pub use list::render_list;
pub use paragraph::{render_page_break, render_paragraph, render_space, render_text};
pub use section::{render_section_break, write_section_properties, SectionProperties};
pub use table::{render_spacer, render_table};

use zdocx_model::Block;

use crate::error::{Result, StructuralError};
use crate::markup::XmlBuilder;
use crate::registry::{Placement, Registry};
use crate::style::Inherited;

/// Number of nested list and table renders allowed per top-level call
#[derive(Debug, Clone, Copy)]
pub struct RecursionBudget {
    limit: usize,
    remaining: usize,
}

impl RecursionBudget {
    pub const DEFAULT_LIMIT: usize = 1000;

    pub fn new(limit: usize) -> Self {
        Self {
            limit,
            remaining: limit,
        }
    }

    /// Take one unit, failing once the budget is spent
    pub fn consume(&mut self) -> Result<()> {
        if self.remaining == 0 {
            return Err(StructuralError::RecursionLimit { limit: self.limit }.into());
        }
        self.remaining -= 1;
        Ok(())
    }

    pub fn remaining(&self) -> usize {
        self.remaining
    }
}

impl Default for RecursionBudget {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LIMIT)
    }
}

/// State threaded through one top-level render call
#[derive(Debug)]
pub struct RenderContext<'a> {
    pub registry: &'a mut Registry,
    pub placement: Placement,
    pub budget: RecursionBudget,
}

impl<'a> RenderContext<'a> {
    pub fn new(registry: &'a mut Registry, placement: Placement) -> Self {
        Self {
            registry,
            placement,
            budget: RecursionBudget::default(),
        }
    }

    #[cfg(test)]
    pub(crate) fn with_budget(mut self, budget: RecursionBudget) -> Self {
        self.budget = budget;
        self
    }
}

/// Render any block content
pub fn render_block(
    ctx: &mut RenderContext<'_>,
    xml: &mut XmlBuilder,
    block: &Block,
    inherited: &Inherited,
) -> Result<()> {
    match block {
        Block::Paragraph(paragraph) => render_paragraph(ctx, xml, paragraph, inherited),
        Block::List(list) => render_list(ctx, xml, list, inherited),
        Block::Table(table) => render_table(ctx, xml, table, inherited),
    }
}
