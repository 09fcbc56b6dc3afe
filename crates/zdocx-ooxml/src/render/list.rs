//! Lists
//!
//! The first paragraph of each item carries the numbering reference; later
//! paragraphs of the same item are indented to line up with it. Nested lists
//! are always rendered as bullets.

use zdocx_model::{List, ListEntry, ListKind, ListPlacement};

use crate::error::Result;
use crate::markup::XmlBuilder;
use crate::style::Inherited;
use crate::units::LIST_INDENT_STEP;

use super::{render_paragraph, RenderContext};

/// Deepest level defined in `word/numbering.xml`
pub const MAX_NUMBERING_LEVEL: u32 = 8;

/// Render a top-level list with its own numbering kind
pub fn render_list(
    ctx: &mut RenderContext<'_>,
    xml: &mut XmlBuilder,
    list: &List,
    inherited: &Inherited,
) -> Result<()> {
    render_level(ctx, xml, list, 0, list.kind, inherited)
}

fn render_level(
    ctx: &mut RenderContext<'_>,
    xml: &mut XmlBuilder,
    list: &List,
    level: u32,
    kind: ListKind,
    inherited: &Inherited,
) -> Result<()> {
    ctx.budget.consume()?;

    let resolved = inherited.cascade(list.style.color.as_ref(), list.style.font_size);

    for item in &list.items {
        for (index, entry) in item.entries.iter().enumerate() {
            match entry {
                ListEntry::Paragraph(paragraph) => {
                    let mut paragraph = paragraph.clone();
                    if index == 0 {
                        paragraph.list = Some(ListPlacement {
                            level: level.min(MAX_NUMBERING_LEVEL),
                            kind,
                        });
                    } else {
                        let indent = LIST_INDENT_STEP.saturating_mul(level as i32 + 1);
                        paragraph.style.margins.left = Some(indent);
                    }
                    render_paragraph(ctx, xml, &paragraph, &resolved)?;
                }
                ListEntry::List(nested) => {
                    render_level(ctx, xml, nested, level + 1, ListKind::Bullet, &resolved)?;
                }
            }
        }
    }
    Ok(())
}
