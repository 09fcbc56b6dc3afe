//! Callout boxes
//!
//! An alert is a single-cell fixed table with colored borders, padded cell
//! margins and a title run in front of its first paragraph.

use zdocx_model::{Alert, Border, Borders, Margins, Paragraph, Table, TableCell, TableRow, Text};

use crate::error::Result;
use crate::markup::XmlBuilder;
use crate::style::Inherited;

use super::{render_spacer, render_table, RenderContext};

pub const ALERT_TITLE: &str = "Attention!";
pub const ALERT_TITLE_CLASS: &str = "alertTitle";
pub const ALERT_BORDER_COLOR: &str = "DB4912";
const ALERT_BORDER_WIDTH: u32 = 8;

/// Render an alert between two spacer paragraphs. Nothing is written for an
/// alert without paragraphs.
pub fn render_alert(
    ctx: &mut RenderContext<'_>,
    xml: &mut XmlBuilder,
    alert: &Alert,
    default_width: u32,
) -> Result<()> {
    if alert.paragraphs.is_empty() {
        return Ok(());
    }

    let table = alert_table(alert, alert.width.unwrap_or(default_width));
    render_spacer(xml, false);
    render_table(ctx, xml, &table, &Inherited::default())?;
    render_spacer(xml, false);
    Ok(())
}

fn alert_table(alert: &Alert, width: u32) -> Table {
    let title = Text::new(alert.title.as_deref().unwrap_or(ALERT_TITLE)).with_class(ALERT_TITLE_CLASS);

    let content = alert
        .paragraphs
        .iter()
        .enumerate()
        .map(|(index, paragraph)| {
            if index == 0 {
                let mut texts = Vec::with_capacity(paragraph.texts.len() + 1);
                texts.push(title.clone());
                texts.extend(paragraph.texts.iter().cloned());
                Paragraph {
                    texts,
                    ..paragraph.clone()
                }
                .into()
            } else {
                paragraph.clone().into()
            }
        })
        .collect();

    let mut table = Table::fixed(vec![width], vec![TableRow::new(vec![TableCell::new(content)])]);
    table.cell_margins = Some(Margins {
        top: Some(100),
        left: Some(300),
        bottom: Some(100),
        right: Some(200),
    });
    table.style.borders = Borders::all(Border::single(ALERT_BORDER_WIDTH, ALERT_BORDER_COLOR));
    table
}
