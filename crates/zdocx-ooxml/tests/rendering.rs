//! Rendering Tests
//!
//! Lists, tables and callouts rendered through `Document`, checked in the
//! saved `word/document.xml`.

mod common;

use common::{attribute_values, Unpacked};
use zdocx_model::{
    Alert, Block, List, ListEntry, ListItem, ListKind, Paragraph, ParagraphStyle, Table,
    TableCell, TableRow, TableStyle, Text,
};
use zdocx_ooxml::{Document, DocxError, StructuralError};

fn document_xml(doc: Document) -> String {
    Unpacked::new(doc.write_to_buffer().unwrap()).xml("word/document.xml")
}

fn cell(text: &str) -> TableCell {
    TableCell::new(vec![Paragraph::text(text).into()])
}

/// `depth` lists, each nested in the only item of the one above
fn nested_list(depth: usize) -> List {
    let mut list = List::new(
        ListKind::Bullet,
        vec![ListItem::paragraph(Paragraph::text("leaf"))],
    );
    for _ in 1..depth {
        list = List::new(
            ListKind::Bullet,
            vec![ListItem::new(vec![
                Paragraph::text("item").into(),
                ListEntry::List(list),
            ])],
        );
    }
    list
}

// =============================================================================
// PART 1: LISTS
// =============================================================================

mod list_tests {
    use super::*;

    #[test]
    fn test_nested_lists_map_to_numbering_definitions() {
        let innermost = List::new(
            ListKind::Decimal,
            vec![ListItem::paragraph(Paragraph::text("three"))],
        );
        let middle = List::new(
            ListKind::Decimal,
            vec![ListItem::new(vec![
                Paragraph::text("two").into(),
                ListEntry::List(innermost),
            ])],
        );
        let top = List::new(
            ListKind::Decimal,
            vec![ListItem::new(vec![
                Paragraph::text("one").into(),
                ListEntry::List(middle),
            ])],
        );

        let mut doc = Document::new();
        doc.set_list(&top).unwrap();
        let xml = document_xml(doc);

        assert!(xml.contains(r#"<w:numPr><w:ilvl w:val="0"/><w:numId w:val="1"/></w:numPr>"#));
        assert!(xml.contains(r#"<w:numPr><w:ilvl w:val="1"/><w:numId w:val="2"/></w:numPr>"#));
        assert!(xml.contains(r#"<w:numPr><w:ilvl w:val="2"/><w:numId w:val="2"/></w:numPr>"#));
        assert_eq!(attribute_values(&xml, "w:val").iter().filter(|v| *v == "ListParagraph").count(), 3);

        let one = xml.find("one").unwrap();
        let two = xml.find("two").unwrap();
        let three = xml.find("three").unwrap();
        assert!(one < two && two < three);
    }

    #[test]
    fn test_follow_up_paragraphs_are_indented_not_numbered() {
        let list = List::new(
            ListKind::Bullet,
            vec![ListItem::new(vec![
                Paragraph::text("first").into(),
                Paragraph::text("continued").into(),
            ])],
        );
        let mut doc = Document::new();
        doc.set_list(&list).unwrap();
        let xml = document_xml(doc);

        assert_eq!(xml.matches("<w:numPr>").count(), 1);
        assert!(xml.contains(r#"<w:ind w:left="720""#));
    }

    #[test]
    fn test_recursion_limit_leaves_body_untouched() {
        let mut doc = Document::new();
        doc.set_paragraph(&Paragraph::text("intro")).unwrap();

        let err = doc.set_list(&nested_list(1001)).unwrap_err();
        assert_eq!(err.to_string(), "set_list failed");
        assert_eq!(
            err.structural(),
            Some(&StructuralError::RecursionLimit { limit: 1000 })
        );

        let xml = document_xml(doc);
        assert!(xml.contains("intro"));
        assert!(!xml.contains("<w:numPr>"));
        assert!(!xml.contains("leaf"));
    }

    #[test]
    fn test_deep_list_within_limit() {
        let mut doc = Document::new();
        doc.set_list(&nested_list(12)).unwrap();
        let xml = document_xml(doc);

        // levels past the numbering definitions stay on the deepest one
        assert_eq!(xml.matches(r#"<w:ilvl w:val="8"/>"#).count(), 4);
        assert!(!xml.contains(r#"<w:ilvl w:val="9"/>"#));
    }

    #[test]
    fn test_list_color_cascades_into_items() {
        let mut list = List::new(
            ListKind::Bullet,
            vec![
                ListItem::paragraph(Paragraph::text("inherits")),
                ListItem::paragraph(Paragraph::text("keeps").with_style(ParagraphStyle {
                    color: Some("00FF00".to_string()),
                    ..Default::default()
                })),
            ],
        );
        list.style.color = Some("FF0000".to_string());

        let mut doc = Document::new();
        doc.set_list(&list).unwrap();
        let xml = document_xml(doc);

        assert!(xml.contains(r#"<w:color w:val="FF0000"/></w:rPr><w:t>inherits</w:t>"#));
        assert!(xml.contains(r#"<w:color w:val="00FF00"/></w:rPr><w:t>keeps</w:t>"#));
    }
}

// =============================================================================
// PART 2: TABLES
// =============================================================================

mod table_tests {
    use super::*;

    #[test]
    fn test_row_wider_than_fixed_grid_is_rejected() {
        let table = Table::fixed(
            vec![2000, 2000],
            vec![TableRow::new(vec![cell("a"), cell("b"), cell("c")])],
        );

        let mut doc = Document::new();
        let err = doc.set_table(&table).unwrap_err();
        assert!(matches!(err.root_cause(), DocxError::Structural(_)));
        assert_eq!(
            err.structural(),
            Some(&StructuralError::GridTooNarrow {
                grid: 2,
                required: 3,
                row: 0
            })
        );

        let xml = document_xml(doc);
        assert!(!xml.contains("<w:tbl>"));
    }

    #[test]
    fn test_spanned_cells_fit_the_grid() {
        let table = Table::fixed(
            vec![1000, 1000, 1000],
            vec![
                TableRow::new(vec![cell("wide").with_span(2), cell("narrow")]),
                TableRow::new(vec![cell("a"), cell("b"), cell("c")]),
            ],
        );

        let mut doc = Document::new();
        doc.set_table(&table).unwrap();
        let xml = document_xml(doc);

        assert!(xml.contains(r#"<w:gridSpan w:val="2"/>"#));
        assert!(xml.contains(r#"<w:tblW w:w="3000" w:type="dxa"/>"#));
        assert!(xml.contains(r#"<w:tblLayout w:type="fixed"/>"#));
        assert_eq!(xml.matches("<w:tr>").count(), 2);
    }

    #[test]
    fn test_failing_nested_table_drops_the_outer_table() {
        let inner = Table::fixed(
            vec![500],
            vec![TableRow::new(vec![cell("x"), cell("y")])],
        );
        let outer = Table::new(vec![TableRow::new(vec![TableCell::new(vec![
            Paragraph::text("outer").into(),
            Block::Table(inner),
        ])])]);

        let mut doc = Document::new();
        assert!(doc.set_table(&outer).is_err());
        let xml = document_xml(doc);
        assert!(!xml.contains("outer"));
        assert!(!xml.contains("<w:tbl>"));
    }

    #[test]
    fn test_table_font_size_cascades_into_cells() {
        let mut table = Table::new(vec![TableRow::new(vec![cell("sized")])]);
        table.style = TableStyle {
            font_size: Some(18),
            ..Default::default()
        };

        let mut doc = Document::new();
        doc.set_table(&table).unwrap();
        let xml = document_xml(doc);
        assert!(xml.contains(r#"<w:sz w:val="18"/><w:szCs w:val="18"/></w:rPr><w:t>sized</w:t>"#));
    }

    #[test]
    fn test_empty_table_renders_nothing() {
        let mut doc = Document::new();
        doc.set_table(&Table::new(vec![TableRow::default()])).unwrap();
        let xml = document_xml(doc);
        assert!(!xml.contains("<w:tbl>"));
    }
}

// =============================================================================
// PART 3: TEXT AND CALLOUTS
// =============================================================================

mod text_tests {
    use super::*;

    #[test]
    fn test_markup_characters_are_escaped() {
        let mut doc = Document::new();
        doc.set_paragraph(&Paragraph::new(vec![Text::new("a < b & \"c\"")]))
            .unwrap();
        let xml = document_xml(doc);
        assert!(xml.contains("a &lt; b &amp;"));
    }

    #[test]
    fn test_control_characters_are_dropped() {
        let mut doc = Document::new();
        doc.set_paragraph(&Paragraph::new(vec![
            Text::new("tab\u{0B}vt\u{01}x"),
            Text::link("site", "https://example.com/\u{0B}path"),
        ]))
        .unwrap();
        let mut package = Unpacked::new(doc.write_to_buffer().unwrap());

        let xml = package.xml("word/document.xml");
        assert!(xml.contains("<w:t>tabvtx</w:t>"));
        assert!(!xml.contains('\u{0B}') && !xml.contains('\u{01}'));

        let rels = package.xml("word/_rels/document.xml.rels");
        assert!(rels.contains(r#"Target="https://example.com/path""#));
    }

    #[test]
    fn test_alert_in_document() {
        let mut doc = Document::new();
        doc.set_alert(&Alert::new(vec![Paragraph::text("Mind the gap")]))
            .unwrap();
        let xml = document_xml(doc);

        assert!(xml.contains("<w:t>Attention!</w:t>"));
        assert!(xml.contains(r#"<w:gridCol w:w="9360"/>"#));
        assert_eq!(attribute_values(&xml, "w:color").iter().filter(|c| *c == "DB4912").count(), 4);
    }

    #[test]
    fn test_space_and_page_break() {
        let mut doc = Document::new();
        doc.set_space();
        doc.set_page_break();
        let xml = document_xml(doc);
        assert!(xml.contains(r#"<w:br w:type="page"/>"#));
        assert!(xml.contains(r#"<w:t xml:space="preserve"> </w:t>"#));
    }
}
