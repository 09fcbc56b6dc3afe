//! Package Assembly Tests
//!
//! Build whole documents through the public API, then unpack the archive
//! and check the parts and how they reference each other.

mod common;

use chrono::{TimeZone, Utc};
use common::Unpacked;
use zdocx_model::{Margins, Orientation, Paragraph, Text};
use zdocx_ooxml::{Document, DocumentConfig, DocxError};

fn fixed_config() -> DocumentConfig {
    DocumentConfig {
        created: Some(Utc.with_ymd_and_hms(2024, 5, 17, 8, 0, 0).unwrap()),
        ..Default::default()
    }
}

// =============================================================================
// PART 1: HEADERS AND FOOTERS
// =============================================================================

mod header_footer_tests {
    use super::*;

    fn report() -> Unpacked {
        let mut doc = Document::new();
        doc.set_header(vec![Paragraph::text("Quarterly report")]);
        doc.set_footer(vec![Paragraph::text("ACME Corp.")]);
        doc.set_paragraph(&Paragraph::text("Overview").with_class("h1"))
            .unwrap();
        Unpacked::new(doc.write_to_buffer().unwrap())
    }

    #[test]
    fn test_header_and_footer_parts_exist() {
        let mut package = report();
        assert!(package.contains("word/header1.xml"));
        assert!(package.contains("word/footer1.xml"));
        assert!(!package.contains("word/header2.xml"));
        assert!(!package.contains("word/footer2.xml"));

        let header = package.xml("word/header1.xml");
        assert!(header.contains("<w:t>Quarterly report</w:t>"));
        let footer = package.xml("word/footer1.xml");
        assert!(footer.contains("<w:t>ACME Corp.</w:t>"));
    }

    #[test]
    fn test_document_relationships_reference_sections() {
        let mut package = report();
        let rels = package.xml("word/_rels/document.xml.rels");
        assert!(rels.contains(r#"Id="rIdDefaultHeader""#));
        assert!(rels.contains(r#"Target="header1.xml""#));
        assert!(rels.contains(r#"Id="rIdDefaultFooter""#));
        assert!(rels.contains(r#"Target="footer1.xml""#));
        for fixed in ["styles.xml", "numbering.xml", "fontTable.xml", "settings.xml", "theme/theme1.xml"] {
            assert!(rels.contains(&format!(r#"Target="{}""#, fixed)), "missing {}", fixed);
        }
    }

    #[test]
    fn test_content_types_override_sections() {
        let mut package = report();
        let types = package.xml("[Content_Types].xml");
        assert!(types.contains(r#"PartName="/word/header1.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.header+xml""#));
        assert!(types.contains(r#"PartName="/word/footer1.xml" ContentType="application/vnd.openxmlformats-officedocument.wordprocessingml.footer+xml""#));
        assert!(!types.contains("header2.xml"));
    }

    #[test]
    fn test_section_properties_reference_parts() {
        let mut package = report();
        let document = package.xml("word/document.xml");
        assert!(document.contains(r#"<w:pStyle w:val="h1"/>"#));
        assert!(document.contains(r#"<w:headerReference w:type="default" r:id="rIdDefaultHeader"/>"#));
        assert!(document.contains(r#"<w:footerReference w:type="default" r:id="rIdDefaultFooter"/>"#));
        assert!(!document.contains("titlePg"));
    }

    #[test]
    fn test_parts_without_relationships_have_no_rels_file() {
        let package = report();
        assert!(!package.contains("word/_rels/header1.xml.rels"));
        assert!(!package.contains("word/_rels/footer1.xml.rels"));
    }

    #[test]
    fn test_first_page_parts_target_their_own_files() {
        let mut doc = Document::new();
        doc.set_first_page_header(vec![Paragraph::text("Cover header")]);
        doc.set_first_page_footer(vec![Paragraph::text("Cover footer")]);
        let mut package = Unpacked::new(doc.write_to_buffer().unwrap());

        let rels = package.xml("word/_rels/document.xml.rels");
        assert!(rels.contains(r#"Id="rIdFirstHeader" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/header" Target="header2.xml""#));
        assert!(rels.contains(r#"Id="rIdFirstFooter" Type="http://schemas.openxmlformats.org/officeDocument/2006/relationships/footer" Target="footer2.xml""#));

        let document = package.xml("word/document.xml");
        assert!(document.contains("<w:titlePg/>"));
        assert!(package.xml("word/header2.xml").contains("Cover header"));
        // first page footers never carry the page number table
        assert!(!package.xml("word/footer2.xml").contains("<w:tbl>"));
    }

    #[test]
    fn test_footer_without_page_numbers() {
        let mut doc = Document::with_config(DocumentConfig {
            footer_page_numbers: false,
            ..Default::default()
        });
        doc.set_footer(vec![Paragraph::text("plain")]);
        let mut package = Unpacked::new(doc.write_to_buffer().unwrap());

        let footer = package.xml("word/footer1.xml");
        assert!(!footer.contains("<w:tbl>"));
        assert!(!footer.contains("PAGE"));
    }
}

// =============================================================================
// PART 2: PAGE SETUP
// =============================================================================

mod page_setup_tests {
    use super::*;

    #[test]
    fn test_unset_margins_default_to_one_inch() {
        let mut package = Unpacked::new(Document::new().write_to_buffer().unwrap());
        let document = package.xml("word/document.xml");
        assert!(document.contains(
            r#"<w:pgMar w:top="1440" w:right="1440" w:bottom="1440" w:left="1440" w:header="1440" w:footer="1440" w:gutter="0"/>"#
        ));
        assert!(document.contains(r#"<w:pgSz w:w="12240" w:h="15840"/>"#));
    }

    #[test]
    fn test_partial_margins_and_landscape() {
        let mut doc = Document::with_margins(Margins {
            top: Some(720),
            ..Default::default()
        });
        doc.set_orientation(Orientation::Landscape);
        let mut package = Unpacked::new(doc.write_to_buffer().unwrap());

        let document = package.xml("word/document.xml");
        assert!(document.contains(r#"w:top="720""#));
        assert!(document.contains(r#"w:left="1440""#));
        assert!(document.contains(r#"<w:pgSz w:w="15840" w:h="12240" w:orient="landscape"/>"#));
    }
}

// =============================================================================
// PART 3: METADATA AND ARCHIVE
// =============================================================================

mod archive_tests {
    use super::*;

    #[test]
    fn test_required_parts_present() {
        let package = Unpacked::new(Document::new().write_to_buffer().unwrap());
        for part in [
            "[Content_Types].xml",
            "_rels/.rels",
            "docProps/app.xml",
            "docProps/core.xml",
            "word/document.xml",
            "word/_rels/document.xml.rels",
            "word/settings.xml",
            "word/styles.xml",
            "word/numbering.xml",
            "word/fontTable.xml",
            "word/theme/theme1.xml",
        ] {
            assert!(package.contains(part), "missing {}", part);
        }
    }

    #[test]
    fn test_fixed_timestamp_makes_output_reproducible() {
        let build = || {
            let mut doc = Document::with_config(fixed_config());
            doc.set_paragraph(&Paragraph::new(vec![Text::link("site", "https://example.com")]))
                .unwrap();
            doc.finish().unwrap()
        };
        let first = build();
        let second = build();

        let names: Vec<_> = first.part_names().collect();
        assert_eq!(names, second.part_names().collect::<Vec<_>>());
        for name in names {
            assert_eq!(first.part(name), second.part(name), "{} differs", name);
        }
        assert!(first
            .part_str("docProps/core.xml")
            .unwrap()
            .contains("2024-05-17T08:00:00Z"));
    }

    #[test]
    fn test_hyperlinks_are_external_relationships() {
        let mut doc = Document::new();
        doc.set_paragraph(&Paragraph::new(vec![
            Text::link("first", "https://example.com/?q=a&b"),
            Text::link("second", "https://example.org"),
        ]))
        .unwrap();
        let mut package = Unpacked::new(doc.write_to_buffer().unwrap());

        let document = package.xml("word/document.xml");
        assert!(document.contains(r#"<w:hyperlink r:id="rIdLink0" w:history="1">"#));
        assert!(document.contains(r#"<w:hyperlink r:id="rIdLink1" w:history="1">"#));

        let rels = package.xml("word/_rels/document.xml.rels");
        assert!(rels.contains(r#"Target="https://example.com/?q=a&amp;b" TargetMode="External""#));
    }

    #[test]
    fn test_save_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.docx");

        let mut doc = Document::new();
        doc.set_paragraph(&Paragraph::text("saved")).unwrap();
        doc.save(&path).unwrap();

        let mut package = Unpacked::new(std::fs::read(&path).unwrap());
        assert!(package.xml("word/document.xml").contains("saved"));
    }

    #[test]
    fn test_save_into_missing_directory_fails_with_context() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("report.docx");

        let err = Document::new().save(&path).unwrap_err();
        assert_eq!(err.to_string(), "save package failed");
        assert!(matches!(err.root_cause(), DocxError::Io(_)));
    }
}
