//! Document builder
//!
//! Content is rendered as soon as it is added: each builder call turns its
//! argument into markup and appends it to the body, or fails and leaves the
//! document exactly as it was. Headers and footers are kept as paragraphs
//! and rendered when the package is assembled.
//!
//! # Example
//!
//! ```
//! use zdocx_model::{Paragraph, Text};
//! use zdocx_ooxml::Document;
//!
//! let mut doc = Document::new();
//! doc.set_header(vec![Paragraph::text("Monthly report")]);
//! doc.set_paragraph(&Paragraph::text("Summary").with_class("h1")).unwrap();
//! doc.set_paragraph(&Paragraph::new(vec![Text::link("Details", "https://example.com")]))
//!     .unwrap();
//!
//! let package = doc.finish().unwrap();
//! assert!(package.contains("word/header1.xml"));
//! ```

use std::io::Cursor;
use std::path::Path;

use log::debug;
use zdocx_model::{Alert, List, Margins, Orientation, Paragraph, Section, Table};

use crate::config::DocumentConfig;
use crate::error::{DocxError, Result, ResultExt};
use crate::markup::{Fragment, XmlBuilder};
use crate::package::Package;
use crate::parts::{self, SectionPartOptions};
use crate::registry::{Placement, Registry};
use crate::render::{self, RenderContext, SectionProperties};
use crate::style::Inherited;
use crate::template;
use crate::units;

/// Header and footer paragraphs per slot
#[derive(Debug, Default)]
struct HeadersFooters {
    header: Vec<Paragraph>,
    footer: Vec<Paragraph>,
    first_header: Vec<Paragraph>,
    first_footer: Vec<Paragraph>,
}

impl HeadersFooters {
    fn get(&self, placement: Placement) -> &[Paragraph] {
        match placement {
            Placement::Header => &self.header,
            Placement::Footer => &self.footer,
            Placement::FirstHeader => &self.first_header,
            Placement::FirstFooter => &self.first_footer,
            Placement::Body => &[],
        }
    }

    /// Filled slots, in relationship order
    fn present(&self) -> Vec<Placement> {
        [
            Placement::Header,
            Placement::Footer,
            Placement::FirstHeader,
            Placement::FirstFooter,
        ]
        .into_iter()
        .filter(|placement| !self.get(*placement).is_empty())
        .collect()
    }
}

/// A document being built
#[derive(Debug)]
pub struct Document {
    config: DocumentConfig,
    body: Vec<Fragment>,
    sections: HeadersFooters,
    registry: Registry,
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

impl Document {
    /// Portrait document with default margins
    pub fn new() -> Self {
        Self::with_config(DocumentConfig::default())
    }

    pub fn with_config(config: DocumentConfig) -> Self {
        Self {
            config,
            body: Vec::new(),
            sections: HeadersFooters::default(),
            registry: Registry::new(),
        }
    }

    /// Document with the given page margins; unset sides stay at the default
    pub fn with_margins(margins: Margins) -> Self {
        Self::with_config(DocumentConfig {
            margins,
            ..Default::default()
        })
    }

    /// Override the sides set in `margins`, keeping the others
    pub fn set_margins(&mut self, margins: Margins) {
        self.config.margins = margins.or(&self.config.margins);
    }

    pub fn set_orientation(&mut self, orientation: Orientation) {
        self.config.orientation = orientation;
    }

    pub fn set_language(&mut self, language: impl Into<String>) {
        self.config.language = language.into();
    }

    pub fn set_header(&mut self, paragraphs: Vec<Paragraph>) {
        self.sections.header = paragraphs;
    }

    pub fn set_footer(&mut self, paragraphs: Vec<Paragraph>) {
        self.sections.footer = paragraphs;
    }

    pub fn set_first_page_header(&mut self, paragraphs: Vec<Paragraph>) {
        self.sections.first_header = paragraphs;
    }

    pub fn set_first_page_footer(&mut self, paragraphs: Vec<Paragraph>) {
        self.sections.first_footer = paragraphs;
    }

    pub fn config(&self) -> &DocumentConfig {
        &self.config
    }

    /// Images and hyperlinks registered so far
    pub fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Width between the page margins
    pub fn inner_width(&self) -> i32 {
        units::inner_width(self.config.orientation, &self.config.margins)
    }

    /// Height between the page margins
    pub fn inner_height(&self) -> i32 {
        units::inner_height(self.config.orientation, &self.config.margins)
    }

    pub fn set_paragraph(&mut self, paragraph: &Paragraph) -> Result<()> {
        self.append("set_paragraph", |ctx, xml| {
            render::render_paragraph(ctx, xml, paragraph, &Inherited::default())
        })
    }

    pub fn set_list(&mut self, list: &List) -> Result<()> {
        self.append("set_list", |ctx, xml| {
            render::render_list(ctx, xml, list, &Inherited::default())
        })
    }

    pub fn set_table(&mut self, table: &Table) -> Result<()> {
        self.append("set_table", |ctx, xml| {
            render::render_table(ctx, xml, table, &Inherited::default())
        })
    }

    /// Bordered callout spanning the inner page width unless it sets a width
    pub fn set_alert(&mut self, alert: &Alert) -> Result<()> {
        let width = self.inner_width().max(0) as u32;
        self.append("set_alert", |ctx, xml| render::render_alert(ctx, xml, alert, width))
    }

    /// Empty line
    pub fn set_space(&mut self) {
        let mut xml = XmlBuilder::new();
        render::render_space(&mut xml);
        self.body.push(xml.finish());
    }

    pub fn set_page_break(&mut self) {
        let mut xml = XmlBuilder::new();
        render::render_page_break(&mut xml);
        self.body.push(xml.finish());
    }

    /// End the current section; unset values come from the document
    pub fn set_section(&mut self, section: &Section) {
        let mut xml = XmlBuilder::new();
        render::render_section_break(
            &mut xml,
            section,
            self.config.orientation,
            &self.config.margins,
        );
        self.body.push(xml.finish());
    }

    /// Render into a scratch builder; keep the markup only on success
    fn append<F>(&mut self, operation: &str, render: F) -> Result<()>
    where
        F: FnOnce(&mut RenderContext<'_>, &mut XmlBuilder) -> Result<()>,
    {
        let checkpoint = self.registry.checkpoint();
        let mut xml = XmlBuilder::new();
        let mut ctx = RenderContext::new(&mut self.registry, Placement::Body);

        match render(&mut ctx, &mut xml) {
            Ok(()) => {
                let fragment = xml.finish();
                if !fragment.is_empty() {
                    self.body.push(fragment);
                }
                Ok(())
            }
            Err(err) => {
                self.registry.rollback(checkpoint);
                Err(err).context(operation)
            }
        }
    }

    /// Assemble every part of the package
    pub fn finish(mut self) -> Result<Package> {
        let present = self.sections.present();
        debug!(
            "assembling package: {} body fragments, {} section parts",
            self.body.len(),
            present.len()
        );

        let options = SectionPartOptions {
            page_numbers: self.config.footer_page_numbers,
            inner_width: self.inner_width(),
        };
        let mut section_parts = Vec::with_capacity(present.len());
        for placement in &present {
            let paragraphs = self.sections.get(*placement);
            let fragment = parts::header_footer(&mut self.registry, *placement, paragraphs, options)
                .context(placement.file_name())?;
            section_parts.push((*placement, fragment));
        }

        let mut xml = XmlBuilder::document();
        parts::open_content_root(&mut xml, "w:document");
        xml.start("w:body").open();
        for fragment in &self.body {
            xml.append(fragment);
        }
        render::write_section_properties(
            &mut xml,
            &SectionProperties::final_section(
                self.config.orientation,
                self.config.margins,
                present.clone(),
            ),
        );
        xml.end();
        xml.end();
        let document = xml.finish();

        let mut package = Package::new();
        package.insert(
            parts::CONTENT_TYPES_PART,
            parts::content_types(&present, &self.registry).into_bytes(),
        )?;
        package.insert(Placement::Body.part_name(), document.into_bytes())?;
        package.insert(
            Placement::Body.rels_part_name(),
            parts::document_relationships(&present, &self.registry)
                .context("document relationships")?
                .into_bytes(),
        )?;

        for (placement, fragment) in section_parts {
            package.insert(placement.part_name(), fragment.into_bytes())?;
            if let Some(rels) = parts::part_relationships(placement, &self.registry)
                .context("section relationships")?
            {
                package.insert(placement.rels_part_name(), rels.into_bytes())?;
            }
        }

        package.insert(parts::SETTINGS_PART, parts::settings(&self.config.language).into_bytes())?;
        package.insert(
            parts::CORE_PROPERTIES_PART,
            parts::core_properties(&self.config, self.config.created_at()).into_bytes(),
        )?;
        for part in template::static_parts() {
            package.insert(part.path, part.bytes)?;
        }

        for image in self.registry.images() {
            package
                .insert(image.part_name(), image.bytes.clone())
                .context("embed media")?;
        }

        debug!("package assembled with {} parts", package.len());
        Ok(package)
    }

    /// Assemble the package and return the archive bytes
    pub fn write_to_buffer(self) -> Result<Vec<u8>> {
        let package = self.finish().context("assemble package")?;
        let mut buffer = Cursor::new(Vec::new());
        package.write_to(&mut buffer).context("write archive")?;
        Ok(buffer.into_inner())
    }

    /// Assemble the package and write it to `path`
    pub fn save<P: AsRef<Path>>(self, path: P) -> Result<()> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(DocxError::Validation("no file name given".to_string()));
        }
        let package = self.finish().context("assemble package")?;
        package.save(path).context("save package")
    }
}
