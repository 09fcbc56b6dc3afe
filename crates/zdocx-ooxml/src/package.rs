//! Package archive
//!
//! A DOCX file is a ZIP archive of XML parts and media. [`Package`] holds the
//! finished parts in memory and writes them out in a stable order.

use std::fs::File;
use std::io::{Cursor, Seek, Write};
use std::path::Path;

use log::debug;
use zip::write::{SimpleFileOptions, ZipWriter};
use zip::CompressionMethod;

use crate::error::{DocxError, Result};

/// The parts of a finished document, in insertion order
#[derive(Debug, Default, Clone)]
pub struct Package {
    parts: Vec<(String, Vec<u8>)>,
}

impl Package {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a part; a name can only be used once, ignoring ASCII case
    pub fn insert(&mut self, name: impl Into<String>, contents: impl Into<Vec<u8>>) -> Result<()> {
        let name = name.into();
        if self.contains(&name) {
            return Err(DocxError::Validation(format!("duplicate package part {}", name)));
        }
        self.parts.push((name, contents.into()));
        Ok(())
    }

    /// Contents of a part; names compare ASCII case-insensitively
    pub fn part(&self, name: &str) -> Option<&[u8]> {
        self.parts
            .iter()
            .find(|(part, _)| part.eq_ignore_ascii_case(name))
            .map(|(_, contents)| contents.as_slice())
    }

    /// Contents of a part as text
    pub fn part_str(&self, name: &str) -> Option<&str> {
        self.part(name).and_then(|bytes| std::str::from_utf8(bytes).ok())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.parts.iter().any(|(part, _)| part.eq_ignore_ascii_case(name))
    }

    pub fn part_names(&self) -> impl Iterator<Item = &str> {
        self.parts.iter().map(|(name, _)| name.as_str())
    }

    pub fn len(&self) -> usize {
        self.parts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }

    /// Write the archive to any writer
    pub fn write_to<W: Write + Seek>(&self, writer: W) -> Result<()> {
        let mut zip = ZipWriter::new(writer);
        let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

        for (name, contents) in &self.parts {
            debug!("writing part {} ({} bytes)", name, contents.len());
            zip.start_file(name.as_str(), options)?;
            zip.write_all(contents)?;
        }

        zip.finish()?;
        Ok(())
    }

    /// Write the archive to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let path = path.as_ref();
        if path.as_os_str().is_empty() {
            return Err(DocxError::Validation("no file name given".to_string()));
        }
        let file = File::create(path)?;
        self.write_to(file)
    }

    /// The archive as bytes
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        let mut buffer = Cursor::new(Vec::new());
        self.write_to(&mut buffer)?;
        Ok(buffer.into_inner())
    }
}
