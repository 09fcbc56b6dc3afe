//! Fixtures shared by the integration tests

#![allow(dead_code)]

use std::io::{Cursor, Read};

use image::{DynamicImage, ImageFormat, RgbImage};
use zip::ZipArchive;

/// A PNG of the given pixel size
pub fn png_bytes(width: u32, height: u32) -> Vec<u8> {
    encode(width, height, ImageFormat::Png)
}

/// A JPEG of the given pixel size
pub fn jpeg_bytes(width: u32, height: u32) -> Vec<u8> {
    encode(width, height, ImageFormat::Jpeg)
}

fn encode(width: u32, height: u32, format: ImageFormat) -> Vec<u8> {
    let image = DynamicImage::ImageRgb8(RgbImage::from_pixel(width, height, image::Rgb([30, 90, 160])));
    let mut buffer = Cursor::new(Vec::new());
    image.write_to(&mut buffer, format).unwrap();
    buffer.into_inner()
}

/// An unpacked archive
pub struct Unpacked {
    archive: ZipArchive<Cursor<Vec<u8>>>,
}

impl Unpacked {
    pub fn new(bytes: Vec<u8>) -> Self {
        Self {
            archive: ZipArchive::new(Cursor::new(bytes)).expect("valid ZIP archive"),
        }
    }

    pub fn names(&self) -> Vec<String> {
        self.archive.file_names().map(str::to_string).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.archive.file_names().any(|part| part == name)
    }

    pub fn bytes(&mut self, name: &str) -> Vec<u8> {
        let mut file = self
            .archive
            .by_name(name)
            .unwrap_or_else(|_| panic!("missing part {}", name));
        let mut contents = Vec::new();
        file.read_to_end(&mut contents).unwrap();
        contents
    }

    /// Part contents, checked to be well-formed XML
    pub fn xml(&mut self, name: &str) -> String {
        let text = String::from_utf8(self.bytes(name)).unwrap();
        assert_well_formed(&text);
        text
    }
}

/// Parse `xml` to the end, panicking on the first well-formedness error
pub fn assert_well_formed(xml: &str) {
    let mut reader = quick_xml::Reader::from_str(xml);
    loop {
        match reader.read_event() {
            Ok(quick_xml::events::Event::Eof) => break,
            Ok(_) => {}
            Err(err) => panic!("malformed XML at {}: {}", reader.buffer_position(), err),
        }
    }
}

/// Values of every `name="..."` attribute in `xml`, in document order
pub fn attribute_values(xml: &str, name: &str) -> Vec<String> {
    let needle = format!(" {}=\"", name);
    xml.match_indices(&needle)
        .filter_map(|(start, _)| {
            let rest = &xml[start + needle.len()..];
            rest.find('"').map(|end| rest[..end].to_string())
        })
        .collect()
}
