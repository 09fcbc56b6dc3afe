//! Relationship and ID registry
//!
//! Every image and hyperlink placed in the document is recorded here with a
//! stable relationship id. Images are numbered per placement bucket (body,
//! headers, footers), hyperlinks share one package-wide sequence, and drawing
//! object ids come from their own package-wide counter.
//!
//! Rendering takes a [`Checkpoint`] before it starts; if it fails, rolling
//! back removes every registration it made.

use log::{trace, warn};

use crate::image::ImageKind;

/// Where a piece of content is rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Placement {
    Body,
    Header,
    Footer,
    FirstHeader,
    FirstFooter,
}

impl Placement {
    fn index(self) -> usize {
        match self {
            Self::Body => 0,
            Self::Header => 1,
            Self::Footer => 2,
            Self::FirstHeader => 3,
            Self::FirstFooter => 4,
        }
    }

    fn image_prefix(self) -> &'static str {
        match self {
            Self::Body => "rIdImage",
            Self::Header => "rIdHeaderImage",
            Self::Footer => "rIdFooterImage",
            Self::FirstHeader => "rIdFirstHeaderImage",
            Self::FirstFooter => "rIdFirstFooterImage",
        }
    }

    /// File name of the part inside `word/`
    pub fn file_name(self) -> &'static str {
        match self {
            Self::Body => "document.xml",
            Self::Header => "header1.xml",
            Self::FirstHeader => "header2.xml",
            Self::Footer => "footer1.xml",
            Self::FirstFooter => "footer2.xml",
        }
    }

    /// Full part name, e.g. `word/header1.xml`
    pub fn part_name(self) -> String {
        format!("word/{}", self.file_name())
    }

    /// Relationships part belonging to this part
    pub fn rels_part_name(self) -> String {
        format!("word/_rels/{}.rels", self.file_name())
    }

    /// Relationship id the main document uses to reference this part
    pub fn relationship_id(self) -> Option<&'static str> {
        match self {
            Self::Body => None,
            Self::Header => Some("rIdDefaultHeader"),
            Self::FirstHeader => Some("rIdFirstHeader"),
            Self::Footer => Some("rIdDefaultFooter"),
            Self::FirstFooter => Some("rIdFirstFooter"),
        }
    }

    pub fn is_header(self) -> bool {
        matches!(self, Self::Header | Self::FirstHeader)
    }
}

/// An image registered for embedding
#[derive(Debug, Clone)]
pub struct EmbeddedImage {
    pub placement: Placement,
    /// Position in the placement's sequence, starting at 1
    pub index: u32,
    pub rel_id: String,
    /// File name under `word/media/`
    pub media_name: String,
    pub kind: ImageKind,
    pub bytes: Vec<u8>,
}

impl EmbeddedImage {
    /// Target relative to `word/`
    pub fn target(&self) -> String {
        format!("media/{}", self.media_name)
    }

    pub fn part_name(&self) -> String {
        format!("word/media/{}", self.media_name)
    }
}

/// An external hyperlink
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LinkRelationship {
    pub placement: Placement,
    pub rel_id: String,
    pub url: String,
}

/// Registry state to roll back to
#[derive(Debug, Clone, Copy)]
pub struct Checkpoint {
    images: usize,
    links: usize,
    image_counters: [u32; 5],
    next_link: u32,
    next_drawing_id: u32,
}

/// Id allocation for images, links and drawing objects
#[derive(Debug, Clone)]
pub struct Registry {
    images: Vec<EmbeddedImage>,
    links: Vec<LinkRelationship>,
    image_counters: [u32; 5],
    next_link: u32,
    next_drawing_id: u32,
}

impl Default for Registry {
    fn default() -> Self {
        Self {
            images: Vec::new(),
            links: Vec::new(),
            image_counters: [0; 5],
            next_link: 0,
            next_drawing_id: 1,
        }
    }
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record an image and return its relationship id
    pub fn register_image(
        &mut self,
        placement: Placement,
        file_name: &str,
        kind: ImageKind,
        bytes: Vec<u8>,
    ) -> String {
        let counter = &mut self.image_counters[placement.index()];
        *counter += 1;
        let index = *counter;
        let rel_id = format!("{}{}", placement.image_prefix(), index);
        let media_name = self.unique_media_name(file_name, kind);

        trace!("registered image {} as {} ({:?})", media_name, rel_id, placement);

        self.images.push(EmbeddedImage {
            placement,
            index,
            rel_id: rel_id.clone(),
            media_name,
            kind,
            bytes,
        });
        rel_id
    }

    /// Record a hyperlink and return its relationship id
    pub fn register_link(&mut self, placement: Placement, url: &str) -> String {
        let rel_id = format!("rIdLink{}", self.next_link);
        self.next_link += 1;

        trace!("registered link {} as {} ({:?})", url, rel_id, placement);

        self.links.push(LinkRelationship {
            placement,
            rel_id: rel_id.clone(),
            url: url.to_string(),
        });
        rel_id
    }

    /// Next `wp:docPr` id
    pub fn next_drawing_id(&mut self) -> u32 {
        let id = self.next_drawing_id;
        self.next_drawing_id += 1;
        id
    }

    pub fn checkpoint(&self) -> Checkpoint {
        Checkpoint {
            images: self.images.len(),
            links: self.links.len(),
            image_counters: self.image_counters,
            next_link: self.next_link,
            next_drawing_id: self.next_drawing_id,
        }
    }

    /// Forget everything registered after `checkpoint`
    pub fn rollback(&mut self, checkpoint: Checkpoint) {
        self.images.truncate(checkpoint.images);
        self.links.truncate(checkpoint.links);
        self.image_counters = checkpoint.image_counters;
        self.next_link = checkpoint.next_link;
        self.next_drawing_id = checkpoint.next_drawing_id;
    }

    /// All images in registration order
    pub fn images(&self) -> &[EmbeddedImage] {
        &self.images
    }

    pub fn images_in(&self, placement: Placement) -> impl Iterator<Item = &EmbeddedImage> {
        self.images.iter().filter(move |image| image.placement == placement)
    }

    pub fn links(&self) -> &[LinkRelationship] {
        &self.links
    }

    pub fn links_in(&self, placement: Placement) -> impl Iterator<Item = &LinkRelationship> {
        self.links.iter().filter(move |link| link.placement == placement)
    }

    /// True when the placement has images or links of its own
    pub fn has_relationships(&self, placement: Placement) -> bool {
        self.images_in(placement).next().is_some() || self.links_in(placement).next().is_some()
    }

    fn unique_media_name(&self, file_name: &str, kind: ImageKind) -> String {
        let base = media_base_name(file_name, kind, self.images.len() + 1);
        if !self.media_name_taken(&base) {
            return base;
        }

        let (stem, extension) = match base.rfind('.') {
            Some(dot) if dot > 0 => (&base[..dot], &base[dot..]),
            _ => (base.as_str(), ""),
        };
        let mut n = 1;
        loop {
            let candidate = format!("{}-{}{}", stem, n, extension);
            if !self.media_name_taken(&candidate) {
                warn!("media name {} already used, storing as {}", base, candidate);
                return candidate;
            }
            n += 1;
        }
    }

    /// Part names compare ASCII case-insensitively
    fn media_name_taken(&self, name: &str) -> bool {
        self.images
            .iter()
            .any(|image| image.media_name.eq_ignore_ascii_case(name))
    }
}

/// Base name of `file_name` with characters that are unsafe in a part name
/// replaced by `_`. Falls back to `image{n}.{ext}` when nothing is left.
fn media_base_name(file_name: &str, kind: ImageKind, fallback_index: usize) -> String {
    let base = file_name
        .rsplit(&['/', '\\'][..])
        .next()
        .unwrap_or_default()
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || matches!(c, '.' | '-' | '_') {
                c
            } else {
                '_'
            }
        })
        .collect::<String>();

    if base.trim_matches('.').is_empty() {
        format!("image{}.{}", fallback_index, kind.extension())
    } else {
        base
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_image_ids_are_per_placement() {
        let mut registry = Registry::new();
        let body = registry.register_image(Placement::Body, "a.png", ImageKind::Png, vec![]);
        let footer = registry.register_image(Placement::Footer, "b.png", ImageKind::Png, vec![]);
        let body2 = registry.register_image(Placement::Body, "c.png", ImageKind::Png, vec![]);
        let first = registry.register_image(Placement::FirstHeader, "d.png", ImageKind::Png, vec![]);

        assert_eq!(body, "rIdImage1");
        assert_eq!(footer, "rIdFooterImage1");
        assert_eq!(body2, "rIdImage2");
        assert_eq!(first, "rIdFirstHeaderImage1");
        assert_eq!(registry.images_in(Placement::Body).count(), 2);
    }

    #[test]
    fn test_link_ids_are_global_from_zero() {
        let mut registry = Registry::new();
        assert_eq!(registry.register_link(Placement::Body, "https://a"), "rIdLink0");
        assert_eq!(registry.register_link(Placement::Header, "https://b"), "rIdLink1");
        assert_eq!(registry.links_in(Placement::Header).count(), 1);
        assert!(registry.has_relationships(Placement::Header));
        assert!(!registry.has_relationships(Placement::Footer));
    }

    #[test]
    fn test_drawing_ids_are_package_wide() {
        let mut registry = Registry::new();
        assert_eq!(registry.next_drawing_id(), 1);
        assert_eq!(registry.next_drawing_id(), 2);
    }

    #[test]
    fn test_media_names_are_deduplicated() {
        let mut registry = Registry::new();
        registry.register_image(Placement::Body, "img/logo.png", ImageKind::Png, vec![]);
        registry.register_image(Placement::Header, "other/logo.png", ImageKind::Png, vec![]);
        registry.register_image(Placement::Body, "logo.png", ImageKind::Png, vec![]);

        let names: Vec<_> = registry.images().iter().map(|i| i.media_name.as_str()).collect();
        assert_eq!(names, vec!["logo.png", "logo-1.png", "logo-2.png"]);
    }

    #[test]
    fn test_media_names_differing_in_case_are_deduplicated() {
        let mut registry = Registry::new();
        registry.register_image(Placement::Body, "Logo.png", ImageKind::Png, vec![]);
        registry.register_image(Placement::Body, "logo.png", ImageKind::Png, vec![]);
        registry.register_image(Placement::Footer, "LOGO-1.PNG", ImageKind::Png, vec![]);

        let names: Vec<_> = registry.images().iter().map(|i| i.media_name.as_str()).collect();
        assert_eq!(names, vec!["Logo.png", "logo-1.png", "LOGO-1-1.PNG"]);
    }

    #[test]
    fn test_media_name_sanitized_or_generated() {
        assert_eq!(media_base_name("C:\\pics\\my photo.jpg", ImageKind::Jpeg, 1), "my_photo.jpg");
        assert_eq!(media_base_name("", ImageKind::Png, 3), "image3.png");
        assert_eq!(media_base_name("dir/", ImageKind::Jpeg, 2), "image2.jpeg");
    }

    #[test]
    fn test_rollback_forgets_registrations() {
        let mut registry = Registry::new();
        registry.register_image(Placement::Body, "a.png", ImageKind::Png, vec![]);
        let checkpoint = registry.checkpoint();

        registry.register_image(Placement::Body, "b.png", ImageKind::Png, vec![]);
        registry.register_link(Placement::Body, "https://example.com");
        registry.next_drawing_id();
        registry.rollback(checkpoint);

        assert_eq!(registry.images().len(), 1);
        assert!(registry.links().is_empty());
        assert_eq!(
            registry.register_image(Placement::Body, "b.png", ImageKind::Png, vec![]),
            "rIdImage2"
        );
        assert_eq!(registry.register_link(Placement::Body, "https://x"), "rIdLink0");
        assert_eq!(registry.next_drawing_id(), 1);
    }

    #[test]
    fn test_placement_parts() {
        assert_eq!(Placement::Body.part_name(), "word/document.xml");
        assert_eq!(Placement::FirstHeader.part_name(), "word/header2.xml");
        assert_eq!(Placement::Footer.rels_part_name(), "word/_rels/footer1.xml.rels");
        assert_eq!(Placement::FirstFooter.relationship_id(), Some("rIdFirstFooter"));
        assert_eq!(Placement::Body.relationship_id(), None);
    }
}
