//! Content block types.

use serde::{Deserialize, Serialize};

/// A content block in the cleaned document.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Block {
    /// A line classified as a heading
    Heading(Heading),

    /// A line classified as body text
    Paragraph(Paragraph),

    /// An image relocated from the source page
    Image(Image),
}

impl Block {
    /// Create a heading block.
    pub fn heading(text: impl Into<String>, level: u8) -> Self {
        Block::Heading(Heading::new(text, level))
    }

    /// Create a paragraph block.
    pub fn paragraph(text: impl Into<String>) -> Self {
        Block::Paragraph(Paragraph::new(text))
    }

    /// Get the text content of the block, if it has any.
    pub fn text(&self) -> Option<&str> {
        match self {
            Block::Heading(h) => Some(&h.text),
            Block::Paragraph(p) => Some(&p.text),
            Block::Image(_) => None,
        }
    }

    /// Get the heading level (1-6) or None for non-headings.
    pub fn heading_level(&self) -> Option<u8> {
        match self {
            Block::Heading(h) => Some(h.level),
            _ => None,
        }
    }

    /// Check if this block is a heading.
    pub fn is_heading(&self) -> bool {
        matches!(self, Block::Heading(_))
    }

    /// Check if this block is a paragraph.
    pub fn is_paragraph(&self) -> bool {
        matches!(self, Block::Paragraph(_))
    }

    /// Check if this block is an image.
    pub fn is_image(&self) -> bool {
        matches!(self, Block::Image(_))
    }
}

/// A heading line with its classified level.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Heading {
    /// Heading level (1-6)
    pub level: u8,

    /// Heading text
    pub text: String,
}

impl Heading {
    /// Create a new heading. The level is clamped to 1-6.
    pub fn new(text: impl Into<String>, level: u8) -> Self {
        Self {
            level: level.clamp(1, 6),
            text: text.into(),
        }
    }
}

/// A body text paragraph.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Paragraph {
    /// Paragraph text
    pub text: String,
}

impl Paragraph {
    /// Create a new paragraph.
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

/// An image carried over from the source, untransformed.
///
/// The source element's attributes are kept as (name, value) pairs in
/// document order so the image can be re-serialized as found.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Image {
    /// Attributes of the source element
    pub attrs: Vec<(String, String)>,
}

impl Image {
    /// Create an image from its source attributes.
    pub fn new(attrs: Vec<(String, String)>) -> Self {
        Self { attrs }
    }

    /// Create an image with only a `src` attribute.
    pub fn with_src(src: impl Into<String>) -> Self {
        Self {
            attrs: vec![("src".to_string(), src.into())],
        }
    }

    /// Look up an attribute by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Get the image source path, if present.
    pub fn src(&self) -> Option<&str> {
        self.attr("src")
    }

    /// Get the alternative text, if present.
    pub fn alt(&self) -> Option<&str> {
        self.attr("alt")
    }
}
