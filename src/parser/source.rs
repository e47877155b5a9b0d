//! Typed source tree.
//!
//! The parsed HTML is projected into an immutable tree holding only the
//! recognized elements: pages, positioned text fragments, and images.
//! Anything else in the markup is simply not projected, which is what
//! makes the parse tolerant of arbitrary converter noise. Fragments that
//! lack a usable coordinate pair never enter the tree; each page keeps a
//! count of how many were dropped.

/// The typed projection of one source document.
#[derive(Debug, Clone, Default)]
pub struct SourceDocument {
    /// Pages in source order
    pub pages: Vec<SourcePage>,
}

impl SourceDocument {
    /// Number of pages found.
    pub fn page_count(&self) -> usize {
        self.pages.len()
    }

    /// Total positioned fragments across all pages.
    pub fn fragment_count(&self) -> usize {
        self.pages.iter().map(|p| p.fragments.len()).sum()
    }

    /// Total images across all pages.
    pub fn image_count(&self) -> usize {
        self.pages.iter().map(|p| p.images.len()).sum()
    }

    /// Total fragments dropped for missing coordinates.
    pub fn dropped_count(&self) -> usize {
        self.pages.iter().map(|p| p.dropped).sum()
    }

    /// Check whether any page containers were found.
    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }
}

/// One page container and its recognized children.
#[derive(Debug, Clone)]
pub struct SourcePage {
    /// Zero-based position of the page in the source
    pub index: usize,

    /// Positioned text fragments in document order
    pub fragments: Vec<Fragment>,

    /// Images in document order
    pub images: Vec<SourceImage>,

    /// Fragments discarded because `top` or `left` was missing
    pub dropped: usize,
}

impl SourcePage {
    /// Create an empty page at the given source position.
    pub fn new(index: usize) -> Self {
        Self {
            index,
            fragments: Vec::new(),
            images: Vec::new(),
            dropped: 0,
        }
    }
}

/// A positioned text fragment: one visual text run.
///
/// Coordinates are in points, taken from the element's inline style.
/// The span texts are kept separate until line assembly concatenates
/// them, preserving span order with no separator.
#[derive(Debug, Clone)]
pub struct Fragment {
    /// Vertical position in points
    pub top: f32,

    /// Horizontal position in points
    pub left: f32,

    /// Text of each recognized span, in document order
    pub spans: Vec<String>,
}

impl Fragment {
    /// Create a fragment at the given position.
    pub fn new(top: f32, left: f32) -> Self {
        Self {
            top,
            left,
            spans: Vec::new(),
        }
    }

    /// Create a fragment with a single span.
    pub fn with_text(top: f32, left: f32, text: impl Into<String>) -> Self {
        Self {
            top,
            left,
            spans: vec![text.into()],
        }
    }

    /// Concatenated span text, in order, no separator.
    pub fn text(&self) -> String {
        self.spans.concat()
    }
}

/// An image element as found in the source.
#[derive(Debug, Clone)]
pub struct SourceImage {
    /// The element's attributes in document order
    pub attrs: Vec<(String, String)>,
}

impl SourceImage {
    /// Create an image from its attributes.
    pub fn new(attrs: Vec<(String, String)>) -> Self {
        Self { attrs }
    }

    /// Look up an attribute by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fragment_text_concatenates_spans() {
        let mut fragment = Fragment::new(100.0, 36.0);
        fragment.spans.push("Power".to_string());
        fragment.spans.push(" On".to_string());
        assert_eq!(fragment.text(), "Power On");
    }

    #[test]
    fn test_document_counts() {
        let mut doc = SourceDocument::default();
        assert!(doc.is_empty());

        let mut page = SourcePage::new(0);
        page.fragments.push(Fragment::with_text(10.0, 20.0, "a"));
        page.fragments.push(Fragment::with_text(10.0, 30.0, "b"));
        page.images.push(SourceImage::new(vec![(
            "src".to_string(),
            "x.png".to_string(),
        )]));
        page.dropped = 1;
        doc.pages.push(page);

        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.fragment_count(), 2);
        assert_eq!(doc.image_count(), 1);
        assert_eq!(doc.dropped_count(), 1);
    }

    #[test]
    fn test_source_image_attr() {
        let img = SourceImage::new(vec![
            ("class".to_string(), "ssdimg".to_string()),
            ("src".to_string(), "p1.png".to_string()),
        ]);
        assert_eq!(img.attr("src"), Some("p1.png"));
        assert_eq!(img.attr("alt"), None);
    }
}
