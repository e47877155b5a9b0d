//! Plain text rendering for cleaned documents.

use crate::error::Result;
use crate::model::Document;

/// Convert a document to plain text.
///
/// Headings and paragraphs are joined by blank lines; images contribute
/// nothing.
pub fn to_text(doc: &Document) -> Result<String> {
    Ok(doc.plain_text().trim().to_string())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Block, Image, Page};

    #[test]
    fn test_to_text() {
        let mut doc = Document::new();
        let mut page = Page::new(1);
        page.add_block(Block::heading("Contents", 2));
        page.add_block(Block::paragraph("First paragraph."));
        page.add_image(Image::with_src("skipped.png"));
        doc.add_page(page);

        let mut page2 = Page::new(2);
        page2.add_block(Block::paragraph("Second page."));
        doc.add_page(page2);

        let result = to_text(&doc).unwrap();
        assert_eq!(result, "Contents\n\nFirst paragraph.\n\nSecond page.");
    }

    #[test]
    fn test_to_text_empty() {
        let result = to_text(&Document::new()).unwrap();
        assert!(result.is_empty());
    }
}
