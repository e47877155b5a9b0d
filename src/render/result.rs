//! Rendering result with statistics.

use serde::{Deserialize, Serialize};

/// Result of rendering a document, including content and statistics.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RenderResult {
    /// The rendered content (HTML, text, etc.)
    pub content: String,

    /// Statistics collected while rendering
    pub stats: CleanStats,
}

impl RenderResult {
    /// Create a new render result.
    pub fn new(content: String, stats: CleanStats) -> Self {
        Self { content, stats }
    }

    /// Create a simple result with just content.
    pub fn content_only(content: String) -> Self {
        Self {
            content,
            stats: CleanStats::default(),
        }
    }

    /// Get the content length in bytes.
    pub fn content_len(&self) -> usize {
        self.content.len()
    }
}

/// Statistics collected while emitting a cleaned document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CleanStats {
    /// Total number of pages emitted
    pub page_count: u32,

    /// Number of headings emitted
    pub heading_count: u32,

    /// Number of paragraphs emitted
    pub paragraph_count: u32,

    /// Number of images relocated
    pub image_count: u32,

    /// Approximate word count (whitespace-separated tokens)
    pub word_count: u32,

    /// Character count (excluding whitespace)
    pub char_count: u32,
}

impl CleanStats {
    /// Create new empty statistics.
    pub fn new() -> Self {
        Self::default()
    }

    /// Increment page count.
    pub fn add_page(&mut self) {
        self.page_count += 1;
    }

    /// Increment heading count.
    pub fn add_heading(&mut self) {
        self.heading_count += 1;
    }

    /// Increment paragraph count.
    pub fn add_paragraph(&mut self) {
        self.paragraph_count += 1;
    }

    /// Increment image count.
    pub fn add_image(&mut self) {
        self.image_count += 1;
    }

    /// Total number of blocks counted.
    pub fn block_count(&self) -> u32 {
        self.heading_count + self.paragraph_count + self.image_count
    }

    /// Add word and character counts from text.
    pub fn count_text(&mut self, text: &str) {
        self.word_count += text.split_whitespace().count() as u32;
        self.char_count += text.chars().filter(|c| !c.is_whitespace()).count() as u32;
    }

    /// Merge another stats instance into this one.
    pub fn merge(&mut self, other: &CleanStats) {
        self.page_count += other.page_count;
        self.heading_count += other.heading_count;
        self.paragraph_count += other.paragraph_count;
        self.image_count += other.image_count;
        self.word_count += other.word_count;
        self.char_count += other.char_count;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clean_stats_count_text() {
        let mut stats = CleanStats::new();
        stats.count_text("The unit ships with a standard cable.");

        assert_eq!(stats.word_count, 7);
        assert_eq!(stats.char_count, 31);
    }

    #[test]
    fn test_clean_stats_merge() {
        let mut stats1 = CleanStats::new();
        stats1.heading_count = 2;
        stats1.paragraph_count = 5;

        let stats2 = CleanStats {
            heading_count: 1,
            paragraph_count: 3,
            image_count: 4,
            ..Default::default()
        };

        stats1.merge(&stats2);

        assert_eq!(stats1.heading_count, 3);
        assert_eq!(stats1.paragraph_count, 8);
        assert_eq!(stats1.image_count, 4);
        assert_eq!(stats1.block_count(), 15);
    }

    #[test]
    fn test_render_result_content_only() {
        let result = RenderResult::content_only("<p>hi</p>".to_string());
        assert_eq!(result.content, "<p>hi</p>");
        assert_eq!(result.content_len(), 9);
        assert_eq!(result.stats.paragraph_count, 0);
    }
}
