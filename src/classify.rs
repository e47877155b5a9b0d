//! Line classification rules.
//!
//! Maps a reassembled line's text to a semantic block kind. The decision
//! is a pure function of the normalized text: no font, position, or other
//! source styling is consulted. Rules are carried in [`HeadingRules`] so
//! the keyword set and emitted levels can be overridden without touching
//! the traversal code.

use crate::model::Block;

/// Keywords that mark a line as a section heading, matched
/// case-insensitively by containment.
pub const DEFAULT_KEYWORDS: [&str; 10] = [
    "introduction",
    "contents",
    "what",
    "how",
    "section",
    "chapter",
    "part",
    "index",
    "user manual",
    "firmware",
];

/// Classification configuration: the keyword set and the heading levels
/// each rule emits.
///
/// The decision rule is ordered, first match wins:
/// 1. text contains any keyword (case-insensitive) -> `keyword_level`;
/// 2. text is all decimal digits, or all uppercase Roman-numeral
///    characters (I, V, X only) -> `numeral_level`;
/// 3. otherwise the line is a paragraph.
#[derive(Debug, Clone)]
pub struct HeadingRules {
    /// Keywords, held lowercase
    pub keywords: Vec<String>,

    /// Level emitted for keyword matches
    pub keyword_level: u8,

    /// Level emitted for page-number and Roman-numeral lines
    pub numeral_level: u8,
}

impl HeadingRules {
    /// Create rules with the default keyword set and levels (2 and 3).
    pub fn new() -> Self {
        Self {
            keywords: DEFAULT_KEYWORDS.iter().map(|s| s.to_string()).collect(),
            keyword_level: 2,
            numeral_level: 3,
        }
    }

    /// Replace the keyword set. Keywords are lowercased on entry.
    pub fn with_keywords<I, S>(mut self, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keywords = keywords
            .into_iter()
            .map(|s| s.into().to_lowercase())
            .collect();
        self
    }

    /// Add one keyword to the set.
    pub fn with_keyword(mut self, keyword: impl Into<String>) -> Self {
        self.keywords.push(keyword.into().to_lowercase());
        self
    }

    /// Set the levels emitted for keyword and numeral matches.
    pub fn with_levels(mut self, keyword_level: u8, numeral_level: u8) -> Self {
        self.keyword_level = keyword_level;
        self.numeral_level = numeral_level;
        self
    }

    /// Apply the decision rule to a line's normalized text.
    ///
    /// Returns the heading level, or `None` when the line is body text.
    pub fn heading_level(&self, text: &str) -> Option<u8> {
        let lowered = text.to_lowercase();
        if self.keywords.iter().any(|kw| lowered.contains(kw.as_str())) {
            return Some(self.keyword_level);
        }
        if is_decimal_number(text) || is_roman_numeral(text) {
            return Some(self.numeral_level);
        }
        None
    }

    /// Classify a line's text into its output block.
    pub fn classify(&self, text: impl Into<String>) -> Block {
        let text = text.into();
        match self.heading_level(&text) {
            Some(level) => Block::heading(text, level),
            None => Block::paragraph(text),
        }
    }
}

impl Default for HeadingRules {
    fn default() -> Self {
        Self::new()
    }
}

fn is_decimal_number(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| c.is_ascii_digit())
}

fn is_roman_numeral(text: &str) -> bool {
    !text.is_empty() && text.chars().all(|c| matches!(c, 'I' | 'V' | 'X'))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_match_is_level_2() {
        let rules = HeadingRules::default();
        assert_eq!(rules.heading_level("Introduction"), Some(2));
        assert_eq!(rules.heading_level("TABLE OF CONTENTS"), Some(2));
        assert_eq!(rules.heading_level("Chapter One: What is firmware?"), Some(2));
    }

    #[test]
    fn test_numeral_match_is_level_3() {
        let rules = HeadingRules::default();
        assert_eq!(rules.heading_level("42"), Some(3));
        assert_eq!(rules.heading_level("7"), Some(3));
        assert_eq!(rules.heading_level("XVI"), Some(3));
        assert_eq!(rules.heading_level("IX"), Some(3));
    }

    #[test]
    fn test_body_text_is_not_a_heading() {
        let rules = HeadingRules::default();
        assert_eq!(
            rules.heading_level("The unit ships with a standard cable."),
            None
        );
        // Lowercase and mixed numerals fall through to body text.
        assert_eq!(rules.heading_level("xvi"), None);
        assert_eq!(rules.heading_level("IV2"), None);
        assert_eq!(rules.heading_level("3.14"), None);
    }

    #[test]
    fn test_keyword_rule_wins_over_numeral_rule() {
        // "X" alone would be a numeral, but a keyword match is checked first.
        let rules = HeadingRules::default().with_keyword("x");
        assert_eq!(rules.heading_level("X"), Some(2));
    }

    #[test]
    fn test_containment_not_word_boundary() {
        // Matching is plain substring containment: "showing" contains "how".
        let rules = HeadingRules::default();
        assert_eq!(rules.heading_level("Showing the display"), Some(2));
    }

    #[test]
    fn test_custom_keywords_and_levels() {
        let rules = HeadingRules::default()
            .with_keywords(["Appendix"])
            .with_levels(1, 4);
        assert_eq!(rules.heading_level("APPENDIX B"), Some(1));
        assert_eq!(rules.heading_level("42"), Some(4));
        assert_eq!(rules.heading_level("Introduction"), None);
    }

    #[test]
    fn test_classify_builds_blocks() {
        let rules = HeadingRules::default();
        let block = rules.classify("Contents");
        assert_eq!(block.heading_level(), Some(2));

        let block = rules.classify("A plain sentence.");
        assert!(block.is_paragraph());
        assert_eq!(block.text(), Some("A plain sentence."));
    }
}
