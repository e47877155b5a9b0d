//! Line assembly.
//!
//! Converter output positions every visual text run absolutely, so the
//! logical lines of the original page have to be rebuilt from coordinates.
//! Fragments sharing the same `top` value belong to the same line; lines
//! read top to bottom, fragments within a line left to right. Grouping is
//! exact-match: coordinates that differ by any amount, however small,
//! form separate lines.

use std::cmp::Ordering;

use super::source::Fragment;

/// A reconstructed logical row of text.
///
/// Lines are ephemeral: built during processing, classified, and
/// discarded once their text is emitted.
#[derive(Debug, Clone)]
pub struct Line {
    /// Vertical position shared by every fragment in the line
    pub top: f32,

    /// Member fragments, ascending `left`
    pub fragments: Vec<Fragment>,
}

impl Line {
    /// Raw concatenation of fragment text in `left` order, no separator.
    pub fn raw_text(&self) -> String {
        self.fragments.iter().map(|f| f.text()).collect()
    }

    /// Normalized line text: whitespace runs collapsed, ends trimmed.
    ///
    /// A line whose text normalizes to the empty string emits nothing.
    pub fn text(&self) -> String {
        normalize_ws(&self.raw_text())
    }
}

/// Group fragments into lines keyed by exact `top` value.
///
/// Returns lines in ascending `top` order with each line's fragments in
/// ascending `left` order. The sort is stable, so fragments sharing both
/// coordinates keep their document order and none are lost to key
/// collisions.
pub fn assemble_lines(mut fragments: Vec<Fragment>) -> Vec<Line> {
    let fragment_count = fragments.len();

    fragments.sort_by(|a, b| {
        a.top
            .partial_cmp(&b.top)
            .unwrap_or(Ordering::Equal)
            .then(a.left.partial_cmp(&b.left).unwrap_or(Ordering::Equal))
    });

    let mut lines: Vec<Line> = Vec::new();
    for fragment in fragments {
        match lines.last_mut() {
            Some(line) if line.top == fragment.top => line.fragments.push(fragment),
            _ => lines.push(Line {
                top: fragment.top,
                fragments: vec![fragment],
            }),
        }
    }

    log::debug!(
        "assembled {} lines from {} fragments",
        lines.len(),
        fragment_count
    );

    lines
}

/// Collapse every whitespace run (including newlines) to a single space
/// and trim the ends.
pub fn normalize_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frag(top: f32, left: f32, text: &str) -> Fragment {
        Fragment::with_text(top, left, text)
    }

    #[test]
    fn test_lines_sorted_by_top_fragments_by_left() {
        let lines = assemble_lines(vec![
            frag(200.0, 36.0, "second line"),
            frag(100.0, 120.0, "world"),
            frag(100.0, 36.0, "hello "),
        ]);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].top, 100.0);
        assert_eq!(lines[0].raw_text(), "hello world");
        assert_eq!(lines[1].raw_text(), "second line");
    }

    #[test]
    fn test_grouping_is_exact_match() {
        // No tolerance: a hundredth of a point apart is a separate line.
        let lines = assemble_lines(vec![
            frag(100.0, 36.0, "a"),
            frag(100.01, 36.0, "b"),
            frag(100.0, 72.0, "c"),
        ]);

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].raw_text(), "ac");
        assert_eq!(lines[1].raw_text(), "b");
    }

    #[test]
    fn test_identical_coordinates_keep_document_order() {
        let lines = assemble_lines(vec![
            frag(50.0, 36.0, "first"),
            frag(50.0, 36.0, "second"),
        ]);

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].raw_text(), "firstsecond");
    }

    #[test]
    fn test_empty_input() {
        assert!(assemble_lines(Vec::new()).is_empty());
    }

    #[test]
    fn test_normalize_ws() {
        assert_eq!(normalize_ws("Power  \n  On"), "Power On");
        assert_eq!(normalize_ws("  trimmed  "), "trimmed");
        assert_eq!(normalize_ws("tab\tseparated"), "tab separated");
        assert_eq!(normalize_ws(" \n\t "), "");
        assert_eq!(normalize_ws("unchanged"), "unchanged");
    }

    #[test]
    fn test_line_text_is_normalized() {
        let lines = assemble_lines(vec![
            frag(10.0, 0.0, "Power  "),
            frag(10.0, 50.0, "\n  On"),
        ]);

        assert_eq!(lines[0].raw_text(), "Power  \n  On");
        assert_eq!(lines[0].text(), "Power On");
    }

    #[test]
    fn test_multi_span_fragment_text_in_line() {
        let mut fragment = Fragment::new(10.0, 0.0);
        fragment.spans.push("War".to_string());
        fragment.spans.push("ning".to_string());

        let lines = assemble_lines(vec![fragment, frag(10.0, 80.0, ": hot")]);
        assert_eq!(lines[0].text(), "Warning: hot");
    }
}
