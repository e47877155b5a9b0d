//! Converter layout detection.
//!
//! Cheap probes that answer "does this markup follow the positioned
//! converter convention?" without running the full pipeline, plus a
//! count summary of the recognized structure.

use std::fs;
use std::path::Path;

use scraper::Html;

use crate::error::Result;
use crate::parser::{class_selector, SourceClasses};

/// Counts of recognized elements in a source document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSummary {
    /// Page containers found
    pub pages: usize,
    /// Positioned text containers found (before coordinate filtering)
    pub fragments: usize,
    /// Images found
    pub images: usize,
}

impl std::fmt::Display for SourceSummary {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} pages, {} fragments, {} images",
            self.pages, self.fragments, self.images
        )
    }
}

/// Count the recognized elements in markup.
///
/// # Arguments
/// * `html` - The markup to probe
/// * `classes` - The class names to recognize
///
/// # Example
/// ```
/// use reflow::detect::summarize;
/// use reflow::SourceClasses;
///
/// let summary = summarize("<div class=\"ssdpage\"></div>", &SourceClasses::default()).unwrap();
/// assert_eq!(summary.pages, 1);
/// ```
pub fn summarize(html: &str, classes: &SourceClasses) -> Result<SourceSummary> {
    let dom = Html::parse_document(html);
    Ok(SourceSummary {
        pages: count(&dom, &classes.page)?,
        fragments: count(&dom, &classes.text)?,
        images: count(&dom, &classes.image)?,
    })
}

fn count(dom: &Html, class: &str) -> Result<usize> {
    let selector = class_selector(class)?;
    Ok(dom.select(&selector).count())
}

/// Check whether markup contains at least one recognized page container
/// (default classes).
pub fn is_positioned_html(html: &str) -> bool {
    summarize(html, &SourceClasses::default())
        .map(|summary| summary.pages > 0)
        .unwrap_or(false)
}

/// Check whether a file looks like positioned converter output.
///
/// Returns `false` if the file cannot be read.
///
/// # Example
/// ```no_run
/// use reflow::detect::is_positioned_file;
///
/// if is_positioned_file("manual conv.html") {
///     println!("looks like converter output");
/// }
/// ```
pub fn is_positioned_file<P: AsRef<Path>>(path: P) -> bool {
    fs::read_to_string(path)
        .map(|html| is_positioned_html(&html))
        .unwrap_or(false)
}
