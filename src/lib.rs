//! # reflow
//!
//! Rebuild clean semantic HTML from absolutely-positioned PDF-to-HTML
//! converter output.
//!
//! Converters like SautinSoft's PDF Focus emit pages of absolutely
//! positioned fragments that preserve layout but destroy document
//! structure. This library reads that output, reassembles fragments
//! into lines by position, classifies each line as a heading or a
//! paragraph, and renders a clean flowing document.
//!
//! ## Quick Start
//!
//! ```no_run
//! use reflow::{parse_file, render};
//!
//! fn main() -> reflow::Result<()> {
//!     // Parse a converter output file
//!     let doc = parse_file("manual.html")?;
//!
//!     // Render it as clean HTML
//!     let options = render::RenderOptions::default();
//!     let html = render::to_html(&doc, &options)?;
//!     std::fs::write("manual-cleaned.html", html)?;
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Features
//!
//! - **Positional reassembly**: fragments sorted and merged into lines in reading order
//! - **Heading detection**: keyword and numeral rules, fully configurable
//! - **Multiple output formats**: clean HTML, plain text, JSON
//! - **Whitespace normalization**: collapses converter spacing artifacts
//! - **Batch cleaning**: sequential multi-file processing

pub mod classify;
pub mod detect;
pub mod error;
pub mod model;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use classify::{HeadingRules, DEFAULT_KEYWORDS};
pub use detect::{is_positioned_file, is_positioned_html, SourceSummary};
pub use error::{Error, Result};
pub use model::{Block, Document, Heading, Image, Page, Paragraph};
pub use parser::{HtmlParser, ParseOptions, SourceClasses};
pub use render::{CleanStats, JsonFormat, RenderOptions, RenderResult};

use std::io::Read;
use std::path::Path;

/// Parse a converter output file and return a structured document.
///
/// # Arguments
///
/// * `path` - Path to the converter HTML file
///
/// # Returns
///
/// A `Result` containing the reassembled `Document` or an error.
///
/// # Example
///
/// ```no_run
/// use reflow::parse_file;
///
/// let doc = parse_file("manual.html").unwrap();
/// println!("Pages: {}", doc.page_count());
/// ```
pub fn parse_file<P: AsRef<Path>>(path: P) -> Result<Document> {
    let parser = HtmlParser::open(path)?;
    parser.parse()
}

/// Parse a converter output file with custom options.
///
/// # Arguments
///
/// * `path` - Path to the converter HTML file
/// * `options` - Parsing options
///
/// # Example
///
/// ```no_run
/// use reflow::{parse_file_with_options, ParseOptions, SourceClasses};
///
/// let options = ParseOptions::new()
///     .with_classes(SourceClasses::new().with_page("pf"));
/// let doc = parse_file_with_options("manual.html", options).unwrap();
/// ```
pub fn parse_file_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Document> {
    let parser = HtmlParser::open_with_options(path, options)?;
    parser.parse()
}

/// Parse converter output from an HTML string.
///
/// # Arguments
///
/// * `html` - Converter output markup
///
/// # Example
///
/// ```no_run
/// use reflow::parse_html;
///
/// let html = std::fs::read_to_string("manual.html").unwrap();
/// let doc = parse_html(&html).unwrap();
/// ```
pub fn parse_html(html: &str) -> Result<Document> {
    let parser = HtmlParser::from_html(html)?;
    parser.parse()
}

/// Parse converter output from an HTML string with custom options.
pub fn parse_html_with_options(html: &str, options: ParseOptions) -> Result<Document> {
    let parser = HtmlParser::from_html_with_options(html, options)?;
    parser.parse()
}

/// Parse converter output from a reader.
///
/// # Arguments
///
/// * `reader` - Any type implementing `Read`
///
/// # Example
///
/// ```no_run
/// use reflow::parse_reader;
/// use std::fs::File;
///
/// let file = File::open("manual.html").unwrap();
/// let doc = parse_reader(file).unwrap();
/// ```
pub fn parse_reader<R: Read>(reader: R) -> Result<Document> {
    let parser = HtmlParser::from_reader(reader)?;
    parser.parse()
}

/// Parse converter output from a reader with custom options.
pub fn parse_reader_with_options<R: Read>(reader: R, options: ParseOptions) -> Result<Document> {
    let parser = HtmlParser::from_reader_with_options(reader, options)?;
    parser.parse()
}

/// Convert a converter output file to clean HTML.
///
/// # Arguments
///
/// * `path` - Path to the converter HTML file
///
/// # Example
///
/// ```no_run
/// use reflow::to_html;
///
/// let html = to_html("manual.html").unwrap();
/// std::fs::write("manual-cleaned.html", html).unwrap();
/// ```
pub fn to_html<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    let options = RenderOptions::default();
    render::to_html(&doc, &options)
}

/// Convert a converter output file to clean HTML with custom options.
///
/// # Example
///
/// ```no_run
/// use reflow::{to_html_with_options, RenderOptions};
///
/// let options = RenderOptions::new().with_title("ER-101 Manual");
/// let html = to_html_with_options("manual.html", &options).unwrap();
/// ```
pub fn to_html_with_options<P: AsRef<Path>>(path: P, options: &RenderOptions) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_html(&doc, options)
}

/// Extract plain text from a converter output file.
///
/// # Example
///
/// ```no_run
/// use reflow::to_text;
///
/// let text = to_text("manual.html").unwrap();
/// println!("{}", text);
/// ```
pub fn to_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_text(&doc)
}

/// Convert a converter output file to JSON.
///
/// # Example
///
/// ```no_run
/// use reflow::{to_json, JsonFormat};
///
/// let json = to_json("manual.html", JsonFormat::Pretty).unwrap();
/// std::fs::write("manual.json", json).unwrap();
/// ```
pub fn to_json<P: AsRef<Path>>(path: P, format: JsonFormat) -> Result<String> {
    let doc = parse_file(path)?;
    render::to_json(&doc, format)
}

/// Clean a converter output file and write the result.
///
/// Parses `input`, renders it as clean HTML with default options, and
/// writes the result to `output`. An existing output file is
/// overwritten.
///
/// # Example
///
/// ```no_run
/// use reflow::clean_file;
///
/// clean_file("manual.html", "manual-cleaned.html").unwrap();
/// ```
pub fn clean_file<P: AsRef<Path>, Q: AsRef<Path>>(input: P, output: Q) -> Result<()> {
    clean_file_with_options(input, output, ParseOptions::default(), &RenderOptions::default())
}

/// Clean a converter output file with custom options.
pub fn clean_file_with_options<P: AsRef<Path>, Q: AsRef<Path>>(
    input: P,
    output: Q,
    parse_options: ParseOptions,
    render_options: &RenderOptions,
) -> Result<()> {
    let doc = parse_file_with_options(input, parse_options)?;
    let html = render::to_html(&doc, render_options)?;
    std::fs::write(output, html)?;
    Ok(())
}

/// Clean a batch of converter output files.
///
/// Each `(input, output)` pair is processed in order, one file at a
/// time. Processing stops at the first failure and the error is
/// returned; files already written stay on disk.
///
/// # Example
///
/// ```no_run
/// use reflow::clean_batch;
///
/// clean_batch(&[
///     ("manual-a.html", "manual-a-cleaned.html"),
///     ("manual-b.html", "manual-b-cleaned.html"),
/// ]).unwrap();
/// ```
pub fn clean_batch<P: AsRef<Path>, Q: AsRef<Path>>(jobs: &[(P, Q)]) -> Result<()> {
    for (input, output) in jobs {
        clean_file(input, output)?;
    }
    Ok(())
}

/// Clean a batch of converter output files with custom options.
pub fn clean_batch_with_options<P: AsRef<Path>, Q: AsRef<Path>>(
    jobs: &[(P, Q)],
    parse_options: ParseOptions,
    render_options: &RenderOptions,
) -> Result<()> {
    for (input, output) in jobs {
        clean_file_with_options(input, output, parse_options.clone(), render_options)?;
    }
    Ok(())
}

/// Builder for parsing and cleaning converter output documents.
///
/// # Example
///
/// ```no_run
/// use reflow::Reflow;
///
/// let html = Reflow::new()
///     .with_title("ER-101 User Manual")
///     .parse("manual.html")?
///     .to_html()?;
/// # Ok::<(), reflow::Error>(())
/// ```
pub struct Reflow {
    parse_options: ParseOptions,
    render_options: RenderOptions,
}

impl Reflow {
    /// Create a new Reflow builder.
    pub fn new() -> Self {
        Self {
            parse_options: ParseOptions::default(),
            render_options: RenderOptions::default(),
        }
    }

    /// Set the class names by which source elements are recognized.
    pub fn with_classes(mut self, classes: SourceClasses) -> Self {
        self.parse_options = self.parse_options.with_classes(classes);
        self
    }

    /// Set the heading classification rules.
    pub fn with_rules(mut self, rules: HeadingRules) -> Self {
        self.parse_options = self.parse_options.with_rules(rules);
        self
    }

    /// Set the output document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.render_options = self.render_options.with_title(title);
        self
    }

    /// Set the indentation width for pretty-printed output.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.render_options = self.render_options.with_indent(indent);
        self
    }

    /// Parse a converter output file and return a result wrapper.
    pub fn parse<P: AsRef<Path>>(self, path: P) -> Result<ReflowResult> {
        let parser = HtmlParser::open_with_options(path, self.parse_options)?;
        let document = parser.parse()?;
        Ok(ReflowResult {
            document,
            render_options: self.render_options,
        })
    }

    /// Parse converter output from an HTML string.
    pub fn parse_html(self, html: &str) -> Result<ReflowResult> {
        let parser = HtmlParser::from_html_with_options(html, self.parse_options)?;
        let document = parser.parse()?;
        Ok(ReflowResult {
            document,
            render_options: self.render_options,
        })
    }
}

impl Default for Reflow {
    fn default() -> Self {
        Self::new()
    }
}

/// Result of parsing a converter output document.
pub struct ReflowResult {
    /// The reassembled document
    pub document: Document,
    /// Render options to use
    render_options: RenderOptions,
}

impl ReflowResult {
    /// Render to clean HTML.
    pub fn to_html(&self) -> Result<String> {
        render::to_html(&self.document, &self.render_options)
    }

    /// Render to clean HTML and write it to `path`.
    pub fn write_html<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let html = self.to_html()?;
        std::fs::write(path, html)?;
        Ok(())
    }

    /// Convert to plain text.
    pub fn to_text(&self) -> Result<String> {
        render::to_text(&self.document)
    }

    /// Convert to JSON.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        render::to_json(&self.document, format)
    }

    /// Get the plain text of all pages.
    pub fn plain_text(&self) -> String {
        self.document.plain_text()
    }

    /// Get the document.
    pub fn document(&self) -> &Document {
        &self.document
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PAGE: &str = r#"<html><body>
        <div class="ssdpage">
            <div class="ssddiv" style="top:50pt;left:40pt"><span class="ssdspan">Contents</span></div>
            <div class="ssddiv" style="top:90pt;left:40pt"><span class="ssdspan">Plug the router in.</span></div>
        </div>
    </body></html>"#;

    #[test]
    fn test_reflow_builder() {
        let reflow = Reflow::new()
            .with_classes(SourceClasses::new().with_page("pf"))
            .with_title("Custom Title");

        assert_eq!(reflow.parse_options.classes.page, "pf");
        assert_eq!(reflow.render_options.title, "Custom Title");
    }

    #[test]
    fn test_reflow_builder_default() {
        let builder = Reflow::default();
        assert_eq!(builder.parse_options.classes.page, "ssdpage");
        assert_eq!(builder.render_options.title, "Cleaned Manual");
    }

    #[test]
    fn test_reflow_builder_chained() {
        let builder = Reflow::new()
            .with_rules(HeadingRules::new().with_levels(1, 5))
            .with_title("Router Manual")
            .with_indent(4);

        assert_eq!(builder.parse_options.rules.keyword_level, 1);
        assert_eq!(builder.parse_options.rules.numeral_level, 5);
        assert_eq!(builder.render_options.title, "Router Manual");
        assert_eq!(builder.render_options.indent, 4);
    }

    #[test]
    fn test_reflow_parse_html() {
        let result = Reflow::new()
            .with_title("ER-101")
            .parse_html(PAGE)
            .unwrap();

        assert_eq!(result.document().page_count(), 1);
        let html = result.to_html().unwrap();
        assert!(html.contains("<title>ER-101</title>"));
        assert!(html.contains("<h2>Contents</h2>"));
        assert!(html.contains("<p>Plug the router in.</p>"));
    }

    #[test]
    fn test_parse_html_roundtrip() {
        let doc = parse_html(PAGE).unwrap();
        assert_eq!(doc.page_count(), 1);
        assert_eq!(doc.block_count(), 2);
    }

    #[test]
    fn test_parse_html_empty_input() {
        // An input with no pages is an empty document, not an error
        let doc = parse_html("").unwrap();
        assert_eq!(doc.page_count(), 0);
        assert!(doc.is_empty());
    }

    #[test]
    fn test_parse_html_no_pages() {
        let doc = parse_html("<html><body><p>plain markup</p></body></html>").unwrap();
        assert_eq!(doc.page_count(), 0);
    }

    #[test]
    fn test_parse_reader() {
        let doc = parse_reader(PAGE.as_bytes()).unwrap();
        assert_eq!(doc.page_count(), 1);
    }

    #[test]
    fn test_result_plain_text() {
        let result = Reflow::new().parse_html(PAGE).unwrap();
        assert_eq!(result.plain_text(), "Contents\n\nPlug the router in.");
    }

    #[test]
    fn test_json_format_variants() {
        let _pretty = JsonFormat::Pretty;
        let _compact = JsonFormat::Compact;
    }
}
