//! HTML rendering for cleaned documents.
//!
//! Produces the minimal output shell: a head with the configured title and
//! a body holding only heading, paragraph, and image nodes, pretty-printed
//! with one element per line.

use crate::error::Result;
use crate::model::{Block, Document, Image, Page};

use super::{CleanStats, RenderOptions, RenderResult};

/// Convert a document to pretty-printed HTML.
pub fn to_html(doc: &Document, options: &RenderOptions) -> Result<String> {
    let renderer = HtmlRenderer::new(options.clone());
    renderer.render(doc)
}

/// Convert a document to HTML with statistics.
pub fn to_html_with_stats(doc: &Document, options: &RenderOptions) -> Result<RenderResult> {
    let mut options = options.clone();
    options.collect_stats = true;
    let renderer = HtmlRenderer::new(options);
    renderer.render_with_stats(doc)
}

/// HTML renderer.
pub struct HtmlRenderer {
    options: RenderOptions,
    stats: CleanStats,
}

impl HtmlRenderer {
    /// Create a new HTML renderer.
    pub fn new(options: RenderOptions) -> Self {
        Self {
            options,
            stats: CleanStats::new(),
        }
    }

    /// Render a document to HTML.
    pub fn render(mut self, doc: &Document) -> Result<String> {
        self.render_internal(doc)
    }

    /// Render a document to HTML with emission statistics.
    pub fn render_with_stats(mut self, doc: &Document) -> Result<RenderResult> {
        self.options.collect_stats = true;
        let content = self.render_internal(doc)?;

        // Word and character counts cover the emitted text, not the markup.
        self.stats.count_text(&doc.plain_text());

        Ok(RenderResult::new(content, self.stats))
    }

    fn render_internal(&mut self, doc: &Document) -> Result<String> {
        let pad = self.pad(1);
        let pad2 = self.pad(2);

        let mut body = String::new();
        for page in &doc.pages {
            self.render_page(&mut body, &pad2, page);
        }

        let mut output = String::new();
        output.push_str("<!DOCTYPE html>\n<html>\n");
        output.push_str(&pad);
        output.push_str("<head>\n");
        output.push_str(&pad2);
        output.push_str(&format!(
            "<title>{}</title>\n",
            escape_text(&self.options.title)
        ));
        output.push_str(&pad);
        output.push_str("</head>\n");

        if body.is_empty() {
            output.push_str(&pad);
            output.push_str("<body></body>\n");
        } else {
            output.push_str(&pad);
            output.push_str("<body>\n");
            output.push_str(&body);
            output.push_str(&pad);
            output.push_str("</body>\n");
        }

        output.push_str("</html>\n");
        Ok(output)
    }

    fn render_page(&mut self, output: &mut String, pad: &str, page: &Page) {
        if self.options.collect_stats {
            self.stats.add_page();
        }
        for block in &page.blocks {
            self.render_block(output, pad, block);
        }
    }

    fn render_block(&mut self, output: &mut String, pad: &str, block: &Block) {
        match block {
            Block::Heading(h) => {
                if self.options.collect_stats {
                    self.stats.add_heading();
                }
                output.push_str(pad);
                output.push_str(&format!(
                    "<h{0}>{1}</h{0}>\n",
                    h.level,
                    escape_text(&h.text)
                ));
            }
            Block::Paragraph(p) => {
                if self.options.collect_stats {
                    self.stats.add_paragraph();
                }
                output.push_str(pad);
                output.push_str(&format!("<p>{}</p>\n", escape_text(&p.text)));
            }
            Block::Image(image) => {
                if self.options.collect_stats {
                    self.stats.add_image();
                }
                self.render_image(output, pad, image);
            }
        }
    }

    fn render_image(&self, output: &mut String, pad: &str, image: &Image) {
        output.push_str(pad);
        output.push_str("<img");
        for (name, value) in &image.attrs {
            output.push_str(&format!(" {}=\"{}\"", name, escape_attr(value)));
        }
        output.push_str("/>\n");
    }

    fn pad(&self, depth: usize) -> String {
        " ".repeat(self.options.indent * depth)
    }
}

/// Escape text content for HTML.
fn escape_text(text: &str) -> String {
    let mut result = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '<' => result.push_str("&lt;"),
            '>' => result.push_str("&gt;"),
            _ => result.push(c),
        }
    }
    result
}

/// Escape attribute values for HTML.
fn escape_attr(value: &str) -> String {
    let mut result = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => result.push_str("&amp;"),
            '"' => result.push_str("&quot;"),
            '<' => result.push_str("&lt;"),
            _ => result.push(c),
        }
    }
    result
}
