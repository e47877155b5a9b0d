//! Converter HTML parser using scraper.

use std::fs;
use std::io::Read;
use std::path::Path;

use regex::Regex;
use scraper::{ElementRef, Html, Selector};

use crate::error::{Error, Result};
use crate::model::{Document, Image, Page};

use super::layout::assemble_lines;
use super::options::{ParseOptions, SourceClasses};
use super::source::{Fragment, SourceDocument, SourceImage, SourcePage};

/// Parser for absolutely-positioned converter HTML.
///
/// Holds the parsed markup, the compiled class selectors, and the
/// coordinate patterns. Construction fails only when a configured class
/// name does not form a valid selector; the markup itself is parsed
/// permissively and never rejected.
#[derive(Debug)]
pub struct HtmlParser {
    dom: Html,
    options: ParseOptions,
    selectors: ClassSelectors,
    top_re: Regex,
    left_re: Regex,
}

impl HtmlParser {
    /// Open an HTML file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        Self::open_with_options(path, ParseOptions::default())
    }

    /// Open an HTML file with custom options.
    pub fn open_with_options<P: AsRef<Path>>(path: P, options: ParseOptions) -> Result<Self> {
        let html = fs::read_to_string(path)?;
        Self::from_html_with_options(&html, options)
    }

    /// Parse HTML from a string.
    pub fn from_html(html: &str) -> Result<Self> {
        Self::from_html_with_options(html, ParseOptions::default())
    }

    /// Parse HTML from a string with custom options.
    pub fn from_html_with_options(html: &str, options: ParseOptions) -> Result<Self> {
        let selectors = ClassSelectors::compile(&options.classes)?;
        let dom = Html::parse_document(html);

        if !dom.errors.is_empty() {
            log::debug!(
                "markup parsed with {} recoverable errors",
                dom.errors.len()
            );
        }

        Ok(Self {
            dom,
            options,
            selectors,
            top_re: Regex::new(r"top:(\d+\.?\d*)pt").unwrap(),
            left_re: Regex::new(r"left:(\d+\.?\d*)pt").unwrap(),
        })
    }

    /// Parse HTML from a reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader_with_options(reader, ParseOptions::default())
    }

    /// Parse HTML from a reader with custom options.
    pub fn from_reader_with_options<R: Read>(mut reader: R, options: ParseOptions) -> Result<Self> {
        let mut html = String::new();
        reader.read_to_string(&mut html)?;
        Self::from_html_with_options(&html, options)
    }

    /// Project the markup into the typed source tree.
    ///
    /// Only recognized elements survive the projection; fragments missing
    /// either coordinate are counted per page and otherwise discarded.
    pub fn source(&self) -> SourceDocument {
        let mut source = SourceDocument::default();

        for (index, page_el) in self.dom.select(&self.selectors.page).enumerate() {
            source.pages.push(self.project_page(index, page_el));
        }

        log::debug!(
            "source tree: {} pages, {} fragments ({} dropped), {} images",
            source.page_count(),
            source.fragment_count(),
            source.dropped_count(),
            source.image_count()
        );

        source
    }

    /// Run the full pipeline: project, reassemble lines, classify, and
    /// relocate images into a cleaned [`Document`].
    ///
    /// An input without any page containers yields an empty document, not
    /// an error.
    pub fn parse(&self) -> Result<Document> {
        let source = self.source();
        let mut document = Document::new();

        for src_page in source.pages {
            let mut page = Page::new((src_page.index + 1) as u32);

            for line in assemble_lines(src_page.fragments) {
                let text = line.text();
                if text.is_empty() {
                    continue;
                }
                page.add_block(self.options.rules.classify(text));
            }

            for image in src_page.images {
                page.add_image(Image::new(image.attrs));
            }

            document.add_page(page);
        }

        Ok(document)
    }

    fn project_page(&self, index: usize, page_el: ElementRef) -> SourcePage {
        let mut page = SourcePage::new(index);

        for frag_el in page_el.select(&self.selectors.text) {
            let style = frag_el.value().attr("style");
            let top = style.and_then(|s| extract_pt(&self.top_re, s));
            let left = style.and_then(|s| extract_pt(&self.left_re, s));

            match (top, left) {
                (Some(top), Some(left)) => {
                    let mut fragment = Fragment::new(top, left);
                    for span_el in frag_el.select(&self.selectors.span) {
                        fragment.spans.push(span_el.text().collect());
                    }
                    page.fragments.push(fragment);
                }
                _ => page.dropped += 1,
            }
        }

        for img_el in page_el.select(&self.selectors.image) {
            let attrs = img_el
                .value()
                .attrs()
                .map(|(name, value)| (name.to_string(), value.to_string()))
                .collect();
            page.images.push(SourceImage::new(attrs));
        }

        if page.dropped > 0 {
            log::debug!(
                "page {}: dropped {} fragments without coordinates",
                index + 1,
                page.dropped
            );
        }

        page
    }
}

/// Compiled selectors for the recognized classes.
#[derive(Debug)]
struct ClassSelectors {
    page: Selector,
    text: Selector,
    span: Selector,
    image: Selector,
}

impl ClassSelectors {
    fn compile(classes: &SourceClasses) -> Result<Self> {
        Ok(Self {
            page: class_selector(&classes.page)?,
            text: class_selector(&classes.text)?,
            span: class_selector(&classes.span)?,
            image: class_selector(&classes.image)?,
        })
    }
}

/// Build a class-only selector, surfacing bad class text as a typed error.
pub(crate) fn class_selector(class: &str) -> Result<Selector> {
    let css = format!(".{class}");
    Selector::parse(&css).map_err(|_| Error::Selector(css.clone()))
}

/// Extract a point-unit value captured by `re` from inline style text.
fn extract_pt(re: &Regex, style: &str) -> Option<f32> {
    re.captures(style)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse::<f32>().ok())
}
