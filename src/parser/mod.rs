//! Converter HTML parsing module.

mod html_parser;
mod layout;
mod options;
mod source;

pub(crate) use html_parser::class_selector;
pub use html_parser::HtmlParser;
pub use layout::{assemble_lines, normalize_ws, Line};
pub use options::{ParseOptions, SourceClasses};
pub use source::{Fragment, SourceDocument, SourceImage, SourcePage};
