//! Rendering module for converting cleaned documents to output formats.

mod html;
mod json;
mod options;
mod result;
mod text;

pub use html::{to_html, to_html_with_stats, HtmlRenderer};
pub use json::{to_json, JsonFormat};
pub use options::RenderOptions;
pub use result::{CleanStats, RenderResult};
pub use text::to_text;
