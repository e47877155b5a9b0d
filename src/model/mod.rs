//! Document model types for cleaned content representation.
//!
//! This module defines the intermediate representation (IR) that bridges
//! source-layout parsing and output rendering. The model carries only the
//! node kinds the cleaned document may contain: headings, paragraphs, and
//! relocated images, grouped by source page.

mod block;
mod document;
mod page;

pub use block::{Block, Heading, Image, Paragraph};
pub use document::Document;
pub use page::Page;
