//! Page-level types.

use super::{Block, Image};
use serde::{Deserialize, Serialize};

/// A single page of cleaned content.
///
/// Blocks appear in emission order: reassembled text lines first (ascending
/// vertical position), then the page's relocated images in document order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page {
    /// Page number (1-indexed)
    pub number: u32,

    /// Content blocks on the page
    pub blocks: Vec<Block>,
}

impl Page {
    /// Create a new empty page.
    pub fn new(number: u32) -> Self {
        Self {
            number,
            blocks: Vec::new(),
        }
    }

    /// Add a block to the page.
    pub fn add_block(&mut self, block: Block) {
        self.blocks.push(block);
    }

    /// Add an image block to the page.
    pub fn add_image(&mut self, image: Image) {
        self.blocks.push(Block::Image(image));
    }

    /// Get plain text content of the page. Images contribute nothing.
    pub fn plain_text(&self) -> String {
        self.blocks
            .iter()
            .filter_map(|block| block.text())
            .collect::<Vec<_>>()
            .join("\n\n")
    }

    /// Check if the page is empty (no content blocks).
    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }

    /// Get the number of blocks on the page.
    pub fn block_count(&self) -> usize {
        self.blocks.len()
    }
}

impl Default for Page {
    fn default() -> Self {
        Self::new(1)
    }
}
