//! Rendering options and configuration.

/// Options for rendering the cleaned document.
#[derive(Debug, Clone)]
pub struct RenderOptions {
    /// Title placed in the output document head
    pub title: String,

    /// Spaces per indentation level in pretty-printed output
    pub indent: usize,

    /// Collect statistics during rendering
    pub collect_stats: bool,
}

impl RenderOptions {
    /// Create new render options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output document title.
    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    /// Set the indentation width.
    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    /// Enable statistics collection during rendering.
    pub fn with_stats(mut self, collect: bool) -> Self {
        self.collect_stats = collect;
        self
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            title: "Cleaned Manual".to_string(),
            indent: 2,
            collect_stats: false,
        }
    }
}
