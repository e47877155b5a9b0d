//! Parsing options and configuration.

use crate::classify::HeadingRules;

/// Options for parsing converter output.
#[derive(Debug, Clone, Default)]
pub struct ParseOptions {
    /// Class names by which source elements are recognized
    pub classes: SourceClasses,

    /// Classification rules applied to reassembled lines
    pub rules: HeadingRules,
}

impl ParseOptions {
    /// Create new parse options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the recognized class names.
    pub fn with_classes(mut self, classes: SourceClasses) -> Self {
        self.classes = classes;
        self
    }

    /// Set the classification rules.
    pub fn with_rules(mut self, rules: HeadingRules) -> Self {
        self.rules = rules;
        self
    }
}

/// The CSS class names marking source structure.
///
/// Converter output tags each structural element with a class; elements
/// are recognized by class alone, so the tag names do not matter. The
/// defaults are the classes the SautinSoft converter emits.
#[derive(Debug, Clone)]
pub struct SourceClasses {
    /// Class on page container elements
    pub page: String,

    /// Class on positioned text-container elements
    pub text: String,

    /// Class on text span leaf elements
    pub span: String,

    /// Class on image elements
    pub image: String,
}

impl SourceClasses {
    /// Create the default converter class set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the page container class.
    pub fn with_page(mut self, class: impl Into<String>) -> Self {
        self.page = class.into();
        self
    }

    /// Set the text container class.
    pub fn with_text(mut self, class: impl Into<String>) -> Self {
        self.text = class.into();
        self
    }

    /// Set the span class.
    pub fn with_span(mut self, class: impl Into<String>) -> Self {
        self.span = class.into();
        self
    }

    /// Set the image class.
    pub fn with_image(mut self, class: impl Into<String>) -> Self {
        self.image = class.into();
        self
    }
}

impl Default for SourceClasses {
    fn default() -> Self {
        Self {
            page: "ssdpage".to_string(),
            text: "ssddiv".to_string(),
            span: "ssdspan".to_string(),
            image: "ssdimg".to_string(),
        }
    }
}
