//! Document-wide layout settings.

use crate::types::TextStyle;

/// Settings shared by every paragraph in a document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowOptions {
    /// Width of the text column.
    pub content_width: f32,
    /// Fixed height of every text band.
    pub line_height: f32,
    /// Fixed spacing between consecutive paragraphs.
    pub paragraph_margin: f32,
    /// Style handed to the measurement seam.
    pub style: TextStyle,
}

impl FlowOptions {
    /// Defaults with an explicit column width.
    pub fn new(content_width: f32) -> Self {
        Self {
            content_width,
            ..Self::default()
        }
    }

    pub fn with_line_height(mut self, line_height: f32) -> Self {
        self.line_height = line_height;
        self
    }

    pub fn with_paragraph_margin(mut self, paragraph_margin: f32) -> Self {
        self.paragraph_margin = paragraph_margin;
        self
    }

    pub fn with_style(mut self, style: TextStyle) -> Self {
        self.style = style;
        self
    }
}

impl Default for FlowOptions {
    fn default() -> Self {
        Self {
            content_width: 600.0,
            line_height: 20.0,
            paragraph_margin: 16.0,
            style: TextStyle::default(),
        }
    }
}
