//! HTML to Markdown conversion with line-based post-processing.
//!
//! # Architecture
//!
//! 1. **htmd conversion**: transforms HTML to Markdown using the custom
//!    `<img>`/`<hr>` handlers
//! 2. **Equation inlining**: placeholder images become `$...$`
//! 3. **Compact joining** (optional, on by default): collapses line breaks

use anyhow::{Context, Result};

use super::custom_handlers::create_converter;
use super::markdown_postprocessing::postprocess_markdown;

/// HTML to Markdown converter with configurable options
#[derive(Debug, Clone)]
pub struct MarkdownConverter {
    compact_lines: bool,
}

impl Default for MarkdownConverter {
    fn default() -> Self {
        Self {
            compact_lines: true,
        }
    }
}

impl MarkdownConverter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Keep one output line per converter line instead of the compact join
    #[must_use]
    pub fn with_compact_lines(mut self, compact: bool) -> Self {
        self.compact_lines = compact;
        self
    }

    /// Convert HTML to Markdown synchronously.
    pub fn convert_sync(&self, html: &str) -> Result<String> {
        // Stage 1: htmd conversion with custom handlers
        let converter = create_converter();
        let raw_markdown = converter
            .convert(html)
            .context("htmd failed to convert description HTML")?;

        // Stage 2 + 3: equation inlining and line joining
        let markdown = postprocess_markdown(&raw_markdown, self.compact_lines);

        log::debug!(
            "Converted {} bytes of HTML into {} bytes of Markdown",
            html.len(),
            markdown.len()
        );

        Ok(markdown)
    }
}
