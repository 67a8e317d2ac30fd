//! Assignment description → Markdown pipeline
//!
//! 1. Rewrite `<img>` elements (equation placeholders, optional access token)
//! 2. Convert to Markdown with htmd and the custom handlers
//! 3. Inline the equations as `$...$` and join lines compactly
//!
//! # Usage
//!
//! ```rust
//! # use canvas_assignment_md::content_saver::markdown_converter::{convert_description, ImageContext, TokenDecision};
//! # use canvas_assignment_md::console::ScriptedConsole;
//! let html = r#"<p>Show <img data-equation-content="a+b" src="/eq.png"> is even.</p>"#;
//! let context = ImageContext { base_url: "https://canvas.example.edu", access_token: "t" };
//! let mut decision = TokenDecision::default();
//! let mut console = ScriptedConsole::default();
//! let markdown = convert_description(html, &context, &mut decision, &mut console)?;
//! assert!(markdown.contains("$a+b$"));
//! # Ok::<(), anyhow::Error>(())
//! ```

use anyhow::Result;

use crate::console::Console;

// Declare sub-modules
pub mod custom_handlers;
pub mod html_preprocessing;
pub mod html_to_markdown;
pub mod markdown_postprocessing;

// Re-export sub-modules for advanced usage
pub use html_preprocessing::{
    ACCESS_TOKEN_QUESTION, ImageContext, ImageRewriteStats, TokenDecision, rewrite_images,
};
pub use html_to_markdown::MarkdownConverter;
pub use markdown_postprocessing::{inline_equations, join_compact, postprocess_markdown};

/// Convert one description with the default (compact) converter
pub fn convert_description(
    html: &str,
    context: &ImageContext<'_>,
    decision: &mut TokenDecision,
    console: &mut dyn Console,
) -> Result<String> {
    convert_description_with(html, context, decision, console, &MarkdownConverter::default())
}

/// Convert one description with an explicit converter configuration
pub fn convert_description_with(
    html: &str,
    context: &ImageContext<'_>,
    decision: &mut TokenDecision,
    console: &mut dyn Console,
    converter: &MarkdownConverter,
) -> Result<String> {
    let (rewritten, _stats) = rewrite_images(html, context, decision, console)?;
    converter.convert_sync(&rewritten)
}
