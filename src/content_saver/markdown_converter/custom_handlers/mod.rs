//! Custom handlers for htmd HTML-to-Markdown conversion
//!
//! htmd's defaults cover headings, lists, emphasis, links and tables. Two
//! elements are overridden because post-processing depends on their exact
//! shape:
//! - `<img>`: always `![alt](src)` with the src verbatim, so the equation
//!   placeholder survives untouched
//! - `<hr>`: always `---`, the separator the compact joiner keeps on its own line

use htmd::{
    Element, HtmlToMarkdown,
    element_handler::{HandlerResult, Handlers},
};

/// Create an htmd converter with the assignment-description handlers
pub fn create_converter() -> HtmlToMarkdown {
    HtmlToMarkdown::builder()
        .add_handler(vec!["img"], img_handler)
        .add_handler(vec!["hr"], hr_handler)
        .build()
}

/// Handle `<img>` elements - `![alt](src "title")`
fn img_handler(_handlers: &dyn Handlers, element: Element) -> Option<HandlerResult> {
    // src is required for valid markdown image syntax
    let src = get_attr(element.attrs, "src")?;

    // Alt and title must stay on one line or the image syntax breaks
    let alt = get_attr(element.attrs, "alt")
        .map(|alt| single_line(&alt))
        .unwrap_or_default();
    let title = get_attr(element.attrs, "title").map(|title| single_line(&title));

    let markdown = match title {
        Some(title) => format!("![{}]({} \"{}\")", alt, src, title.replace('"', "\\\"")),
        None => format!("![{}]({})", alt, src),
    };

    Some(HandlerResult::from(markdown))
}

/// Handle `<hr>` elements
fn hr_handler(_handlers: &dyn Handlers, _element: Element) -> Option<HandlerResult> {
    Some(HandlerResult::from("\n\n---\n\n".to_string()))
}

// === Helper Functions ===

/// Get attribute value from element
fn get_attr(attrs: &[html5ever::Attribute], name: &str) -> Option<String> {
    attrs
        .iter()
        .find(|a| &*a.name.local == name)
        .map(|a| a.value.to_string())
        .filter(|v| !v.trim().is_empty())
}

/// Join the non-blank lines of an attribute value with single spaces
fn single_line(text: &str) -> String {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .collect::<Vec<_>>()
        .join(" ")
}
