//! Line-based post-processing of the converter output
//!
//! 1. Equation images (`![src](latex equation)`) become inline math `$src$`.
//! 2. Lines are re-joined into the compact form downstream tools expect:
//!    text lines are glued together with no separator, a `---` rule starts on
//!    a fresh line, and each blank line turns into a single newline.

use std::borrow::Cow;
use std::sync::LazyLock;

use crate::utils::constants::EQUATION_PLACEHOLDER;

/// Closing half of an equation image: `](latex equation)`
static EQUATION_MARKER: LazyLock<String> =
    LazyLock::new(|| format!("]({EQUATION_PLACEHOLDER})"));

const IMAGE_OPEN: &str = "![";
const RULE: &str = "---";

/// Replace every `![<equation>](latex equation)` on a line with `$<equation>$`
///
/// Each marker is paired with the nearest `![` before it, so ordinary images
/// earlier on the same line are left alone.
#[must_use]
pub fn inline_equations(line: &str) -> Cow<'_, str> {
    let marker = EQUATION_MARKER.as_str();
    if !line.contains(marker) {
        return Cow::Borrowed(line);
    }

    let mut out = String::with_capacity(line.len());
    let mut rest = line;

    while let Some(pos) = rest.find(marker) {
        let head = &rest[..pos];
        match head.rfind(IMAGE_OPEN) {
            Some(open) => {
                out.push_str(&head[..open]);
                out.push('$');
                out.push_str(&head[open + IMAGE_OPEN.len()..]);
                out.push('$');
            }
            None => {
                // Opening bracket was on an earlier line; close the math anyway
                out.push_str(head);
                out.push('$');
            }
        }
        rest = &rest[pos + marker.len()..];
    }
    out.push_str(rest);

    Cow::Owned(out)
}

/// Collapse Markdown lines into the compact layout
#[must_use]
pub fn join_compact<'a>(lines: impl IntoIterator<Item = &'a str>) -> String {
    let mut result = String::new();
    for line in lines {
        if line.starts_with(RULE) {
            result.push('\n');
            result.push_str(line);
        } else if line.is_empty() {
            result.push('\n');
        } else {
            result.push_str(line);
        }
    }
    result
}

/// Run both passes over converter output
#[must_use]
pub fn postprocess_markdown(markdown: &str, compact: bool) -> String {
    let lines: Vec<Cow<'_, str>> = markdown.lines().map(inline_equations).collect();
    if compact {
        join_compact(lines.iter().map(|line| &**line))
    } else {
        lines.join("\n")
    }
}
