//! `<img>` rewriting that runs before HTML→Markdown conversion
//!
//! Two kinds of images get touched:
//!
//! - **Equation images** carry the LaTeX source in `data-equation-content`.
//!   The source (newlines removed) moves into `alt`, `src` becomes the
//!   placeholder so post-processing can find it again, and `title` is dropped.
//! - **Same-origin images** live on the Canvas instance itself and only load
//!   with credentials. The user is asked once per run whether to append the
//!   access token; the answer sticks for every later image.
//!
//! Everything else passes through unchanged.

use anyhow::{Context, Result, anyhow};
use kuchiki::traits::TendrilSink;

use crate::console::Console;
use crate::utils::constants::{EQUATION_ATTRIBUTE, EQUATION_PLACEHOLDER};
use crate::utils::{append_access_token, is_same_origin};

pub const ACCESS_TOKEN_QUESTION: &str = "Do you want to add the access token to the image to ensure the image can be displayed? [y/n] ";

/// Cached answer to the "append access token?" question
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TokenDecision {
    /// Not asked yet; the first same-origin image triggers the prompt
    #[default]
    Ask,
    Append,
    Skip,
}

impl TokenDecision {
    /// Return whether to append, prompting only while still undecided
    pub fn resolve(&mut self, console: &mut dyn Console) -> Result<bool> {
        match self {
            TokenDecision::Append => Ok(true),
            TokenDecision::Skip => Ok(false),
            TokenDecision::Ask => {
                let append = console.confirm(ACCESS_TOKEN_QUESTION)?;
                *self = if append {
                    TokenDecision::Append
                } else {
                    TokenDecision::Skip
                };
                log::debug!("Access token decision for same-origin images: {self:?}");
                Ok(append)
            }
        }
    }
}

/// What the image pass needs to know about the Canvas instance
#[derive(Debug, Clone, Copy)]
pub struct ImageContext<'a> {
    pub base_url: &'a str,
    pub access_token: &'a str,
}

/// Counters reported after a rewrite, mostly for logging
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImageRewriteStats {
    pub equations: usize,
    pub tokenized: usize,
    pub untouched: usize,
}

/// Rewrite every `<img>` in `html` and return the serialized document
///
/// # Errors
///
/// Fails when the console cannot answer the token question or the document
/// cannot be serialized.
pub fn rewrite_images(
    html: &str,
    context: &ImageContext<'_>,
    decision: &mut TokenDecision,
    console: &mut dyn Console,
) -> Result<(String, ImageRewriteStats)> {
    let document = kuchiki::parse_html().one(html);
    let mut stats = ImageRewriteStats::default();

    let images: Vec<_> = document
        .select("img")
        .map_err(|()| anyhow!("img selector failed to compile"))?
        .collect();

    for image in images {
        let mut attributes = image.attributes.borrow_mut();

        if let Some(equation) = attributes.get(EQUATION_ATTRIBUTE).map(clean_equation) {
            attributes.insert("alt", equation);
            attributes.insert("src", EQUATION_PLACEHOLDER.to_string());
            attributes.remove("title");
            stats.equations += 1;
            continue;
        }

        let Some(src) = attributes.get("src").map(str::to_string) else {
            stats.untouched += 1;
            continue;
        };

        if is_same_origin(&src, context.base_url) && decision.resolve(console)? {
            attributes.insert("src", append_access_token(&src, context.access_token));
            stats.tokenized += 1;
        } else {
            stats.untouched += 1;
        }
    }

    let mut output = Vec::new();
    document
        .serialize(&mut output)
        .context("Failed to serialize rewritten description HTML")?;

    let html = String::from_utf8(output)
        .map_err(|e| anyhow!("Invalid UTF-8 in rewritten HTML: {e}"))?;

    log::debug!(
        "Rewrote images: {} equations, {} with access token, {} untouched",
        stats.equations,
        stats.tokenized,
        stats.untouched
    );

    Ok((html, stats))
}

/// LaTeX source with line breaks removed, so the inline math stays on one line
fn clean_equation(raw: &str) -> String {
    raw.replace('\n', "")
}
