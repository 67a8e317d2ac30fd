use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::console::Console;
use crate::selection::Selection;

pub const SAVE_QUESTION: &str = "Do you want to save the markdown file? (y/n): ";
pub const PRINT_QUESTION: &str = "Do you want to print the markdown? (y/n): ";
pub const SAVED_MESSAGE: &str = "The markdown file is saved.";

/// What happened to the file on the save step
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SaveOutcome {
    /// User did not ask for a file
    NotRequested,
    /// File existed and the user declined to overwrite it
    KeptExisting(PathBuf),
    Written(PathBuf),
}

/// Result of the whole output step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeliveryReport {
    pub save: SaveOutcome,
    pub printed: bool,
}

/// `{output_dir}/{assignment name}.md`
///
/// The name goes through filename sanitization so a `/` in an assignment
/// title cannot escape the output directory. Without a name (the not-found
/// fallback) the assignment id is used instead.
#[must_use]
pub fn markdown_file_path(output_dir: &Path, assignment: &Selection) -> PathBuf {
    let stem = assignment
        .name
        .as_deref()
        .map(sanitize_filename::sanitize)
        .filter(|stem| !stem.trim().is_empty())
        .unwrap_or_else(|| assignment.id.to_string());
    output_dir.join(format!("{stem}.md"))
}

/// Ask whether to save, confirm overwrites, and write the file
///
/// # Arguments
///
/// * `console` - Prompt provider for the save/overwrite questions
/// * `markdown` - The Markdown text to save
/// * `path` - Target file; replaced in full when written
pub fn save_markdown_content(
    console: &mut dyn Console,
    markdown: &str,
    path: &Path,
) -> Result<SaveOutcome> {
    if !console.confirm(SAVE_QUESTION)? {
        return Ok(SaveOutcome::NotRequested);
    }

    if path.exists() {
        let name = path
            .file_name()
            .map_or_else(|| path.display().to_string(), |n| n.to_string_lossy().into_owned());
        let question = format!(
            "The file {name} already exists. Do you want to overwrite the file? (y/n): "
        );
        if !console.confirm(&question)? {
            log::info!("Keeping existing {}", path.display());
            return Ok(SaveOutcome::KeptExisting(path.to_path_buf()));
        }
    }

    // Ensure parent directory exists
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("Failed to create directory {}", parent.display()))?;
    }

    std::fs::write(path, markdown)
        .with_context(|| format!("Failed to write {}", path.display()))?;

    console.say(SAVED_MESSAGE);
    log::debug!("Saved {} bytes of markdown to {}", markdown.len(), path.display());

    Ok(SaveOutcome::Written(path.to_path_buf()))
}

/// Output sink: optional save, then an independent optional print
pub fn deliver_markdown(
    console: &mut dyn Console,
    markdown: &str,
    path: &Path,
) -> Result<DeliveryReport> {
    let save = save_markdown_content(console, markdown, path)?;

    let printed = console.confirm(PRINT_QUESTION)?;
    if printed {
        console.say(markdown);
    }

    Ok(DeliveryReport { save, printed })
}
