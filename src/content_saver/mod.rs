//! Description conversion and Markdown output

// Module declarations
pub mod markdown_converter;
mod markdown_saver;

// Re-export public API from markdown_saver module
pub use markdown_saver::{
    DeliveryReport, PRINT_QUESTION, SAVE_QUESTION, SAVED_MESSAGE, SaveOutcome, deliver_markdown,
    markdown_file_path, save_markdown_content,
};
