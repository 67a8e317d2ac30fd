pub mod canvas_api;
pub mod config;
pub mod console;
pub mod content_saver;
pub mod selection;
pub mod utils;
pub mod workflow;

pub use canvas_api::{ApiError, Assignment, CanvasClient, Course};
pub use config::{CanvasConfig, ConfigError};
pub use console::{Console, ScriptedConsole, TerminalConsole};
pub use content_saver::markdown_converter::{
    ImageContext, MarkdownConverter, TokenDecision, convert_description,
};
pub use content_saver::{DeliveryReport, SaveOutcome, deliver_markdown};
pub use selection::Selection;
pub use workflow::{RunSummary, WorkflowOptions};

/// Run the interactive pipeline with default options
pub async fn run(config: &CanvasConfig, console: &mut dyn Console) -> anyhow::Result<RunSummary> {
    workflow::run(config, console, WorkflowOptions::default()).await
}
