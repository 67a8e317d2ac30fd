//! The four-step run: pick a course, pick an assignment, convert its
//! description, hand the Markdown to the output sink.

use anyhow::{Context, Result, bail};

use crate::canvas_api::CanvasClient;
use crate::config::CanvasConfig;
use crate::console::Console;
use crate::content_saver::markdown_converter::{
    ImageContext, MarkdownConverter, TokenDecision, convert_description_with,
};
use crate::content_saver::{DeliveryReport, deliver_markdown, markdown_file_path};
use crate::selection::{
    Selection, print_assignments, print_courses, select_assignment, select_course,
};

/// Knobs that do not belong to the Canvas connection itself
#[derive(Debug, Clone, Copy)]
pub struct WorkflowOptions {
    /// Starting state of the access-token question; `Ask` prompts on the
    /// first same-origin image
    pub token_decision: TokenDecision,
    pub compact_lines: bool,
}

impl Default for WorkflowOptions {
    fn default() -> Self {
        Self {
            token_decision: TokenDecision::Ask,
            compact_lines: true,
        }
    }
}

/// Everything a finished run produced
#[derive(Debug, Clone)]
pub struct RunSummary {
    pub course: Selection,
    pub assignment: Selection,
    pub markdown: String,
    pub delivery: DeliveryReport,
}

/// Run the interactive pipeline once
///
/// # Errors
///
/// Network, HTTP and JSON failures end the run, as does picking an
/// assignment id that is not in the fetched list (there is no description
/// to convert for it).
pub async fn run(
    config: &CanvasConfig,
    console: &mut dyn Console,
    options: WorkflowOptions,
) -> Result<RunSummary> {
    let client = CanvasClient::new(config)?;

    // Step 1: course
    let courses = client
        .list_active_courses()
        .await
        .context("Failed to fetch the course list")?;
    log::info!("Fetched {} active courses", courses.len());
    print_courses(console, &courses);
    let course = select_course(console, &courses)?;

    // Step 2: assignment
    let assignments = client
        .list_assignments(course.id)
        .await
        .with_context(|| format!("Failed to fetch assignments for course {}", course.id))?;
    log::info!("Fetched {} assignments for course {}", assignments.len(), course.id);
    print_assignments(console, &assignments, config.effective_time_zone());
    let assignment = select_assignment(console, &assignments)?;

    let Some(details) = assignments.iter().find(|a| a.id == assignment.id) else {
        bail!(
            "Assignment {} is not in the list returned for course {}; no description to convert",
            assignment.id,
            course.id
        );
    };

    // Step 3: description → Markdown
    let context = ImageContext {
        base_url: config.base_url(),
        access_token: config.access_token(),
    };
    let mut decision = options.token_decision;
    let converter = MarkdownConverter::new().with_compact_lines(options.compact_lines);
    let markdown = convert_description_with(
        details.description_html(),
        &context,
        &mut decision,
        console,
        &converter,
    )
    .with_context(|| format!("Failed to convert assignment {}", assignment.id))?;

    // Step 4: output
    let path = markdown_file_path(config.output_dir(), &assignment);
    let delivery = deliver_markdown(console, &markdown, &path)?;

    Ok(RunSummary {
        course,
        assignment,
        markdown,
        delivery,
    })
}
