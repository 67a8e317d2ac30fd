// Interactive Canvas assignment → Markdown converter.
//
// Lists active courses, then the chosen course's assignments, converts the
// chosen description to Markdown and optionally saves/prints it.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::process::ExitCode;

use canvas_assignment_md::workflow::{self, WorkflowOptions};
use canvas_assignment_md::{CanvasConfig, TerminalConsole, TokenDecision};

/// Answer for the "append access token to images?" question
#[derive(Debug, Clone, Copy, ValueEnum)]
enum ImageToken {
    Ask,
    Yes,
    No,
}

impl From<ImageToken> for TokenDecision {
    fn from(value: ImageToken) -> Self {
        match value {
            ImageToken::Ask => TokenDecision::Ask,
            ImageToken::Yes => TokenDecision::Append,
            ImageToken::No => TokenDecision::Skip,
        }
    }
}

#[derive(Debug, Parser)]
#[command(version, about = "Convert a Canvas assignment description to Markdown")]
struct Cli {
    /// Canvas root URL, e.g. https://canvas.example.edu
    #[arg(long, env = "CANVAS_BASE_URL")]
    base_url: String,

    /// Personal access token (Account → Settings → New Access Token)
    #[arg(long, env = "CANVAS_ACCESS_TOKEN", hide_env_values = true)]
    access_token: String,

    /// Directory the Markdown file is saved in
    #[arg(long, env = "CANVAS_OUTPUT_DIR", default_value = ".")]
    output_dir: PathBuf,

    /// IANA time zone for due dates (default: system zone)
    #[arg(long, env = "CANVAS_TIMEZONE")]
    timezone: Option<String>,

    /// Append the access token to same-origin images without asking
    #[arg(long, value_enum, default_value_t = ImageToken::Ask)]
    image_token: ImageToken,

    /// Keep converter line breaks instead of the compact layout
    #[arg(long)]
    keep_line_breaks: bool,

    /// More log output on stderr (-v info, -vv debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn init_logger(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .format_timestamp(None)
        .init();
}

async fn run(cli: Cli) -> Result<()> {
    let mut builder = CanvasConfig::builder().output_dir(cli.output_dir);
    if let Some(zone) = cli.timezone {
        builder = builder.time_zone(zone);
    }
    let config = builder
        .base_url(cli.base_url)
        .access_token(cli.access_token)
        .build()?;
    log::debug!("Using {config:?}");

    let options = WorkflowOptions {
        token_decision: cli.image_token.into(),
        compact_lines: !cli.keep_line_breaks,
    };

    let mut console = TerminalConsole::new();
    let summary = workflow::run(&config, &mut console, options).await?;
    log::info!(
        "Finished course {} / assignment {}: {:?}",
        summary.course.id,
        summary.assignment.id,
        summary.delivery
    );
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}
