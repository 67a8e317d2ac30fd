//! Console abstraction for the interactive prompts
//!
//! Every question the program asks and every line it prints goes through the
//! `Console` trait. The binary uses `TerminalConsole`; tests drive the whole
//! pipeline with a `ScriptedConsole` holding pre-recorded answers.

use anyhow::{Context, Result, anyhow};
use dialoguer::Input;
use std::collections::VecDeque;
use std::io::{BufRead, IsTerminal, Write};

/// Prompt provider used by the selection loops and the output sink
pub trait Console {
    /// Ask a free-text question and return the raw answer (line ending removed)
    fn prompt(&mut self, question: &str) -> Result<String>;

    /// Print one line of output
    fn say(&mut self, line: &str);

    /// Ask a y/n question. Only `y` (any case) counts as yes.
    fn confirm(&mut self, question: &str) -> Result<bool> {
        Ok(is_yes(&self.prompt(question)?))
    }
}

/// Case-insensitive `y` check shared by all confirmations
#[must_use]
pub fn is_yes(answer: &str) -> bool {
    answer.trim().eq_ignore_ascii_case("y")
}

/// Interactive console on stdin/stdout
///
/// Uses dialoguer when stdin is a terminal and falls back to plain line
/// reads when input is piped.
#[derive(Debug, Default)]
pub struct TerminalConsole;

impl TerminalConsole {
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl Console for TerminalConsole {
    fn prompt(&mut self, question: &str) -> Result<String> {
        if std::io::stdin().is_terminal() {
            // dialoguer renders its own ": " after the prompt text
            let prompt = question.trim_end_matches([' ', ':']);
            return Input::<String>::new()
                .with_prompt(prompt)
                .allow_empty(true)
                .interact_text()
                .context("Failed to read answer from terminal");
        }

        let mut stdout = std::io::stdout().lock();
        write!(stdout, "{question}")?;
        stdout.flush()?;

        let mut line = String::new();
        let read = std::io::stdin()
            .lock()
            .read_line(&mut line)
            .context("Failed to read answer from stdin")?;
        if read == 0 {
            return Err(anyhow!("stdin closed while waiting for: {}", question.trim()));
        }
        Ok(line.trim_end_matches(['\r', '\n']).to_string())
    }

    fn say(&mut self, line: &str) {
        println!("{line}");
    }
}

/// Console that replays canned answers and records everything shown
///
/// Running out of answers is an error rather than a hang, so a test that
/// triggers an unexpected prompt fails fast.
#[derive(Debug, Default)]
pub struct ScriptedConsole {
    answers: VecDeque<String>,
    prompts: Vec<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: answers.into_iter().map(Into::into).collect(),
            prompts: Vec::new(),
            output: Vec::new(),
        }
    }

    /// Questions asked so far, in order
    #[must_use]
    pub fn prompts(&self) -> &[String] {
        &self.prompts
    }

    /// Lines printed so far, in order
    #[must_use]
    pub fn output(&self) -> &[String] {
        &self.output
    }

    /// Answers that were never consumed
    #[must_use]
    pub fn remaining_answers(&self) -> usize {
        self.answers.len()
    }
}

impl Console for ScriptedConsole {
    fn prompt(&mut self, question: &str) -> Result<String> {
        self.prompts.push(question.to_string());
        self.answers
            .pop_front()
            .ok_or_else(|| anyhow!("no scripted answer left for prompt: {question}"))
    }

    fn say(&mut self, line: &str) {
        self.output.push(line.to_string());
    }
}
