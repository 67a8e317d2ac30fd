//! Interactive course and assignment selection
//!
//! Both listers share one prompt loop: keep asking until the answer is all
//! ASCII digits, then look the id up. An id that is not in the fetched list
//! is still accepted (without a name) after a warning line; Canvas sometimes
//! hides records the user can reach directly.

pub mod assignment_lister;
pub mod course_lister;

pub use assignment_lister::{
    format_assignment_line, format_due_at, print_assignments, select_assignment,
};
pub use course_lister::{format_course_line, print_courses, select_course};

use anyhow::Result;

use crate::console::Console;

/// The id/name pair a user ended up with
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Selection {
    pub id: u64,
    /// `None` when the id was accepted through the not-found fallback
    pub name: Option<String>,
}

impl std::fmt::Display for Selection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.name {
            Some(name) => write!(f, "{} - {}", self.id, name),
            None => write!(f, "{} - None", self.id),
        }
    }
}

/// Outcome of looking a typed id up in the fetched records
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Lookup {
    /// Matched a record; the name is absent only if Canvas omitted it
    Found(Option<String>),
    /// Record exists but is locked; reported, then treated as missing
    Unavailable,
    Missing,
}

/// Texts that differ between the course and assignment prompts
pub(crate) struct PromptTexts {
    pub prompt: &'static str,
    pub invalid: &'static str,
    pub unavailable: &'static str,
    pub not_found: &'static str,
}

/// Parse an id the way the prompt accepts it: non-empty, ASCII digits only
#[must_use]
pub fn parse_id(input: &str) -> Option<u64> {
    if input.is_empty() || !input.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    input.parse().ok()
}

/// Prompt until a numeric id is entered, then resolve it through `lookup`
pub(crate) fn prompt_for_id(
    console: &mut dyn Console,
    texts: &PromptTexts,
    lookup: impl Fn(u64) -> Lookup,
) -> Result<Selection> {
    loop {
        let answer = console.prompt(texts.prompt)?;
        let Some(id) = parse_id(answer.trim_end_matches(['\r', '\n'])) else {
            console.say(texts.invalid);
            continue;
        };

        let selection = match lookup(id) {
            Lookup::Found(name) => Selection { id, name },
            Lookup::Unavailable => {
                console.say(texts.unavailable);
                console.say(texts.not_found);
                log::info!("Id {id} is date-restricted, accepting it without a name");
                Selection { id, name: None }
            }
            Lookup::Missing => {
                console.say(texts.not_found);
                log::info!("Accepting unmatched id {id} without a name");
                Selection { id, name: None }
            }
        };

        console.say(&format!("You selected: {selection}"));
        return Ok(selection);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_id() {
        assert_eq!(parse_id("42"), Some(42));
        assert_eq!(parse_id("007"), Some(7));
        assert_eq!(parse_id(""), None);
        assert_eq!(parse_id("-1"), None);
        assert_eq!(parse_id("4 2"), None);
        assert_eq!(parse_id("abc"), None);
        // overflow is not a valid id either
        assert_eq!(parse_id("99999999999999999999999"), None);
    }

    #[test]
    fn test_selection_display() {
        let named = Selection {
            id: 1,
            name: Some("Algebra".into()),
        };
        assert_eq!(named.to_string(), "1 - Algebra");
        let fallback = Selection { id: 9, name: None };
        assert_eq!(fallback.to_string(), "9 - None");
    }
}
