use anyhow::Result;
use chrono::{DateTime, Utc};
use chrono_tz::Tz;

use super::{Lookup, PromptTexts, Selection, prompt_for_id};
use crate::canvas_api::Assignment;
use crate::console::Console;
use crate::utils::constants::{DUE_AT_FORMAT, NOT_AVAILABLE};

const ASSIGNMENT_PROMPT: PromptTexts = PromptTexts {
    prompt: "Enter assignment ID: ",
    invalid: "Invalid assignment ID.",
    unavailable: "Assignment is not available.",
    not_found: "Assignment not found or you do not have access to this assignment.",
};

/// Render a due date in `tz`, e.g. `2024-03-15 19:59:00 EDT`.
///
/// The offset applied is the one in effect at the due date itself, so a
/// deadline on the other side of a DST switch shows its own abbreviation.
#[must_use]
pub fn format_due_at(due_at: Option<&DateTime<Utc>>, tz: Tz) -> String {
    match due_at {
        Some(due) => due.with_timezone(&tz).format(DUE_AT_FORMAT).to_string(),
        None => NOT_AVAILABLE.to_string(),
    }
}

/// `id - name   Due at: <local time | NOT AVAILABLE>`
#[must_use]
pub fn format_assignment_line(assignment: &Assignment, tz: Tz) -> String {
    format!(
        "{} - {}   Due at: {}",
        assignment.id,
        assignment.name,
        format_due_at(assignment.due_at.as_ref(), tz)
    )
}

pub fn print_assignments(console: &mut dyn Console, assignments: &[Assignment], tz: Tz) {
    for assignment in assignments {
        console.say(&format_assignment_line(assignment, tz));
    }
}

/// Ask for an assignment id until one is accepted. Unknown ids fall back to
/// the raw number, same as for courses; there is no availability check.
pub fn select_assignment(
    console: &mut dyn Console,
    assignments: &[Assignment],
) -> Result<Selection> {
    prompt_for_id(console, &ASSIGNMENT_PROMPT, |id| {
        assignments
            .iter()
            .find(|assignment| assignment.id == id)
            .map_or(Lookup::Missing, |assignment| {
                Lookup::Found(Some(assignment.name.clone()))
            })
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::console::ScriptedConsole;
    use chrono::TimeZone;

    fn assignment(id: u64, name: &str, due_at: Option<DateTime<Utc>>) -> Assignment {
        Assignment {
            id,
            name: name.to_string(),
            due_at,
            description: Some("<p>body</p>".to_string()),
        }
    }

    #[test]
    fn test_due_at_in_daylight_saving_time() {
        let due = Utc.with_ymd_and_hms(2024, 3, 15, 23, 59, 0).unwrap();
        // New York switched to EDT (UTC-4) on 2024-03-10
        assert_eq!(
            format_due_at(Some(&due), chrono_tz::America::New_York),
            "2024-03-15 19:59:00 EDT"
        );
    }

    #[test]
    fn test_due_at_in_standard_time() {
        let due = Utc.with_ymd_and_hms(2024, 1, 15, 23, 59, 0).unwrap();
        assert_eq!(
            format_due_at(Some(&due), chrono_tz::America::New_York),
            "2024-01-15 18:59:00 EST"
        );
    }

    #[test]
    fn test_due_at_crosses_midnight() {
        let due = Utc.with_ymd_and_hms(2024, 3, 15, 23, 59, 0).unwrap();
        assert_eq!(
            format_due_at(Some(&due), chrono_tz::Asia::Tokyo),
            "2024-03-16 08:59:00 JST"
        );
    }

    #[test]
    fn test_missing_due_date() {
        let line = format_assignment_line(&assignment(3, "Essay", None), Tz::UTC);
        assert_eq!(line, "3 - Essay   Due at: NOT AVAILABLE");
    }

    #[test]
    fn test_select_known_assignment() {
        let assignments = vec![assignment(100, "Lab 1", None), assignment(200, "Lab 2", None)];
        let mut console = ScriptedConsole::new(["x1", "200"]);

        let selection = select_assignment(&mut console, &assignments).unwrap();

        assert_eq!(selection.id, 200);
        assert_eq!(selection.name.as_deref(), Some("Lab 2"));
        assert_eq!(console.output()[0], "Invalid assignment ID.");
        assert_eq!(console.output()[1], "You selected: 200 - Lab 2");
    }

    #[test]
    fn test_select_unknown_assignment_falls_back() {
        let assignments = vec![assignment(100, "Lab 1", None)];
        let mut console = ScriptedConsole::new(["5"]);

        let selection = select_assignment(&mut console, &assignments).unwrap();

        assert_eq!(selection, Selection { id: 5, name: None });
        assert_eq!(
            console.output()[0],
            "Assignment not found or you do not have access to this assignment."
        );
    }
}
