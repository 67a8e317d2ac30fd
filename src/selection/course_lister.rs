use anyhow::Result;

use super::{Lookup, PromptTexts, Selection, prompt_for_id};
use crate::canvas_api::Course;
use crate::console::Console;
use crate::utils::constants::{NOT_AVAILABLE, UNKNOWN};

const COURSE_PROMPT: PromptTexts = PromptTexts {
    prompt: "Enter course ID: ",
    invalid: "Invalid course ID.",
    unavailable: "Course is not available.",
    not_found: "Course not found or you do not have access to this course.",
};

/// `id - name`, `id - NOT AVAILABLE` or `id - UNKNOWN`
#[must_use]
pub fn format_course_line(course: &Course) -> String {
    let label = match (&course.name, course.is_restricted()) {
        (Some(name), _) => name.as_str(),
        (None, true) => NOT_AVAILABLE,
        (None, false) => UNKNOWN,
    };
    format!("{} - {}", course.id, label)
}

pub fn print_courses(console: &mut dyn Console, courses: &[Course]) {
    console.say("Available courses:");
    for course in courses {
        console.say(&format_course_line(course));
    }
}

/// Ask for a course id until one is accepted.
///
/// The search stops at the first record with the typed id. A date-restricted
/// match is reported as unavailable and then falls through to the not-found
/// path, so its raw id is still accepted without a name.
pub fn select_course(console: &mut dyn Console, courses: &[Course]) -> Result<Selection> {
    prompt_for_id(console, &COURSE_PROMPT, |id| {
        match courses.iter().find(|course| course.id == id) {
            Some(course) if course.is_restricted() => Lookup::Unavailable,
            Some(course) => Lookup::Found(course.name.clone()),
            None => Lookup::Missing,
        }
    })
}
