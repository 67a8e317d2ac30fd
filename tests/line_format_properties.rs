//! Property tests for listing lines and id parsing

use canvas_assignment_md::selection::{format_assignment_line, format_course_line, parse_id};
use canvas_assignment_md::utils::{append_access_token, is_same_origin};
use canvas_assignment_md::{Assignment, Course};
use chrono::{TimeZone, Utc};
use proptest::prelude::*;

proptest! {
    #[test]
    fn course_line_is_id_dash_name(id in any::<u64>(), name in "[A-Za-z0-9 ]{1,40}") {
        let course = Course { id, name: Some(name.clone()), access_restricted_by_date: None };
        prop_assert_eq!(format_course_line(&course), format!("{id} - {name}"));
    }

    #[test]
    fn assignment_line_shape(
        id in any::<u64>(),
        name in "[A-Za-z0-9 ]{1,40}",
        secs in 0i64..4_000_000_000,
    ) {
        let due = Utc.timestamp_opt(secs, 0).single();
        let assignment = Assignment { id, name: name.clone(), due_at: due, description: None };
        let line = format_assignment_line(&assignment, chrono_tz::Tz::UTC);
        let prefix = format!("{id} - {name}   Due at: ");
        prop_assert!(line.starts_with(&prefix));
        prop_assert!(line.ends_with(" UTC"));
    }

    #[test]
    fn digit_strings_parse(id in any::<u64>()) {
        prop_assert_eq!(parse_id(&id.to_string()), Some(id));
    }

    #[test]
    fn non_digit_input_rejected(input in "[0-9]*[a-zA-Z -][0-9a-zA-Z]*") {
        prop_assert_eq!(parse_id(&input), None);
    }

    #[test]
    fn token_is_appended_exactly_once(path in "/[a-z]{1,10}(\\?[a-z]=[0-9])?") {
        let src = format!("https://canvas.example.edu{path}");
        prop_assert!(is_same_origin(&src, "https://canvas.example.edu"));
        let out = append_access_token(&src, "tok");
        prop_assert_eq!(out.matches('?').count(), 1);
        prop_assert!(out.ends_with("access_token=tok"));
    }
}
