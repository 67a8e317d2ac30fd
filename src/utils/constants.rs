//! Shared constants for the Canvas client and the Markdown pipeline
//!
//! Keeping the wire-level strings in one place keeps the client, the image
//! rewriter and the post-processor in agreement.

/// Course listing endpoint, relative to the base URL
pub const COURSES_PATH: &str = "/api/v1/courses";

/// Query parameter restricting course listing to active enrollments
pub const COURSE_QUERY: [(&str, &str); 1] = [("enrollment_state", "active")];

/// Query parameter asking Canvas for every due-date override
pub const ASSIGNMENT_QUERY: [(&str, &str); 1] = [("include[]", "all_dates")];

/// User agent sent with every API request
pub const USER_AGENT: &str = concat!("canvas-assignment-md/", env!("CARGO_PKG_VERSION"));

/// Attribute Canvas puts on rendered equation images
pub const EQUATION_ATTRIBUTE: &str = "data-equation-content";

/// Sentinel `src` marking an image as an equation until post-processing
///
/// Contains a space on purpose: no real image URL looks like this.
pub const EQUATION_PLACEHOLDER: &str = "latex equation";

/// Query parameter carrying the token on same-origin image URLs
pub const ACCESS_TOKEN_PARAM: &str = "access_token";

/// Shown when a due date is missing
pub const NOT_AVAILABLE: &str = "NOT AVAILABLE";

/// Shown for a course that has neither a name nor a date restriction
pub const UNKNOWN: &str = "UNKNOWN";

/// Due date rendering, e.g. `2024-03-15 19:59:00 EDT`
pub const DUE_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S %Z";
