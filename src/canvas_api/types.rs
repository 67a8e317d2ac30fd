//! Course and assignment records as returned by the Canvas REST API
//!
//! Only the fields the picker needs are modelled; serde ignores the rest.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One entry of `GET /api/v1/courses`
///
/// Canvas omits `name` for courses the user can no longer see, which is
/// why it is optional here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Course {
    pub id: u64,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub access_restricted_by_date: Option<bool>,
}

impl Course {
    #[must_use]
    pub fn is_restricted(&self) -> bool {
        self.access_restricted_by_date == Some(true)
    }
}

/// One entry of `GET /api/v1/courses/{id}/assignments`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Assignment {
    pub id: u64,
    pub name: String,
    /// UTC deadline; `null` when the assignment has no due date
    #[serde(default)]
    pub due_at: Option<DateTime<Utc>>,
    /// Rich-text body as HTML; `null` for assignments without a description
    #[serde(default)]
    pub description: Option<String>,
}

impl Assignment {
    /// Description HTML, empty when Canvas sent `null`
    #[must_use]
    pub fn description_html(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}
