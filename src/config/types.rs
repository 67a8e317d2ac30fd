//! Core configuration types for talking to a Canvas instance
//!
//! This module contains the `CanvasConfig` struct that every pipeline stage
//! receives explicitly, plus the error type produced while validating it.

use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Errors raised while validating a `CanvasConfig`
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The base URL was never provided or was blank
    #[error("Canvas base URL is empty")]
    MissingBaseUrl,

    /// The base URL could not be parsed as an absolute URL
    #[error("Invalid Canvas base URL '{url}': {source}")]
    InvalidBaseUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The base URL parsed, but not as http(s)
    #[error("Unsupported scheme '{scheme}' in Canvas base URL (expected http or https)")]
    UnsupportedScheme { scheme: String },

    /// The access token was blank
    #[error("Canvas access token is empty")]
    MissingAccessToken,

    /// The configured time zone is not an IANA zone name
    #[error("Unknown time zone '{0}'")]
    UnknownTimeZone(String),
}

/// Connection and output settings for one run
#[derive(Clone, Serialize, Deserialize)]
pub struct CanvasConfig {
    /// Canvas root URL without a trailing slash, e.g. `https://canvas.example.edu`.
    ///
    /// **INVARIANT:** parses as an absolute http(s) URL (checked in builder).
    pub(crate) base_url: String,

    /// Personal access token sent as a bearer token and optionally appended
    /// to same-origin image URLs. Never serialized.
    #[serde(skip_serializing, default)]
    pub(crate) access_token: String,

    /// Directory the Markdown file is written into
    pub(crate) output_dir: PathBuf,

    /// Zone used to localize due dates. `None` means detect from the system.
    #[serde(skip)]
    pub(crate) time_zone: Option<Tz>,
}

impl std::fmt::Debug for CanvasConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanvasConfig")
            .field("base_url", &self.base_url)
            .field("access_token", &"<redacted>")
            .field("output_dir", &self.output_dir)
            .field("time_zone", &self.time_zone)
            .finish()
    }
}

impl CanvasConfig {
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    #[must_use]
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    #[must_use]
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }

    /// Explicitly configured zone, if any
    #[must_use]
    pub fn time_zone(&self) -> Option<Tz> {
        self.time_zone
    }

    /// Zone used for due dates: the configured one, else the system zone,
    /// else UTC.
    #[must_use]
    pub fn effective_time_zone(&self) -> Tz {
        if let Some(tz) = self.time_zone {
            return tz;
        }
        match iana_time_zone::get_timezone() {
            Ok(name) => name.parse::<Tz>().unwrap_or_else(|_| {
                log::warn!("System time zone '{name}' is not in the tz database, using UTC");
                Tz::UTC
            }),
            Err(e) => {
                log::warn!("Could not detect the system time zone ({e}), using UTC");
                Tz::UTC
            }
        }
    }
}
