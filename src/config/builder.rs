//! Type-safe builder for `CanvasConfig` using the typestate pattern
//!
//! `build()` only exists once both the base URL and the access token have
//! been supplied, so a half-configured client cannot be constructed.

use chrono_tz::Tz;
use std::marker::PhantomData;
use std::path::PathBuf;
use url::Url;

use super::types::{CanvasConfig, ConfigError};

// Type states for the builder
pub struct WithBaseUrl;
pub struct Complete;

pub struct CanvasConfigBuilder<State = ()> {
    pub(crate) base_url: Option<String>,
    pub(crate) access_token: Option<String>,
    pub(crate) output_dir: Option<PathBuf>,
    pub(crate) time_zone: Option<String>,
    pub(crate) _phantom: PhantomData<State>,
}

impl Default for CanvasConfigBuilder<()> {
    fn default() -> Self {
        Self {
            base_url: None,
            access_token: None,
            output_dir: None,
            time_zone: None,
            _phantom: PhantomData,
        }
    }
}

impl CanvasConfig {
    #[must_use]
    pub fn builder() -> CanvasConfigBuilder<()> {
        CanvasConfigBuilder::default()
    }
}

impl<State> CanvasConfigBuilder<State> {
    fn transition<Next>(self) -> CanvasConfigBuilder<Next> {
        CanvasConfigBuilder {
            base_url: self.base_url,
            access_token: self.access_token,
            output_dir: self.output_dir,
            time_zone: self.time_zone,
            _phantom: PhantomData,
        }
    }

    /// Directory the Markdown file is written to (default: current directory)
    #[must_use]
    pub fn output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = Some(dir.into());
        self
    }

    /// IANA zone name (e.g. `Europe/Berlin`) used to localize due dates
    #[must_use]
    pub fn time_zone(mut self, zone: impl Into<String>) -> Self {
        self.time_zone = Some(zone.into());
        self
    }
}

impl CanvasConfigBuilder<()> {
    #[must_use]
    pub fn base_url(mut self, url: impl Into<String>) -> CanvasConfigBuilder<WithBaseUrl> {
        self.base_url = Some(url.into());
        self.transition()
    }
}

impl CanvasConfigBuilder<WithBaseUrl> {
    #[must_use]
    pub fn access_token(mut self, token: impl Into<String>) -> CanvasConfigBuilder<Complete> {
        self.access_token = Some(token.into());
        self.transition()
    }
}

impl CanvasConfigBuilder<Complete> {
    /// Validate and build the configuration
    ///
    /// # Errors
    ///
    /// Returns a `ConfigError` when the base URL is blank, unparsable or not
    /// http(s), when the token is blank, or when the time zone is unknown.
    pub fn build(self) -> Result<CanvasConfig, ConfigError> {
        let raw_url = self.base_url.unwrap_or_default();
        let base_url = normalize_base_url(&raw_url)?;

        let access_token = self.access_token.unwrap_or_default().trim().to_string();
        if access_token.is_empty() {
            return Err(ConfigError::MissingAccessToken);
        }

        let time_zone = match self.time_zone {
            Some(zone) if !zone.trim().is_empty() => Some(
                zone.trim()
                    .parse::<Tz>()
                    .map_err(|_| ConfigError::UnknownTimeZone(zone.clone()))?,
            ),
            _ => None,
        };

        Ok(CanvasConfig {
            base_url,
            access_token,
            output_dir: self.output_dir.unwrap_or_else(|| PathBuf::from(".")),
            time_zone,
        })
    }
}

/// Trim whitespace and trailing slashes, then check the URL is absolute http(s)
fn normalize_base_url(raw: &str) -> Result<String, ConfigError> {
    let trimmed = raw.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ConfigError::MissingBaseUrl);
    }

    let parsed = Url::parse(trimmed).map_err(|source| ConfigError::InvalidBaseUrl {
        url: trimmed.to_string(),
        source,
    })?;

    match parsed.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(ConfigError::UnsupportedScheme {
            scheme: other.to_string(),
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slash_is_trimmed() {
        let config = CanvasConfig::builder()
            .base_url("https://canvas.example.edu/")
            .access_token("abc")
            .build()
            .unwrap();
        assert_eq!(config.base_url(), "https://canvas.example.edu");
    }

    #[test]
    fn test_relative_url_rejected() {
        let err = CanvasConfig::builder()
            .base_url("canvas.example.edu")
            .access_token("abc")
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidBaseUrl { .. }));
    }

    #[test]
    fn test_non_http_scheme_rejected() {
        let err = CanvasConfig::builder()
            .base_url("ftp://canvas.example.edu")
            .access_token("abc")
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnsupportedScheme { .. }));
    }

    #[test]
    fn test_blank_token_rejected() {
        let err = CanvasConfig::builder()
            .base_url("https://canvas.example.edu")
            .access_token("   ")
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::MissingAccessToken));
    }

    #[test]
    fn test_time_zone_parsed() {
        let config = CanvasConfig::builder()
            .time_zone("America/New_York")
            .base_url("https://canvas.example.edu")
            .access_token("abc")
            .build()
            .unwrap();
        assert_eq!(config.time_zone(), Some(chrono_tz::America::New_York));
        assert_eq!(config.effective_time_zone(), chrono_tz::America::New_York);
    }

    #[test]
    fn test_unknown_time_zone_rejected() {
        let err = CanvasConfig::builder()
            .base_url("https://canvas.example.edu")
            .access_token("abc")
            .time_zone("Mars/Olympus_Mons")
            .build()
            .unwrap_err();
        assert!(matches!(err, ConfigError::UnknownTimeZone(_)));
    }

    #[test]
    fn test_debug_redacts_token() {
        let config = CanvasConfig::builder()
            .base_url("https://canvas.example.edu")
            .access_token("super-secret")
            .build()
            .unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("super-secret"));
    }
}
