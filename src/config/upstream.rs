//! Upstream backend resolution.
//!
//! The backend origin is read exactly once at startup. Two environment
//! variables are accepted; the first one present and non-empty wins. A value
//! in the config file overrides both.

use thiserror::Error;
use url::Url;

use crate::config::schema::UpstreamSettings;

/// Publicly exposed variant, shared with browser builds.
pub const PUBLIC_BACKEND_URL_VAR: &str = "NEXT_PUBLIC_BACKEND_URL";

/// Server-only variant.
pub const BACKEND_URL_VAR: &str = "BACKEND_URL";

/// Fixed API prefix appended to the backend origin.
pub const API_PREFIX: &str = "/api/v1";

/// Errors raised while resolving the upstream base URL.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error(
        "Missing backend URL. Set {PUBLIC_BACKEND_URL_VAR} (or {BACKEND_URL_VAR}) in the environment, e.g. http://localhost:8000"
    )]
    Missing,

    #[error("Invalid backend URL '{value}': {source}")]
    Invalid {
        value: String,
        #[source]
        source: url::ParseError,
    },

    #[error("Backend URL '{0}' must use http or https")]
    UnsupportedScheme(String),
}

/// Resolved upstream location.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamConfig {
    base_url: Url,
}

impl UpstreamConfig {
    /// Resolve from config settings and the process environment.
    pub fn from_env(settings: &UpstreamSettings) -> Result<Self, UpstreamError> {
        Self::resolve(settings, |name| std::env::var(name).ok())
    }

    /// Resolve with an injected variable lookup.
    ///
    /// Precedence: `settings.base_url`, then [`PUBLIC_BACKEND_URL_VAR`],
    /// then [`BACKEND_URL_VAR`]. Blank values count as absent.
    pub fn resolve<F>(settings: &UpstreamSettings, lookup: F) -> Result<Self, UpstreamError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw = settings
            .base_url
            .clone()
            .filter(|v| !v.trim().is_empty())
            .or_else(|| lookup(PUBLIC_BACKEND_URL_VAR).filter(|v| !v.trim().is_empty()))
            .or_else(|| lookup(BACKEND_URL_VAR).filter(|v| !v.trim().is_empty()))
            .ok_or(UpstreamError::Missing)?;

        Self::parse(raw.trim())
    }

    /// Build from an explicit origin.
    pub fn parse(raw: &str) -> Result<Self, UpstreamError> {
        let base_url = Url::parse(raw).map_err(|source| UpstreamError::Invalid {
            value: raw.to_string(),
            source,
        })?;

        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(UpstreamError::UnsupportedScheme(raw.to_string()));
        }

        Ok(Self { base_url })
    }

    /// The backend origin as configured.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Backend origin joined with the fixed API prefix, without a trailing slash.
    pub fn api_base(&self) -> String {
        let base = self.base_url.as_str().trim_end_matches('/');
        format!("{base}{API_PREFIX}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn env<'a>(pairs: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |name| {
            pairs
                .iter()
                .find(|(k, _)| *k == name)
                .map(|(_, v)| (*v).to_string())
        }
    }

    #[test]
    fn public_variable_wins() {
        let upstream = UpstreamConfig::resolve(
            &UpstreamSettings::default(),
            env(&[
                (BACKEND_URL_VAR, "http://server-only:8000"),
                (PUBLIC_BACKEND_URL_VAR, "http://public:8000"),
            ]),
        )
        .unwrap();
        assert_eq!(upstream.api_base(), "http://public:8000/api/v1");
    }

    #[test]
    fn falls_back_to_server_only_variable() {
        let upstream = UpstreamConfig::resolve(
            &UpstreamSettings::default(),
            env(&[(PUBLIC_BACKEND_URL_VAR, "  "), (BACKEND_URL_VAR, "http://backend:8000/")]),
        )
        .unwrap();
        assert_eq!(upstream.api_base(), "http://backend:8000/api/v1");
    }

    #[test]
    fn config_file_overrides_environment() {
        let settings = UpstreamSettings {
            base_url: Some("https://pinned.example".into()),
        };
        let upstream =
            UpstreamConfig::resolve(&settings, env(&[(PUBLIC_BACKEND_URL_VAR, "http://public")]))
                .unwrap();
        assert_eq!(upstream.api_base(), "https://pinned.example/api/v1");
    }

    #[test]
    fn missing_names_both_variables_and_an_example() {
        let err = UpstreamConfig::resolve(&UpstreamSettings::default(), env(&[])).unwrap_err();
        let message = err.to_string();
        assert!(matches!(err, UpstreamError::Missing));
        assert!(message.contains(PUBLIC_BACKEND_URL_VAR));
        assert!(message.contains(BACKEND_URL_VAR));
        assert!(message.contains("http://localhost:8000"));
    }

    #[test]
    fn rejects_non_http_schemes() {
        let err = UpstreamConfig::parse("ftp://backend").unwrap_err();
        assert!(matches!(err, UpstreamError::UnsupportedScheme(_)));

        let err = UpstreamConfig::parse("backend:8000").unwrap_err();
        assert!(matches!(err, UpstreamError::UnsupportedScheme(_) | UpstreamError::Invalid { .. }));
    }

    #[test]
    fn base_path_is_kept() {
        let upstream = UpstreamConfig::parse("http://backend:8000/irrigation/").unwrap();
        assert_eq!(upstream.api_base(), "http://backend:8000/irrigation/api/v1");
    }
}
