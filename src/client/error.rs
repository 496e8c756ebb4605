//! Errors surfaced by [`crate::client::ApiClient`].

use reqwest::StatusCode;
use thiserror::Error;
use url::Url;

use crate::models::MappingError;

/// The response body could not be turned into the expected shape.
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Mapping(#[from] MappingError),
}

#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered with a non-2xx status. `detail` is the response
    /// text, or the request URL when the body was empty.
    #[error("API {status} {status_text}: {detail}")]
    Status {
        status: u16,
        status_text: String,
        detail: String,
    },

    #[error("request failed: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("failed to decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: DecodeError,
    },

    #[error("failed to encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    #[error("invalid request URL '{url}': {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    /// The caller stopped waiting before the result arrived.
    #[error("request cancelled")]
    Cancelled,
}

impl ApiError {
    pub(crate) fn status(status: StatusCode, body: &str, url: &Url) -> Self {
        let detail = if body.is_empty() {
            url.to_string()
        } else {
            body.to_string()
        };
        ApiError::Status {
            status: status.as_u16(),
            status_text: status.canonical_reason().unwrap_or_default().to_string(),
            detail,
        }
    }

    pub(crate) fn decode(url: &Url, source: impl Into<DecodeError>) -> Self {
        ApiError::Decode {
            url: url.to_string(),
            source: source.into(),
        }
    }

    /// HTTP status for [`ApiError::Status`].
    pub fn status_code(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_not_found(&self) -> bool {
        self.status_code() == Some(404)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ApiError::Cancelled)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_message_prefers_body_text() {
        let url = Url::parse("http://localhost:3000/api/v1/zones/").unwrap();
        let err = ApiError::status(StatusCode::NOT_FOUND, "{\"detail\":\"Not Found\"}", &url);
        assert_eq!(err.to_string(), "API 404 Not Found: {\"detail\":\"Not Found\"}");
        assert!(err.is_not_found());
    }

    #[test]
    fn status_message_falls_back_to_url() {
        let url = Url::parse("http://localhost:3000/api/v1/zones/").unwrap();
        let err = ApiError::status(StatusCode::INTERNAL_SERVER_ERROR, "", &url);
        assert_eq!(
            err.to_string(),
            "API 500 Internal Server Error: http://localhost:3000/api/v1/zones/"
        );
        assert_eq!(err.status_code(), Some(500));
    }
}
