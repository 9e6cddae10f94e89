use std::time::Duration;

use thiserror::Error;

/// The outbound call an upstream error came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum UpstreamCall {
    Synonyms,
    Suggestions,
    Dictionary,
}

impl std::fmt::Display for UpstreamCall {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Synonyms => write!(f, "synonyms"),
            Self::Suggestions => write!(f, "suggestions"),
            Self::Dictionary => write!(f, "dictionary"),
        }
    }
}

/// Failure of a single outbound call. Detail is for logs only.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("{call} request failed: {source}")]
    Transport {
        call: UpstreamCall,
        #[source]
        source: reqwest::Error,
    },

    #[error("{call} service returned {status}")]
    Status {
        call: UpstreamCall,
        status: reqwest::StatusCode,
    },

    #[error("{call} response could not be decoded: {source}")]
    Decode {
        call: UpstreamCall,
        #[source]
        source: reqwest::Error,
    },

    #[error("{call} request timed out after {after:?}")]
    Timeout { call: UpstreamCall, after: Duration },
}

impl UpstreamError {
    pub fn call(&self) -> UpstreamCall {
        match self {
            Self::Transport { call, .. }
            | Self::Status { call, .. }
            | Self::Decode { call, .. }
            | Self::Timeout { call, .. } => *call,
        }
    }

    /// Classify a reqwest error raised while sending or reading a body.
    pub(crate) fn from_reqwest(call: UpstreamCall, source: reqwest::Error, after: Duration) -> Self {
        if source.is_timeout() {
            Self::Timeout { call, after }
        } else if source.is_decode() {
            Self::Decode { call, source }
        } else {
            Self::Transport { call, source }
        }
    }
}

/// Errors surfaced to the caller of a lookup.
///
/// The display text is the exact message returned in the `error` body.
#[derive(Debug, Error)]
pub enum LookupError {
    #[error("Word is required")]
    MissingInput,

    #[error("Error fetching data. Please try again.")]
    UpstreamFailure(#[source] UpstreamError),
}

impl LookupError {
    pub fn http_status(&self) -> u16 {
        match self {
            Self::MissingInput => 400,
            Self::UpstreamFailure(_) => 500,
        }
    }
}

impl From<UpstreamError> for LookupError {
    fn from(err: UpstreamError) -> Self {
        Self::UpstreamFailure(err)
    }
}

#[cfg(feature = "server")]
impl axum::response::IntoResponse for LookupError {
    fn into_response(self) -> axum::response::Response {
        let status = axum::http::StatusCode::from_u16(self.http_status())
            .unwrap_or(axum::http::StatusCode::INTERNAL_SERVER_ERROR);
        let body = crate::types::ErrorResponse {
            error: self.to_string(),
        };
        (status, axum::Json(body)).into_response()
    }
}
