use reqwest::{Method, StatusCode};
use serde::de::DeserializeOwned;
use thiserror::Error;

/// Why a [`Context`](crate::Context) stopped a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ContextError {
    #[error("context canceled")]
    Cancelled,
    #[error("context deadline exceeded")]
    DeadlineExceeded,
}

/// Non-success HTTP response from the Jupiter API.
///
/// The body is kept exactly as received so callers can forward it or parse
/// it into whatever error shape the endpoint documents.
#[derive(Debug, Clone)]
pub struct ApiError {
    pub method: Method,
    pub url: String,
    pub status: StatusCode,
    pub raw_body: Vec<u8>,
}

impl ApiError {
    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.raw_body).to_string()
    }

    pub fn json<T: DeserializeOwned>(&self) -> serde_json::Result<T> {
        serde_json::from_slice(&self.raw_body)
    }
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "call {}() on {} status code: {}. raw body {}",
            self.method,
            self.url,
            self.status.as_u16(),
            self.body_text()
        )
    }
}

impl std::error::Error for ApiError {}

#[derive(Debug, Error)]
pub enum JupiterError {
    /// The context fired while waiting for rate limiter admission; nothing was sent.
    #[error("rate limiter wait aborted: {0}")]
    Wait(ContextError),

    #[error("api call {method}() on {url}: {source}")]
    Transport {
        method: Method,
        url: String,
        #[source]
        source: reqwest::Error,
    },

    /// The context fired after the request left the client.
    #[error("api call {method}() on {url}: {reason}")]
    Interrupted {
        method: Method,
        url: String,
        reason: ContextError,
    },

    #[error("call {method}() on {url} status code: {status}. could not read response body: {source}")]
    BodyRead {
        method: Method,
        url: String,
        status: u16,
        #[source]
        source: reqwest::Error,
    },

    #[error(transparent)]
    Api(#[from] ApiError),

    /// Success status whose body is not valid JSON for the target type,
    /// including an empty body.
    #[error("call {method}() on {url} status code: {status}. could not decode body to response model: {source}")]
    Decode {
        method: Method,
        url: String,
        status: u16,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid url {url}: {source}")]
    InvalidUrl {
        url: String,
        #[source]
        source: url::ParseError,
    },

    #[error("failed to marshal request body: {0}")]
    Serialize(#[source] serde_json::Error),

    #[error("invalid configuration: {0}")]
    Config(String),

    #[error("failed to build http client: {0}")]
    Build(#[source] reqwest::Error),
}

impl JupiterError {
    /// The HTTP status the server answered with, when one was received.
    pub fn status(&self) -> Option<u16> {
        match self {
            JupiterError::Api(e) => Some(e.status.as_u16()),
            JupiterError::BodyRead { status, .. }
            | JupiterError::Decode { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn as_api_error(&self) -> Option<&ApiError> {
        match self {
            JupiterError::Api(e) => Some(e),
            _ => None,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(
            self,
            JupiterError::Wait(_) | JupiterError::Interrupted { .. }
        )
    }
}

pub type Result<T> = std::result::Result<T, JupiterError>;

#[cfg(test)]
mod tests {
    use super::*;

    fn api_error(status: u16, body: &str) -> ApiError {
        ApiError {
            method: Method::GET,
            url: "https://api.jup.ag/price/v3?ids=SOL".to_string(),
            status: StatusCode::from_u16(status).unwrap(),
            raw_body: body.as_bytes().to_vec(),
        }
    }

    #[test]
    fn test_api_error_display_has_status_and_body() {
        let err = JupiterError::from(api_error(429, "slow down"));
        let msg = err.to_string();
        assert!(msg.contains("429"), "{msg}");
        assert!(msg.contains("slow down"), "{msg}");
        assert!(msg.contains("GET()"), "{msg}");
        assert_eq!(err.status(), Some(429));
    }

    #[test]
    fn test_api_error_json_body() {
        #[derive(serde::Deserialize)]
        struct Body {
            error: String,
        }
        let err = api_error(400, r#"{"error":"bad request"}"#);
        let body: Body = err.json().unwrap();
        assert_eq!(body.error, "bad request");
        assert!(api_error(400, "plain").json::<Body>().is_err());
    }

    #[test]
    fn test_context_errors_are_cancellations() {
        let err = JupiterError::Wait(ContextError::Cancelled);
        assert!(err.is_cancelled());
        assert_eq!(err.status(), None);
        assert!(err.to_string().contains("context canceled"));
        assert!(!JupiterError::Config("x".into()).is_cancelled());
    }
}
