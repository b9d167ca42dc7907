use serde::Deserialize;
use std::error::Error;
use std::fmt;

#[derive(Debug)]
pub enum ApiError {
    /// The backend could not be reached at all.
    Network(String),
    /// The backend answered with a non-2xx status.
    Status {
        status: u16,
        reason: String,
        message: Option<String>,
    },
    /// A 2xx answer whose body did not have the expected shape.
    Decode(String),
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn is_network(&self) -> bool {
        matches!(self, ApiError::Network(_))
    }

    /// Message the backend put in its error body, if any.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            ApiError::Status {
                message: Some(m), ..
            } if !m.trim().is_empty() => Some(m.as_str()),
            _ => None,
        }
    }

    /// Builds a `Status` error from a response status and its raw body.
    pub fn from_status(status: u16, reason: &str, body: &str) -> Self {
        ApiError::Status {
            status,
            reason: reason.to_string(),
            message: ErrorBody::message_from(body),
        }
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ApiError::Network(msg) => write!(f, "Network error: {msg}"),
            ApiError::Status {
                status,
                reason,
                message,
            } => match message {
                Some(m) => write!(f, "Backend returned {status} {reason}: {m}"),
                None => write!(f, "Backend returned {status} {reason}"),
            },
            ApiError::Decode(msg) => write!(f, "Unexpected response body: {msg}"),
        }
    }
}

impl Error for ApiError {}

// The listing endpoints answer with `mensagem`, the auth endpoints with `message`.
#[derive(Debug, Default, Deserialize)]
struct ErrorBody {
    mensagem: Option<String>,
    message: Option<String>,
}

impl ErrorBody {
    fn message_from(body: &str) -> Option<String> {
        let parsed: ErrorBody = serde_json::from_str(body).ok()?;
        parsed.mensagem.or(parsed.message)
    }
}
