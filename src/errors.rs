use astra::Response;
// errors.rs
use std::fmt;

/// Errors that end a request with an error page instead of a rendered view.
/// Backend failures are rendered inline by the handlers and never reach
/// this type.
#[derive(Debug)]
pub enum ServerError {
    NotFound,
    BadRequest(String),
    PayloadTooLarge(String),
    InternalError,
}

// Type alias commonly used by route handlers.
pub type ResultResp = Result<Response, ServerError>;

impl ServerError {
    pub fn status(&self) -> u16 {
        match self {
            ServerError::NotFound => 404,
            ServerError::BadRequest(_) => 400,
            ServerError::PayloadTooLarge(_) => 413,
            ServerError::InternalError => 500,
        }
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ServerError::NotFound => write!(f, "Not Found"),
            ServerError::BadRequest(msg) => write!(f, "Bad Request: {msg}"),
            ServerError::PayloadTooLarge(msg) => write!(f, "Payload Too Large: {msg}"),
            ServerError::InternalError => write!(f, "Internal Server Error"),
        }
    }
}

impl std::error::Error for ServerError {}

impl From<http::Error> for ServerError {
    fn from(err: http::Error) -> Self {
        tracing::error!(error = %err, "failed to build response");
        ServerError::InternalError
    }
}
