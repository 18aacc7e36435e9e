use thiserror::Error;

/// Failures of `POST /auth/login`.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LoginError {
    /// Non-2xx answer, with the server's `message` when it sent one.
    #[error("login rejected: {}", .0.as_deref().unwrap_or("no message"))]
    Rejected(Option<String>),
    #[error("login succeeded but no access_token was returned")]
    MissingToken,
    #[error("network error: {0}")]
    Network(String),
}

/// Failures of the events query.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum EventsError {
    /// 401 or 403: the token is no longer accepted.
    #[error("session expired")]
    SessionExpired,
    #[error("server error: {}", .0.as_deref().unwrap_or("no message"))]
    Server(Option<String>),
    #[error("network error: {0}")]
    Network(String),
}
