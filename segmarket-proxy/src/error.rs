use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};

#[derive(Debug, thiserror::Error)]
pub enum ProxyError {
    #[error("Failed to read request body: {0}")]
    RequestBody(#[from] axum::Error),
    #[error("Invalid upstream URL: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("Upstream request failed: {0}")]
    Upstream(#[from] reqwest::Error),
}

impl IntoResponse for ProxyError {
    fn into_response(self) -> Response {
        let status = match self {
            Self::RequestBody(_) => StatusCode::BAD_REQUEST,
            Self::InvalidUrl(_) => StatusCode::BAD_REQUEST,
            Self::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        tracing::warn!("{}", self);

        (status, self.to_string()).into_response()
    }
}
