mod client;
mod dev_backend;
mod dto;
mod error;

use async_trait::async_trait;

use crate::types::Event;

pub use client::ApiClient;
pub use dev_backend::DevBackend;
pub use error::{EventsError, LoginError};

/// Date range of an events query, already in `YYYY-MM-DD HH:MM:SS` form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EventsQuery {
    pub start: String,
    pub end: String,
}

/// The two backend calls the dashboard makes.
#[async_trait]
pub trait EventsApi: Send + Sync {
    /// `POST /auth/login`, returning the access token.
    async fn login(&self, login: &str, password: &str) -> Result<String, LoginError>;

    /// `GET /api/public/events/getEvents` with a bearer token.
    async fn get_events(&self, token: &str, query: &EventsQuery) -> Result<Vec<Event>, EventsError>;
}
