use anyhow::{Context, Result};
use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use tracing::instrument;

use super::dto::{ErrorBody, EventsEnvelope, LoginRequest, LoginResponse};
use super::{EventsApi, EventsError, EventsQuery, LoginError};
use crate::types::Event;

const EVENTS_PATH: &str = "/api/public/events/getEvents";

#[derive(Debug, Clone)]
pub struct ApiClient {
    client: Client,
    api_url: String,
    events_url: String,
}

impl ApiClient {
    pub fn new(api_url: &str, events_url: &str) -> Result<Self> {
        let client = Client::builder()
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            api_url: api_url.trim_end_matches('/').to_string(),
            events_url: events_url.trim_end_matches('/').to_string(),
        })
    }
}

/// Full events URL. Query values are percent-encoded like `encodeURIComponent`
/// (space becomes `%20`, not `+`), which the backend requires.
pub fn events_url(base: &str, query: &EventsQuery) -> String {
    format!(
        "{}{}?startDate={}&endDate={}",
        base.trim_end_matches('/'),
        EVENTS_PATH,
        urlencoding::encode(&query.start),
        urlencoding::encode(&query.end)
    )
}

#[async_trait]
impl EventsApi for ApiClient {
    #[instrument(name = "login", skip(self, password))]
    async fn login(&self, login: &str, password: &str) -> Result<String, LoginError> {
        let response = self
            .client
            .post(format!("{}/auth/login", self.api_url))
            .json(&LoginRequest { login, password })
            .send()
            .await
            .map_err(|e| LoginError::Network(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(ErrorBody::into_message);
            tracing::warn!(%status, ?message, "login rejected");
            return Err(LoginError::Rejected(message));
        }

        let body = response
            .json::<LoginResponse>()
            .await
            .map_err(|e| LoginError::Network(format!("Failed to parse login response: {}", e)))?;

        body.access_token
            .filter(|token| !token.is_empty())
            .ok_or(LoginError::MissingToken)
    }

    #[instrument(name = "get_events", skip(self, token))]
    async fn get_events(&self, token: &str, query: &EventsQuery) -> Result<Vec<Event>, EventsError> {
        let response = self
            .client
            .get(events_url(&self.events_url, query))
            .bearer_auth(token)
            .send()
            .await
            .map_err(|e| EventsError::Network(e.to_string()))?;

        let status = response.status();
        if matches!(status, StatusCode::UNAUTHORIZED | StatusCode::FORBIDDEN) {
            return Err(EventsError::SessionExpired);
        }
        if !status.is_success() {
            let message = response
                .json::<ErrorBody>()
                .await
                .ok()
                .and_then(ErrorBody::into_message);
            tracing::warn!(%status, ?message, "events query failed");
            return Err(EventsError::Server(message));
        }

        let envelope = response
            .json::<EventsEnvelope>()
            .await
            .map_err(|e| EventsError::Network(format!("Failed to parse events response: {}", e)))?;

        let events = envelope.content.unwrap_or_default();
        tracing::debug!(count = events.len(), "events fetched");
        Ok(events)
    }
}
