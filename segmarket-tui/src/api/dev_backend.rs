use async_trait::async_trait;
use time::{Duration, PrimitiveDateTime};

use super::{EventsApi, EventsError, EventsQuery, LoginError};
use crate::time_utils::{format_for_api, now_local, parse_api_datetime};
use crate::types::{Event, EventId, Market, Video};

const DEV_TOKEN: &str = "dev-token";

/// In-memory backend for `segmarket-tui dev`.
///
/// Any non-empty credentials log in, except password `wrong`. Events are generated relative
/// to the time the backend was created so the default 30-day filter always finds some.
#[derive(Debug, Clone)]
pub struct DevBackend {
    events: Vec<Event>,
}

impl DevBackend {
    pub fn new() -> Self {
        Self::seeded_at(now_local())
    }

    fn seeded_at(now: PrimitiveDateTime) -> Self {
        Self {
            events: seed_dev_events(now),
        }
    }
}

impl Default for DevBackend {
    fn default() -> Self {
        Self::new()
    }
}

fn seed_dev_events(now: PrimitiveDateTime) -> Vec<Event> {
    let at = |days_ago: i64, hours: i64| now - Duration::days(days_ago) + Duration::hours(hours);
    let event = |id: i64, market: Option<&str>, start: PrimitiveDateTime, minutes: i64, videos: Vec<Video>| Event {
        id_event: Some(EventId::Number(id)),
        market: market.map(|nome| Market {
            nome: Some(nome.to_string()),
        }),
        start_time: Some(format_for_api(start)),
        end_time: Some(format_for_api(start + Duration::minutes(minutes))),
        date_import: Some(format_for_api(start + Duration::minutes(minutes + 15))),
        videos,
    };
    let video = |cam: Option<&str>, link: Option<&str>| Video {
        cam_name: cam.map(str::to_string),
        link_video: link.map(str::to_string),
    };

    vec![
        event(
            1042,
            Some("Mercado Central"),
            at(1, -2),
            12,
            vec![
                video(Some("Caixa 01"), Some("https://videos.segmarket.dev/1042/caixa-01.mp4")),
                video(Some("Entrada"), Some("https://videos.segmarket.dev/1042/entrada.mp4")),
            ],
        ),
        event(
            1038,
            Some("Supermercado Boa Vista"),
            at(4, 3),
            5,
            vec![video(None, Some("https://videos.segmarket.dev/1038/cam.mp4"))],
        ),
        event(1031, Some("Mercadinho da Praça"), at(9, 0), 30, vec![]),
        event(
            1027,
            None,
            at(15, -6),
            8,
            vec![video(Some("Estoque"), None)],
        ),
        event(
            990,
            Some("Mercado Central"),
            at(45, 0),
            20,
            vec![video(Some("Caixa 02"), Some("https://videos.segmarket.dev/990/caixa-02.mp4"))],
        ),
    ]
}

#[async_trait]
impl EventsApi for DevBackend {
    async fn login(&self, _login: &str, password: &str) -> Result<String, LoginError> {
        if password == "wrong" {
            return Err(LoginError::Rejected(Some(
                "Usuário ou senha inválidos.".to_string(),
            )));
        }
        Ok(DEV_TOKEN.to_string())
    }

    async fn get_events(&self, token: &str, query: &EventsQuery) -> Result<Vec<Event>, EventsError> {
        if token != DEV_TOKEN {
            return Err(EventsError::SessionExpired);
        }

        let (Some(start), Some(end)) = (
            parse_api_datetime(&query.start),
            parse_api_datetime(&query.end),
        ) else {
            return Err(EventsError::Server(Some(
                "Parâmetros de data inválidos.".to_string(),
            )));
        };

        Ok(self
            .events
            .iter()
            .filter(|event| {
                event
                    .start_time
                    .as_deref()
                    .and_then(parse_api_datetime)
                    .is_some_and(|t| t >= start && t <= end)
            })
            .cloned()
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_utils::default_date_range;
    use time::macros::datetime;

    #[tokio::test]
    async fn default_range_excludes_old_events() {
        let now = datetime!(2024-06-15 12:00);
        let backend = DevBackend::seeded_at(now);
        let (start, end) = default_date_range(now);
        let query = EventsQuery {
            start: format_for_api(start),
            end: format_for_api(end),
        };

        let events = backend.get_events(DEV_TOKEN, &query).await.unwrap();
        assert_eq!(events.len(), 4);
        assert!(events
            .iter()
            .all(|e| e.id_event != Some(EventId::Number(990))));
    }

    #[tokio::test]
    async fn foreign_token_is_rejected() {
        let backend = DevBackend::seeded_at(datetime!(2024-06-15 12:00));
        let query = EventsQuery {
            start: "2024-06-01 00:00:00".to_string(),
            end: "2024-06-15 12:00:00".to_string(),
        };

        assert_eq!(
            backend.get_events("stale", &query).await,
            Err(EventsError::SessionExpired)
        );
    }

    #[tokio::test]
    async fn wrong_password_is_rejected() {
        let backend = DevBackend::default();
        assert!(matches!(
            backend.login("dev", "wrong").await,
            Err(LoginError::Rejected(Some(_)))
        ));
        assert_eq!(backend.login("dev", "secret").await.unwrap(), DEV_TOKEN);
    }
}
