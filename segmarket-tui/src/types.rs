use serde::{Deserialize, Serialize};
use std::fmt;

/// Event identifier as sent by the API. Older backends send numbers, newer ones strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(untagged)]
pub enum EventId {
    Number(i64),
    Text(String),
}

impl fmt::Display for EventId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// The market (store location) an event was detected at.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
pub struct Market {
    pub nome: Option<String>,
}

/// A camera recording attached to an event.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Video {
    pub cam_name: Option<String>,
    pub link_video: Option<String>,
}

/// One detected occurrence, as returned by `GET /public/events/getEvents`.
///
/// Timestamps are kept as the raw API strings; they are only parsed when
/// displayed, so a malformed value never fails the whole response.
#[derive(Debug, Clone, PartialEq, Default, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    pub id_event: Option<EventId>,
    pub market: Option<Market>,
    pub start_time: Option<String>,
    pub end_time: Option<String>,
    pub date_import: Option<String>,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub videos: Vec<Video>,
}

impl Event {
    pub fn market_name(&self) -> Option<&str> {
        self.market
            .as_ref()
            .and_then(|m| m.nome.as_deref())
            .filter(|name| !name.is_empty())
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Video>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<Vec<Video>>::deserialize(deserializer)?.unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn event_accepts_numeric_and_text_ids() {
        let numeric: Event = serde_json::from_str(r#"{"idEvent": 42}"#).unwrap();
        let text: Event = serde_json::from_str(r#"{"idEvent": "ev-7"}"#).unwrap();

        assert_eq!(numeric.id_event, Some(EventId::Number(42)));
        assert_eq!(text.id_event.unwrap().to_string(), "ev-7");
    }

    #[test]
    fn missing_and_null_videos_become_empty() {
        let missing: Event = serde_json::from_str(r#"{"startTime": "2024-01-01 10:00:00"}"#).unwrap();
        let null: Event = serde_json::from_str(r#"{"videos": null}"#).unwrap();

        assert!(missing.videos.is_empty());
        assert!(null.videos.is_empty());
    }

    #[test]
    fn full_event_deserializes_and_ignores_unknown_fields() {
        let raw = r#"{
            "idEvent": 10,
            "market": {"nome": "Mercado Central", "idMarket": 3},
            "startTime": "2024-01-15 10:30:00",
            "endTime": null,
            "dateImport": "2024-01-15T11:00:00",
            "videos": [{"camName": "Caixa 1", "linkVideo": "https://cdn.example/v1.mp4"}],
            "status": "OPEN"
        }"#;
        let event: Event = serde_json::from_str(raw).unwrap();

        assert_eq!(event.market_name(), Some("Mercado Central"));
        assert_eq!(event.end_time, None);
        assert_eq!(event.videos[0].cam_name.as_deref(), Some("Caixa 1"));
    }

    #[test]
    fn empty_market_name_counts_as_missing() {
        let event: Event = serde_json::from_str(r#"{"market": {"nome": ""}}"#).unwrap();
        assert_eq!(event.market_name(), None);
    }
}
