//! Text for event list entries and the event report.
//!
//! Every optional field falls back to a fixed placeholder instead of being omitted, so the
//! list and the report always have the same shape.

use std::fmt;

use crate::time_utils::format_for_display;
use crate::types::{Event, EventId, Video};

pub const LOCATION_UNKNOWN: &str = "Local desconhecido";
pub const NOT_SPECIFIED: &str = "Não especificado";
pub const CAMERA_UNKNOWN: &str = "Desconhecida";
pub const CAMERA_NAME_UNKNOWN: &str = "Nome Desconhecido";
pub const LINK_UNAVAILABLE: &str = "Link não disponível";
pub const NO_CAMERAS: &str = "Nenhuma câmera associada.";
pub const NO_VIDEOS: &str = "Nenhum vídeo associado a este evento.";

fn location(event: &Event) -> String {
    event.market_name().unwrap_or(LOCATION_UNKNOWN).to_string()
}

fn event_id(event: &Event) -> String {
    match &event.id_event {
        Some(EventId::Text(s)) if s.is_empty() => NOT_SPECIFIED.to_string(),
        Some(EventId::Number(0)) | None => NOT_SPECIFIED.to_string(),
        Some(id) => id.to_string(),
    }
}

fn non_empty(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.is_empty())
}

/// One entry of the events list.
#[derive(Debug, Clone, PartialEq)]
pub struct EventSummary {
    pub location: String,
    pub start: String,
    pub end: String,
    /// One line per camera, or a single placeholder line.
    pub cameras: Vec<String>,
}

impl EventSummary {
    pub fn from_event(event: &Event) -> Self {
        let cameras = if event.videos.is_empty() {
            vec![NO_CAMERAS.to_string()]
        } else {
            event
                .videos
                .iter()
                .map(|v| format!("Câmera: {}", non_empty(v.cam_name.as_deref()).unwrap_or(CAMERA_UNKNOWN)))
                .collect()
        };

        Self {
            location: format!("Local: {}", location(event)),
            start: format!("Início: {}", format_for_display(event.start_time.as_deref())),
            end: format!("Fim: {}", format_for_display(event.end_time.as_deref())),
            cameras,
        }
    }

    /// Number of terminal rows the entry occupies.
    pub fn height(&self) -> usize {
        3 + self.cameras.len()
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct VideoLine {
    pub camera: String,
    pub link: Option<String>,
}

impl VideoLine {
    fn from_video(video: &Video) -> Self {
        Self {
            camera: non_empty(video.cam_name.as_deref())
                .unwrap_or(CAMERA_NAME_UNKNOWN)
                .to_string(),
            link: non_empty(video.link_video.as_deref()).map(str::to_string),
        }
    }

    pub fn link_label(&self) -> &str {
        self.link.as_deref().unwrap_or(LINK_UNAVAILABLE)
    }
}

/// Detail view of one event.
#[derive(Debug, Clone, PartialEq)]
pub struct Report {
    pub fields: Vec<(&'static str, String)>,
    pub videos: Vec<VideoLine>,
}

impl Report {
    pub fn from_event(event: &Event) -> Self {
        let fields = vec![
            ("ID do Evento", event_id(event)),
            ("Local (Market)", location(event)),
            ("Início do Evento", format_for_display(event.start_time.as_deref())),
            ("Fim do Evento", format_for_display(event.end_time.as_deref())),
            ("Data de Importação", format_for_display(event.date_import.as_deref())),
        ];

        Self {
            fields,
            videos: event.videos.iter().map(VideoLine::from_video).collect(),
        }
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (label, value) in &self.fields {
            writeln!(f, "{}: {}", label, value)?;
        }
        if self.videos.is_empty() {
            return writeln!(f, "{}", NO_VIDEOS);
        }
        writeln!(f, "Vídeos Associados:")?;
        for video in &self.videos {
            writeln!(f, "  Câmera: {}", video.camera)?;
            writeln!(f, "  Link: {}", video.link_label())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time_utils::DATE_NOT_AVAILABLE;
    use crate::types::Market;

    fn sample_event() -> Event {
        Event {
            id_event: Some(EventId::Number(7)),
            market: Some(Market {
                nome: Some("Mercado Central".to_string()),
            }),
            start_time: Some("2024-01-15 10:30:00".to_string()),
            end_time: Some("2024-01-15T10:45:00".to_string()),
            date_import: None,
            videos: vec![
                Video {
                    cam_name: Some("Caixa 01".to_string()),
                    link_video: Some("https://cdn.example/1.mp4".to_string()),
                },
                Video {
                    cam_name: None,
                    link_video: None,
                },
            ],
        }
    }

    #[test]
    fn report_without_videos_says_so() {
        let event = Event {
            videos: vec![],
            ..sample_event()
        };
        let text = Report::from_event(&event).to_string();

        assert!(text.contains(NO_VIDEOS));
        assert!(!text.contains("Vídeos Associados"));
    }

    #[test]
    fn report_falls_back_to_placeholders() {
        let report = Report::from_event(&Event::default());

        assert_eq!(
            report.fields,
            vec![
                ("ID do Evento", NOT_SPECIFIED.to_string()),
                ("Local (Market)", LOCATION_UNKNOWN.to_string()),
                ("Início do Evento", DATE_NOT_AVAILABLE.to_string()),
                ("Fim do Evento", DATE_NOT_AVAILABLE.to_string()),
                ("Data de Importação", DATE_NOT_AVAILABLE.to_string()),
            ]
        );
    }

    #[test]
    fn report_lists_every_video_with_link_fallback() {
        let report = Report::from_event(&sample_event());

        assert_eq!(report.videos.len(), 2);
        assert_eq!(report.videos[0].link_label(), "https://cdn.example/1.mp4");
        assert_eq!(report.videos[1].camera, CAMERA_NAME_UNKNOWN);
        assert_eq!(report.videos[1].link_label(), LINK_UNAVAILABLE);
        assert!(report
            .to_string()
            .contains("Início do Evento: 15 de janeiro de 2024 às 10:30:00"));
    }

    #[test]
    fn summary_has_one_line_per_camera() {
        let summary = EventSummary::from_event(&sample_event());

        assert_eq!(summary.location, "Local: Mercado Central");
        assert_eq!(summary.cameras, vec!["Câmera: Caixa 01", "Câmera: Desconhecida"]);
        assert_eq!(summary.height(), 5);
    }

    #[test]
    fn summary_without_videos_uses_placeholder() {
        let summary = EventSummary::from_event(&Event::default());

        assert_eq!(summary.location, format!("Local: {}", LOCATION_UNKNOWN));
        assert_eq!(summary.cameras, vec![NO_CAMERAS.to_string()]);
    }
}
