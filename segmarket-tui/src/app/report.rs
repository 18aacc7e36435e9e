use crate::report::Report;
use crate::types::Event;

/// Emitted by the report screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReportEvent {
    BackToEvents,
}

/// Holds the report of the event picked on the events screen.
#[derive(Debug, Clone, Default)]
pub struct ReportController {
    pub report: Option<Report>,
    pub selected_video: usize,
}

impl ReportController {
    pub fn show(&mut self, event: &Event) {
        self.report = Some(Report::from_event(event));
        self.selected_video = 0;
    }

    pub fn clear(&mut self) {
        self.report = None;
        self.selected_video = 0;
    }

    fn video_count(&self) -> usize {
        self.report.as_ref().map_or(0, |r| r.videos.len())
    }

    pub fn select_next(&mut self) {
        if self.selected_video + 1 < self.video_count() {
            self.selected_video += 1;
        }
    }

    pub fn select_previous(&mut self) {
        self.selected_video = self.selected_video.saturating_sub(1);
    }

    /// Link of the highlighted video, when it has one.
    pub fn selected_link(&self) -> Option<&str> {
        self.report
            .as_ref()
            .and_then(|r| r.videos.get(self.selected_video))
            .and_then(|v| v.link.as_deref())
    }

    pub fn back(&mut self) -> ReportEvent {
        ReportEvent::BackToEvents
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Video;

    fn with_videos(links: &[Option<&str>]) -> Event {
        Event {
            videos: links
                .iter()
                .enumerate()
                .map(|(i, link)| Video {
                    cam_name: Some(format!("Cam {}", i + 1)),
                    link_video: link.map(str::to_string),
                })
                .collect(),
            ..Event::default()
        }
    }

    #[test]
    fn show_builds_report_and_resets_selection() {
        let mut controller = ReportController::default();
        controller.selected_video = 4;

        controller.show(&with_videos(&[Some("http://a/1.mp4")]));

        assert_eq!(controller.selected_video, 0);
        assert_eq!(controller.selected_link(), Some("http://a/1.mp4"));
    }

    #[test]
    fn selection_stays_within_videos() {
        let mut controller = ReportController::default();
        controller.show(&with_videos(&[Some("http://a/1.mp4"), None]));

        controller.select_next();
        controller.select_next();
        assert_eq!(controller.selected_video, 1);
        assert_eq!(controller.selected_link(), None);

        controller.select_previous();
        controller.select_previous();
        assert_eq!(controller.selected_video, 0);
    }

    #[test]
    fn no_videos_means_no_link() {
        let mut controller = ReportController::default();
        controller.show(&Event::default());
        controller.select_next();

        assert_eq!(controller.selected_video, 0);
        assert_eq!(controller.selected_link(), None);
    }
}
