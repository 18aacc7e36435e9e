use super::*;
use crate::app::FeedField;
use crate::report::EventSummary;
use ratatui::widgets::HighlightSpacing;

pub fn render_feed_view(frame: &mut Frame, app: &mut App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([
            Constraint::Length(3), // Date filters
            Constraint::Length(1), // Message
            Constraint::Min(0),    // Events
            Constraint::Length(3), // Controls
        ])
        .split(body);

    let filters = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(50), Constraint::Percentage(50)])
        .split(chunks[0]);

    let feed = &mut app.feed;
    frame.render_widget(
        widgets::input_box("Início", &feed.start_input, feed.focused == FeedField::Start, false),
        filters[0],
    );
    frame.render_widget(
        widgets::input_box("Fim", &feed.end_input, feed.focused == FeedField::End, false),
        filters[1],
    );
    frame.render_widget(
        Paragraph::new(widgets::message_line(&feed.message)).alignment(Alignment::Center),
        chunks[1],
    );

    let list_border = if feed.focused == FeedField::List {
        Style::default().fg(Color::White)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    let title = if feed.loading {
        " Eventos (carregando...) ".to_string()
    } else {
        format!(" Eventos ({}) ", feed.events.len())
    };
    let items: Vec<ListItem> = feed
        .events
        .iter()
        .map(|event| ListItem::new(summary_lines(&EventSummary::from_event(event))))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(list_border)
                .title(title)
                .padding(Padding::horizontal(1)),
        )
        .highlight_style(Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD))
        .highlight_symbol("▶ ")
        .highlight_spacing(HighlightSpacing::Always);
    frame.render_stateful_widget(list, chunks[2], &mut feed.list_state);

    frame.render_widget(
        widgets::controls(&[
            ("Tab", "Foco"),
            ("Enter", "Buscar/Abrir"),
            ("f", "Buscar"),
            ("↑↓/j/k", "Navegar"),
            ("o", "Sair da conta"),
            ("q", "Sair"),
        ]),
        chunks[3],
    );
}

fn summary_lines(summary: &EventSummary) -> Vec<Line<'static>> {
    let muted = Style::default().fg(Color::Gray);
    let mut lines = vec![
        Line::from(Span::styled(
            summary.location.clone(),
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
        )),
        Line::from(Span::styled(summary.start.clone(), muted)),
        Line::from(Span::styled(summary.end.clone(), muted)),
    ];
    lines.extend(
        summary
            .cameras
            .iter()
            .map(|camera| Line::from(Span::styled(camera.clone(), Style::default().fg(Color::Magenta)))),
    );
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Event, Video};

    #[test]
    fn summary_has_one_line_per_row() {
        let event = Event {
            videos: vec![Video::default(), Video::default()],
            ..Event::default()
        };
        let summary = EventSummary::from_event(&event);

        assert_eq!(summary_lines(&summary).len(), summary.height());
    }
}
