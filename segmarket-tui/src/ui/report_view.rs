use super::*;
use crate::report::NO_VIDEOS;

pub fn render_report_view(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(1)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(body);

    let mut lines = Vec::new();
    if let Some(report) = &app.report.report {
        let label = Style::default().fg(Color::Yellow);
        for (name, value) in &report.fields {
            lines.push(Line::from(vec![
                Span::styled(format!("{}: ", name), label),
                Span::styled(value.clone(), Style::default().fg(Color::White)),
            ]));
        }
        lines.push(Line::from(""));

        if report.videos.is_empty() {
            lines.push(Line::from(Span::styled(NO_VIDEOS, Style::default().fg(Color::Gray))));
        } else {
            lines.push(Line::from(Span::styled(
                "Vídeos Associados:",
                label.add_modifier(Modifier::BOLD),
            )));
            for (i, video) in report.videos.iter().enumerate() {
                let selected = i == app.report.selected_video;
                let marker = if selected { "▶ " } else { "  " };
                let style = if selected {
                    Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD)
                } else {
                    Style::default().fg(Color::White)
                };
                lines.push(Line::from(Span::styled(
                    format!("{}Câmera: {}", marker, video.camera),
                    style,
                )));
                let link_style = if video.link.is_some() {
                    Style::default().fg(Color::Cyan).add_modifier(Modifier::UNDERLINED)
                } else {
                    Style::default().fg(Color::DarkGray)
                };
                lines.push(Line::from(vec![
                    Span::raw("    Link: "),
                    Span::styled(video.link_label().to_string(), link_style),
                ]));
            }
        }
    }

    let report = Paragraph::new(lines)
        .wrap(Wrap { trim: false })
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::White))
                .title(" Relatório do Evento ")
                .padding(Padding::uniform(1)),
        );
    frame.render_widget(report, chunks[0]);

    frame.render_widget(
        widgets::controls(&[("↑↓/j/k", "Vídeo"), ("o", "Abrir link"), ("Esc/b", "Voltar"), ("q", "Sair")]),
        chunks[1],
    );
}
