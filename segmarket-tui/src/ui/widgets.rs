use crate::app::{MessageKind, MessagePresenter, TextInput};
use ratatui::{
    layout::Alignment,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Padding, Paragraph},
};

/// Text shown inside an input box. The focused input gets a block cursor; a masked input
/// shows one bullet per character.
pub fn input_text(input: &TextInput, focused: bool, masked: bool) -> String {
    let mask = |s: &str| "•".repeat(s.chars().count());
    let (before, after) = input.split_at_cursor();
    let (before, after) = if masked {
        (mask(before), mask(after))
    } else {
        (before.to_string(), after.to_string())
    };

    if focused {
        format!("{}█{}", before, after)
    } else {
        format!("{}{}", before, after)
    }
}

pub fn input_box<'a>(title: &'a str, input: &TextInput, focused: bool, masked: bool) -> Paragraph<'a> {
    let border = if focused {
        Style::default().fg(Color::Yellow)
    } else {
        Style::default().fg(Color::DarkGray)
    };
    Paragraph::new(input_text(input, focused, masked))
        .style(Style::default().fg(Color::White))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border)
                .title(format!(" {} ", title))
                .padding(Padding::horizontal(1)),
        )
}

/// The presenter's current message, colored by kind; an empty line when hidden.
pub fn message_line(presenter: &MessagePresenter) -> Line<'static> {
    match presenter.visible() {
        Some(message) => {
            let color = match message.kind {
                MessageKind::Success => Color::Green,
                MessageKind::Error => Color::Red,
            };
            Line::from(Span::styled(
                message.text.clone(),
                Style::default().fg(color).add_modifier(Modifier::BOLD),
            ))
        }
        None => Line::from(""),
    }
}

/// Bordered key-hint bar, e.g. `[("Tab", "Trocar campo"), ("Esc", "Voltar")]`.
pub fn controls(hints: &[(&'static str, &'static str)]) -> Paragraph<'static> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (i, (key, label)) in hints.iter().enumerate() {
        spans.push(Span::styled(*key, Style::default().fg(Color::Yellow)));
        let sep = if i + 1 < hints.len() { "  " } else { "" };
        spans.push(Span::raw(format!(": {}{}", label, sep)));
    }

    Paragraph::new(Line::from(spans))
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(Style::default().fg(Color::DarkGray))
                .title(Span::styled(" Controles ", Style::default().fg(Color::DarkGray)))
                .padding(Padding::horizontal(1)),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn masked_input_hides_characters() {
        let input = TextInput::from_str("sênha");
        assert_eq!(input_text(&input, false, true), "•••••");
        assert_eq!(input_text(&input, true, true), "•••••█");
    }

    #[test]
    fn cursor_is_drawn_mid_string() {
        let mut input = TextInput::from_str("ab");
        input.move_left();
        assert_eq!(input_text(&input, true, false), "a█b");
        assert_eq!(input_text(&input, false, false), "ab");
    }

    #[test]
    fn hidden_message_renders_empty_line() {
        let mut presenter = MessagePresenter::default();
        assert_eq!(message_line(&presenter).width(), 0);

        presenter.error("Erro");
        assert_eq!(message_line(&presenter).width(), 4);
    }
}
