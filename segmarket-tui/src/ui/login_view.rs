use super::*;
use crate::app::LoginField;

pub fn render_login_view(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(body);

    let form_area = utils::centered_rect(50, 12, chunks[0]);
    let form = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Title
            Constraint::Length(1),
            Constraint::Length(3), // Login
            Constraint::Length(3), // Password
            Constraint::Length(1),
            Constraint::Length(3), // Message
        ])
        .split(form_area);

    frame.render_widget(
        Paragraph::new(Span::styled(
            "Acesse sua conta",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
        form[0],
    );

    let login = &app.login;
    frame.render_widget(
        widgets::input_box("Login", &login.login_input, login.focused == LoginField::Login, false),
        form[2],
    );
    frame.render_widget(
        widgets::input_box(
            "Senha",
            &login.password_input,
            login.focused == LoginField::Password,
            true,
        ),
        form[3],
    );
    frame.render_widget(
        Paragraph::new(widgets::message_line(&login.message))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        form[5],
    );

    let submit = if login.submitting { "Entrando..." } else { "Entrar" };
    frame.render_widget(
        widgets::controls(&[("Tab", "Trocar campo"), ("Enter", submit), ("Esc", "Voltar"), ("Ctrl+C", "Sair")]),
        chunks[1],
    );
}
