use super::*;

pub(super) const TOGGLE_WIDTH: u16 = 8;
const MENU_WIDTH: u16 = 20;
const MENU_HEIGHT: u16 = 3;

pub fn render_home_view(frame: &mut Frame, app: &App, body: Rect) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .margin(2)
        .constraints([Constraint::Min(0), Constraint::Length(3)])
        .split(body);

    let lines = vec![
        Line::from(""),
        Line::from(Span::styled(
            "Segmarket Dash",
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        Line::from(""),
        Line::from("Monitoramento de eventos de segurança das lojas."),
        Line::from(""),
        Line::from(vec![
            Span::raw("Pressione "),
            Span::styled("l", Style::default().fg(Color::Yellow)),
            Span::raw(" para entrar."),
        ]),
    ];
    let hero = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(hero, utils::centered_rect(60, 8, chunks[0]));

    let menu_hint = if app.home.menu_open { "Fechar menu" } else { "Menu" };
    frame.render_widget(
        widgets::controls(&[("l/Enter", "Login"), ("m", menu_hint), ("Esc", "Fechar menu"), ("q", "Sair")]),
        chunks[1],
    );
}

pub(super) fn render_toggle(frame: &mut Frame, app: &mut App, area: Rect) {
    let style = if app.home.menu_open {
        Style::default().fg(Color::Black).bg(Color::Yellow)
    } else {
        Style::default().fg(Color::Yellow)
    };
    frame.render_widget(
        Paragraph::new(Span::styled("☰ Menu", style)).alignment(Alignment::Right),
        area,
    );
    app.home.toggle_area = Some(area);
}

pub(super) fn render_menu(frame: &mut Frame, app: &mut App, body: Rect) {
    let area = utils::top_right_rect(MENU_WIDTH, MENU_HEIGHT, body);
    frame.render_widget(Clear, area);

    let items = vec![ListItem::new(Span::styled(
        "Login",
        Style::default().fg(Color::White).add_modifier(Modifier::BOLD),
    ))];
    let menu = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::Yellow))
            .padding(Padding::horizontal(1)),
    );
    frame.render_widget(menu, area);
    app.home.menu_area = Some(area);
}
