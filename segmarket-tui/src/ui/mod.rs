use crate::app::{App, Screen};
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, Padding, Paragraph, Wrap},
    Frame,
};

mod feed_view;
mod home_view;
mod login_view;
mod report_view;
pub(super) mod utils;
pub(super) mod widgets;

const APP_LABEL: &str = " Segmarket Dash";

pub fn render(frame: &mut Frame, app: &mut App) {
    let root = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Min(0)])
        .split(frame.area());

    render_header(frame, root[0], app);

    let body = root[1];
    match app.current_screen {
        Screen::Home => home_view::render_home_view(frame, app, body),
        Screen::Login => login_view::render_login_view(frame, app, body),
        Screen::Events => feed_view::render_feed_view(frame, app, body),
        Screen::Report => report_view::render_report_view(frame, app, body),
    }

    // Menu overlay renders on top of the body
    if app.current_screen == Screen::Home && app.home.menu_open {
        home_view::render_menu(frame, app, body);
    } else {
        app.home.menu_area = None;
    }
}

fn render_header(frame: &mut Frame, area: Rect, app: &mut App) {
    // 1 blank row, 1 content row
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(1), Constraint::Length(1)])
        .split(area);
    let content_row = rows[1];
    let area = Rect {
        x: content_row.x + 2,
        y: content_row.y,
        width: content_row.width.saturating_sub(4),
        height: content_row.height,
    };

    let title_width = 1 + APP_LABEL.len() as u16 + 1;
    let cols = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(title_width),
            Constraint::Min(0),
            Constraint::Length(home_view::TOGGLE_WIDTH),
        ])
        .split(area);

    // Throbber spins while the active screen waits on the backend
    let throbber_area = Rect {
        x: cols[0].x,
        y: cols[0].y,
        width: 1,
        height: 1,
    };
    let label_area = Rect {
        x: throbber_area.x + 1,
        y: cols[0].y,
        width: cols[0].width.saturating_sub(1),
        height: 1,
    };
    let throbber = throbber_widgets_tui::Throbber::default()
        .style(Style::default().fg(Color::Yellow))
        .throbber_style(Style::default().fg(Color::Yellow))
        .throbber_set(throbber_widgets_tui::BRAILLE_SIX)
        .use_type(if app.is_loading() {
            throbber_widgets_tui::WhichUse::Spin
        } else {
            throbber_widgets_tui::WhichUse::Full
        });
    frame.render_stateful_widget(throbber, throbber_area, &mut app.throbber_state);
    frame.render_widget(
        Paragraph::new(Span::styled(
            APP_LABEL,
            Style::default().fg(Color::Yellow).add_modifier(Modifier::BOLD),
        )),
        label_area,
    );

    let muted = Style::default().fg(Color::DarkGray);
    frame.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(" | ", muted),
            Span::styled(app.current_screen.title(), Style::default().fg(Color::White)),
        ])),
        cols[1],
    );

    if app.current_screen == Screen::Home {
        home_view::render_toggle(frame, app, cols[2]);
    } else {
        app.home.toggle_area = None;
    }
}
