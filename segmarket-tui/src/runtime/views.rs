use crate::app::{App, Screen};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};

use super::action_queue::{Action, ActionTx};

mod feed;
mod home;
mod login;
mod report;

fn enqueue_action(action_tx: &ActionTx, action: Action) {
    let _ = action_tx.send(action);
}

pub(super) fn handle_screen_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.quit();
        return;
    }
    if matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q')) && !app.text_input_focused() {
        app.quit();
        return;
    }

    match app.current_screen {
        Screen::Home => home::handle_home_key(key, app),
        Screen::Login => login::handle_login_key(key, app, action_tx),
        Screen::Events => feed::handle_feed_key(key, app, action_tx),
        Screen::Report => report::handle_report_key(key, app, action_tx),
    }
}

pub(super) fn handle_mouse(mouse: MouseEvent, app: &mut App) {
    if mouse.kind != MouseEventKind::Down(MouseButton::Left) || app.current_screen != Screen::Home {
        return;
    }
    if let Some(event) = app.home.click(mouse.column, mouse.row) {
        app.on_home_event(event);
    }
}
