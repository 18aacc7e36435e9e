use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_report_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.report.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.report.select_previous(),
        KeyCode::Char('o') | KeyCode::Char('O') | KeyCode::Enter => {
            if let Some(link) = app.report.selected_link() {
                enqueue_action(action_tx, Action::OpenLink(link.to_string()));
            }
        }
        KeyCode::Esc | KeyCode::Char('b') | KeyCode::Char('B') => {
            let event = app.report.back();
            app.on_report_event(event);
        }
        _ => {}
    }
}
