use crate::app::{App, FeedField};
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::enqueue_action;

pub(super) fn handle_feed_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Tab => app.feed.next_field(),
        KeyCode::BackTab => app.feed.previous_field(),
        _ if app.feed.focused == FeedField::List => handle_list_key(key, app, action_tx),
        _ => handle_date_key(key, app, action_tx),
    }
}

fn handle_date_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    let Some(input) = app.feed.focused_input() else {
        return;
    };
    match key.code {
        KeyCode::Enter => enqueue_action(action_tx, Action::FetchEvents),
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => input.insert(c),
        KeyCode::Backspace => input.backspace(),
        KeyCode::Left => input.move_left(),
        KeyCode::Right => input.move_right(),
        KeyCode::Home => input.home(),
        KeyCode::End => input.end(),
        KeyCode::Esc => app.feed.focused = FeedField::List,
        _ => {}
    }
}

fn handle_list_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Down | KeyCode::Char('j') => app.feed.select_next(),
        KeyCode::Up | KeyCode::Char('k') => app.feed.select_previous(),
        KeyCode::Enter => {
            if let Some(event) = app.feed.open_selected() {
                app.on_feed_event(event);
            }
        }
        KeyCode::Char('f') | KeyCode::Char('F') => enqueue_action(action_tx, Action::FetchEvents),
        KeyCode::Char('o') | KeyCode::Char('O') => enqueue_action(action_tx, Action::Logout),
        _ => {}
    }
}
