use crate::app::{App, LoginField};
use crate::time_utils::now_local;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use super::super::action_queue::{Action, ActionTx};
use super::super::actions::enqueue_effect;
use super::enqueue_action;

pub(super) fn handle_login_key(key: KeyEvent, app: &mut App, action_tx: &ActionTx) {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab => app.login.next_field(),
        KeyCode::Enter => match app.login.focused {
            LoginField::Login => app.login.next_field(),
            LoginField::Password => enqueue_action(action_tx, Action::SubmitLogin),
        },
        KeyCode::Esc => {
            let event = app.login.back();
            let effect = app.on_login_event(event, now_local());
            enqueue_effect(action_tx, effect);
        }
        KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
            app.login.focused_input().insert(c);
        }
        KeyCode::Backspace => app.login.focused_input().backspace(),
        KeyCode::Left => app.login.focused_input().move_left(),
        KeyCode::Right => app.login.focused_input().move_right(),
        KeyCode::Home => app.login.focused_input().home(),
        KeyCode::End => app.login.focused_input().end(),
        _ => {}
    }
}
