use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent};

pub(super) fn handle_home_key(key: KeyEvent, app: &mut App) {
    match key.code {
        KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Enter => {
            let event = app.home.go_to_login();
            app.on_home_event(event);
        }
        KeyCode::Char('m') | KeyCode::Char('M') => app.home.toggle_menu(),
        KeyCode::Esc => app.home.close_menu(),
        _ => {}
    }
}
