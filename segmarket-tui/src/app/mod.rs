use std::time::Instant;

use time::PrimitiveDateTime;

use crate::session_store::Session;

mod feed;
mod feedback;
mod home;
mod login;
mod navigation;
mod report;
mod state;

pub use feed::{FeedController, FeedEvent, FeedField, FetchStart, PendingFetch};
pub use feedback::{MessageKind, MessagePresenter};
pub use home::{HomeController, HomeEvent};
pub use login::{LoginController, LoginEvent, LoginField};
pub use report::{ReportController, ReportEvent};
pub use state::{Effect, Screen, TextInput};

/// Owns every screen controller and the single active screen.
pub struct App {
    pub running: bool,
    pub current_screen: Screen,
    pub session: Session,

    pub home: HomeController,
    pub login: LoginController,
    pub feed: FeedController,
    pub report: ReportController,

    // Loading indicator
    pub throbber_state: throbber_widgets_tui::ThrobberState,
}

impl App {
    pub fn new(session: Session) -> Self {
        Self {
            running: true,
            current_screen: Screen::Home,
            home: HomeController::default(),
            login: LoginController::new(session.clone()),
            feed: FeedController::new(session.clone()),
            report: ReportController::default(),
            session,
            throbber_state: throbber_widgets_tui::ThrobberState::default(),
        }
    }

    pub fn quit(&mut self) {
        self.running = false;
    }

    pub fn show_screen(&mut self, screen: Screen) {
        tracing::debug!(from = ?self.current_screen, to = ?screen, "switching screen");
        self.current_screen = screen;
    }

    /// Pick the initial screen. A stored token goes straight to the events feed.
    pub fn bootstrap(&mut self, now: PrimitiveDateTime) -> Option<Effect> {
        if self.session.is_logged_in() {
            tracing::info!("session token found, opening events");
            Some(self.open_events(now))
        } else {
            self.show_screen(Screen::Home);
            None
        }
    }

    /// Whether keystrokes currently go to a text field (so `q` must not quit).
    pub fn text_input_focused(&self) -> bool {
        match self.current_screen {
            Screen::Login => true,
            Screen::Events => self.feed.focused != FeedField::List,
            Screen::Home | Screen::Report => false,
        }
    }

    /// Busy state of the active screen.
    pub fn is_loading(&self) -> bool {
        match self.current_screen {
            Screen::Login => self.login.submitting,
            Screen::Events => self.feed.loading,
            Screen::Home | Screen::Report => false,
        }
    }

    /// Called once per loop iteration: advance the throbber and expire messages.
    pub fn tick(&mut self, now: Instant) {
        if self.is_loading() {
            self.throbber_state.calc_next();
        }
        self.login.message.expire(now);
        self.feed.message.expire(now);
    }
}
