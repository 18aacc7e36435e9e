use super::*;

impl App {
    /// Events screen with fresh default filters; the caller runs the fetch.
    pub(super) fn open_events(&mut self, now: PrimitiveDateTime) -> Effect {
        self.feed.set_default_date_filters(now);
        self.feed.focused = FeedField::Start;
        self.show_screen(Screen::Events);
        Effect::FetchEvents
    }

    pub fn on_home_event(&mut self, event: HomeEvent) {
        match event {
            HomeEvent::GoToLogin => {
                self.login.reset();
                self.show_screen(Screen::Login);
            }
        }
    }

    pub fn on_login_event(&mut self, event: LoginEvent, now: PrimitiveDateTime) -> Option<Effect> {
        match event {
            LoginEvent::BackToHome => {
                self.show_screen(Screen::Home);
                None
            }
            LoginEvent::Succeeded => {
                self.login.clear_inputs();
                Some(self.open_events(now))
            }
        }
    }

    pub fn on_feed_event(&mut self, event: FeedEvent) {
        match event {
            FeedEvent::Logout { reason } => self.logout(reason.as_deref()),
            FeedEvent::EventSelected(event) => {
                self.report.show(&event);
                self.show_screen(Screen::Report);
            }
        }
    }

    pub fn on_report_event(&mut self, event: ReportEvent) {
        match event {
            ReportEvent::BackToEvents => self.show_screen(Screen::Events),
        }
    }

    /// Drop the session and return to the login form. `reason` is set for forced logouts.
    pub fn logout(&mut self, reason: Option<&str>) {
        tracing::info!(forced = reason.is_some(), "logging out");
        self.session.clear();
        self.feed.reset();
        self.report.clear();
        self.login.reset();
        if let Some(reason) = reason {
            self.login.message.error(reason);
        }
        self.show_screen(Screen::Login);
    }
}
