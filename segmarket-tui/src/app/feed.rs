use ratatui::widgets::ListState;
use time::PrimitiveDateTime;

use crate::api::{EventsError, EventsQuery};
use crate::session_store::Session;
use crate::time_utils::{default_date_range, format_for_api, format_for_input, parse_input};
use crate::types::Event;

use super::feedback::MessagePresenter;
use super::state::TextInput;

pub const NOT_LOGGED_IN: &str = "Você não está logado. Faça login novamente.";
pub const SELECT_VALID_DATES: &str = "Selecione datas válidas.";
pub const SESSION_EXPIRED: &str = "Sessão expirada. Faça login novamente.";
pub const FETCH_FAILED: &str = "Erro ao buscar eventos.";
pub const NETWORK_ERROR: &str = "Erro de rede ao buscar eventos.";
pub const NO_EVENTS_FOUND: &str = "Nenhum evento encontrado para o período selecionado.";

/// Emitted by the events screen.
#[derive(Debug, Clone, PartialEq)]
pub enum FeedEvent {
    /// Leave the session. `reason` is set when the logout was forced.
    Logout { reason: Option<String> },
    EventSelected(Event),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FeedField {
    Start,
    End,
    List,
}

/// A validated events query, tagged with the generation it belongs to.
#[derive(Debug, Clone, PartialEq)]
pub struct PendingFetch {
    pub generation: u64,
    pub token: String,
    pub query: EventsQuery,
}

#[derive(Debug, Clone, PartialEq)]
pub enum FetchStart {
    Started(PendingFetch),
    /// A date input is empty or malformed; nothing was sent.
    InvalidDates,
    /// No session token; the shell must run the logout flow.
    LoggedOut(FeedEvent),
}

pub struct FeedController {
    session: Session,
    pub start_input: TextInput,
    pub end_input: TextInput,
    pub focused: FeedField,
    pub events: Vec<Event>,
    pub list_state: ListState,
    pub loading: bool,
    pub message: MessagePresenter,
    /// Generation of the most recent fetch. Completions of older fetches are dropped.
    generation: u64,
}

impl FeedController {
    pub fn new(session: Session) -> Self {
        Self {
            session,
            start_input: TextInput::new(),
            end_input: TextInput::new(),
            focused: FeedField::Start,
            events: Vec::new(),
            list_state: ListState::default(),
            loading: false,
            message: MessagePresenter::default(),
            generation: 0,
        }
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Start = `now` minus 30 days, end = `now`.
    pub fn set_default_date_filters(&mut self, now: PrimitiveDateTime) {
        let (start, end) = default_date_range(now);
        self.start_input = TextInput::from_str(&format_for_input(start));
        self.end_input = TextInput::from_str(&format_for_input(end));
    }

    pub fn focused_input(&mut self) -> Option<&mut TextInput> {
        match self.focused {
            FeedField::Start => Some(&mut self.start_input),
            FeedField::End => Some(&mut self.end_input),
            FeedField::List => None,
        }
    }

    pub fn next_field(&mut self) {
        self.focused = match self.focused {
            FeedField::Start => FeedField::End,
            FeedField::End => FeedField::List,
            FeedField::List => FeedField::Start,
        };
    }

    pub fn previous_field(&mut self) {
        self.focused = match self.focused {
            FeedField::Start => FeedField::List,
            FeedField::End => FeedField::Start,
            FeedField::List => FeedField::End,
        };
    }

    /// Validate the filters and invalidate any outstanding fetch.
    pub fn begin_fetch(&mut self) -> FetchStart {
        let Some(token) = self.session.token() else {
            self.message.error(NOT_LOGGED_IN);
            return FetchStart::LoggedOut(FeedEvent::Logout {
                reason: Some(NOT_LOGGED_IN.to_string()),
            });
        };

        let range = parse_input(&self.start_input.value).zip(parse_input(&self.end_input.value));
        let Some((start, end)) = range else {
            self.message.error(SELECT_VALID_DATES);
            return FetchStart::InvalidDates;
        };

        self.generation += 1;
        self.loading = true;
        self.clear_events();
        self.message.hide();

        FetchStart::Started(PendingFetch {
            generation: self.generation,
            token,
            query: EventsQuery {
                start: format_for_api(start),
                end: format_for_api(end),
            },
        })
    }

    /// Apply the outcome of an events query.
    pub fn finish_fetch(
        &mut self,
        generation: u64,
        result: Result<Vec<Event>, EventsError>,
    ) -> Option<FeedEvent> {
        if generation != self.generation {
            tracing::debug!(
                generation,
                current = self.generation,
                "dropping superseded events response"
            );
            return None;
        }
        self.loading = false;

        match result {
            Ok(events) => {
                self.show_events(events);
                None
            }
            Err(EventsError::SessionExpired) => {
                tracing::info!("events query rejected the session token");
                self.message.error(SESSION_EXPIRED);
                Some(FeedEvent::Logout {
                    reason: Some(SESSION_EXPIRED.to_string()),
                })
            }
            Err(EventsError::Server(message)) => {
                self.message
                    .error(message.unwrap_or_else(|| FETCH_FAILED.to_string()));
                None
            }
            Err(EventsError::Network(e)) => {
                tracing::warn!("events query failed: {}", e);
                self.message.error(NETWORK_ERROR);
                None
            }
        }
    }

    fn show_events(&mut self, events: Vec<Event>) {
        self.events = events;
        if self.events.is_empty() {
            self.list_state.select(None);
            self.message.success(NO_EVENTS_FOUND);
        } else {
            self.list_state.select(Some(0));
        }
    }

    fn clear_events(&mut self) {
        self.events.clear();
        self.list_state.select(None);
    }

    /// Drop the list, the message and any outstanding fetch. Used by the logout flow.
    pub fn reset(&mut self) {
        self.generation += 1;
        self.loading = false;
        self.clear_events();
        self.message.hide();
    }

    pub fn select_next(&mut self) {
        if self.events.is_empty() {
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < self.events.len() => i + 1,
            Some(i) => i,
            None => 0,
        };
        self.list_state.select(Some(next));
    }

    pub fn select_previous(&mut self) {
        if self.events.is_empty() {
            return;
        }
        let previous = self.list_state.selected().map_or(0, |i| i.saturating_sub(1));
        self.list_state.select(Some(previous));
    }

    pub fn selected_event(&self) -> Option<&Event> {
        self.list_state.selected().and_then(|i| self.events.get(i))
    }

    pub fn open_selected(&self) -> Option<FeedEvent> {
        self.selected_event().cloned().map(FeedEvent::EventSelected)
    }

    pub fn logout(&self) -> FeedEvent {
        FeedEvent::Logout { reason: None }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::feedback::MessageKind;
    use crate::types::{EventId, Market};
    use time::macros::datetime;

    fn logged_in() -> (Session, FeedController) {
        let session = Session::in_memory();
        session.store_token("tok123").unwrap();
        let feed = FeedController::new(session.clone());
        (session, feed)
    }

    fn event(id: i64) -> Event {
        Event {
            id_event: Some(EventId::Number(id)),
            market: Some(Market {
                nome: Some(format!("Loja {}", id)),
            }),
            ..Event::default()
        }
    }

    fn started(start: FetchStart) -> PendingFetch {
        match start {
            FetchStart::Started(pending) => pending,
            other => panic!("expected a started fetch, got {other:?}"),
        }
    }

    #[test]
    fn missing_token_forces_logout_without_request() {
        let mut feed = FeedController::new(Session::in_memory());
        feed.set_default_date_filters(datetime!(2024-01-31 12:00));

        assert_eq!(
            feed.begin_fetch(),
            FetchStart::LoggedOut(FeedEvent::Logout {
                reason: Some(NOT_LOGGED_IN.to_string())
            })
        );
        assert_eq!(feed.generation(), 0);
        assert!(!feed.loading);
    }

    #[test]
    fn empty_or_bad_dates_are_rejected() {
        let (_, mut feed) = logged_in();
        feed.end_input = TextInput::from_str("2024-01-31T23:59");

        assert_eq!(feed.begin_fetch(), FetchStart::InvalidDates);
        assert_eq!(feed.message.visible().unwrap().text, SELECT_VALID_DATES);

        feed.start_input = TextInput::from_str("ontem");
        assert_eq!(feed.begin_fetch(), FetchStart::InvalidDates);
        assert!(!feed.loading);
    }

    #[test]
    fn query_uses_api_format() {
        let (_, mut feed) = logged_in();
        feed.start_input = TextInput::from_str("2024-01-01T00:00");
        feed.end_input = TextInput::from_str("2024-01-31T23:59");

        let pending = started(feed.begin_fetch());

        assert_eq!(pending.token, "tok123");
        assert_eq!(pending.query.start, "2024-01-01 00:00:00");
        assert_eq!(pending.query.end, "2024-01-31 23:59:00");
        assert!(feed.loading);
    }

    #[test]
    fn begin_fetch_clears_previous_list_and_message() {
        let (_, mut feed) = logged_in();
        feed.set_default_date_filters(datetime!(2024-01-31 12:00));
        let first = started(feed.begin_fetch());
        feed.finish_fetch(first.generation, Ok(vec![event(1)]));
        feed.message.error("velha");

        started(feed.begin_fetch());

        assert!(feed.events.is_empty());
        assert!(feed.selected_event().is_none());
        assert!(feed.message.visible().is_none());
    }

    #[test]
    fn empty_result_is_a_success_notice() {
        let (_, mut feed) = logged_in();
        feed.set_default_date_filters(datetime!(2024-01-31 12:00));
        let pending = started(feed.begin_fetch());

        assert_eq!(feed.finish_fetch(pending.generation, Ok(vec![])), None);

        assert!(feed.events.is_empty());
        assert!(!feed.loading);
        assert_eq!(feed.message.kind(), Some(MessageKind::Success));
        assert_eq!(feed.message.visible().unwrap().text, NO_EVENTS_FOUND);
    }

    #[test]
    fn unauthorized_result_requests_logout() {
        let (_, mut feed) = logged_in();
        feed.set_default_date_filters(datetime!(2024-01-31 12:00));
        let pending = started(feed.begin_fetch());

        let event = feed.finish_fetch(pending.generation, Err(EventsError::SessionExpired));

        assert_eq!(
            event,
            Some(FeedEvent::Logout {
                reason: Some(SESSION_EXPIRED.to_string())
            })
        );
        assert!(!feed.loading);
    }

    #[test]
    fn server_and_network_errors_keep_session() {
        let (session, mut feed) = logged_in();
        feed.set_default_date_filters(datetime!(2024-01-31 12:00));

        let pending = started(feed.begin_fetch());
        assert_eq!(feed.finish_fetch(pending.generation, Err(EventsError::Server(None))), None);
        assert_eq!(feed.message.visible().unwrap().text, FETCH_FAILED);

        let pending = started(feed.begin_fetch());
        let network = EventsError::Network("reset".to_string());
        assert_eq!(feed.finish_fetch(pending.generation, Err(network)), None);
        assert_eq!(feed.message.visible().unwrap().text, NETWORK_ERROR);
        assert_eq!(feed.message.kind(), Some(MessageKind::Error));

        assert!(session.is_logged_in());
        assert!(!feed.loading);
    }

    #[test]
    fn superseded_response_is_dropped() {
        let (_, mut feed) = logged_in();
        feed.set_default_date_filters(datetime!(2024-01-31 12:00));
        let older = started(feed.begin_fetch());
        let newer = started(feed.begin_fetch());

        feed.finish_fetch(newer.generation, Ok(vec![event(2)]));
        feed.finish_fetch(older.generation, Ok(vec![event(1), event(3)]));

        assert_eq!(feed.events, vec![event(2)]);
    }

    #[test]
    fn outstanding_fetch_is_ignored_after_reset() {
        let (_, mut feed) = logged_in();
        feed.set_default_date_filters(datetime!(2024-01-31 12:00));
        let pending = started(feed.begin_fetch());

        feed.reset();

        assert_eq!(
            feed.finish_fetch(pending.generation, Err(EventsError::SessionExpired)),
            None
        );
        assert!(feed.events.is_empty());
        assert!(!feed.loading);
    }

    #[test]
    fn selection_moves_within_bounds_and_opens_event() {
        let (_, mut feed) = logged_in();
        feed.set_default_date_filters(datetime!(2024-01-31 12:00));
        let pending = started(feed.begin_fetch());
        feed.finish_fetch(pending.generation, Ok(vec![event(1), event(2)]));

        feed.select_previous();
        assert_eq!(feed.list_state.selected(), Some(0));
        feed.select_next();
        feed.select_next();
        assert_eq!(feed.list_state.selected(), Some(1));

        assert_eq!(feed.open_selected(), Some(FeedEvent::EventSelected(event(2))));
    }

    #[test]
    fn default_filters_use_input_format() {
        let (_, mut feed) = logged_in();
        feed.set_default_date_filters(datetime!(2024-03-01 09:05:59));

        assert_eq!(feed.start_input.value, "2024-01-31T09:05");
        assert_eq!(feed.end_input.value, "2024-03-01T09:05");
    }
}
