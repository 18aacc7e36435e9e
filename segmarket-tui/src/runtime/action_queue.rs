use crate::api::{EventsError, LoginError};
use crate::types::Event;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Work requested by a key handler, run by the event loop after input is processed.
#[derive(Debug, Clone, PartialEq)]
pub(super) enum Action {
    SubmitLogin,
    FetchEvents,
    Logout,
    OpenLink(String),
}

/// Result of a spawned network task, sent back to the event loop.
#[derive(Debug)]
pub(super) enum Completion {
    Login(Result<String, LoginError>),
    Events {
        generation: u64,
        result: Result<Vec<Event>, EventsError>,
    },
}

pub(super) type ActionTx = UnboundedSender<Action>;
pub(super) type ActionRx = UnboundedReceiver<Action>;
pub(super) type CompletionTx = UnboundedSender<Completion>;
pub(super) type CompletionRx = UnboundedReceiver<Completion>;

pub(super) fn channel() -> (ActionTx, ActionRx) {
    mpsc::unbounded_channel()
}

pub(super) fn completion_channel() -> (CompletionTx, CompletionRx) {
    mpsc::unbounded_channel()
}
