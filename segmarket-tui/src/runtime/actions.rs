use std::sync::Arc;

use tokio::task::JoinHandle;

use crate::api::EventsApi;
use crate::app::{App, Effect, FetchStart};
use crate::browser::open_browser;
use crate::time_utils::now_local;

use super::action_queue::{Action, ActionTx, Completion, CompletionTx};

fn effect_action(effect: Effect) -> Action {
    match effect {
        Effect::FetchEvents => Action::FetchEvents,
    }
}

pub(super) fn enqueue_effect(action_tx: &ActionTx, effect: Option<Effect>) {
    if let Some(effect) = effect {
        let _ = action_tx.send(effect_action(effect));
    }
}

/// Spawns backend calls and keeps the handle of the outstanding events fetch.
pub(super) struct TaskContext {
    api: Arc<dyn EventsApi>,
    completion_tx: CompletionTx,
    fetch_task: Option<JoinHandle<()>>,
}

impl TaskContext {
    pub(super) fn new(api: Arc<dyn EventsApi>, completion_tx: CompletionTx) -> Self {
        Self {
            api,
            completion_tx,
            fetch_task: None,
        }
    }

    pub(super) fn run_action(&mut self, action: Action, app: &mut App) {
        match action {
            Action::SubmitLogin => self.submit_login(app),
            Action::FetchEvents => self.fetch_events(app),
            Action::Logout => {
                self.abort_fetch();
                let event = app.feed.logout();
                app.on_feed_event(event);
            }
            Action::OpenLink(url) => {
                tracing::info!(%url, "opening video link");
                if let Err(e) = open_browser(&url) {
                    tracing::warn!("Failed to open browser: {:#}", e);
                }
            }
        }
    }

    fn submit_login(&mut self, app: &mut App) {
        let Some(credentials) = app.login.begin_submit() else {
            return;
        };

        let api = Arc::clone(&self.api);
        let tx = self.completion_tx.clone();
        tokio::spawn(async move {
            let result = api.login(&credentials.login, &credentials.password).await;
            let _ = tx.send(Completion::Login(result));
        });
    }

    fn fetch_events(&mut self, app: &mut App) {
        match app.feed.begin_fetch() {
            FetchStart::Started(pending) => {
                self.abort_fetch();

                let api = Arc::clone(&self.api);
                let tx = self.completion_tx.clone();
                self.fetch_task = Some(tokio::spawn(async move {
                    let result = api.get_events(&pending.token, &pending.query).await;
                    let _ = tx.send(Completion::Events {
                        generation: pending.generation,
                        result,
                    });
                }));
            }
            FetchStart::InvalidDates => {}
            FetchStart::LoggedOut(event) => {
                self.abort_fetch();
                app.on_feed_event(event);
            }
        }
    }

    /// Cancel the outstanding events fetch, if any.
    pub(super) fn abort_fetch(&mut self) {
        if let Some(task) = self.fetch_task.take() {
            task.abort();
        }
    }
}

/// Hand a finished task's result to its controller and route whatever it emits.
pub(super) fn apply_completion(completion: Completion, app: &mut App, action_tx: &ActionTx) {
    match completion {
        Completion::Login(result) => {
            if let Some(event) = app.login.finish_submit(result) {
                let effect = app.on_login_event(event, now_local());
                enqueue_effect(action_tx, effect);
            }
        }
        Completion::Events { generation, result } => {
            if let Some(event) = app.feed.finish_fetch(generation, result) {
                app.on_feed_event(event);
            }
        }
    }
}
