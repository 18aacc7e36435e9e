use crate::api::EventsApi;
use crate::app::App;
use crate::time_utils::now_local;
use crate::ui;
use anyhow::Result;
use crossterm::event::{self, Event, KeyEventKind};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;
use std::sync::Arc;
use std::time::{Duration, Instant};

use super::action_queue::{channel, completion_channel};
use super::actions::{apply_completion, enqueue_effect, TaskContext};
use super::views::{handle_mouse, handle_screen_key};

pub async fn run_app(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
    api: Arc<dyn EventsApi>,
) -> Result<()> {
    let (action_tx, mut action_rx) = channel();
    let (completion_tx, mut completion_rx) = completion_channel();
    let mut tasks = TaskContext::new(api, completion_tx);

    let effect = app.bootstrap(now_local());
    enqueue_effect(&action_tx, effect);

    loop {
        terminal.draw(|f| ui::render(f, app))?;

        if event::poll(Duration::from_millis(100))? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    handle_screen_key(key, app, &action_tx);
                }
                Event::Mouse(mouse) => handle_mouse(mouse, app),
                _ => {}
            }
        }

        while let Ok(action) = action_rx.try_recv() {
            tasks.run_action(action, app);
        }

        while let Ok(completion) = completion_rx.try_recv() {
            apply_completion(completion, app, &action_tx);
        }

        app.tick(Instant::now());

        if !app.running {
            break;
        }
    }

    tasks.abort_fetch();
    Ok(())
}
