mod api;
mod app;
mod browser;
mod cli;
mod config;
mod login;
mod report;
mod runtime;
mod session_store;
mod time_utils;
mod types;
mod ui;

use anyhow::{Context, Result};
use api::{ApiClient, DevBackend, EventsApi};
use app::App;
use clap::Parser;
use cli::{Cli, Commands};
use config::DashConfig;
use crossterm::{
    event::{DisableMouseCapture, EnableMouseCapture},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use session_store::{FileSessionStore, Session};
use std::io;
use std::sync::{Arc, Mutex};

const LOG_FILE: &str = "segmarket-tui.log";

fn main() -> Result<()> {
    // Must run before any other thread exists.
    time_utils::init_local_offset();

    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_logging()?;

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("Failed to start tokio runtime")?;
    runtime.block_on(run(cli.command()))
}

/// Logs go to a file; the terminal belongs to the UI.
fn init_logging() -> Result<()> {
    let dir = session_store::root_path()?;
    std::fs::create_dir_all(&dir)
        .with_context(|| format!("Failed to create {}", dir.display()))?;
    let path = dir.join(LOG_FILE);
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("Failed to open log file {}", path.display()))?;

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "segmarket_tui=info".into()),
        )
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .init();
    Ok(())
}

fn file_session() -> Result<Session> {
    Ok(Session::new(Arc::new(FileSessionStore::in_config_dir()?)))
}

async fn run(command: Commands) -> Result<()> {
    match command {
        Commands::Run => {
            let cfg = DashConfig::load()?;
            tracing::info!(api_url = %cfg.api_url, events_url = %cfg.events_url, "starting dashboard");
            let client = ApiClient::new(&cfg.api_url, &cfg.events_url)?;
            run_tui(App::new(file_session()?), Arc::new(client)).await
        }
        Commands::Dev => {
            tracing::info!("starting dashboard in dev mode");
            run_tui(App::new(Session::in_memory()), Arc::new(DevBackend::new())).await
        }
        Commands::Login => {
            let cfg = DashConfig::load()?;
            let client = ApiClient::new(&cfg.api_url, &cfg.events_url)?;
            login::run_login(&client, &file_session()?).await
        }
        Commands::Logout => {
            file_session()?
                .try_clear()
                .context("Failed to remove session")?;
            println!("Sessão removida.");
            Ok(())
        }
        Commands::ConfigPath => {
            let path = DashConfig::ensure_exists()?;
            println!("{}", path.display());
            Ok(())
        }
    }
}

async fn run_tui(mut app: App, api: Arc<dyn EventsApi>) -> Result<()> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = runtime::run_app(&mut terminal, &mut app, api).await;

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        LeaveAlternateScreen,
        DisableMouseCapture
    )?;
    terminal.show_cursor()?;

    if let Err(err) = &res {
        tracing::error!("dashboard exited with error: {:#}", err);
    }
    res
}
