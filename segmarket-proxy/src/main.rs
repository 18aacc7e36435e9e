use anyhow::Context;
use tokio::net::TcpListener;

mod app_state;
mod config;
mod error;
mod proxy;
mod router;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "segmarket_proxy=info,tower_http=info".into()),
        )
        .init();

    let settings = config::read_config().context("Failed to read configuration")?;
    let app_state = app_state::AppState::new(&settings.upstream)
        .context("Failed to create application state")?;
    tracing::info!("forwarding {} to {}", proxy::API_PREFIX, app_state.upstream);

    let app = router::create(app_state);

    let address = settings.application.address();
    let listener = TcpListener::bind(&address)
        .await
        .with_context(|| format!("Failed to bind to {}", address))?;
    tracing::info!(
        "Proxy listening on http://{}{}",
        listener.local_addr()?,
        proxy::API_PREFIX
    );

    axum::serve(listener, app).await.context("Server error")?;

    Ok(())
}
