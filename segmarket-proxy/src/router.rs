use axum::{routing::any, Router};
use tower_http::{
    cors::CorsLayer,
    trace::{DefaultMakeSpan, TraceLayer},
};

use crate::{app_state::AppState, proxy};

pub fn create(app_state: AppState) -> Router<()> {
    Router::new()
        .route("/api", any(proxy::forward))
        .route("/api/*rest", any(proxy::forward))
        .with_state(app_state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http().make_span_with(DefaultMakeSpan::default()))
}
