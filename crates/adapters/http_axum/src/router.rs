//! Axum router assembly.

use axum::Router;
use axum::routing::get;
use tower_http::trace::TraceLayer;

use eventsproject_app::ports::EventServices;

use crate::state::AppState;

/// Build the top-level axum [`Router`].
///
/// Nests the API routes under `/event` and exposes `/health`.
/// Includes a [`TraceLayer`] that logs each HTTP request/response at the
/// `DEBUG` level using the `tracing` ecosystem.
pub fn build<S>(state: AppState<S>) -> Router
where
    S: EventServices + Send + Sync + 'static,
{
    Router::new()
        .route("/health", get(health_check))
        .nest("/event", crate::api::routes::<S>())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health_check() -> &'static str {
    "OK"
}
