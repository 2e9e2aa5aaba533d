//! JSON REST API handler modules.

#[allow(clippy::missing_errors_doc)]
pub mod events;

use axum::Router;
use axum::routing::{get, post, put};

use eventsproject_app::ports::EventServices;

use crate::state::AppState;

/// Build the `/event` sub-router.
pub fn routes<S>() -> Router<AppState<S>>
where
    S: EventServices + Send + Sync + 'static,
{
    Router::new()
        .route("/addPart", post(events::add_participant::<S>))
        .route("/addEvent", post(events::add_event::<S>))
        .route("/addEvent/{id}", post(events::add_event_for_participant::<S>))
        .route("/addAffectLog/{description}", put(events::add_affect_log::<S>))
        .route("/getLogs/{d1}/{d2}", get(events::get_logistics_dates::<S>))
}
