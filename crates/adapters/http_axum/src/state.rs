//! Shared application state for axum handlers.

use std::sync::Arc;

use eventsproject_app::ports::EventServices;

/// Application state shared across all axum handlers.
///
/// Generic over the service implementation to avoid dynamic dispatch.
/// `Clone` is implemented manually so `S` itself does not need to be
/// `Clone` — only the `Arc` wrapper is cloned.
pub struct AppState<S> {
    /// The service every endpoint delegates to.
    pub event_service: Arc<S>,
}

impl<S> Clone for AppState<S> {
    fn clone(&self) -> Self {
        Self {
            event_service: Arc::clone(&self.event_service),
        }
    }
}

impl<S> AppState<S>
where
    S: EventServices + Send + Sync + 'static,
{
    /// Create a new application state owning the service.
    pub fn new(event_service: S) -> Self {
        Self {
            event_service: Arc::new(event_service),
        }
    }

    /// Create a new application state from a pre-wrapped `Arc` service.
    ///
    /// Use this when the service is shared with background tasks
    /// (the cost scheduler) before constructing the HTTP state.
    pub fn from_arc(event_service: Arc<S>) -> Self {
        Self { event_service }
    }
}
