//! # eventsproject-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve the JSON API under `/event` (`/event/addPart`, `/event/addEvent`,
//!   `/event/getLogs/{d1}/{d2}`, …)
//! - Map HTTP requests into [`EventServices`](eventsproject_app::ports::EventServices)
//!   calls (driving adapter)
//! - Map service results into HTTP responses, and errors into status codes
//!
//! ## Dependency rule
//! Depends on `eventsproject-app` (for the service port) and
//! `eventsproject-domain` (for the records used as request/response bodies).
//! Never leaks axum types into the domain.

pub mod api;
pub mod error;
pub mod router;
pub mod state;

#[cfg(test)]
mod test_support;
