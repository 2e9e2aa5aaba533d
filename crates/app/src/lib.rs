//! # eventsproject-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define the **driving/inbound port** [`EventServices`](ports::EventServices):
//!   the capability set the HTTP adapter delegates to
//! - Define **driven/outbound ports** that storage adapters implement:
//!   - `ParticipantRepository` — save and look up participants
//!   - `EventRepository` — save events, query by description, date or organizer
//!   - `LogisticsRepository` — save logistics and attach them to events
//! - Provide [`EventService`](services::event_service::EventService), the
//!   implementation of the inbound port over the outbound ones
//! - Provide the periodic [`CostScheduler`](cost_scheduler::CostScheduler)
//!
//! ## Dependency rule
//! Depends on `eventsproject-domain` only (plus `tokio::sync`/`tokio::time`).
//! Never imports adapter crates. Adapters depend on *this* crate, not the reverse.

pub mod cost_scheduler;
pub mod ports;
pub mod services;
