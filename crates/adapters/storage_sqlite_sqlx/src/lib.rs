//! # eventsproject-adapter-storage-sqlite-sqlx
//!
//! `SQLite` persistence adapter using [sqlx](https://docs.rs/sqlx).
//!
//! ## Responsibilities
//! - Implement the repository port traits defined in `eventsproject-app::ports::storage`
//! - Manage `SQLite` connection pool lifecycle
//! - Run database migrations (sqlx embedded migrations from `./migrations`)
//! - Map between domain types and database rows
//!
//! ## Dependency rule
//! Depends on `eventsproject-app` (for port traits) and `eventsproject-domain`
//! (for domain types). The `app` and `domain` crates must never reference this
//! adapter.

mod error;
mod event_repo;
mod logistics_repo;
mod participant_repo;
mod pool;

pub use error::StorageError;
pub use event_repo::SqliteEventRepository;
pub use logistics_repo::SqliteLogisticsRepository;
pub use participant_repo::SqliteParticipantRepository;
pub use pool::{Config, Database};
