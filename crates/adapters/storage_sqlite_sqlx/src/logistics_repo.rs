//! `SQLite` implementation of [`LogisticsRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use eventsproject_app::ports::LogisticsRepository;
use eventsproject_domain::error::EventsError;
use eventsproject_domain::id::{EventId, LogisticsId};
use eventsproject_domain::logistics::Logistics;

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Logistics`].
struct Wrapper(Logistics);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        Ok(Self(Logistics {
            id_log: LogisticsId::new(row.try_get("id_log")?),
            description: row.try_get("description")?,
            reserve: row.try_get("reserve")?,
            prix_unit: row.try_get("prix_unit")?,
            quantite: row.try_get("quantite")?,
        }))
    }
}

const INSERT: &str =
    "INSERT INTO logistics (description, reserve, prix_unit, quantite) VALUES (?, ?, ?, ?)";
const UPSERT: &str = "INSERT INTO logistics (id_log, description, reserve, prix_unit, quantite) VALUES (?, ?, ?, ?, ?) \
     ON CONFLICT (id_log) DO UPDATE SET description = excluded.description, \
     reserve = excluded.reserve, prix_unit = excluded.prix_unit, quantite = excluded.quantite";
const LINK_TO_EVENT: &str =
    "INSERT OR IGNORE INTO event_logistics (event_id, logistics_id) VALUES (?, ?)";
const SELECT_BY_EVENT: &str = "SELECT l.* FROM logistics l \
     JOIN event_logistics el ON el.logistics_id = l.id_log \
     WHERE el.event_id = ? ORDER BY l.id_log";

/// `SQLite`-backed logistics repository.
pub struct SqliteLogisticsRepository {
    pool: SqlitePool,
}

impl SqliteLogisticsRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl LogisticsRepository for SqliteLogisticsRepository {
    fn save(
        &self,
        mut logistics: Logistics,
    ) -> impl Future<Output = Result<Logistics, EventsError>> + Send {
        let pool = self.pool.clone();
        async move {
            if logistics.id_log.is_unassigned() {
                let result = sqlx::query(INSERT)
                    .bind(&logistics.description)
                    .bind(logistics.reserve)
                    .bind(logistics.prix_unit)
                    .bind(logistics.quantite)
                    .execute(&pool)
                    .await
                    .map_err(StorageError::from)?;
                logistics.id_log = LogisticsId::new(result.last_insert_rowid());
            } else {
                sqlx::query(UPSERT)
                    .bind(logistics.id_log.get())
                    .bind(&logistics.description)
                    .bind(logistics.reserve)
                    .bind(logistics.prix_unit)
                    .bind(logistics.quantite)
                    .execute(&pool)
                    .await
                    .map_err(StorageError::from)?;
            }

            Ok(logistics)
        }
    }

    fn link_to_event(
        &self,
        logistics: LogisticsId,
        event: EventId,
    ) -> impl Future<Output = Result<(), EventsError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(LINK_TO_EVENT)
                .bind(event.get())
                .bind(logistics.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }

    fn find_by_event(
        &self,
        event: EventId,
    ) -> impl Future<Output = Result<Vec<Logistics>, EventsError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_EVENT)
                .bind(event.get())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(rows.into_iter().map(|w| w.0).collect())
        }
    }
}
