//! `SQLite` implementation of [`EventRepository`].

use std::future::Future;

use chrono::NaiveDate;
use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use eventsproject_app::ports::EventRepository;
use eventsproject_domain::error::EventsError;
use eventsproject_domain::event::Event;
use eventsproject_domain::id::{EventId, ParticipantId};
use eventsproject_domain::participant::{Organizer, ParticipantRef};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Event`].
///
/// Participant references live in a join table and are filled in by
/// [`with_participants`].
struct Wrapper(Event);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id_event")?;
        let description: String = row.try_get("description")?;
        let date_debut: NaiveDate = row.try_get("date_debut")?;
        let date_fin: NaiveDate = row.try_get("date_fin")?;
        let cout: f64 = row.try_get("cout")?;

        Ok(Self(
            Event::new(description, date_debut, date_fin)
                .with_id(EventId::new(id))
                .with_cout(cout),
        ))
    }
}

const INSERT: &str =
    "INSERT INTO events (description, date_debut, date_fin, cout) VALUES (?, ?, ?, ?)";
const UPSERT: &str = "INSERT INTO events (id_event, description, date_debut, date_fin, cout) VALUES (?, ?, ?, ?, ?) \
     ON CONFLICT (id_event) DO UPDATE SET description = excluded.description, \
     date_debut = excluded.date_debut, date_fin = excluded.date_fin, cout = excluded.cout";
const SELECT_BY_DESCRIPTION: &str =
    "SELECT * FROM events WHERE description = ? ORDER BY id_event LIMIT 1";
const SELECT_BY_DATE_DEBUT_BETWEEN: &str =
    "SELECT * FROM events WHERE date_debut BETWEEN ? AND ? ORDER BY id_event";
const SELECT_BY_ORGANIZER: &str = "SELECT DISTINCT e.* FROM events e \
     JOIN participant_events pe ON pe.event_id = e.id_event \
     JOIN participants p ON p.id_part = pe.participant_id \
     WHERE p.nom = ? AND p.prenom = ? AND p.tache = ? \
     ORDER BY e.id_event";
const SELECT_PARTICIPANT_IDS: &str =
    "SELECT participant_id FROM participant_events WHERE event_id = ? ORDER BY participant_id";
const UPDATE_COST: &str = "UPDATE events SET cout = ? WHERE id_event = ?";

async fn with_participants(pool: &SqlitePool, mut event: Event) -> Result<Event, StorageError> {
    let ids: Vec<(i64,)> = sqlx::query_as(SELECT_PARTICIPANT_IDS)
        .bind(event.id_event.get())
        .fetch_all(pool)
        .await?;
    event.participants = ids
        .into_iter()
        .map(|(id,)| ParticipantRef::from(ParticipantId::new(id)))
        .collect();
    Ok(event)
}

async fn hydrate_all(pool: &SqlitePool, rows: Vec<Wrapper>) -> Result<Vec<Event>, StorageError> {
    let mut events = Vec::with_capacity(rows.len());
    for Wrapper(event) in rows {
        events.push(with_participants(pool, event).await?);
    }
    Ok(events)
}

/// `SQLite`-backed event repository.
pub struct SqliteEventRepository {
    pool: SqlitePool,
}

impl SqliteEventRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl EventRepository for SqliteEventRepository {
    fn save(&self, mut event: Event) -> impl Future<Output = Result<Event, EventsError>> + Send {
        let pool = self.pool.clone();
        async move {
            if event.id_event.is_unassigned() {
                let result = sqlx::query(INSERT)
                    .bind(&event.description)
                    .bind(event.date_debut)
                    .bind(event.date_fin)
                    .bind(event.cout)
                    .execute(&pool)
                    .await
                    .map_err(StorageError::from)?;
                event.id_event = EventId::new(result.last_insert_rowid());
            } else {
                sqlx::query(UPSERT)
                    .bind(event.id_event.get())
                    .bind(&event.description)
                    .bind(event.date_debut)
                    .bind(event.date_fin)
                    .bind(event.cout)
                    .execute(&pool)
                    .await
                    .map_err(StorageError::from)?;
            }

            Ok(event)
        }
    }

    fn find_by_description(
        &self,
        description: &str,
    ) -> impl Future<Output = Result<Option<Event>, EventsError>> + Send {
        let pool = self.pool.clone();
        let description = description.to_owned();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_DESCRIPTION)
                .bind(description)
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            match row {
                Some(Wrapper(event)) => Ok(Some(with_participants(&pool, event).await?)),
                None => Ok(None),
            }
        }
    }

    fn find_by_date_debut_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> impl Future<Output = Result<Vec<Event>, EventsError>> + Send {
        let pool = self.pool.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_DATE_DEBUT_BETWEEN)
                .bind(from)
                .bind(to)
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(hydrate_all(&pool, rows).await?)
        }
    }

    fn find_by_organizer(
        &self,
        organizer: &Organizer,
    ) -> impl Future<Output = Result<Vec<Event>, EventsError>> + Send {
        let pool = self.pool.clone();
        let organizer = organizer.clone();
        async move {
            let rows: Vec<Wrapper> = sqlx::query_as(SELECT_BY_ORGANIZER)
                .bind(organizer.nom)
                .bind(organizer.prenom)
                .bind(organizer.tache.as_str())
                .fetch_all(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(hydrate_all(&pool, rows).await?)
        }
    }

    fn update_cost(
        &self,
        id: EventId,
        cout: f64,
    ) -> impl Future<Output = Result<(), EventsError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(UPDATE_COST)
                .bind(cout)
                .bind(id.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
