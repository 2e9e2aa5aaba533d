//! `SQLite` implementation of [`ParticipantRepository`].

use std::future::Future;

use sqlx::sqlite::SqliteRow;
use sqlx::{FromRow, Row, SqlitePool};

use eventsproject_app::ports::ParticipantRepository;
use eventsproject_domain::error::EventsError;
use eventsproject_domain::id::{EventId, ParticipantId};
use eventsproject_domain::participant::{Participant, Tache};

use crate::error::StorageError;

/// Wrapper for converting database rows into domain [`Participant`].
struct Wrapper(Participant);

impl<'r> FromRow<'r, SqliteRow> for Wrapper {
    fn from_row(row: &'r SqliteRow) -> Result<Self, sqlx::Error> {
        let id: i64 = row.try_get("id_part")?;
        let nom: String = row.try_get("nom")?;
        let prenom: String = row.try_get("prenom")?;
        let tache: String = row.try_get("tache")?;

        let tache = tache
            .parse::<Tache>()
            .map_err(|err| sqlx::Error::Decode(Box::new(err)))?;

        Ok(Self(Participant {
            id_part: ParticipantId::new(id),
            nom,
            prenom,
            tache,
        }))
    }
}

const INSERT: &str = "INSERT INTO participants (nom, prenom, tache) VALUES (?, ?, ?)";
const UPSERT: &str = "INSERT INTO participants (id_part, nom, prenom, tache) VALUES (?, ?, ?, ?) \
     ON CONFLICT (id_part) DO UPDATE SET nom = excluded.nom, prenom = excluded.prenom, tache = excluded.tache";
const SELECT_BY_ID: &str = "SELECT * FROM participants WHERE id_part = ?";
const LINK_EVENT: &str =
    "INSERT OR IGNORE INTO participant_events (participant_id, event_id) VALUES (?, ?)";

/// `SQLite`-backed participant repository.
pub struct SqliteParticipantRepository {
    pool: SqlitePool,
}

impl SqliteParticipantRepository {
    /// Create a new repository using the given connection pool.
    #[must_use]
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

impl ParticipantRepository for SqliteParticipantRepository {
    fn save(
        &self,
        mut participant: Participant,
    ) -> impl Future<Output = Result<Participant, EventsError>> + Send {
        let pool = self.pool.clone();
        async move {
            if participant.id_part.is_unassigned() {
                let result = sqlx::query(INSERT)
                    .bind(&participant.nom)
                    .bind(&participant.prenom)
                    .bind(participant.tache.as_str())
                    .execute(&pool)
                    .await
                    .map_err(StorageError::from)?;
                participant.id_part = ParticipantId::new(result.last_insert_rowid());
            } else {
                sqlx::query(UPSERT)
                    .bind(participant.id_part.get())
                    .bind(&participant.nom)
                    .bind(&participant.prenom)
                    .bind(participant.tache.as_str())
                    .execute(&pool)
                    .await
                    .map_err(StorageError::from)?;
            }

            Ok(participant)
        }
    }

    fn get_by_id(
        &self,
        id: ParticipantId,
    ) -> impl Future<Output = Result<Option<Participant>, EventsError>> + Send {
        let pool = self.pool.clone();
        async move {
            let row: Option<Wrapper> = sqlx::query_as(SELECT_BY_ID)
                .bind(id.get())
                .fetch_optional(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(row.map(|w| w.0))
        }
    }

    fn link_event(
        &self,
        participant: ParticipantId,
        event: EventId,
    ) -> impl Future<Output = Result<(), EventsError>> + Send {
        let pool = self.pool.clone();
        async move {
            sqlx::query(LINK_EVENT)
                .bind(participant.get())
                .bind(event.get())
                .execute(&pool)
                .await
                .map_err(StorageError::from)?;

            Ok(())
        }
    }
}
