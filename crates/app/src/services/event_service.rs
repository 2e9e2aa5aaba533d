//! Event service — the use-cases behind the HTTP endpoints.

use chrono::NaiveDate;

use eventsproject_domain::error::{EventsError, NotFoundError, ValidationError};
use eventsproject_domain::event::Event;
use eventsproject_domain::id::ParticipantId;
use eventsproject_domain::logistics::Logistics;
use eventsproject_domain::participant::{Organizer, Participant, ParticipantRef};

use crate::ports::{EventRepository, EventServices, LogisticsRepository, ParticipantRepository};

/// Application service implementing [`EventServices`] over the storage ports.
pub struct EventService<PR, ER, LR> {
    participants: PR,
    events: ER,
    logistics: LR,
}

impl<PR, ER, LR> EventService<PR, ER, LR>
where
    PR: ParticipantRepository + Send + Sync,
    ER: EventRepository + Send + Sync,
    LR: LogisticsRepository + Send + Sync,
{
    /// Create a new service backed by the given repositories.
    pub fn new(participants: PR, events: ER, logistics: LR) -> Self {
        Self {
            participants,
            events,
            logistics,
        }
    }

    async fn require_participant(&self, id: ParticipantId) -> Result<Participant, EventsError> {
        self.participants.get_by_id(id).await?.ok_or_else(|| {
            NotFoundError {
                entity: "Participant",
                key: id.to_string(),
            }
            .into()
        })
    }
}

impl<PR, ER, LR> EventServices for EventService<PR, ER, LR>
where
    PR: ParticipantRepository + Send + Sync,
    ER: EventRepository + Send + Sync,
    LR: LogisticsRepository + Send + Sync,
{
    #[tracing::instrument(skip(self, participant), fields(nom = %participant.nom))]
    async fn add_participant(&self, participant: Participant) -> Result<Participant, EventsError> {
        let saved = self.participants.save(participant).await?;
        tracing::debug!(id_part = %saved.id_part, "participant saved");
        Ok(saved)
    }

    /// Every referenced participant is checked before anything is written,
    /// so an unknown id leaves storage untouched.
    #[tracing::instrument(skip(self, event), fields(description = %event.description))]
    async fn add_affect_even_participant(&self, event: Event) -> Result<Event, EventsError> {
        for reference in &event.participants {
            self.require_participant(reference.id_part).await?;
        }

        let saved = self.events.save(event).await?;
        for reference in &saved.participants {
            self.participants
                .link_event(reference.id_part, saved.id_event)
                .await?;
        }
        tracing::debug!(
            id_event = %saved.id_event,
            participants = saved.participants.len(),
            "event saved"
        );
        Ok(saved)
    }

    /// `id_participant` and every participant referenced by the event are
    /// checked before anything is written; all of them get linked.
    #[tracing::instrument(skip(self, event), fields(description = %event.description))]
    async fn add_affect_even_participant_to(
        &self,
        mut event: Event,
        id_participant: ParticipantId,
    ) -> Result<Event, EventsError> {
        let participant = self.require_participant(id_participant).await?;
        for reference in &event.participants {
            self.require_participant(reference.id_part).await?;
        }
        if !event
            .participants
            .iter()
            .any(|r| r.id_part == participant.id_part)
        {
            event.participants.push(ParticipantRef::from(participant.id_part));
        }

        let saved = self.events.save(event).await?;
        for reference in &saved.participants {
            self.participants
                .link_event(reference.id_part, saved.id_event)
                .await?;
        }
        tracing::debug!(
            id_event = %saved.id_event,
            participants = saved.participants.len(),
            "event saved for participant"
        );
        Ok(saved)
    }

    #[tracing::instrument(skip(self, logistics), fields(logistics = %logistics.description))]
    async fn add_affect_log(
        &self,
        logistics: Logistics,
        description_event: String,
    ) -> Result<Logistics, EventsError> {
        if description_event.trim().is_empty() {
            return Err(ValidationError::EmptyDescription.into());
        }
        let event = self
            .events
            .find_by_description(&description_event)
            .await?
            .ok_or(NotFoundError {
                entity: "Event",
                key: description_event,
            })?;

        let saved = self.logistics.save(logistics).await?;
        self.logistics
            .link_to_event(saved.id_log, event.id_event)
            .await?;
        Ok(saved)
    }

    /// Events without any logistics attached contribute nothing.
    #[tracing::instrument(skip(self))]
    async fn get_logistics_dates(
        &self,
        date_debut: NaiveDate,
        date_fin: NaiveDate,
    ) -> Result<Vec<Logistics>, EventsError> {
        let events = self
            .events
            .find_by_date_debut_between(date_debut, date_fin)
            .await?;

        let mut reserved = Vec::new();
        for event in &events {
            let logistics = self.logistics.find_by_event(event.id_event).await?;
            if logistics.is_empty() {
                tracing::debug!(id_event = %event.id_event, "event has no logistics");
                continue;
            }
            reserved.extend(logistics.into_iter().filter(|log| log.reserve));
        }
        Ok(reserved)
    }

    #[tracing::instrument(skip(self, organizer), fields(nom = %organizer.nom, prenom = %organizer.prenom))]
    async fn calcul_cout(&self, organizer: &Organizer) -> Result<Vec<Event>, EventsError> {
        let events = self.events.find_by_organizer(organizer).await?;

        let mut updated = Vec::with_capacity(events.len());
        for mut event in events {
            event.logistics = self.logistics.find_by_event(event.id_event).await?;
            event.cout = event.reserved_cost();
            self.events.update_cost(event.id_event, event.cout).await?;
            tracing::info!(
                description = %event.description,
                cout = event.cout,
                "event cost updated"
            );
            updated.push(event);
        }
        Ok(updated)
    }
}
