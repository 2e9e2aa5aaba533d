//! Storage port — repository traits for persistence.
//!
//! `save` methods follow upsert semantics: a record whose id is unassigned
//! gets a fresh id, a record with an id overwrites the stored row.

use std::future::Future;

use chrono::NaiveDate;

use eventsproject_domain::error::EventsError;
use eventsproject_domain::event::Event;
use eventsproject_domain::id::{EventId, LogisticsId, ParticipantId};
use eventsproject_domain::logistics::Logistics;
use eventsproject_domain::participant::{Organizer, Participant};

/// Repository for [`Participant`]s and their event memberships.
pub trait ParticipantRepository {
    /// Insert or overwrite a participant.
    fn save(
        &self,
        participant: Participant,
    ) -> impl Future<Output = Result<Participant, EventsError>> + Send;

    /// Get a participant by id.
    fn get_by_id(
        &self,
        id: ParticipantId,
    ) -> impl Future<Output = Result<Option<Participant>, EventsError>> + Send;

    /// Record that `participant` takes part in `event`. Idempotent.
    fn link_event(
        &self,
        participant: ParticipantId,
        event: EventId,
    ) -> impl Future<Output = Result<(), EventsError>> + Send;
}

/// Repository for [`Event`]s.
///
/// Returned events carry their participant references; their `logistics`
/// list is left empty (see [`LogisticsRepository::find_by_event`]).
pub trait EventRepository {
    /// Insert or overwrite the scalar fields of an event.
    fn save(&self, event: Event) -> impl Future<Output = Result<Event, EventsError>> + Send;

    /// First event (lowest id) with exactly this description.
    fn find_by_description(
        &self,
        description: &str,
    ) -> impl Future<Output = Result<Option<Event>, EventsError>> + Send;

    /// Events whose start date lies in `[from, to]`, ordered by id.
    fn find_by_date_debut_between(
        &self,
        from: NaiveDate,
        to: NaiveDate,
    ) -> impl Future<Output = Result<Vec<Event>, EventsError>> + Send;

    /// Events that `organizer` takes part in, ordered by id.
    fn find_by_organizer(
        &self,
        organizer: &Organizer,
    ) -> impl Future<Output = Result<Vec<Event>, EventsError>> + Send;

    /// Overwrite the cost of a stored event.
    fn update_cost(
        &self,
        id: EventId,
        cout: f64,
    ) -> impl Future<Output = Result<(), EventsError>> + Send;
}

/// Repository for [`Logistics`] entries.
pub trait LogisticsRepository {
    /// Insert or overwrite a logistics entry.
    fn save(
        &self,
        logistics: Logistics,
    ) -> impl Future<Output = Result<Logistics, EventsError>> + Send;

    /// Attach a logistics entry to an event. Idempotent.
    fn link_to_event(
        &self,
        logistics: LogisticsId,
        event: EventId,
    ) -> impl Future<Output = Result<(), EventsError>> + Send;

    /// Logistics attached to `event`, ordered by id.
    fn find_by_event(
        &self,
        event: EventId,
    ) -> impl Future<Output = Result<Vec<Logistics>, EventsError>> + Send;
}
