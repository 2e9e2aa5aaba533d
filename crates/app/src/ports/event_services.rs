//! Inbound port — the operations the HTTP layer delegates to.

use std::future::Future;

use chrono::NaiveDate;

use eventsproject_domain::error::EventsError;
use eventsproject_domain::event::Event;
use eventsproject_domain::id::ParticipantId;
use eventsproject_domain::logistics::Logistics;
use eventsproject_domain::participant::{Organizer, Participant};

/// Business operations on participants, events and logistics.
///
/// The HTTP adapter is generic over this trait so it can be driven by the
/// real [`EventService`](crate::services::event_service::EventService) or by
/// a stub in tests.
pub trait EventServices {
    /// Persist a participant and return it with its assigned id.
    fn add_participant(
        &self,
        participant: Participant,
    ) -> impl Future<Output = Result<Participant, EventsError>> + Send;

    /// Persist an event and attach it to every participant it references.
    fn add_affect_even_participant(
        &self,
        event: Event,
    ) -> impl Future<Output = Result<Event, EventsError>> + Send;

    /// Persist an event and attach it to the participant `id_participant`,
    /// as well as to every participant it already references.
    fn add_affect_even_participant_to(
        &self,
        event: Event,
        id_participant: ParticipantId,
    ) -> impl Future<Output = Result<Event, EventsError>> + Send;

    /// Persist a logistics entry and attach it to the event described by
    /// `description_event`.
    fn add_affect_log(
        &self,
        logistics: Logistics,
        description_event: String,
    ) -> impl Future<Output = Result<Logistics, EventsError>> + Send;

    /// Reserved logistics of the events starting between the two dates.
    fn get_logistics_dates(
        &self,
        date_debut: NaiveDate,
        date_fin: NaiveDate,
    ) -> impl Future<Output = Result<Vec<Logistics>, EventsError>> + Send;

    /// Recompute the cost of every event `organizer` takes part in.
    fn calcul_cout(
        &self,
        organizer: &Organizer,
    ) -> impl Future<Output = Result<Vec<Event>, EventsError>> + Send;
}
