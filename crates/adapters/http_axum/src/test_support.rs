//! Substitute [`EventServices`] implementations for handler tests.

use std::sync::{Arc, Mutex};

use chrono::NaiveDate;

use eventsproject_app::ports::EventServices;
use eventsproject_domain::error::EventsError;
use eventsproject_domain::event::Event;
use eventsproject_domain::id::{EventId, LogisticsId, ParticipantId};
use eventsproject_domain::logistics::Logistics;
use eventsproject_domain::participant::{Organizer, Participant, Tache};

pub(crate) fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

/// One delegated call, with the arguments the handler passed.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Call {
    AddParticipant(Participant),
    AddEvent(Event),
    AddEventTo(Event, ParticipantId),
    AddAffectLog(Logistics, String),
    GetLogs(NaiveDate, NaiveDate),
    CalculCout,
}

/// Records every call and answers with fixed records, whatever the input.
#[derive(Clone, Default)]
pub(crate) struct RecordingService {
    calls: Arc<Mutex<Vec<Call>>>,
}

impl RecordingService {
    pub(crate) fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    fn participant() -> Participant {
        Participant::new("John Doe", "John", Tache::Invite).with_id(ParticipantId::new(2))
    }

    fn event() -> Event {
        Event::new("Sample Event", today(), today().succ_opt().unwrap())
            .with_id(EventId::new(1))
            .with_cout(100.0)
    }

    fn logistics() -> Vec<Logistics> {
        vec![
            Logistics::new("Sample Logistics", true, 50.0, 10).with_id(LogisticsId::new(1)),
            Logistics::new("Second", true, 1.5, 4).with_id(LogisticsId::new(2)),
        ]
    }
}

impl EventServices for RecordingService {
    async fn add_participant(&self, participant: Participant) -> Result<Participant, EventsError> {
        self.record(Call::AddParticipant(participant));
        Ok(Self::participant())
    }

    async fn add_affect_even_participant(&self, event: Event) -> Result<Event, EventsError> {
        self.record(Call::AddEvent(event));
        Ok(Self::event())
    }

    async fn add_affect_even_participant_to(
        &self,
        event: Event,
        id_participant: ParticipantId,
    ) -> Result<Event, EventsError> {
        self.record(Call::AddEventTo(event, id_participant));
        Ok(Self::event())
    }

    async fn add_affect_log(
        &self,
        logistics: Logistics,
        description_event: String,
    ) -> Result<Logistics, EventsError> {
        self.record(Call::AddAffectLog(logistics.clone(), description_event));
        Ok(logistics.with_id(LogisticsId::new(3)))
    }

    async fn get_logistics_dates(
        &self,
        date_debut: NaiveDate,
        date_fin: NaiveDate,
    ) -> Result<Vec<Logistics>, EventsError> {
        self.record(Call::GetLogs(date_debut, date_fin));
        Ok(Self::logistics())
    }

    async fn calcul_cout(&self, _organizer: &Organizer) -> Result<Vec<Event>, EventsError> {
        self.record(Call::CalculCout);
        Ok(vec![Self::event()])
    }
}

/// Fails every call with the error produced by the wrapped constructor.
pub(crate) struct FailingService(pub(crate) fn() -> EventsError);

impl EventServices for FailingService {
    async fn add_participant(&self, _participant: Participant) -> Result<Participant, EventsError> {
        Err((self.0)())
    }

    async fn add_affect_even_participant(&self, _event: Event) -> Result<Event, EventsError> {
        Err((self.0)())
    }

    async fn add_affect_even_participant_to(
        &self,
        _event: Event,
        _id_participant: ParticipantId,
    ) -> Result<Event, EventsError> {
        Err((self.0)())
    }

    async fn add_affect_log(
        &self,
        _logistics: Logistics,
        _description_event: String,
    ) -> Result<Logistics, EventsError> {
        Err((self.0)())
    }

    async fn get_logistics_dates(
        &self,
        _date_debut: NaiveDate,
        _date_fin: NaiveDate,
    ) -> Result<Vec<Logistics>, EventsError> {
        Err((self.0)())
    }

    async fn calcul_cout(&self, _organizer: &Organizer) -> Result<Vec<Event>, EventsError> {
        Err((self.0)())
    }
}
