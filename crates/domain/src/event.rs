//! Event — a date-bounded happening with participants and logistics.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::id::EventId;
use crate::logistics::Logistics;
use crate::participant::ParticipantRef;

/// An event, running from `date_debut` to `date_fin`.
///
/// `participants` is optional in request bodies and defaults to an empty
/// list. `logistics` is never read from a request: entries are attached
/// through their own endpoint and only show up once stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Event {
    #[serde(default)]
    pub id_event: EventId,
    pub description: String,
    pub date_debut: NaiveDate,
    pub date_fin: NaiveDate,
    #[serde(default)]
    pub cout: f64,
    #[serde(default)]
    pub participants: Vec<ParticipantRef>,
    #[serde(default, skip_deserializing)]
    pub logistics: Vec<Logistics>,
}

impl Event {
    /// Create an event that has not been persisted yet, with no cost,
    /// participants or logistics.
    #[must_use]
    pub fn new(description: impl Into<String>, date_debut: NaiveDate, date_fin: NaiveDate) -> Self {
        Self {
            id_event: EventId::default(),
            description: description.into(),
            date_debut,
            date_fin,
            cout: 0.0,
            participants: Vec::new(),
            logistics: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: EventId) -> Self {
        self.id_event = id;
        self
    }

    #[must_use]
    pub fn with_cout(mut self, cout: f64) -> Self {
        self.cout = cout;
        self
    }

    /// Sum of [`Logistics::total_price`] over the reserved entries only.
    #[must_use]
    pub fn reserved_cost(&self) -> f64 {
        self.logistics
            .iter()
            .filter(|log| log.reserve)
            .map(Logistics::total_price)
            .sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::id::{LogisticsId, ParticipantId};

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 5, d).unwrap()
    }

    fn sample() -> Event {
        Event::new("Sample Event", day(1), day(2))
            .with_id(EventId::new(1))
            .with_cout(100.0)
    }

    #[test]
    fn should_serialize_dates_as_calendar_strings() {
        let json = serde_json::to_value(sample()).unwrap();
        assert_eq!(json["idEvent"], 1);
        assert_eq!(json["description"], "Sample Event");
        assert_eq!(json["dateDebut"], "2024-05-01");
        assert_eq!(json["dateFin"], "2024-05-02");
        assert_eq!(json["cout"], 100.0);
    }

    #[test]
    fn should_default_collections_when_absent_from_json() {
        let parsed: Event = serde_json::from_str(
            r#"{"description":"Gala","dateDebut":"2024-05-01","dateFin":"2024-05-03","cout":12.5}"#,
        )
        .unwrap();
        assert!(parsed.id_event.is_unassigned());
        assert!(parsed.participants.is_empty());
        assert!(parsed.logistics.is_empty());
    }

    #[test]
    fn should_read_participant_references_from_json() {
        let parsed: Event = serde_json::from_str(
            r#"{"description":"Gala","dateDebut":"2024-05-01","dateFin":"2024-05-03",
                "participants":[{"idPart":3},{"idPart":4,"nom":"x"}]}"#,
        )
        .unwrap();
        let ids: Vec<i64> = parsed.participants.iter().map(|p| p.id_part.get()).collect();
        assert_eq!(ids, vec![3, 4]);
    }

    #[test]
    fn should_ignore_logistics_sent_in_request_body() {
        let parsed: Event = serde_json::from_str(
            r#"{"description":"Gala","dateDebut":"2024-05-01","dateFin":"2024-05-03",
                "logistics":[{"description":"Tent","reserve":true,"prixUnit":10.0,"quantite":1}]}"#,
        )
        .unwrap();
        assert!(parsed.logistics.is_empty());
    }

    #[test]
    fn should_only_count_reserved_logistics_in_cost() {
        let mut event = Event::new("Gala", day(1), day(1));
        event.participants.push(ParticipantId::new(9).into());
        event.logistics = vec![
            Logistics::new("Chairs", true, 5.0, 10).with_id(LogisticsId::new(1)),
            Logistics::new("Stage", false, 1000.0, 1).with_id(LogisticsId::new(2)),
            Logistics::new("Food", true, 20.0, 2).with_id(LogisticsId::new(3)),
        ];
        assert!((event.reserved_cost() - 90.0).abs() < f64::EPSILON);
    }

    #[test]
    fn should_start_unpersisted_with_zero_cost() {
        let event = Event::new("One day", day(7), day(7));
        assert!(event.id_event.is_unassigned());
        assert!(event.cout.abs() < f64::EPSILON);
        assert!(event.participants.is_empty());
    }
}
