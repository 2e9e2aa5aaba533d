//! Logistics — a reservable item priced per unit.

use serde::{Deserialize, Serialize};

use crate::id::LogisticsId;

/// An item (chairs, catering, sound system, …) that can be reserved for events.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Logistics {
    #[serde(default)]
    pub id_log: LogisticsId,
    pub description: String,
    #[serde(default)]
    pub reserve: bool,
    pub prix_unit: f64,
    pub quantite: i32,
}

impl Logistics {
    /// Create a logistics entry that has not been persisted yet.
    #[must_use]
    pub fn new(description: impl Into<String>, reserve: bool, prix_unit: f64, quantite: i32) -> Self {
        Self {
            id_log: LogisticsId::default(),
            description: description.into(),
            reserve,
            prix_unit,
            quantite,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: LogisticsId) -> Self {
        self.id_log = id;
        self
    }

    /// `prix_unit * quantite`.
    #[must_use]
    pub fn total_price(&self) -> f64 {
        self.prix_unit * f64::from(self.quantite)
    }
}
