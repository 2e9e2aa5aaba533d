//! Participant — a person attached to one or more events.

use serde::{Deserialize, Serialize};

use crate::id::ParticipantId;

/// Role a participant holds in an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum Tache {
    Invite,
    Organisateur,
    Serveur,
    Animateur,
}

impl Tache {
    /// Stable upper-case name, identical to the JSON representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Invite => "INVITE",
            Self::Organisateur => "ORGANISATEUR",
            Self::Serveur => "SERVEUR",
            Self::Animateur => "ANIMATEUR",
        }
    }
}

impl std::fmt::Display for Tache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Tache {
    type Err = UnknownTache;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "INVITE" => Ok(Self::Invite),
            "ORGANISATEUR" => Ok(Self::Organisateur),
            "SERVEUR" => Ok(Self::Serveur),
            "ANIMATEUR" => Ok(Self::Animateur),
            other => Err(UnknownTache(other.to_string())),
        }
    }
}

/// Returned when a stored role name is not part of [`Tache`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown tache {0:?}")]
pub struct UnknownTache(pub String);

/// A person taking part in events.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Participant {
    #[serde(default)]
    pub id_part: ParticipantId,
    pub nom: String,
    pub prenom: String,
    pub tache: Tache,
}

impl Participant {
    /// Create a participant that has not been persisted yet.
    #[must_use]
    pub fn new(nom: impl Into<String>, prenom: impl Into<String>, tache: Tache) -> Self {
        Self {
            id_part: ParticipantId::default(),
            nom: nom.into(),
            prenom: prenom.into(),
            tache,
        }
    }

    #[must_use]
    pub fn with_id(mut self, id: ParticipantId) -> Self {
        self.id_part = id;
        self
    }
}

/// Reference to a participant from inside an event payload.
///
/// Only `idPart` is read; any other participant fields sent alongside are ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParticipantRef {
    pub id_part: ParticipantId,
}

impl From<ParticipantId> for ParticipantRef {
    fn from(id_part: ParticipantId) -> Self {
        Self { id_part }
    }
}

/// The participant whose events have their cost recomputed periodically.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Organizer {
    pub nom: String,
    pub prenom: String,
    pub tache: Tache,
}

impl Organizer {
    /// Whether `participant` is this organizer.
    #[must_use]
    pub fn matches(&self, participant: &Participant) -> bool {
        participant.nom == self.nom
            && participant.prenom == self.prenom
            && participant.tache == self.tache
    }
}

impl Default for Organizer {
    fn default() -> Self {
        Self {
            nom: "Tounsi".to_string(),
            prenom: "Ahmed".to_string(),
            tache: Tache::Organisateur,
        }
    }
}
