//! Typed identifier newtypes backed by integers.
//!
//! Identifiers are assigned by storage. The value `0` stands for
//! "not persisted yet" and is what a missing id deserializes to.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(
            Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(i64);

        impl $name {
            /// Wrap a raw integer identifier.
            #[must_use]
            pub const fn new(raw: i64) -> Self {
                Self(raw)
            }

            /// Access the inner integer.
            #[must_use]
            pub const fn get(self) -> i64 {
                self.0
            }

            /// `true` until storage has assigned a real identifier.
            #[must_use]
            pub const fn is_unassigned(self) -> bool {
                self.0 == 0
            }
        }

        impl From<i64> for $name {
            fn from(raw: i64) -> Self {
                Self(raw)
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                s.trim()
                    .parse::<i64>()
                    .map(Self)
                    .map_err(|_| ValidationError::InvalidId(s.to_string()))
            }
        }
    };
}

define_id!(
    /// Unique identifier for a [`Participant`](crate::participant::Participant).
    ParticipantId
);

define_id!(
    /// Unique identifier for an [`Event`](crate::event::Event).
    EventId
);

define_id!(
    /// Unique identifier for a [`Logistics`](crate::logistics::Logistics) entry.
    LogisticsId
);
