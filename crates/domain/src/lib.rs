//! # eventsproject-domain
//!
//! Pure domain model for the events project.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers and the error conventions
//! - Define **Participants** (people attached to events, each with a [`Tache`](participant::Tache))
//! - Define **Events** (date-bounded happenings with a cost)
//! - Define **Logistics** (reservable items priced per unit)
//! - Hold the small amount of domain logic that does not need IO
//!   (reserved-logistics cost, organizer matching)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).
//!
//! ## Wire shape
//! Records serialize with the camelCase field names the HTTP API exposes
//! (`idPart`, `dateDebut`, `prixUnit`, …). Dates are plain calendar dates
//! rendered as `YYYY-MM-DD`.

pub mod error;
pub mod id;

pub mod event;
pub mod logistics;
pub mod participant;
