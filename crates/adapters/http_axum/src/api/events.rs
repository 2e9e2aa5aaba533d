//! JSON REST handlers for participants, events and logistics.
//!
//! Handlers only translate between HTTP and [`EventServices`]; they hold no
//! state and perform no validation beyond parsing path parameters.

use std::str::FromStr;

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use axum::response::{IntoResponse, Response};
use chrono::NaiveDate;

use eventsproject_app::ports::EventServices;
use eventsproject_domain::error::ValidationError;
use eventsproject_domain::event::Event;
use eventsproject_domain::id::ParticipantId;
use eventsproject_domain::logistics::Logistics;
use eventsproject_domain::participant::Participant;

use crate::error::ApiError;
use crate::state::AppState;

/// Possible responses from the add-participant endpoint.
pub enum ParticipantResponse {
    Ok(Json<Participant>),
}

impl IntoResponse for ParticipantResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the add-event endpoints.
pub enum EventResponse {
    Ok(Json<Event>),
}

impl IntoResponse for EventResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the affect-logistics endpoint.
pub enum LogisticsResponse {
    Ok(Json<Logistics>),
}

impl IntoResponse for LogisticsResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

/// Possible responses from the logistics-by-dates endpoint.
pub enum LogisticsListResponse {
    Ok(Json<Vec<Logistics>>),
}

impl IntoResponse for LogisticsListResponse {
    fn into_response(self) -> Response {
        match self {
            Self::Ok(json) => json.into_response(),
        }
    }
}

fn parse_date(raw: &str) -> Result<NaiveDate, ValidationError> {
    NaiveDate::from_str(raw).map_err(|_| ValidationError::InvalidDate(raw.to_string()))
}

/// `POST /event/addPart`
pub async fn add_participant<S>(
    State(state): State<AppState<S>>,
    payload: Result<Json<Participant>, JsonRejection>,
) -> Result<ParticipantResponse, ApiError>
where
    S: EventServices + Send + Sync + 'static,
{
    let Json(participant) = payload?;
    let saved = state.event_service.add_participant(participant).await?;
    Ok(ParticipantResponse::Ok(Json(saved)))
}

/// `POST /event/addEvent`
pub async fn add_event<S>(
    State(state): State<AppState<S>>,
    payload: Result<Json<Event>, JsonRejection>,
) -> Result<EventResponse, ApiError>
where
    S: EventServices + Send + Sync + 'static,
{
    let Json(event) = payload?;
    let saved = state.event_service.add_affect_even_participant(event).await?;
    Ok(EventResponse::Ok(Json(saved)))
}

/// `POST /event/addEvent/:id`
pub async fn add_event_for_participant<S>(
    State(state): State<AppState<S>>,
    Path(id): Path<String>,
    payload: Result<Json<Event>, JsonRejection>,
) -> Result<EventResponse, ApiError>
where
    S: EventServices + Send + Sync + 'static,
{
    let id_participant = ParticipantId::from_str(&id)?;
    let Json(event) = payload?;
    let saved = state
        .event_service
        .add_affect_even_participant_to(event, id_participant)
        .await?;
    Ok(EventResponse::Ok(Json(saved)))
}

/// `PUT /event/addAffectLog/:description`
pub async fn add_affect_log<S>(
    State(state): State<AppState<S>>,
    Path(description): Path<String>,
    payload: Result<Json<Logistics>, JsonRejection>,
) -> Result<LogisticsResponse, ApiError>
where
    S: EventServices + Send + Sync + 'static,
{
    let Json(logistics) = payload?;
    let saved = state
        .event_service
        .add_affect_log(logistics, description)
        .await?;
    Ok(LogisticsResponse::Ok(Json(saved)))
}

/// `GET /event/getLogs/:d1/:d2`
pub async fn get_logistics_dates<S>(
    State(state): State<AppState<S>>,
    Path((d1, d2)): Path<(String, String)>,
) -> Result<LogisticsListResponse, ApiError>
where
    S: EventServices + Send + Sync + 'static,
{
    let date_debut = parse_date(&d1)?;
    let date_fin = parse_date(&d2)?;
    let logistics = state
        .event_service
        .get_logistics_dates(date_debut, date_fin)
        .await?;
    Ok(LogisticsListResponse::Ok(Json(logistics)))
}
