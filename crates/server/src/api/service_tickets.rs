//! Service ticket API handlers.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::{header, StatusCode},
    response::IntoResponse,
    Json,
};
use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime};
use serde::{de, Deserialize, Deserializer};
use std::sync::Arc;
use tracing::{debug, info};

use honeyrae_core::{NewServiceTicket, ServiceTicketDto, TicketFilter};

use super::ApiError;
use crate::state::AppState;

// ============================================================================
// Request Types
// ============================================================================

/// Request body for creating a service ticket.
///
/// An `id` field, if sent, is ignored; the store assigns one.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateServiceTicketBody {
    pub customer_id: i64,
    #[serde(default)]
    pub employee_id: Option<i64>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub emergency: bool,
    #[serde(default, deserialize_with = "deserialize_completion_date")]
    pub date_completed: Option<NaiveDateTime>,
}

/// Accept a local date-time, an RFC 3339 timestamp (normalised to UTC) or a
/// bare date (midnight).
fn deserialize_completion_date<'de, D>(
    deserializer: D,
) -> Result<Option<NaiveDateTime>, D::Error>
where
    D: Deserializer<'de>,
{
    let Some(raw) = Option::<String>::deserialize(deserializer)? else {
        return Ok(None);
    };

    parse_completion_date(&raw)
        .map(Some)
        .ok_or_else(|| de::Error::custom(format!("invalid dateCompleted: {}", raw)))
}

fn parse_completion_date(raw: &str) -> Option<NaiveDateTime> {
    if let Ok(timestamp) = DateTime::parse_from_rfc3339(raw) {
        return Some(timestamp.naive_utc());
    }
    if let Ok(local) = raw.parse::<NaiveDateTime>() {
        return Some(local);
    }
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .map(|date| date.and_time(NaiveTime::MIN))
}

impl From<CreateServiceTicketBody> for NewServiceTicket {
    fn from(body: CreateServiceTicketBody) -> Self {
        Self {
            customer_id: body.customer_id,
            employee_id: body.employee_id,
            description: body.description,
            emergency: body.emergency,
            date_completed: body.date_completed,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// List all service tickets without relations
pub async fn list_service_tickets(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<ServiceTicketDto>>, ApiError> {
    let tickets = state.store().list_tickets(&TicketFilter::new())?;
    Ok(Json(tickets.iter().map(ServiceTicketDto::scalar).collect()))
}

/// Get a service ticket with its customer and employee
pub async fn get_service_ticket(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<ServiceTicketDto>, ApiError> {
    let store = state.store();

    let Some(ticket) = store.get_ticket(id)? else {
        debug!(ticket_id = id, "Service ticket not found");
        return Err(ApiError::NotFound);
    };

    let customer = store.get_customer(ticket.customer_id)?;
    let employee = ticket
        .employee_id
        .map(|employee_id| store.get_employee(employee_id))
        .transpose()?
        .flatten();

    Ok(Json(ServiceTicketDto::project(
        &ticket,
        customer.as_ref(),
        employee.as_ref(),
    )))
}

/// Create a service ticket for an existing customer
pub async fn create_service_ticket(
    State(state): State<Arc<AppState>>,
    body: Result<Json<CreateServiceTicketBody>, JsonRejection>,
) -> Result<impl IntoResponse, ApiError> {
    // Unreadable bodies share the 400 of an unknown customer
    let Json(body) = body.map_err(|rejection| {
        debug!(error = %rejection.body_text(), "Rejecting malformed service ticket body");
        ApiError::BadRequest
    })?;
    let store = state.store();

    let Some(customer) = store.get_customer(body.customer_id)? else {
        debug!(customer_id = body.customer_id, "Rejecting ticket for unknown customer");
        return Err(ApiError::BadRequest);
    };

    let ticket = store.create_ticket(body.into())?;
    info!(
        ticket_id = ticket.id,
        customer_id = ticket.customer_id,
        emergency = ticket.emergency,
        "Service ticket created"
    );

    let location = format!("/servicetickets/{}", ticket.id);
    let dto = ServiceTicketDto::project(&ticket, Some(&customer), None);

    Ok((StatusCode::CREATED, [(header::LOCATION, location)], Json(dto)))
}

/// Delete a service ticket
pub async fn delete_service_ticket(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    // A missing id is a 400 here, unlike the 404 of the GET route
    let ticket = state.store().delete_ticket(id).inspect_err(|e| {
        debug!(ticket_id = id, error = %e, "Service ticket delete rejected");
    })?;

    info!(ticket_id = ticket.id, "Service ticket deleted");
    Ok(StatusCode::NO_CONTENT)
}
