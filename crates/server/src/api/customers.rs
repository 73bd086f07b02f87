use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::debug;

use honeyrae_core::{CustomerDto, TicketFilter};

use super::ApiError;
use crate::state::AppState;

/// List all customers without their tickets
pub async fn list_customers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<CustomerDto>>, ApiError> {
    let customers = state.store().list_customers()?;
    Ok(Json(customers.iter().map(CustomerDto::from).collect()))
}

/// Get a customer with the tickets they opened
pub async fn get_customer(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<CustomerDto>, ApiError> {
    let store = state.store();

    let Some(customer) = store.get_customer(id)? else {
        debug!(customer_id = id, "Customer not found");
        return Err(ApiError::NotFound);
    };

    let tickets = store.list_tickets(&TicketFilter::new().with_customer(id))?;
    Ok(Json(CustomerDto::project(&customer, Some(tickets.as_slice()))))
}
