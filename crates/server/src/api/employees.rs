use axum::{
    extract::{Path, State},
    Json,
};
use std::sync::Arc;
use tracing::debug;

use honeyrae_core::{EmployeeDto, TicketFilter};

use super::ApiError;
use crate::state::AppState;

/// List all employees without their tickets
pub async fn list_employees(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<EmployeeDto>>, ApiError> {
    let employees = state.store().list_employees()?;
    Ok(Json(employees.iter().map(EmployeeDto::from).collect()))
}

/// Get an employee with the tickets assigned to them
pub async fn get_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<Json<EmployeeDto>, ApiError> {
    let store = state.store();

    let Some(employee) = store.get_employee(id)? else {
        debug!(employee_id = id, "Employee not found");
        return Err(ApiError::NotFound);
    };

    let tickets = store.list_tickets(&TicketFilter::new().with_employee(id))?;
    Ok(Json(EmployeeDto::project(&employee, Some(tickets.as_slice()))))
}
