//! Response shapes for records.
//!
//! Relations are expanded at most one level deep: tickets nested in a
//! customer or employee never carry their own customer or employee.

use chrono::NaiveDateTime;
use serde::Serialize;

use crate::records::{Customer, Employee, ServiceTicket};

/// Externally visible service ticket.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ServiceTicketDto {
    pub id: i64,
    pub customer_id: i64,
    pub customer: Option<CustomerDto>,
    pub employee_id: Option<i64>,
    pub employee: Option<EmployeeDto>,
    pub description: String,
    pub emergency: bool,
    pub date_completed: Option<NaiveDateTime>,
}

/// Externally visible customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub id: i64,
    pub name: String,
    pub address: String,
    pub service_tickets: Option<Vec<ServiceTicketDto>>,
}

/// Externally visible employee.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeDto {
    pub id: i64,
    pub name: String,
    pub specialty: String,
    pub service_tickets: Option<Vec<ServiceTicketDto>>,
}

impl ServiceTicketDto {
    /// Project a ticket, embedding whichever relations were resolved.
    pub fn project(
        ticket: &ServiceTicket,
        customer: Option<&Customer>,
        employee: Option<&Employee>,
    ) -> Self {
        Self {
            id: ticket.id,
            customer_id: ticket.customer_id,
            customer: customer.map(|c| CustomerDto::project(c, None)),
            employee_id: ticket.employee_id,
            employee: employee.map(|e| EmployeeDto::project(e, None)),
            description: ticket.description.clone(),
            emergency: ticket.emergency,
            date_completed: ticket.date_completed,
        }
    }

    /// Project a ticket's scalar fields only.
    pub fn scalar(ticket: &ServiceTicket) -> Self {
        Self::project(ticket, None, None)
    }
}

impl CustomerDto {
    /// Project a customer, nesting scalar-only tickets if supplied.
    pub fn project(customer: &Customer, tickets: Option<&[ServiceTicket]>) -> Self {
        Self {
            id: customer.id,
            name: customer.name.clone(),
            address: customer.address.clone(),
            service_tickets: tickets.map(scalar_tickets),
        }
    }
}

impl From<&Customer> for CustomerDto {
    fn from(customer: &Customer) -> Self {
        Self::project(customer, None)
    }
}

impl EmployeeDto {
    /// Project an employee, nesting scalar-only tickets if supplied.
    pub fn project(employee: &Employee, tickets: Option<&[ServiceTicket]>) -> Self {
        Self {
            id: employee.id,
            name: employee.name.clone(),
            specialty: employee.specialty.clone(),
            service_tickets: tickets.map(scalar_tickets),
        }
    }
}

impl From<&Employee> for EmployeeDto {
    fn from(employee: &Employee) -> Self {
        Self::project(employee, None)
    }
}

fn scalar_tickets(tickets: &[ServiceTicket]) -> Vec<ServiceTicketDto> {
    tickets.iter().map(ServiceTicketDto::scalar).collect()
}
