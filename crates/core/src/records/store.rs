//! Record storage trait and types.

use thiserror::Error;

use super::{Customer, Employee, NewServiceTicket, ServiceTicket};

/// Error type for record store operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StoreError {
    /// The referenced customer does not exist.
    #[error("Customer not found: {0}")]
    CustomerNotFound(i64),

    /// The referenced service ticket does not exist.
    #[error("Service ticket not found: {0}")]
    TicketNotFound(i64),

    /// A previous holder of the store lock panicked.
    #[error("Record store lock poisoned")]
    LockPoisoned,
}

/// Filter for querying service tickets by foreign key.
///
/// Unset fields match everything, so the default filter returns every ticket.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TicketFilter {
    /// Only tickets opened by this customer.
    pub customer_id: Option<i64>,
    /// Only tickets assigned to this employee.
    pub employee_id: Option<i64>,
}

impl TicketFilter {
    /// Create a filter matching every ticket.
    pub fn new() -> Self {
        Self::default()
    }

    /// Filter by owning customer.
    pub fn with_customer(mut self, customer_id: i64) -> Self {
        self.customer_id = Some(customer_id);
        self
    }

    /// Filter by assigned employee.
    pub fn with_employee(mut self, employee_id: i64) -> Self {
        self.employee_id = Some(employee_id);
        self
    }

    /// Check whether a ticket passes this filter.
    pub fn matches(&self, ticket: &ServiceTicket) -> bool {
        if let Some(customer_id) = self.customer_id {
            if ticket.customer_id != customer_id {
                return false;
            }
        }
        if let Some(employee_id) = self.employee_id {
            if ticket.employee_id != Some(employee_id) {
                return false;
            }
        }
        true
    }
}

/// Number of records held in each collection.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RecordCounts {
    pub customers: usize,
    pub employees: usize,
    pub service_tickets: usize,
}

/// Trait for record storage backends.
///
/// Listing methods preserve insertion order.
pub trait RecordStore: Send + Sync {
    /// List all customers.
    fn list_customers(&self) -> Result<Vec<Customer>, StoreError>;

    /// Get a customer by ID.
    fn get_customer(&self, id: i64) -> Result<Option<Customer>, StoreError>;

    /// List all employees.
    fn list_employees(&self) -> Result<Vec<Employee>, StoreError>;

    /// Get an employee by ID.
    fn get_employee(&self, id: i64) -> Result<Option<Employee>, StoreError>;

    /// List service tickets matching the filter.
    fn list_tickets(&self, filter: &TicketFilter) -> Result<Vec<ServiceTicket>, StoreError>;

    /// Get a service ticket by ID.
    fn get_ticket(&self, id: i64) -> Result<Option<ServiceTicket>, StoreError>;

    /// Create a service ticket for an existing customer.
    ///
    /// Fails with [`StoreError::CustomerNotFound`] without touching the
    /// ticket list if the customer does not exist. The employee id is
    /// stored as given.
    fn create_ticket(&self, ticket: NewServiceTicket) -> Result<ServiceTicket, StoreError>;

    /// Remove a service ticket, returning it.
    fn delete_ticket(&self, id: i64) -> Result<ServiceTicket, StoreError>;

    /// Count the records in each collection.
    fn counts(&self) -> Result<RecordCounts, StoreError>;
}
