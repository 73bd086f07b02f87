//! Core record types.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/// A customer who opens service tickets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Customer {
    pub id: i64,
    pub name: String,
    pub address: String,
}

/// An employee who may be assigned to service tickets.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub specialty: String,
}

/// A unit of service work requested by a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServiceTicket {
    /// Assigned by the store on creation.
    pub id: i64,
    /// Owning customer. Checked against the customer list on creation only.
    pub customer_id: i64,
    /// Assigned employee (None = unassigned). Never checked.
    pub employee_id: Option<i64>,
    pub description: String,
    pub emergency: bool,
    /// Completion time (None = still open).
    pub date_completed: Option<NaiveDateTime>,
}

impl ServiceTicket {
    /// Whether the ticket has been completed.
    pub fn is_completed(&self) -> bool {
        self.date_completed.is_some()
    }
}

/// Fields supplied when creating a ticket. The id is picked by the store.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct NewServiceTicket {
    pub customer_id: i64,
    pub employee_id: Option<i64>,
    pub description: String,
    pub emergency: bool,
    pub date_completed: Option<NaiveDateTime>,
}

impl NewServiceTicket {
    pub(crate) fn into_ticket(self, id: i64) -> ServiceTicket {
        ServiceTicket {
            id,
            customer_id: self.customer_id,
            employee_id: self.employee_id,
            description: self.description,
            emergency: self.emergency,
            date_completed: self.date_completed,
        }
    }
}
