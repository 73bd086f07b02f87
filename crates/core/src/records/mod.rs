//! Customers, employees and the service tickets that link them.

mod memory;
pub mod seed;
mod store;
mod types;

pub use memory::InMemoryRecordStore;
pub use store::{RecordCounts, RecordStore, StoreError, TicketFilter};
pub use types::{Customer, Employee, NewServiceTicket, ServiceTicket};
