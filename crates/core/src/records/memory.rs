//! In-memory record store.

use std::sync::{Mutex, MutexGuard};

use tracing::debug;

use super::seed::{seed_data, SeedData};
use super::{
    Customer, Employee, NewServiceTicket, RecordCounts, RecordStore, ServiceTicket, StoreError,
    TicketFilter,
};

/// Collections guarded together so that create and delete see a consistent view.
#[derive(Debug)]
struct Records {
    customers: Vec<Customer>,
    employees: Vec<Employee>,
    service_tickets: Vec<ServiceTicket>,
    /// Next ticket id. Only ever increases, so ids of deleted tickets are not reused.
    next_ticket_id: i64,
}

/// Record store backed by plain vectors behind a single mutex.
pub struct InMemoryRecordStore {
    records: Mutex<Records>,
}

impl InMemoryRecordStore {
    /// Create a store with empty collections.
    pub fn new() -> Self {
        Self::with_records(Vec::new(), Vec::new(), Vec::new())
    }

    /// Create a store loaded with the built-in startup data.
    pub fn seeded() -> Self {
        let SeedData {
            customers,
            employees,
            service_tickets,
        } = seed_data();
        Self::with_records(customers, employees, service_tickets)
    }

    /// Create a store from explicit collections.
    ///
    /// The ticket id counter starts one past the highest existing id, or at 1.
    pub fn with_records(
        customers: Vec<Customer>,
        employees: Vec<Employee>,
        service_tickets: Vec<ServiceTicket>,
    ) -> Self {
        let next_ticket_id = service_tickets.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        Self {
            records: Mutex::new(Records {
                customers,
                employees,
                service_tickets,
                next_ticket_id,
            }),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, Records>, StoreError> {
        self.records.lock().map_err(|_| StoreError::LockPoisoned)
    }
}

impl Default for InMemoryRecordStore {
    fn default() -> Self {
        Self::new()
    }
}

impl RecordStore for InMemoryRecordStore {
    fn list_customers(&self) -> Result<Vec<Customer>, StoreError> {
        Ok(self.lock()?.customers.clone())
    }

    fn get_customer(&self, id: i64) -> Result<Option<Customer>, StoreError> {
        Ok(self.lock()?.customers.iter().find(|c| c.id == id).cloned())
    }

    fn list_employees(&self) -> Result<Vec<Employee>, StoreError> {
        Ok(self.lock()?.employees.clone())
    }

    fn get_employee(&self, id: i64) -> Result<Option<Employee>, StoreError> {
        Ok(self.lock()?.employees.iter().find(|e| e.id == id).cloned())
    }

    fn list_tickets(&self, filter: &TicketFilter) -> Result<Vec<ServiceTicket>, StoreError> {
        Ok(self
            .lock()?
            .service_tickets
            .iter()
            .filter(|t| filter.matches(t))
            .cloned()
            .collect())
    }

    fn get_ticket(&self, id: i64) -> Result<Option<ServiceTicket>, StoreError> {
        Ok(self
            .lock()?
            .service_tickets
            .iter()
            .find(|t| t.id == id)
            .cloned())
    }

    fn create_ticket(&self, ticket: NewServiceTicket) -> Result<ServiceTicket, StoreError> {
        let mut records = self.lock()?;

        if !records.customers.iter().any(|c| c.id == ticket.customer_id) {
            return Err(StoreError::CustomerNotFound(ticket.customer_id));
        }

        let id = records.next_ticket_id;
        records.next_ticket_id += 1;

        let ticket = ticket.into_ticket(id);
        records.service_tickets.push(ticket.clone());
        debug!(ticket_id = id, customer_id = ticket.customer_id, "Stored service ticket");

        Ok(ticket)
    }

    fn delete_ticket(&self, id: i64) -> Result<ServiceTicket, StoreError> {
        let mut records = self.lock()?;

        let position = records
            .service_tickets
            .iter()
            .position(|t| t.id == id)
            .ok_or(StoreError::TicketNotFound(id))?;

        let removed = records.service_tickets.remove(position);
        debug!(ticket_id = id, "Removed service ticket");

        Ok(removed)
    }

    fn counts(&self) -> Result<RecordCounts, StoreError> {
        let records = self.lock()?;
        Ok(RecordCounts {
            customers: records.customers.len(),
            employees: records.employees.len(),
            service_tickets: records.service_tickets.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn new_ticket(customer_id: i64) -> NewServiceTicket {
        NewServiceTicket {
            customer_id,
            description: "New issue".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_seeded_counts() {
        let store = InMemoryRecordStore::seeded();
        let counts = store.counts().unwrap();
        assert_eq!(counts.customers, 3);
        assert_eq!(counts.employees, 2);
        assert_eq!(counts.service_tickets, 5);
    }

    #[test]
    fn test_get_customer() {
        let store = InMemoryRecordStore::seeded();
        let customer = store.get_customer(2).unwrap().unwrap();
        assert_eq!(customer.name, "Bob Smith");
        assert!(store.get_customer(42).unwrap().is_none());
    }

    #[test]
    fn test_get_employee() {
        let store = InMemoryRecordStore::seeded();
        let employee = store.get_employee(1).unwrap().unwrap();
        assert_eq!(employee.specialty, "Technical Support");
        assert!(store.get_employee(0).unwrap().is_none());
    }

    #[test]
    fn test_list_tickets_by_customer_preserves_order() {
        let store = InMemoryRecordStore::seeded();
        let tickets = store
            .list_tickets(&TicketFilter::new().with_customer(1))
            .unwrap();
        let ids: Vec<i64> = tickets.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![1, 4]);
    }

    #[test]
    fn test_list_tickets_by_employee() {
        let store = InMemoryRecordStore::seeded();
        let tickets = store
            .list_tickets(&TicketFilter::new().with_employee(2))
            .unwrap();
        let ids: Vec<i64> = tickets.iter().map(|t| t.id).collect();
        assert_eq!(ids, vec![3]);
    }

    #[test]
    fn test_create_ticket_assigns_next_id() {
        let store = InMemoryRecordStore::seeded();
        let created = store.create_ticket(new_ticket(1)).unwrap();
        assert_eq!(created.id, 6);
        assert_eq!(created.customer_id, 1);
        assert_eq!(store.counts().unwrap().service_tickets, 6);
        assert_eq!(store.get_ticket(6).unwrap(), Some(created));
    }

    #[test]
    fn test_create_ticket_unknown_customer_leaves_store_untouched() {
        let store = InMemoryRecordStore::seeded();
        let result = store.create_ticket(new_ticket(99));
        assert_eq!(result, Err(StoreError::CustomerNotFound(99)));
        assert_eq!(store.counts().unwrap().service_tickets, 5);

        // A failed create must not burn an id
        assert_eq!(store.create_ticket(new_ticket(3)).unwrap().id, 6);
    }

    #[test]
    fn test_create_ticket_does_not_check_employee() {
        let store = InMemoryRecordStore::seeded();
        let created = store
            .create_ticket(NewServiceTicket {
                employee_id: Some(77),
                ..new_ticket(1)
            })
            .unwrap();
        assert_eq!(created.employee_id, Some(77));
    }

    #[test]
    fn test_create_ticket_on_empty_ticket_list() {
        let customers = vec![Customer {
            id: 1,
            name: "Solo".to_string(),
            address: "1 Main St".to_string(),
        }];
        let store = InMemoryRecordStore::with_records(customers, Vec::new(), Vec::new());
        assert_eq!(store.create_ticket(new_ticket(1)).unwrap().id, 1);
        assert_eq!(store.create_ticket(new_ticket(1)).unwrap().id, 2);
    }

    #[test]
    fn test_deleted_ids_are_not_reused() {
        let store = InMemoryRecordStore::seeded();
        store.delete_ticket(5).unwrap();
        let created = store.create_ticket(new_ticket(2)).unwrap();
        assert_eq!(created.id, 6);
    }

    #[test]
    fn test_delete_ticket_removes_only_that_ticket() {
        let store = InMemoryRecordStore::seeded();
        let removed = store.delete_ticket(3).unwrap();
        assert_eq!(removed.id, 3);

        let ids: Vec<i64> = store
            .list_tickets(&TicketFilter::new())
            .unwrap()
            .iter()
            .map(|t| t.id)
            .collect();
        assert_eq!(ids, vec![1, 2, 4, 5]);
    }

    #[test]
    fn test_delete_missing_ticket() {
        let store = InMemoryRecordStore::seeded();
        store.delete_ticket(1).unwrap();
        assert_eq!(store.delete_ticket(1), Err(StoreError::TicketNotFound(1)));
        assert_eq!(store.counts().unwrap().service_tickets, 4);
    }

    #[test]
    fn test_empty_store() {
        let store = InMemoryRecordStore::new();
        assert!(store.list_customers().unwrap().is_empty());
        assert!(store.list_employees().unwrap().is_empty());
        assert_eq!(
            store.create_ticket(new_ticket(1)),
            Err(StoreError::CustomerNotFound(1))
        );
    }

    #[test]
    fn test_concurrent_creates_get_distinct_ids() {
        let store = Arc::new(InMemoryRecordStore::seeded());
        let handles: Vec<_> = (0..8)
            .map(|_| {
                let store = Arc::clone(&store);
                std::thread::spawn(move || store.create_ticket(new_ticket(1)).unwrap().id)
            })
            .collect();

        let mut ids: Vec<i64> = handles.into_iter().map(|h| h.join().unwrap()).collect();
        ids.sort_unstable();
        assert_eq!(ids, (6..14).collect::<Vec<_>>());
    }
}
