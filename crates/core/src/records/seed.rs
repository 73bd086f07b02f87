//! Built-in records loaded at startup.

use chrono::{NaiveDate, NaiveDateTime, NaiveTime};

use super::{Customer, Employee, ServiceTicket};

/// The full startup data set.
#[derive(Debug, Clone)]
pub struct SeedData {
    pub customers: Vec<Customer>,
    pub employees: Vec<Employee>,
    pub service_tickets: Vec<ServiceTicket>,
}

/// Build the startup data set: 3 customers, 2 employees, 5 tickets.
pub fn seed_data() -> SeedData {
    SeedData {
        customers: customers(),
        employees: employees(),
        service_tickets: service_tickets(),
    }
}

fn customers() -> Vec<Customer> {
    [
        (1, "Alice Johnson", "123 Maple St, Springfield, IL, 62701"),
        (2, "Bob Smith", "456 Oak Ave, Springfield, IL, 62702"),
        (3, "Charlie Brown", "789 Pine Ln, Springfield, IL, 62703"),
    ]
    .into_iter()
    .map(|(id, name, address)| Customer {
        id,
        name: name.to_string(),
        address: address.to_string(),
    })
    .collect()
}

fn employees() -> Vec<Employee> {
    [
        (1, "Eve Adams", "Technical Support"),
        (2, "John Doe", "Field Technician"),
    ]
    .into_iter()
    .map(|(id, name, specialty)| Employee {
        id,
        name: name.to_string(),
        specialty: specialty.to_string(),
    })
    .collect()
}

fn service_tickets() -> Vec<ServiceTicket> {
    vec![
        ServiceTicket {
            id: 1,
            customer_id: 1,
            employee_id: Some(1),
            description: "Issue with login".to_string(),
            emergency: true,
            date_completed: None,
        },
        ServiceTicket {
            id: 2,
            customer_id: 2,
            employee_id: None,
            description: "Server downtime".to_string(),
            emergency: false,
            date_completed: None,
        },
        ServiceTicket {
            id: 3,
            customer_id: 3,
            employee_id: Some(2),
            description: "Network issue".to_string(),
            emergency: true,
            date_completed: midnight(2024, 8, 25),
        },
        ServiceTicket {
            id: 4,
            customer_id: 1,
            employee_id: Some(1),
            description: "Software installation".to_string(),
            emergency: false,
            date_completed: midnight(2024, 8, 26),
        },
        ServiceTicket {
            id: 5,
            customer_id: 2,
            employee_id: None,
            description: "Database backup".to_string(),
            emergency: false,
            date_completed: None,
        },
    ]
}

fn midnight(year: i32, month: u32, day: u32) -> Option<NaiveDateTime> {
    NaiveDate::from_ymd_opt(year, month, day).map(|date| date.and_time(NaiveTime::MIN))
}
