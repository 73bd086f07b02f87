pub mod config;
pub mod projection;
pub mod records;

pub use config::{
    load_config_from_str, load_config_or_defaults, validate_config, Config, ConfigError,
    SeedConfig, ServerConfig,
};
pub use projection::{CustomerDto, EmployeeDto, ServiceTicketDto};
pub use records::{
    Customer, Employee, InMemoryRecordStore, NewServiceTicket, RecordCounts, RecordStore,
    ServiceTicket, StoreError, TicketFilter,
};
