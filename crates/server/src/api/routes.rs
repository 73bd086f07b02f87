use axum::{
    middleware,
    routing::{get, post},
    Router,
};
use std::sync::Arc;
use tower::ServiceBuilder;
use tower_http::trace::TraceLayer;

use super::{customers, employees, handlers, middleware::metrics_middleware, service_tickets};
use crate::state::AppState;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Health, config and metrics
        .route("/health", get(handlers::health))
        .route("/config", get(handlers::get_config))
        .route("/metrics", get(handlers::metrics))
        // Service tickets
        .route(
            "/servicetickets",
            get(service_tickets::list_service_tickets)
                .post(service_tickets::create_service_ticket),
        )
        .route(
            "/servicetickets/{id}",
            get(service_tickets::get_service_ticket)
                .delete(service_tickets::delete_service_ticket),
        )
        // Employees
        .route("/employees", get(employees::list_employees))
        .route("/employees/{id}", get(employees::get_employee))
        // Customers
        .route("/customers", get(customers::list_customers))
        .route("/customers/{id}", get(customers::get_customer))
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(metrics_middleware)),
        )
        .with_state(state)
}
