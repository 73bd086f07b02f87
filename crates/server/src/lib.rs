//! HTTP surface for customers, employees and service tickets.

pub mod api;
pub mod metrics;
pub mod state;
