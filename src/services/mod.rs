//! Business logic services.
//!
//! Services contain persistence logic separated from HTTP handlers, so the
//! handlers stay thin: validate, call a service, shape the response.

pub mod cache;
pub mod flight_service;
