//! Services module
//!
//! Este módulo contiene la lógica de negocio de la aplicación: el validador
//! de bookings, el chequeo de disponibilidad, el cálculo de precios, la
//! política de acceso por rol y el manager del ciclo de vida del booking.

pub mod access_policy;
pub mod auth_service;
pub mod availability;
pub mod booking_service;
pub mod booking_validator;
pub mod pricing;

pub use access_policy::{AccessPolicy, StaticAccessPolicy};
pub use availability::AvailabilityChecker;
pub use booking_service::BookingService;
