use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::models::booking::Booking;

/// Request para crear un booking
///
/// Los campos llegan como strings opcionales: la validación de presencia y
/// de formato es responsabilidad del validador del engine, no del layer
/// HTTP, para que "campo ausente" y "campo vacío" produzcan el mismo error.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    #[serde(alias = "clientId")]
    pub client: Option<String>,
    #[serde(alias = "vehicleId")]
    pub vehicle: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Request para editar un booking; los campos ausentes no se tocan
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateBookingRequest {
    #[serde(alias = "clientId")]
    pub client: Option<String>,
    #[serde(alias = "vehicleId")]
    pub vehicle: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
}

/// Request para el cambio explícito de estado
#[derive(Debug, Deserialize)]
pub struct ChangeStatusRequest {
    pub status: String,
}

/// Query params de consulta de disponibilidad
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AvailabilityQuery {
    pub vehicle: String,
    pub start_date: String,
    pub end_date: String,
}

#[derive(Debug, Serialize)]
pub struct AvailabilityResponse {
    pub vehicle: Uuid,
    pub available: bool,
}

/// Response de booking para la API
///
/// days, dailyRate y totalAmount son los valores fijados en la creación;
/// nunca se recalculan desde la tarifa actual del vehículo.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingResponse {
    pub id: String,
    pub client: String,
    pub vehicle: String,
    pub start_date: String,
    pub end_date: String,
    pub status: String,
    pub days: i64,
    pub daily_rate: Decimal,
    pub total_amount: Decimal,
    pub created_at: String,
}

impl From<Booking> for BookingResponse {
    fn from(booking: Booking) -> Self {
        Self {
            id: booking.id.to_string(),
            client: booking.client_id.to_string(),
            vehicle: booking.vehicle_id.to_string(),
            start_date: booking.start_date.format("%Y-%m-%d").to_string(),
            end_date: booking.end_date.format("%Y-%m-%d").to_string(),
            status: booking.status.as_str().to_string(),
            days: booking.days,
            daily_rate: booking.daily_rate,
            total_amount: booking.total_amount,
            created_at: booking.created_at.to_rfc3339(),
        }
    }
}
